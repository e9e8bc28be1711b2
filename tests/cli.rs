use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookmarkr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookmarkr").unwrap();
    cmd.env("BOOKMARKR_HOME", home.path())
        .env_remove("BOOKMARKR_LOG")
        .arg("--no-color");
    cmd
}

fn add_dune(home: &TempDir) {
    bookmarkr(home)
        .args(["add", "Dune", "-a", "Frank Herbert", "-p", "412", "-g", "fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (1): Dune by Frank Herbert"));
}

#[test]
fn test_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .args(["add", "The", "Hobbit", "-a", "Tolkien", "-p", "310", "-s", "want"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (2): The Hobbit by Tolkien"));

    assert!(home.path().join("data.json").exists());

    bookmarkr(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("0/412"));

    bookmarkr(&home)
        .args(["list", "--status", "want"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  2."))
        .stdout(predicate::str::contains("Dune").not());
}

#[test]
fn test_empty_library_views() {
    let home = tempfile::tempdir().unwrap();

    bookmarkr(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));

    bookmarkr(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing in progress"));
}

#[test]
fn test_progress_feeds_stats_and_calendar() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .args(["progress", "dune", "-p", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune: page 50 of 412 (+50 today)"));

    bookmarkr(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("50 pages"));

    bookmarkr(&home)
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicate::str::contains("50 pages over 1 active day(s)"));

    bookmarkr(&home)
        .arg("day")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));

    bookmarkr(&home)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak 1 day"))
        .stdout(predicate::str::contains("50 / 412 pages"));
}

#[test]
fn test_finishing_a_book() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .args(["progress", "1", "-p", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 412 of 412"))
        .stdout(predicate::str::contains("Finished Dune!"));

    bookmarkr(&home)
        .args(["list", "-s", "finished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("412/412"));
}

#[test]
fn test_edit_and_delete() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .args(["edit", "1", "--title", "Dune Messiah", "--pages", "256"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated (1): Dune Messiah"));

    bookmarkr(&home)
        .args(["quote", "add", "messiah", "-t", "Fear is the mind-killer."])
        .assert()
        .success();

    bookmarkr(&home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted (1): Dune Messiah"))
        .stdout(predicate::str::contains("1 quote(s) kept without a book"));

    bookmarkr(&home)
        .args(["quote", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Book"));
}

#[test]
fn test_quotes_favorites() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .args(["quote", "add", "dune", "-t", "The spice must flow.", "-p", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved quote (1) from Dune"));

    bookmarkr(&home)
        .args(["quote", "list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes saved."));

    bookmarkr(&home)
        .args(["quote", "fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorited quote 1"));

    bookmarkr(&home)
        .args(["q", "ls", "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The spice must flow."))
        .stdout(predicate::str::contains("Dune, p. 12"));
}

#[test]
fn test_genres_view() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .arg("genres")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fiction"));
}

#[test]
fn test_doctor_on_consistent_library() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("No inconsistencies found."));
}

#[test]
fn test_config_set_and_show() {
    let home = tempfile::tempdir().unwrap();

    bookmarkr(&home)
        .args(["config", "max-results", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-results set to 10"));

    bookmarkr(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max-results = 10"));

    bookmarkr(&home)
        .args(["config", "max-results", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-results"));

    bookmarkr(&home)
        .args(["config", "max-results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn test_unknown_book_fails() {
    let home = tempfile::tempdir().unwrap();
    add_dune(&home);

    bookmarkr(&home)
        .args(["progress", "7", "-p", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    bookmarkr(&home)
        .args(["add", "Dune", "-a", "Herbert", "-p", "412", "-s", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_short_search_query_skips_catalog() {
    let home = tempfile::tempdir().unwrap();

    bookmarkr(&home)
        .args(["search", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type at least 2 characters to search"));
}

#[test]
fn test_grouped_help() {
    let home = tempfile::tempdir().unwrap();

    bookmarkr(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Commands:"))
        .stdout(predicate::str::contains("Views:"));
}
