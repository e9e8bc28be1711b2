use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Genre, Library};
use crate::stats::genre_counts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: Genre,
    pub label: &'static str,
    pub emoji: &'static str,
    pub count: usize,
}

pub fn run(library: &Library) -> Result<CmdResult> {
    let genres = genre_counts(&library.books)
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre,
            label: genre.label(),
            emoji: genre.emoji(),
            count,
        })
        .collect();
    Ok(CmdResult::default().with_genres(genres))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookStatus;
    use crate::store::memory::fixtures::LibraryFixture;

    #[test]
    fn every_genre_is_listed() {
        let library = LibraryFixture::new()
            .with_genre_book("Sapiens", Genre::History, BookStatus::Finished)
            .with_genre_book("SPQR", Genre::History, BookStatus::Reading)
            .with_book("No genre", 100)
            .library;

        let genres = run(&library).unwrap().genres;
        assert_eq!(genres.len(), Genre::ALL.len());
        assert_eq!(genres[0].genre, Genre::Productivity);

        let history = genres.iter().find(|g| g.genre == Genre::History).unwrap();
        assert_eq!(history.count, 2);
        assert_eq!(history.emoji, "📜");
        assert_eq!(genres.iter().map(|g| g.count).sum::<usize>(), 2);
    }
}
