use crate::commands::{BookmarkrPaths, CmdMessage, CmdResult};
use crate::config::BookmarkrConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &BookmarkrPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = BookmarkrConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BookmarkrConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = BookmarkrConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn paths(dir: &tempfile::TempDir) -> BookmarkrPaths {
        BookmarkrPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        run(&paths, ConfigAction::Set("max-results".into(), "10".into())).unwrap();
        let shown = run(&paths, ConfigAction::ShowKey("max-results".into())).unwrap();
        assert_eq!(shown.messages[0].content, "10");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().max_results, 10);
    }

    #[test]
    fn bad_values_are_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(&paths, ConfigAction::Set("max-results".into(), "x".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());

        let unknown = run(&paths, ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(unknown.messages[0].level, MessageLevel::Error);
    }
}
