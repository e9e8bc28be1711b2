use super::LibraryStore;
use crate::error::{BookmarkrError, Result};
use crate::model::Library;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BookmarkrError::Io)?;
        }
        Ok(())
    }
}

impl LibraryStore for FileStore {
    fn load(&self) -> Result<Library> {
        let path = self.data_path();
        if !path.exists() {
            debug!(path = %path.display(), "no data file yet, starting empty");
            return Ok(Library::default());
        }

        let content = fs::read_to_string(&path).map_err(BookmarkrError::Io)?;
        if content.trim().is_empty() {
            return Ok(Library::default());
        }
        let library: Library =
            serde_json::from_str(&content).map_err(BookmarkrError::Serialization)?;
        debug!(
            books = library.books.len(),
            quotes = library.quotes.len(),
            days = library.activity.len(),
            "library loaded"
        );
        Ok(library)
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.ensure_dir()?;

        let content =
            serde_json::to_string_pretty(library).map_err(BookmarkrError::Serialization)?;

        // Write beside the target and rename over it, so readers see old or new, never half.
        let path = self.data_path();
        let tmp = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp, content).map_err(BookmarkrError::Io)?;
        fs::rename(&tmp, &path).map_err(BookmarkrError::Io)?;

        debug!(path = %path.display(), "library saved");
        Ok(())
    }
}
