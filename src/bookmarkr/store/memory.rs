use super::LibraryStore;
use crate::error::Result;
use crate::model::Library;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    library: Library,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: Library) -> Self {
        Self { library, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LibraryStore for InMemoryStore {
    fn load(&self) -> Result<Library> {
        Ok(self.library.clone())
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.library = library.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookStatus, Genre, Quote};
    use chrono::{DateTime, Local, Utc};

    pub struct LibraryFixture {
        pub library: Library,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                library: Library::default(),
            }
        }

        pub fn with_book(mut self, title: &str, total_pages: u32) -> Self {
            let book = Book::new(
                title.to_string(),
                "Some Author".to_string(),
                total_pages,
                Utc::now(),
            );
            self.library.books.push(book);
            self
        }

        pub fn with_genre_book(mut self, title: &str, genre: Genre, status: BookStatus) -> Self {
            let mut book =
                Book::new(title.to_string(), "Some Author".to_string(), 300, Utc::now());
            book.genre = Some(genre);
            book.status = status;
            if status == BookStatus::Finished {
                book.current_page = book.total_pages;
                book.finished_date = Some(Utc::now());
            }
            self.library.books.push(book);
            self
        }

        /// Records progress on the most recently added book, through the ledger.
        pub fn read_last(mut self, page: u32, at: DateTime<Local>) -> Self {
            if let Some(book) = self.library.books.last_mut() {
                self.library.activity.record_progress(book, page, at);
            }
            self
        }

        pub fn with_quote(mut self, book_index: usize, text: &str) -> Self {
            let book_id = self.library.books[book_index].id.clone();
            self.library
                .quotes
                .push(Quote::new(book_id, text.to_string(), Utc::now()));
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_library(self.library)
        }
    }
}
