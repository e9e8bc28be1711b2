use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkrError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Quote not found: {0}")]
    QuoteNotFound(String),

    #[error("'{0}' matches more than one book, use its index instead")]
    AmbiguousSelector(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<reqwest::Error> for BookmarkrError {
    fn from(err: reqwest::Error) -> Self {
        BookmarkrError::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookmarkrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let cases = [
            (BookmarkrError::BookNotFound("7".into()), "Book not found: 7"),
            (BookmarkrError::QuoteNotFound("2".into()), "Quote not found: 2"),
            (
                BookmarkrError::AmbiguousSelector("du".into()),
                "'du' matches more than one book, use its index instead",
            ),
            (BookmarkrError::InvalidInput("x".into()), "Invalid input: x"),
            (BookmarkrError::Catalog("down".into()), "Catalog error: down"),
            (BookmarkrError::Store("locked".into()), "Store error: locked"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}
