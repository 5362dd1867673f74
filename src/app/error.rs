use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedshipError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no channel URL provided")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, FeedshipError>;
