use thiserror::Error;

/// Errors surfaced by the word-sorting pipeline.
///
/// Tokenizing never fails; these only come from reading input, loading
/// configuration or writing the report.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
