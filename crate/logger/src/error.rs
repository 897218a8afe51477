use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e.to_string())
    }
}
