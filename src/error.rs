use thiserror::Error;

pub type Result<T> = core::result::Result<T, DHTError>;
#[derive(Error, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum DHTError {
    #[error("Failed to read from DHT11 sensor")]
    ReadFailure,
    #[error("Console write error")]
    ConsoleWriteError,
}

impl From<core::fmt::Error> for DHTError {
    fn from(_: core::fmt::Error) -> Self {
        DHTError::ConsoleWriteError
    }
}
