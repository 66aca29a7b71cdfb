use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid auth token length: expected {expected} bytes, got {actual}")]
    InvalidAuthToken { expected: usize, actual: usize },

    #[error("Unknown {vocabulary} code: {code}")]
    UnknownCode { vocabulary: &'static str, code: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
