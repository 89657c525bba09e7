use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    #[error("Invalid base encode character `{0:?}`")]
    InvalidBaseCodeInDec(char),

    #[error("Invalid data length `{0}` in the decode")]
    InvalidLenInDec(usize),
}
