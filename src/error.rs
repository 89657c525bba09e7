use cipher::CipherError;
use encode::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyhashError {
    #[error("Invalid hex string for `{arg}`: {source}")]
    InvalidHex {
        arg: &'static str,
        #[source]
        source: EncodeError,
    },

    #[error("Cannot infer the enctype from a `{0}` bytes key, use `--enctype` to specify it")]
    UnknownKeySize(usize),

    #[error("Invalid key file `{path}`: {msg}")]
    InvalidKeyFile { path: String, msg: String },

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
