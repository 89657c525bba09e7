use crate::key::Enctype;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CipherError {
    /// 不合法的密钥长度
    #[error("Invalid key size `{real}`, it should be the one of `{expect:?}`")]
    InvalidKeySize {
        expect: &'static [usize],
        real: usize,
    },

    /// 不合法的初始向量长度
    #[error("Invalid IV size `{real}` not match to block size `{target}`")]
    InvalidIvSize { target: usize, real: usize },

    /// 输出缓存不足
    #[error("Output buffer size `{real}` is less than `{need}`")]
    BufferTooSmall { need: usize, real: usize },

    /// 密钥的加密类型找不到对应的分组密码算法
    #[error("No cipher algorithm is registered for the key of enctype `{0}`")]
    UnsupportedKey(Enctype),

    /// 分组密码无法用该密钥初始化
    #[error("Block cipher initialization failed: {0}")]
    CipherInitFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("{0}")]
    Other(String),
}
