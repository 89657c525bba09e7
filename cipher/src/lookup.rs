use crate::block_cipher::{AES, AES128, AES256};
use crate::key::{Enctype, Key};
use crate::CipherError;
use std::fmt::{Display, Formatter};

/// 加密类型底层使用的分组密码算法
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CipherAlgorithm {
    Aes128,
    Aes256,
}

impl CipherAlgorithm {
    pub const BLOCK_SIZE: usize = 16;

    pub const fn key_size(&self) -> usize {
        match self {
            CipherAlgorithm::Aes128 => AES128::KEY_SIZE,
            CipherAlgorithm::Aes256 => AES256::KEY_SIZE,
        }
    }

    pub const fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    /// 用`key`初始化该算法的加密上下文, `key`长度必须等于`key_size()`
    pub fn init(&self, key: &[u8]) -> Result<AES, CipherError> {
        match self {
            CipherAlgorithm::Aes128 => AES128::new(key).map(AES::AES128),
            CipherAlgorithm::Aes256 => AES256::new(key).map(AES::AES256),
        }
    }
}

impl Display for CipherAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherAlgorithm::Aes128 => f.pad("aes-128"),
            CipherAlgorithm::Aes256 => f.pad("aes-256"),
        }
    }
}

/// 查找密钥对应的分组密码算法
pub trait CipherLookup {
    fn cipher_for(&self, key: &Key) -> Option<CipherAlgorithm>;
}

impl<T: CipherLookup + ?Sized> CipherLookup for &T {
    fn cipher_for(&self, key: &Key) -> Option<CipherAlgorithm> {
        (**self).cipher_for(key)
    }
}

/// 加密类型到分组密码算法的映射表, 由调用者构造并传入, 没有全局状态.
#[derive(Clone, Debug)]
pub struct EnctypeTable {
    entries: Vec<(Enctype, CipherAlgorithm)>,
}

impl EnctypeTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 已存在的`enctype`会被覆盖
    pub fn register(mut self, enctype: Enctype, algorithm: CipherAlgorithm) -> Self {
        match self.entries.iter_mut().find(|(e, _)| *e == enctype) {
            Some(entry) => entry.1 = algorithm,
            None => self.entries.push((enctype, algorithm)),
        }
        self
    }

    pub fn get(&self, enctype: Enctype) -> Option<CipherAlgorithm> {
        self.entries
            .iter()
            .find(|(e, _)| *e == enctype)
            .map(|&(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Enctype, CipherAlgorithm)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for EnctypeTable {
    /// RFC 3962 AES加密类型
    fn default() -> Self {
        Self::new()
            .register(Enctype::Aes128CtsHmacSha196, CipherAlgorithm::Aes128)
            .register(Enctype::Aes256CtsHmacSha196, CipherAlgorithm::Aes256)
    }
}

impl CipherLookup for EnctypeTable {
    fn cipher_for(&self, key: &Key) -> Option<CipherAlgorithm> {
        self.get(key.enctype())
    }
}
