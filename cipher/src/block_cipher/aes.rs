//! AES分组加密<br>
//! FIPS 197  <br>
//! [FIPS 197-upd1](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.197-upd1.pdf)<br>
//!
//! 轮函数和密钥扩展由RustCrypto `aes`实现, 这里只按密钥长度选择算法并提供单分组加密.

use super::BlockEncrypt;
use crate::CipherError;
use aes::cipher::{BlockEncrypt as _, KeyInit};

/// AES-128 加密上下文
#[derive(Clone)]
pub struct AES128 {
    inner: aes::Aes128Enc,
}

/// AES-256 加密上下文
#[derive(Clone)]
pub struct AES256 {
    inner: aes::Aes256Enc,
}

/// 按密钥长度选择的AES加密上下文
#[derive(Clone)]
pub enum AES {
    AES128(AES128),
    AES256(AES256),
}

macro_rules! impl_aes {
    ($NAME: ident, $INNER: ty, $KEY_SIZE: literal) => {
        impl $NAME {
            pub const KEY_SIZE: usize = $KEY_SIZE;
            pub const BLOCK_SIZE: usize = 16;

            pub fn new(key: &[u8]) -> Result<Self, CipherError> {
                <$INNER>::new_from_slice(key)
                    .map(|inner| Self { inner })
                    .map_err(|_| CipherError::InvalidKeySize {
                        expect: &[$KEY_SIZE],
                        real: key.len(),
                    })
            }
        }

        impl BlockEncrypt<16> for $NAME {
            fn encrypt_block(&self, plaintext: &[u8; 16]) -> [u8; 16] {
                let (mut block, mut out) = (aes::Block::clone_from_slice(plaintext), [0u8; 16]);
                self.inner.encrypt_block(&mut block);
                out.copy_from_slice(block.as_slice());
                out
            }
        }
    };
}

impl_aes!(AES128, aes::Aes128Enc, 16);
impl_aes!(AES256, aes::Aes256Enc, 32);

impl AES {
    pub const BLOCK_SIZE: usize = 16;

    /// 根据`key`的字节长度选择AES-128或AES-256
    pub fn new(key: &[u8]) -> Result<AES, CipherError> {
        match key.len() {
            AES128::KEY_SIZE => AES128::new(key).map(AES::AES128),
            AES256::KEY_SIZE => AES256::new(key).map(AES::AES256),
            _ => Err(CipherError::InvalidKeySize {
                expect: &[16, 32],
                real: key.len(),
            }),
        }
    }

    pub fn key_size(&self) -> usize {
        match self {
            AES::AES128(_) => AES128::KEY_SIZE,
            AES::AES256(_) => AES256::KEY_SIZE,
        }
    }
}

impl BlockEncrypt<16> for AES {
    fn encrypt_block(&self, plaintext: &[u8; 16]) -> [u8; 16] {
        match self {
            AES::AES128(aes) => aes.encrypt_block(plaintext),
            AES::AES256(aes) => aes.encrypt_block(plaintext),
        }
    }
}
