//! AES CBC-MAC keyed hash <br>
//!
//! 用于CCM形式的认证加密框架: 头部(`SignOnly`)与数据(`Data`)拼接后补0对齐到分组长度,
//! 逐块计算`Y_i = CIPH_k(B_i ^ Y_{i-1})`, `Y_0 = IV`或全0, 最后的`Y_r`即为标签.
//!
//! 每次调用先用`usage || 0xCC`派生校验和子密钥Kc, 但链式加密使用的仍是原始密钥;
//! Kc在调用结束时释放(drop清零).

use super::KeyedHashProvider;
use crate::block_cipher::AES;
use crate::iov::{BlockPolicy, CryptoIov, IovBlocks};
use crate::kdf::{DeriveKey, DK};
use crate::key::{Key, KeyUsage};
use crate::lookup::{CipherAlgorithm, CipherLookup, EnctypeTable};
use crate::{BlockEncrypt, CipherError};
use utils::{as_arr_ref, xor_block};
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

const BLOCK_SIZE: usize = CipherAlgorithm::BLOCK_SIZE;

/// AES CBC-MAC. <br>
///
/// `variant`只表示该实例注册给哪种密钥长度, 计算过程与密钥长度无关.
#[derive(Clone, Debug)]
pub struct AesCbcMac<L = EnctypeTable, D = DK> {
    variant: CipherAlgorithm,
    lookup: L,
    kdf: D,
}

/// 注册给AES-128密钥的实例
pub fn keyhash_aescbc_128() -> AesCbcMac {
    AesCbcMac::new(CipherAlgorithm::Aes128)
}

/// 注册给AES-256密钥的实例
pub fn keyhash_aescbc_256() -> AesCbcMac {
    AesCbcMac::new(CipherAlgorithm::Aes256)
}

impl AesCbcMac {
    pub fn new(variant: CipherAlgorithm) -> Self {
        Self::with_collaborators(variant, EnctypeTable::default(), DK)
    }
}

impl<L, D> AesCbcMac<L, D> {
    pub fn with_collaborators(variant: CipherAlgorithm, lookup: L, kdf: D) -> Self {
        Self {
            variant,
            lookup,
            kdf,
        }
    }

    pub fn variant(&self) -> CipherAlgorithm {
        self.variant
    }

    pub fn key_size(&self) -> usize {
        self.variant.key_size()
    }
}

impl<L, D> AesCbcMac<L, D>
where
    L: CipherLookup,
    D: DeriveKey,
{
    /// 直接返回标签
    pub fn tag(
        &self,
        key: &Key,
        usage: KeyUsage,
        iv: Option<&[u8]>,
        data: &[CryptoIov<'_>],
    ) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let mut tag = [0u8; BLOCK_SIZE];
        self.hash_iov(key, usage, iv, data, &mut tag)?;
        Ok(tag)
    }

    fn check_iv(iv: Option<&[u8]>) -> Result<Option<&[u8; BLOCK_SIZE]>, CipherError> {
        iv.map(|iv| {
            as_arr_ref(iv).ok_or(CipherError::InvalidIvSize {
                target: BLOCK_SIZE,
                real: iv.len(),
            })
        })
        .transpose()
    }

    // 调用者负责释放返回的子密钥
    fn derive_checksum_key(&self, key: &Key, usage: KeyUsage) -> Result<Key, CipherError> {
        let algorithm = self
            .lookup
            .cipher_for(key)
            .ok_or(CipherError::UnsupportedKey(key.enctype()))?;
        let constant = usage.checksum_constant();
        self.kdf.derive_key(algorithm, key, &constant)
    }
}

impl<L, D> KeyedHashProvider for AesCbcMac<L, D>
where
    L: CipherLookup,
    D: DeriveKey,
{
    fn output_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn hash_iov(
        &self,
        key: &Key,
        usage: KeyUsage,
        iv: Option<&[u8]>,
        data: &[CryptoIov<'_>],
        output: &mut [u8],
    ) -> Result<usize, CipherError> {
        if output.len() < BLOCK_SIZE {
            return Err(CipherError::BufferTooSmall {
                need: BLOCK_SIZE,
                real: output.len(),
            });
        }
        let iv = Self::check_iv(iv)?;

        // Kc离开作用域时释放, 包括下面的错误返回
        let _kc = self.derive_checksum_key(key, usage)?;

        let cipher = AES::new(key.contents())
            .map_err(|e| CipherError::CipherInitFailed(e.to_string()))?;

        let mut y = iv.copied().unwrap_or([0u8; BLOCK_SIZE]);
        let mut b = [0u8; BLOCK_SIZE];
        let mut blocks = IovBlocks::<BLOCK_SIZE>::new(data, BlockPolicy::SIGN_ALL_PADDED);
        while blocks.next_block(&mut b) {
            xor_block(&mut b, &y);
            y = cipher.encrypt_block(&b);
        }

        log::debug!(
            "{} cbc-mac over {} blocks with usage {}",
            self.variant,
            blocks.blocks(),
            usage
        );

        output[..BLOCK_SIZE].copy_from_slice(&y);

        #[cfg(feature = "sec-zeroize")]
        {
            y.zeroize();
            b.zeroize();
        }

        Ok(BLOCK_SIZE)
    }
}
