//! # Keyed hash provider
//!
//! 以密钥和用途编号对(分散的)消息计算固定长度的认证标签, 供上层的校验和/认证加密框架使用.

use crate::iov::CryptoIov;
use crate::key::{Key, KeyUsage};
use crate::CipherError;

pub trait KeyedHashProvider {
    /// 标签字节长度
    fn output_size(&self) -> usize;

    /// 对连续的`input`计算标签, 等价于只含一个`Data`缓存的[`KeyedHashProvider::hash_iov`]. <br>
    /// 返回写入`output`的字节数.
    fn hash(
        &self,
        key: &Key,
        usage: KeyUsage,
        iv: Option<&[u8]>,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, CipherError> {
        self.hash_iov(key, usage, iv, &[CryptoIov::data(input)], output)
    }

    /// 对分散的`data`计算标签, 返回写入`output`的字节数; 失败时`output`不被修改.
    fn hash_iov(
        &self,
        key: &Key,
        usage: KeyUsage,
        iv: Option<&[u8]>,
        data: &[CryptoIov<'_>],
        output: &mut [u8],
    ) -> Result<usize, CipherError>;
}

mod aescbc;
pub use aescbc::{keyhash_aescbc_128, keyhash_aescbc_256, AesCbcMac};
