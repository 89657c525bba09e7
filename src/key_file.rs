//! 密钥的命令行/文件表示. <br>
//!
//! 密钥文件为JSON: `{"enctype": "aes256-cts-hmac-sha1-96", "key": "<hex>"}`, `enctype`可省略,
//! 省略时按密钥长度推断.

use crate::error::KeyhashError;
use cipher::{Enctype, Key};
use encode::base::Base16;
use serde::{Deserialize, Serialize};
use std::path::Path;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

#[derive(Clone, Serialize, Deserialize)]
pub struct KeyFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enctype: Option<Enctype>,
    pub key: String,
}

impl KeyFile {
    pub fn load(path: &Path) -> Result<Self, KeyhashError> {
        let s = std::fs::read_to_string(path)?;
        serde_json::from_str(&s).map_err(|e| KeyhashError::InvalidKeyFile {
            path: path.display().to_string(),
            msg: e.to_string(),
        })
    }

    pub fn to_key(&self) -> Result<Key, KeyhashError> {
        parse_key(&self.key, self.enctype)
    }
}

#[cfg(feature = "sec-zeroize")]
impl Drop for KeyFile {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// 16字节为AES-128, 32字节为AES-256
pub fn infer_enctype(key_size: usize) -> Result<Enctype, KeyhashError> {
    match key_size {
        16 => Ok(Enctype::Aes128CtsHmacSha196),
        32 => Ok(Enctype::Aes256CtsHmacSha196),
        n => Err(KeyhashError::UnknownKeySize(n)),
    }
}

pub fn parse_key(hex: &str, enctype: Option<Enctype>) -> Result<Key, KeyhashError> {
    let contents = decode_hex("key", hex)?;
    let enctype = match enctype {
        Some(e) => e,
        None => infer_enctype(contents.len())?,
    };
    Ok(Key::new(enctype, contents))
}

pub fn decode_hex(arg: &'static str, hex: &str) -> Result<Vec<u8>, KeyhashError> {
    Base16::decode_str(hex).map_err(|source| KeyhashError::InvalidHex { arg, source })
}
