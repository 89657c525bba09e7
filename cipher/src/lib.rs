//! Kerberos 5 keyed hash: 以用途派生子密钥, 对分散缓存计算AES CBC-MAC.

mod error;
pub use error::CipherError;

pub mod block_cipher;
pub use block_cipher::BlockEncrypt;

pub mod key;
pub use key::{Enctype, Key, KeyUsage};

pub mod lookup;
pub use lookup::{CipherAlgorithm, CipherLookup, EnctypeTable};

pub mod kdf;
pub use kdf::DeriveKey;

pub mod iov;
pub use iov::{BlockPolicy, CryptoIov, IovBlocks, IovType};

pub mod keyhash;
pub use keyhash::KeyedHashProvider;
