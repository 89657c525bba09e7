use crate::key::Key;
use crate::lookup::CipherAlgorithm;
use crate::CipherError;

/// 从基础密钥和用途常量派生同族的子密钥
pub trait DeriveKey {
    /// `algorithm`是`base`的加密类型对应的分组密码
    fn derive_key(
        &self,
        algorithm: CipherAlgorithm,
        base: &Key,
        constant: &[u8],
    ) -> Result<Key, CipherError>;
}

impl<T: DeriveKey + ?Sized> DeriveKey for &T {
    fn derive_key(
        &self,
        algorithm: CipherAlgorithm,
        base: &Key,
        constant: &[u8],
    ) -> Result<Key, CipherError> {
        (**self).derive_key(algorithm, base, constant)
    }
}

mod nfold;
pub use nfold::nfold;

mod dk;
pub use dk::DK;
