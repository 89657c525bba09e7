//! RFC 3961 5.1 simplified profile key derivation <br>
//!
//! - `DR(Key, Constant) = k-truncate(E(Key, Constant))`, `Constant`不足一个分组时先n-fold到分组长度,
//!   `E`的输出不足密钥长度时, 将输出反馈回`E`继续加密并拼接;
//! - `DK(Key, Constant) = random-to-key(DR(Key, Constant))`, AES的`random-to-key`是恒等变换.
//!
//! 对单分组输入, `E`(零IV的CBC-CTS)即分组加密本身.

use super::{nfold, DeriveKey};
use crate::key::Key;
use crate::lookup::CipherAlgorithm;
use crate::{BlockEncrypt, CipherError};
use utils::KeyBlock;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

#[derive(Copy, Clone, Debug, Default)]
pub struct DK;

impl DK {
    /// `DR(base, constant)`, 输出`algorithm.key_size()`字节
    pub fn random_bytes(
        algorithm: CipherAlgorithm,
        base: &Key,
        constant: &[u8],
    ) -> Result<KeyBlock, CipherError> {
        if constant.is_empty() {
            return Err(CipherError::KeyDerivation(
                "derivation constant must be not empty".to_string(),
            ));
        }

        let cipher = algorithm.init(base.contents())?;
        let key_size = algorithm.key_size();

        let mut block = [0u8; CipherAlgorithm::BLOCK_SIZE];
        nfold(constant, &mut block);

        let mut out = KeyBlock::with_capacity(key_size);
        while out.len() < key_size {
            block = cipher.encrypt_block(&block);
            let n = (key_size - out.len()).min(block.len());
            out.extend(block.iter().take(n));
        }

        #[cfg(feature = "sec-zeroize")]
        block.zeroize();

        Ok(out)
    }
}

impl DeriveKey for DK {
    fn derive_key(
        &self,
        algorithm: CipherAlgorithm,
        base: &Key,
        constant: &[u8],
    ) -> Result<Key, CipherError> {
        let random = Self::random_bytes(algorithm, base, constant)?;
        log::trace!(
            "derived {} byte {} subkey from a {} key",
            random.len(),
            algorithm,
            base.enctype()
        );
        Ok(Key::new(base.enctype(), random))
    }
}

#[cfg(test)]
mod tests {
    use super::DK;
    use crate::kdf::DeriveKey;
    use crate::key::{Enctype, Key, KeyUsage};
    use crate::lookup::CipherAlgorithm;
    use crate::{BlockEncrypt, CipherError};
    use encode::base::Base16;

    // RFC 3962 Appendix B: string-to-key的最后一步为`DK(tkey, "kerberos")`,
    // tkey是PBKDF2-HMAC-SHA1(password, ATHENA.MIT.EDUraeburn, 迭代1次或2次)的输出.
    #[test]
    fn dk_rfc3962() {
        let cases = [
            (
                Enctype::Aes128CtsHmacSha196,
                CipherAlgorithm::Aes128,
                "cdedb5281bb2f801565a1122b2563515",
                "42263c6e89f4fc28b8df68ee09799f15",
            ),
            (
                Enctype::Aes256CtsHmacSha196,
                CipherAlgorithm::Aes256,
                "cdedb5281bb2f801565a1122b25635150ad1f7a04bb9f3a333ecc0e2e1f70837",
                "fe697b52bc0d3ce14432ba036a92e65bbb52280990a2fa27883998d72af30161",
            ),
            (
                Enctype::Aes256CtsHmacSha196,
                CipherAlgorithm::Aes256,
                "01dbee7f4a9e243e988b62c73cda935da05378b93244ec8f48a99e61ad799d86",
                "a2e16d16b36069c135d5e9d2e25f896102685618b95914b467c67622225824ff",
            ),
        ];

        for (i, (enctype, alg, tkey, tgt)) in cases.into_iter().enumerate() {
            let base = Key::new(enctype, Base16::decode_str(tkey).unwrap());
            let key = DK.derive_key(alg, &base, b"kerberos").unwrap();
            assert_eq!(key.enctype(), enctype, "case {i} failed");
            assert_eq!(Base16::encode_to_string(key.contents()), tgt, "case {i} failed");
        }
    }

    #[test]
    fn dk_single_block_is_one_encryption() {
        // 128位密钥: DK = E(K, nfold(constant, 128))
        let base = Key::new(Enctype::Aes128CtsHmacSha196, vec![0x42u8; 16]);
        let constant = KeyUsage(3).checksum_constant();

        let mut folded = [0u8; 16];
        crate::kdf::nfold(&constant, &mut folded);
        let tgt = CipherAlgorithm::Aes128
            .init(base.contents())
            .unwrap()
            .encrypt_block(&folded);

        let key = DK
            .derive_key(CipherAlgorithm::Aes128, &base, &constant)
            .unwrap();
        assert_eq!(key.contents(), tgt.as_slice());
    }

    #[test]
    fn dk_usage_separation() {
        let base = Key::new(Enctype::Aes256CtsHmacSha196, vec![0x17u8; 32]);
        let k1 = DK
            .derive_key(CipherAlgorithm::Aes256, &base, &KeyUsage(1).checksum_constant())
            .unwrap();
        let k2 = DK
            .derive_key(CipherAlgorithm::Aes256, &base, &KeyUsage(2).checksum_constant())
            .unwrap();
        assert_eq!(k1.len(), 32);
        assert_ne!(k1.contents(), k2.contents());
    }

    #[test]
    fn dk_errors() {
        let base = Key::new(Enctype::Aes128CtsHmacSha196, vec![0u8; 15]);
        assert_eq!(
            DK.derive_key(CipherAlgorithm::Aes128, &base, b"kerberos")
                .err(),
            Some(CipherError::InvalidKeySize {
                expect: &[16],
                real: 15
            })
        );

        let base = Key::new(Enctype::Aes128CtsHmacSha196, vec![0u8; 16]);
        assert!(matches!(
            DK.derive_key(CipherAlgorithm::Aes128, &base, &[]),
            Err(CipherError::KeyDerivation(_))
        ));
    }
}
