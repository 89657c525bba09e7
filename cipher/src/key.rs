//! Kerberos 5 密钥: 加密类型(enctype) + 密钥字节. <br>
//!
//! - [RFC 3961](https://www.rfc-editor.org/rfc/rfc3961): Encryption and Checksum Specifications for Kerberos 5
//! - [RFC 3962](https://www.rfc-editor.org/rfc/rfc3962): AES Encryption for Kerberos 5

use crate::CipherError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use utils::KeyBlock;

macro_rules! impl_enctype {
    ($NAME: ident, $REPR: ty, $([$ITEM: ident = $VAL: literal, $STR: literal]),+) => {
        #[repr($REPR)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $NAME {
            $($ITEM = $VAL,)+
        }

        impl $NAME {
            pub const ALL: &'static [$NAME] = &[$(Self::$ITEM),+];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$ITEM => $STR,)+
                }
            }
        }

        impl TryFrom<$REPR> for $NAME {
            type Error = CipherError;

            fn try_from(value: $REPR) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == Self::$ITEM as $REPR => Ok(Self::$ITEM),)+
                    _ => Err(CipherError::Other(format!("{} is no valid {} value", value, stringify!($NAME)))),
                }
            }
        }

        impl FromStr for $NAME {
            type Err = CipherError;

            /// 名字或者数值, 如`aes128-cts-hmac-sha1-96`或`17`
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $(x if x.eq_ignore_ascii_case($STR) => Ok(Self::$ITEM),)+
                    x => match x.parse::<$REPR>() {
                        Ok(v) => Self::try_from(v),
                        Err(_) => Err(CipherError::Other(format!("`{}` is no valid {} name", x, stringify!($NAME)))),
                    },
                }
            }
        }

        impl TryFrom<String> for $NAME {
            type Error = CipherError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$NAME> for String {
            fn from(value: $NAME) -> Self {
                value.name().to_string()
            }
        }

        impl Display for $NAME {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.pad(self.name())
            }
        }
    };
}

impl_enctype!(
    Enctype,
    i32,
    [Aes128CtsHmacSha196 = 17, "aes128-cts-hmac-sha1-96"],
    [Aes256CtsHmacSha196 = 18, "aes256-cts-hmac-sha1-96"]
);

/// 密钥用途编号, 用于派生与用途绑定的子密钥
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct KeyUsage(pub u32);

impl KeyUsage {
    /// 校验和子密钥(Kc)派生常量的标签字节
    pub const CHECKSUM_LABEL: u8 = 0xcc;

    /// `usage(大端序32位) || 0xCC`
    pub const fn checksum_constant(self) -> [u8; 5] {
        let u = self.0.to_be_bytes();
        [u[0], u[1], u[2], u[3], Self::CHECKSUM_LABEL]
    }
}

impl From<u32> for KeyUsage {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for KeyUsage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 对称密钥, 调用者持有; 库内部只读不改. <br>
///
/// `Debug`不输出密钥字节; 开启`sec-zeroize-drop`时drop会清零密钥字节.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    enctype: Enctype,
    contents: KeyBlock,
}

impl Key {
    pub fn new<K: Into<KeyBlock>>(enctype: Enctype, contents: K) -> Self {
        Self {
            enctype,
            contents: contents.into(),
        }
    }

    pub fn enctype(&self) -> Enctype {
        self.enctype
    }

    pub fn contents(&self) -> &[u8] {
        self.contents.as_slice()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
