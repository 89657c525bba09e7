use std::fmt::{Debug, Formatter};
use std::ops::Deref;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// 对称密钥字节. <br>
///
/// `Debug`不输出内容; 开启`sec-zeroize-drop`特性时drop会清零.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct KeyBlock {
    data: Vec<u8>,
}

impl KeyBlock {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_arr<const N: usize>(&self) -> Option<&[u8; N]> {
        as_arr_ref(self.data.as_slice())
    }
}

impl Debug for KeyBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBlock")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl AsRef<[u8]> for KeyBlock {
    fn as_ref(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl Deref for KeyBlock {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.data.as_slice()
    }
}

#[cfg(feature = "sec-zeroize")]
impl Zeroize for KeyBlock {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

#[cfg(feature = "sec-zeroize-drop")]
impl Drop for KeyBlock {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl From<&[u8]> for KeyBlock {
    fn from(value: &[u8]) -> Self {
        Self {
            data: value.to_vec(),
        }
    }
}

impl From<Vec<u8>> for KeyBlock {
    fn from(value: Vec<u8>) -> Self {
        Self { data: value }
    }
}

impl<A> Extend<A> for KeyBlock
where
    Vec<u8>: Extend<A>,
{
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        self.data.extend(iter)
    }
}

/// `data.len() != N`时返回`None`
pub fn as_arr_ref<const N: usize>(data: &[u8]) -> Option<&[u8; N]> {
    data.try_into().ok()
}

/// `out[i] ^= other[i]`
#[inline]
pub fn xor_block<const N: usize>(out: &mut [u8; N], other: &[u8; N]) {
    out.iter_mut().zip(other.iter()).for_each(|(a, &b)| {
        *a ^= b;
    });
}
