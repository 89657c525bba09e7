//! 分散输入(scatter/gather)的分组视图. <br>
//!
//! 认证加密框架把一条逻辑消息拆成多个带类型的缓存: 真正的数据, 只参与签名不参与加密的
//! 头部/关联数据, 显式填充等. [`IovBlocks`]按策略挑出参与计算的缓存, 依次拼接, 每次产出
//! 一个分组.

/// 缓存的类型, 数值与Kerberos的crypto iov类型一致
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IovType {
    Empty = 0,
    Header = 1,
    /// 需要签名也需要加密的数据
    Data = 2,
    /// 只签名, 不加密也不输出
    SignOnly = 3,
    Padding = 4,
    Trailer = 5,
    Checksum = 6,
    Stream = 7,
}

#[derive(Copy, Clone, Debug)]
pub struct CryptoIov<'a> {
    pub flags: IovType,
    pub data: &'a [u8],
}

impl<'a> CryptoIov<'a> {
    pub const fn new(flags: IovType, data: &'a [u8]) -> Self {
        Self { flags, data }
    }

    pub const fn data(data: &'a [u8]) -> Self {
        Self::new(IovType::Data, data)
    }

    pub const fn sign_only(data: &'a [u8]) -> Self {
        Self::new(IovType::SignOnly, data)
    }
}

/// 分组产出策略
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BlockPolicy {
    /// `SignOnly`缓存是否参与
    pub include_sign_only: bool,
    /// 末尾不足一个分组时补0对齐; 开启后`Padding`缓存不再参与, 由隐式补0代替.
    pub pad_to_boundary: bool,
}

impl BlockPolicy {
    /// CBC-MAC使用的策略: 包含`SignOnly`, 补0对齐
    pub const SIGN_ALL_PADDED: BlockPolicy = BlockPolicy {
        include_sign_only: true,
        pad_to_boundary: true,
    };

    fn includes(&self, flags: IovType) -> bool {
        match flags {
            IovType::Data => true,
            IovType::SignOnly => self.include_sign_only,
            IovType::Padding => !self.pad_to_boundary,
            _ => false,
        }
    }
}

/// 单次遍历的分组游标. <br>
///
/// - 按顺序拷贝参与计算的缓存字节, 凑满`N`字节产出一个分组;
/// - 所有缓存耗尽时, 若剩余不足`N`字节且开启了补0, 补0后产出最后一个分组;
///   输入总长度为0时同样产出一个全0分组;
/// - 未开启补0时, 末尾不足`N`字节的部分不产出, 其长度可由[`IovBlocks::pending`]获取.
///
/// 游标不修改缓存内容; 对同一输入重新构造游标可得到相同的分组序列.
#[derive(Clone, Debug)]
pub struct IovBlocks<'a, const N: usize> {
    iovs: &'a [CryptoIov<'a>],
    policy: BlockPolicy,
    iov_pos: usize,
    data_pos: usize,
    blocks: usize,
    pending: usize,
    is_finish: bool,
}

impl<'a, const N: usize> IovBlocks<'a, N> {
    pub fn new(iovs: &'a [CryptoIov<'a>], policy: BlockPolicy) -> Self {
        Self {
            iovs,
            policy,
            iov_pos: 0,
            data_pos: 0,
            blocks: 0,
            pending: 0,
            is_finish: false,
        }
    }

    /// 已产出的分组数
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// 未开启补0时, 末尾未能凑满一个分组的字节数
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// 下一个分组写入`block`, 没有分组时返回`false`且`block`被清零
    pub fn next_block(&mut self, block: &mut [u8; N]) -> bool {
        if self.is_finish {
            block.fill(0);
            return false;
        }

        let mut j = 0;
        while j < N && self.iov_pos < self.iovs.len() {
            let iov = &self.iovs[self.iov_pos];
            if !self.policy.includes(iov.flags) || self.data_pos >= iov.data.len() {
                self.iov_pos += 1;
                self.data_pos = 0;
                continue;
            }

            let n = (iov.data.len() - self.data_pos).min(N - j);
            block[j..(j + n)].copy_from_slice(&iov.data[self.data_pos..(self.data_pos + n)]);
            self.data_pos += n;
            j += n;
        }

        if j == N {
            self.blocks += 1;
            return true;
        }

        self.is_finish = true;
        block[j..].fill(0);
        if self.policy.pad_to_boundary && (j != 0 || self.blocks == 0) {
            self.blocks += 1;
            true
        } else {
            self.pending = j;
            block.fill(0);
            false
        }
    }
}

impl<'a, const N: usize> Iterator for IovBlocks<'a, N> {
    type Item = [u8; N];

    fn next(&mut self) -> Option<Self::Item> {
        let mut block = [0u8; N];
        self.next_block(&mut block).then_some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockPolicy, CryptoIov, IovBlocks, IovType};

    const NO_PAD: BlockPolicy = BlockPolicy {
        include_sign_only: true,
        pad_to_boundary: false,
    };

    fn blocks(iovs: &[CryptoIov<'_>], policy: BlockPolicy) -> Vec<[u8; 4]> {
        IovBlocks::<4>::new(iovs, policy).collect()
    }

    #[test]
    fn empty_input_yields_one_zero_block() {
        let cases: [&[CryptoIov<'_>]; 3] = [
            &[],
            &[CryptoIov::data(&[])],
            &[CryptoIov::sign_only(&[]), CryptoIov::data(&[])],
        ];

        for (i, iovs) in cases.into_iter().enumerate() {
            assert_eq!(
                blocks(iovs, BlockPolicy::SIGN_ALL_PADDED),
                vec![[0u8; 4]],
                "case {i} failed"
            );
            assert!(blocks(iovs, NO_PAD).is_empty(), "case {i} failed");
        }
    }

    #[test]
    fn aligned_input_is_not_padded() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let iovs = [CryptoIov::data(&data)];
        let mut itr = IovBlocks::<4>::new(&iovs, BlockPolicy::SIGN_ALL_PADDED);
        assert_eq!(itr.next(), Some([1, 2, 3, 4]));
        assert_eq!(itr.next(), Some([5, 6, 7, 8]));
        assert_eq!(itr.next(), None);
        assert_eq!(itr.next(), None);
        assert_eq!(itr.blocks(), 2);
    }

    #[test]
    fn tail_is_zero_padded() {
        let iovs = [CryptoIov::data(&[1, 2, 3, 4, 5, 6])];
        assert_eq!(
            blocks(&iovs, BlockPolicy::SIGN_ALL_PADDED),
            vec![[1, 2, 3, 4], [5, 6, 0, 0]]
        );

        let mut itr = IovBlocks::<4>::new(&iovs, NO_PAD);
        assert_eq!(itr.next(), Some([1, 2, 3, 4]));
        assert_eq!(itr.next(), None);
        assert_eq!(itr.pending(), 2);
    }

    #[test]
    fn segments_are_concatenated() {
        let iovs = [
            CryptoIov::sign_only(&[1, 2, 3]),
            CryptoIov::data(&[]),
            CryptoIov::data(&[4, 5]),
            CryptoIov::new(IovType::Header, &[0xee; 5]),
            CryptoIov::data(&[6, 7, 8, 9, 10]),
            CryptoIov::new(IovType::Trailer, &[0xee; 3]),
        ];
        assert_eq!(
            blocks(&iovs, BlockPolicy::SIGN_ALL_PADDED),
            vec![[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 0, 0]]
        );
    }

    #[test]
    fn inclusion_policy() {
        let iovs = [
            CryptoIov::sign_only(&[1, 2]),
            CryptoIov::data(&[3, 4]),
            CryptoIov::new(IovType::Padding, &[5, 6]),
            CryptoIov::new(IovType::Checksum, &[7, 8]),
        ];
        let cases = [
            (BlockPolicy::SIGN_ALL_PADDED, vec![[1u8, 2, 3, 4]]),
            (
                BlockPolicy {
                    include_sign_only: false,
                    pad_to_boundary: true,
                },
                vec![[3, 4, 0, 0]],
            ),
            (NO_PAD, vec![[1, 2, 3, 4]]),
            (
                BlockPolicy {
                    include_sign_only: false,
                    pad_to_boundary: false,
                },
                vec![[3, 4, 5, 6]],
            ),
        ];

        for (i, (policy, tgt)) in cases.into_iter().enumerate() {
            assert_eq!(blocks(&iovs, policy), tgt, "case {i} failed");
        }
    }

    #[test]
    fn fresh_cursor_is_deterministic() {
        let data = (0u8..23).collect::<Vec<_>>();
        let iovs = [
            CryptoIov::sign_only(&data[..5]),
            CryptoIov::data(&data[5..]),
        ];
        let a = blocks(&iovs, BlockPolicy::SIGN_ALL_PADDED);
        let b = blocks(&iovs, BlockPolicy::SIGN_ALL_PADDED);
        assert_eq!(a.len(), 6);
        assert_eq!(a, b);
        assert_eq!(a.concat()[..23], data[..]);
        assert!(a.concat()[23..].iter().all(|&x| x == 0));
    }

    #[test]
    fn exhausted_cursor_clears_block() {
        let iovs = [CryptoIov::data(&[1, 2, 3, 4])];
        let mut itr = IovBlocks::<4>::new(&iovs, BlockPolicy::SIGN_ALL_PADDED);
        let mut block = [0u8; 4];
        assert!(itr.next_block(&mut block));
        assert_eq!(block, [1, 2, 3, 4]);
        assert!(!itr.next_block(&mut block));
        assert_eq!(block, [0u8; 4]);
    }
}
