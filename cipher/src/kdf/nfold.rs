//! RFC 3961 5.1 n-fold <br>
//!
//! 把输入重复若干次(每次循环右移13位)拼接到`lcm(in, out)`字节长, 再按`out`字节长度分段做
//! 带循环进位的ones'-complement加法.

const fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let c = b;
        b = a % b;
        a = c;
    }
    a
}

/// 将`input`折叠为`out.len()`字节, 写入`out`. <br>
///
/// `input`为空时`out`全为0.
pub fn nfold(input: &[u8], out: &mut [u8]) {
    out.fill(0);
    let (inlen, outlen) = (input.len(), out.len());
    if inlen == 0 || outlen == 0 {
        return;
    }

    let inbits = inlen << 3;
    let lcm = (inlen / gcd(inlen, outlen)) * outlen;

    let mut carry = 0u32;
    for i in (0..lcm).rev() {
        // 第i个字节对应的最高位在(旋转后的)输入中的位置
        let msbit =
            ((inbits - 1) + (inbits + 13) * (i / inlen) + ((inlen - (i % inlen)) << 3)) % inbits;
        let (hi, lo) = (
            input[((inlen - 1) - (msbit >> 3)) % inlen] as u32,
            input[(inlen - (msbit >> 3)) % inlen] as u32,
        );

        carry += (((hi << 8) | lo) >> ((msbit & 7) + 1)) & 0xff;
        carry += out[i % outlen] as u32;
        out[i % outlen] = (carry & 0xff) as u8;
        carry >>= 8;
    }

    if carry != 0 {
        for x in out.iter_mut().rev() {
            carry += *x as u32;
            *x = (carry & 0xff) as u8;
            carry >>= 8;
        }
    }
}
