use crate::{Decode, Encode, EncodeError};
use std::io::{Read, Write};

/// 十六进制编码, 编码输出小写字符. <br>
///
/// 解码时忽略ASCII空白字符和`:`分隔符, 如`66:e9 4b d4`.
#[derive(Clone)]
pub struct Base16 {
    buf: Vec<u8>,
}

impl Base16 {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    /// 指定缓存大小
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: vec![0; cap.max(128)],
        }
    }

    pub fn encode_to_string(data: &[u8]) -> String {
        let (mut src, mut out) = (data, Vec::with_capacity(data.len() << 1));
        // 切片读和Vec写不会产生IO错误
        let _ = Self::with_capacity(data.len()).encode(&mut src, &mut out);
        out.into_iter().map(char::from).collect()
    }

    pub fn decode_str(s: &str) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(s.len() >> 1);
        Self::new().decode(&mut s.as_bytes(), &mut out)?;
        Ok(out)
    }
}

impl Default for Base16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Base16 {
    const BASE16_LOWER: [u8; 16] = *b"0123456789abcdef";

    const fn is_separator(x: u8) -> bool {
        x.is_ascii_whitespace() || x == b':'
    }
}

impl Encode for Base16 {
    fn encode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError> {
        let mut ilen = 0;

        loop {
            let l = in_data.read(self.buf.as_mut_slice())?;

            if l == 0 {
                break;
            }

            for &d in self.buf.iter().take(l) {
                let o = [
                    Self::BASE16_LOWER[(d >> 4) as usize],
                    Self::BASE16_LOWER[(d & 0xf) as usize],
                ];
                out_data.write_all(&o)?;
            }

            ilen += l;
        }

        out_data.flush()?;
        Ok((ilen, ilen << 1))
    }
}

impl Decode for Base16 {
    fn decode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError> {
        // ilen: 读入的字节数, digits: 有效的十六进制字符数
        let (mut ilen, mut digits, mut num) = (0, 0usize, 0u8);

        loop {
            let l = in_data.read(self.buf.as_mut_slice())?;

            if l == 0 {
                break;
            }

            for &d in self.buf.iter().take(l) {
                let x = match d {
                    x if Self::is_separator(x) => continue,
                    x if x.is_ascii_digit() => x - b'0',
                    x @ b'a'..=b'f' => 10 + x - b'a',
                    x @ b'A'..=b'F' => 10 + x - b'A',
                    _ => {
                        return Err(EncodeError::InvalidBaseCodeInDec(char::from(d)));
                    }
                };

                if digits & 1 == 1 {
                    out_data.write_all(&[(num << 4) | x])?;
                } else {
                    num = x;
                }
                digits += 1;
            }

            ilen += l;
        }

        if digits & 1 != 0 {
            Err(EncodeError::InvalidLenInDec(digits))
        } else {
            out_data.flush()?;
            Ok((ilen, digits >> 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Base16;
    use crate::{Decode, Encode, EncodeError};

    const CASES: [([u8; 4], [u8; 8]); 3] = [
        ([0x9au8, 0x3f, 0x46, 0x77], *b"9a3f4677"),
        ([0x33, 0x8f, 0xd0, 0x54], *b"338fd054"),
        ([0x4d, 0x43, 0x09, 0xda], *b"4d4309da"),
    ];

    #[test]
    fn base16_encode() {
        let mut base16 = Base16::new();
        let mut buf = vec![];
        for (idx, (case, tgt)) in CASES.iter().enumerate() {
            buf.clear();
            let enc = base16.encode(&mut case.as_slice(), &mut buf).unwrap();
            assert_eq!(enc.0 << 1, enc.1, "case {idx} failed");
            assert_eq!(buf, tgt, "case {idx} failed");
            assert_eq!(Base16::encode_to_string(case).as_bytes(), tgt, "case {idx} failed");
        }
    }

    #[test]
    fn base16_encode_to_string() {
        let data = (0u8..=255).cycle().take(300).collect::<Vec<_>>();
        let s = Base16::encode_to_string(&data);
        assert_eq!(s.len(), 600);
        assert!(s.starts_with("000102"));
        assert_eq!(&s[510..516], "ff0001");
        assert_eq!(Base16::decode_str(&s).unwrap(), data);
        assert_eq!(Base16::encode_to_string(&[]), "");
    }

    #[test]
    fn base16_decode() {
        let mut base16 = Base16::new();
        let mut buf = vec![];
        for (idx, (tgt, case)) in CASES.iter().enumerate() {
            buf.clear();
            let enc = base16.decode(&mut case.as_slice(), &mut buf).unwrap();
            assert_eq!(enc.0, enc.1 << 1, "case {idx} failed");
            assert_eq!(buf, tgt, "case {idx} failed");
        }
    }

    #[test]
    fn base16_decode_separator() {
        let cases = [
            ("66:E9:4b:D4", vec![0x66u8, 0xe9, 0x4b, 0xd4]),
            ("66e9 4bd4\n", vec![0x66, 0xe9, 0x4b, 0xd4]),
            ("", vec![]),
        ];

        for (idx, (s, tgt)) in cases.into_iter().enumerate() {
            assert_eq!(Base16::decode_str(s).unwrap(), tgt, "case {idx} failed");
        }
    }

    #[test]
    fn base16_decode_invalid() {
        assert!(matches!(
            Base16::decode_str("abc"),
            Err(EncodeError::InvalidLenInDec(3))
        ));
        assert!(matches!(
            Base16::decode_str("zz"),
            Err(EncodeError::InvalidBaseCodeInDec('z'))
        ));
    }
}
