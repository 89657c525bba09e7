use crate::cmd::Cmd;
use crate::error::KeyhashError;
use crate::key_file::{decode_hex, parse_key, KeyFile};
use anyhow::Result;
use cipher::keyhash::AesCbcMac;
use cipher::{
    CipherError, CipherLookup, CryptoIov, Enctype, EnctypeTable, Key, KeyUsage, KeyedHashProvider,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use encode::base::Base16;
use std::path::PathBuf;

/// AES CBC-MAC keyed hash. <br>
///
/// 缓存顺序: 所有`--sign-only`, 然后所有`--data`/`--msg`, 最后是管道输入.
#[derive(Clone, Default)]
pub struct MacCmd {
    pipe: Vec<u8>,
    table: EnctypeTable,
}

impl MacCmd {
    pub fn new(pipe: &[u8]) -> Self {
        Self {
            pipe: pipe.to_vec(),
            table: EnctypeTable::default(),
        }
    }

    fn key(m: &ArgMatches) -> Result<Key, KeyhashError> {
        let enctype = m.get_one::<Enctype>("enctype").copied();
        match (m.get_one::<String>("key"), m.get_one::<PathBuf>("key-file")) {
            (Some(hex), _) => parse_key(hex, enctype),
            (None, Some(path)) => {
                let mut f = KeyFile::load(path)?;
                if enctype.is_some() {
                    f.enctype = enctype;
                }
                f.to_key()
            }
            (None, None) => unreachable!("clap requires one of `key` and `key-file`"),
        }
    }

    fn hex_args(m: &ArgMatches, id: &'static str) -> Result<Vec<Vec<u8>>, KeyhashError> {
        m.get_many::<String>(id)
            .into_iter()
            .flatten()
            .map(|x| decode_hex(id, x))
            .collect()
    }

    /// 计算标签
    pub fn tag(&self, m: &ArgMatches) -> Result<[u8; 16]> {
        let key = Self::key(m)?;
        let usage = KeyUsage(*m.get_one::<u32>("usage").unwrap_or(&0));
        let iv = m
            .get_one::<String>("iv")
            .map(|x| decode_hex("iv", x))
            .transpose()?;

        let sign_only = Self::hex_args(m, "sign-only")?;
        let data = Self::hex_args(m, "data")?;
        let msg = m.get_many::<String>("msg").into_iter().flatten();

        let iovs = sign_only
            .iter()
            .map(|x| CryptoIov::sign_only(x))
            .chain(data.iter().map(|x| CryptoIov::data(x)))
            .chain(msg.map(|x| CryptoIov::data(x.as_bytes())))
            .chain(std::iter::once(CryptoIov::data(&self.pipe)))
            .collect::<Vec<_>>();

        let variant = self
            .table
            .cipher_for(&key)
            .ok_or(CipherError::UnsupportedKey(key.enctype()))?;
        let mac = AesCbcMac::with_collaborators(variant, &self.table, cipher::kdf::DK);
        log::debug!(
            "{} keyed hash, {} sign-only and {} data segments",
            variant,
            sign_only.len(),
            iovs.len() - sign_only.len()
        );

        let mut tag = [0u8; 16];
        let n = mac.hash_iov(&key, usage, iv.as_deref(), &iovs, &mut tag)?;
        debug_assert_eq!(n, mac.output_size());
        Ok(tag)
    }
}

impl Cmd for MacCmd {
    const NAME: &'static str = "mac";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("AES CBC-MAC keyed hash with the checksum subkey derivation of Kerberos 5")
            .arg(
                Arg::new("key")
                    .long("key")
                    .short('k')
                    .value_name("HEX")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(String))
                    .required_unless_present("key-file")
                    .conflicts_with("key-file")
                    .help("the raw key in hex"),
            )
            .arg(
                Arg::new("key-file")
                    .long("key-file")
                    .value_name("PATH")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(PathBuf))
                    .help(r#"json key file: {"enctype": "...", "key": "<hex>"}"#),
            )
            .arg(
                Arg::new("enctype")
                    .long("enctype")
                    .short('e')
                    .action(ArgAction::Set)
                    .value_parser(|s: &str| s.parse::<Enctype>().map_err(|e| e.to_string()))
                    .help("enctype name or number, inferred from the key size by default"),
            )
            .arg(
                Arg::new("usage")
                    .long("usage")
                    .short('u')
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(u32))
                    .required(true)
                    .help("key usage number"),
            )
            .arg(
                Arg::new("iv")
                    .long("iv")
                    .value_name("HEX")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(String))
                    .help("16 bytes initial chaining value in hex, all zero by default"),
            )
            .arg(
                Arg::new("sign-only")
                    .long("sign-only")
                    .short('s')
                    .value_name("HEX")
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(String))
                    .help("signed but not encrypted data in hex, e.g. the CCM header"),
            )
            .arg(
                Arg::new("data")
                    .long("data")
                    .short('d')
                    .value_name("HEX")
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(String))
                    .help("data in hex"),
            )
            .arg(
                Arg::new("msg")
                    .long("msg")
                    .short('m')
                    .value_name("STRING")
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(String))
                    .help("data as utf-8 string"),
            )
    }

    fn run(&self, m: &ArgMatches) -> Result<()> {
        let tag = self.tag(m)?;
        println!("{}", Base16::encode_to_string(&tag));
        Ok(())
    }
}
