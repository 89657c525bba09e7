use crate::cmd::Cmd;
use cipher::EnctypeTable;
use clap::{ArgMatches, Command};

#[derive(Clone, Default)]
pub struct EnctypesCmd {
    table: EnctypeTable,
}

impl EnctypesCmd {
    pub fn new(table: EnctypeTable) -> Self {
        Self { table }
    }

    /// 每行: `编号 名字 分组密码 密钥字节长度`
    pub fn lines(&self) -> Vec<String> {
        self.table
            .iter()
            .map(|(e, a)| format!("{:<4}{:<28}{:<10}{}", e as i32, e, a, a.key_size()))
            .collect()
    }
}

impl Cmd for EnctypesCmd {
    const NAME: &'static str = "enctypes";

    fn cmd() -> Command {
        Command::new(Self::NAME).about("list the supported enctypes")
    }

    fn run(&self, _m: &ArgMatches) -> anyhow::Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EnctypesCmd;

    #[test]
    fn list_default_table() {
        let lines = EnctypesCmd::default().lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("17  aes128-cts-hmac-sha1-96"), "{}", lines[0]);
        assert!(lines[1].ends_with("aes-256   32"), "{}", lines[1]);
    }
}
