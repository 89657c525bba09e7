use clap::{ArgMatches, Command};

pub trait Cmd {
    const NAME: &'static str;

    fn cmd() -> Command;

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()>;
}

mod mac;
pub use mac::MacCmd;

mod enctypes;
pub use enctypes::EnctypesCmd;
