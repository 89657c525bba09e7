use clap::{Arg, ArgAction, Command};
use keyhash::cmd::{Cmd, EnctypesCmd, MacCmd};
use keyhash::log_error;
use log::LevelFilter;
use std::io::Read;

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let version = concat!(
        env!("KEYHASH_VERSION_INFO"),
        " (",
        env!("KEYHASH_GIT_INFO"),
        ")"
    );
    let app = Command::new("keyhash")
        .version(version)
        .about("Kerberos 5 AES CBC-MAC keyed hash")
        .arg(
            Arg::new("pipe")
                .long("pipe")
                .short('p')
                .action(ArgAction::SetTrue)
                .required(false)
                .help("append the stdin data as the last data segment"),
        )
        .subcommand(MacCmd::cmd())
        .subcommand(EnctypesCmd::cmd())
        .get_matches();

    let Some((s, m)) = app.subcommand() else {
        println!("{} {}", env!("CARGO_PKG_NAME"), version);
        return;
    };

    let mut pdata = Vec::with_capacity(1024);
    if app.get_flag("pipe")
        && log_error(std::io::stdin().lock().read_to_end(&mut pdata).map_err(Into::into)).is_none()
    {
        std::process::exit(1);
    }

    let res = match s {
        MacCmd::NAME => MacCmd::new(pdata.as_slice()).run(m),
        EnctypesCmd::NAME => EnctypesCmd::default().run(m),
        name => Err(anyhow::anyhow!("unsupport for {name}")),
    };

    if log_error(res).is_none() {
        std::process::exit(1);
    }
}
