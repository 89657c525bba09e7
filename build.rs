use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

// git不存在或者不在仓库中时返回空串
fn git_output(args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).output()?;

    Ok(if output.status.success() {
        String::from_utf8(output.stdout)?.trim().to_string()
    } else {
        String::default()
    })
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let commit = git_output(&["log", "-n", "1", "--pretty=format:%H"])
        .map(|s| s[..8.min(s.len())].to_string())
        .unwrap_or_default();

    println!(
        "cargo:rustc-env=KEYHASH_VERSION_INFO={}-{}",
        env!("CARGO_PKG_VERSION"),
        DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S:%Z")
    );

    println!(
        "cargo:rustc-env=KEYHASH_GIT_INFO={}",
        if commit.is_empty() { "unknown" } else { commit.as_str() }
    );
}
