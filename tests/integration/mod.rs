
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn run_csv2json(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv2json"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run csv2json")
}
