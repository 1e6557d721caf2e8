//! build_release - hermetic release builds for Rust projects.
//!
//! Compiles a project at a given version and commit and writes a tarball,
//! plus .deb and optional .rpm packages on Linux, to the output directory.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let exit_code = match build_release::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
