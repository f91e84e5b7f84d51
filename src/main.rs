#![forbid(unsafe_code)]

use clap::Parser;
use xray_link_json::cli::{Cli, run};

fn main() {
    let args = Cli::parse();
    std::process::exit(run(&args));
}
