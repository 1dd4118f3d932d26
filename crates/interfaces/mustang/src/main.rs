#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Touchscreen launcher shell for the head unit")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, env = mustang_config::CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
    /// Run in a normal decorated window instead of fullscreen
    #[arg(long)]
    windowed: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = mustang_ui::ShellOptions {
        config: cli.config,
        windowed: cli.windowed,
        verbose: cli.verbose,
    };

    if let Err(err) = mustang_ui::run(options) {
        eprintln!("Mustang shell failed: {err}");
        std::process::exit(1);
    }
}
