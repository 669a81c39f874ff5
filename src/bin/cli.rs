// src/bin/cli.rs
use preisschild::cli::{self, Mode};

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: could not install report handler: {e}");
    }

    let result = cli::detect_mode().and_then(|mode| match mode {
        // `cli` always runs the CLI path; without args it prompts.
        Mode::Cli(params) | Mode::Gui(params) => cli::run(params),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
