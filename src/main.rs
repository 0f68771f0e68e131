use std::io;

use chrono::Local;
use clap::Parser;
use relatorio::{Cli, app, logging};

fn main() {
    let cli = Cli::parse();
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    // Single failure boundary: nothing below main catches errors.
    if let Err(e) = app::run(&mut input, &mut output, &cli.output, Local::now()) {
        eprintln!("Erro inesperado: {e}");
        std::process::exit(1);
    }
}
