// src/main.rs
use anyhow::Result;
use clap::Parser;
use noteapp::cli::args::{Args, Command};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity; the terminal UI owns the screen,
    // so it only logs warnings unless asked for more.
    let interactive = matches!(args.command, None | Some(Command::Ui));
    let filter = match args.verbose {
        0 if interactive => Level::WARN,
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("noteapp={}", filter).parse()?),
        )
        .init();

    noteapp::run(args)
}
