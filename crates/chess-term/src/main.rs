//! Terminal front-end for the simplified chess rules engine.
//!
//! Reads one command per line from stdin, hands moves to the engine and
//! prints the resulting board. Settings come from `chess-term.toml`, with
//! command-line flags taking precedence.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use chess_engine::Game;
use clap::Parser;
use command::Command;
use config::TermConfig;
use session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Play simplified chess in the terminal.
#[derive(Parser)]
#[command(name = "chess-term")]
#[command(about = "Play simplified chess in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = TermConfig::default_path())]
    config: PathBuf,

    /// Starting position: FEN piece placement, optionally followed by w or b
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces with Unicode chess symbols
    #[arg(long)]
    unicode: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Loads the config file and applies command-line overrides. The flag is
/// true when the file existed.
fn resolve_config(args: &Args) -> anyhow::Result<(TermConfig, bool)> {
    let found = args.config.exists();
    let mut config = TermConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(fen) = &args.fen {
        config.start_fen = Some(fen.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.unicode {
        config.display.unicode = true;
    }
    Ok((config, found))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, config_found) = resolve_config(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();

    if config_found {
        tracing::debug!("Loaded config from {}", args.config.display());
    } else {
        tracing::debug!("No config at {}, using defaults", args.config.display());
    }

    let game = match &config.start_fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("starting position '{}'", fen))?,
        None => Game::new(),
    };
    tracing::info!("Starting game, {} to move", game.side_to_move());

    let mut session = Session::new(game, config.display.clone());
    println!("{}", session.render().trim_end());
    if let Some(winner) = session.game().result() {
        println!("Checkmate! {} wins!", winner);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", session.prompt());
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let reply = match Command::parse(&line) {
            Ok(command) => session.handle(command),
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        for text in &reply.lines {
            println!("{}", text.trim_end());
        }
        if reply.finished {
            break;
        }
    }

    tracing::info!("Session ended after {} moves", session.game().ply_count());
    Ok(())
}
