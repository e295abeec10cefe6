//! GameChat replay tool - plays a scripted checkers or chess game.
//!
//! Reads moves from a script file (or stdin), applies them to a fresh
//! session, and prints the board, the final state, and optionally the
//! sparse JSON snapshot a host would store.

mod config;
mod replay;
mod script;

use anyhow::Context;
use clap::Parser;
use config::GameChatConfig;
use gamechat_core::{GameKind, Side};
use gamechat_engine::{Player, Session, SessionState};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replays a scripted GameChat board game.
#[derive(Parser)]
#[command(name = "gamechat")]
#[command(about = "Replays a scripted checkers or chess game")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = GameChatConfig::default_path())]
    config: PathBuf,

    /// Game to play (overrides the config file)
    #[arg(long)]
    game: Option<GameKind>,

    /// Move script; reads stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the final board snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = GameChatConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let game = args.game.unwrap_or(config.game);
    let promotion = config.promotion_kind()?;
    tracing::info!("Config: {:?}", args.config);

    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let steps = script::parse(&source)?;
    tracing::info!("Loaded {} moves", steps.len());

    let mut session = Session::with_players(
        game,
        Player::new(config.primary_name.clone()),
        Player::new(config.secondary_name.clone()),
    );

    let report = replay::replay(&mut session, &steps, promotion, |session, step| {
        if config.show_board {
            println!("{}: {} -> {}", step.line, step.from, step.to);
            println!("{}", session.board());
        }
    });

    for (line, error) in &report.rejected {
        println!("line {}: rejected: {}", line, error);
    }

    let view = session.current_state();
    match view.state {
        SessionState::Active => {
            let player = session.player(view.turn);
            println!("{} to move ({})", player.name, view.turn);
        }
        SessionState::Pending(result) | SessionState::Ended(result) => {
            println!("Game over: {}", result);
        }
    }

    session.acknowledge();
    for side in Side::BOTH {
        let player = session.player(side);
        println!("{} ({}): {} wins", player.name, side, player.wins);
    }

    if args.json {
        println!("{}", session.snapshot().to_json()?);
    }

    Ok(())
}
