//! Arena CLI
//!
//! Run a game between two player strategies.

use std::env;
use std::path::Path;

use anyhow::Result;
use arena::{create_player, ArenaConfig, Game};

fn print_usage() {
    println!("Arena game runner");
    println!();
    println!("Usage:");
    println!("  arena [--white SPEC] [--black SPEC] [options]");
    println!();
    println!("Player specs:");
    println!("  random                - uniform random legal moves");
    println!("  manual                - moves typed on stdin (UCI, e.g. e2e4)");
    println!("  scripted[:m1,m2,...]  - replay a fixed move list");
    println!("  minimax[:depth]       - alpha-beta search");
    println!("  mcts[:iterations]     - Monte Carlo tree search");
    println!();
    println!("Options:");
    println!("  --config FILE         - load settings from a TOML file");
    println!("  --depth D             - default minimax depth");
    println!("  --iterations N        - default MCTS iteration budget");
    println!("  --max-moves N         - plies before the game is drawn");
    println!("  --quiet               - suppress board output");
    println!();
    println!("Examples:");
    println!("  arena --white manual --black mcts:50");
    println!("  arena --white minimax:4 --black random --quiet");
}

fn parse_args(config: &mut ArenaConfig, args: &[String]) -> Result<()> {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    *config = ArenaConfig::load(Path::new(&args[i + 1]))?;
                    i += 1;
                }
            }
            "--white" | "-w" => {
                if i + 1 < args.len() {
                    config.white = args[i + 1].clone();
                    i += 1;
                }
            }
            "--black" | "-b" => {
                if i + 1 < args.len() {
                    config.black = args[i + 1].clone();
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.minimax_depth = args[i + 1].parse().unwrap_or(config.minimax_depth);
                    i += 1;
                }
            }
            "--iterations" | "-i" => {
                if i + 1 < args.len() {
                    config.mcts_iterations =
                        args[i + 1].parse().unwrap_or(config.mcts_iterations);
                    i += 1;
                }
            }
            "--max-moves" | "-m" => {
                if i + 1 < args.len() {
                    config.max_moves = args[i + 1].parse().unwrap_or(config.max_moves);
                    i += 1;
                }
            }
            "--quiet" | "-q" => config.verbose = false,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = ArenaConfig::default();
    parse_args(&mut config, &args)?;

    println!("=== {} (white) vs {} (black) ===", config.white, config.black);

    let white = create_player(&config.white, &config)?;
    let black = create_player(&config.black, &config)?;

    let mut game = Game::new(white, black, &config);
    game.run()?;
    Ok(())
}
