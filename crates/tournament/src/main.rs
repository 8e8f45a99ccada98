//! Tournament CLI
//!
//! Play single games or run matches between Isolation engines.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tournament::{create_engine, MatchConfig, MatchRunner, TournamentResults};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament")]
#[command(version, about = "Play Isolation between engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and show the final board
    Play {
        /// Engine moving first: random, minimax[:D], alphabeta[:D], book[:D], human
        first: String,
        /// Engine moving second
        second: String,
        #[command(flatten)]
        game: GameArgs,
        /// Do not render the board before every move
        #[arg(long)]
        quiet: bool,
    },

    /// Play a series of games and report the tally
    Match {
        engine1: String,
        engine2: String,
        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,
        /// Write the results as JSON
        #[arg(long)]
        results: Option<PathBuf>,
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Args)]
struct GameArgs {
    /// TOML file with match settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Milliseconds per move (human players need a generous budget)
    #[arg(long)]
    time_ms: Option<u64>,
    /// Default search depth for engines without an explicit `:D`
    #[arg(short, long)]
    depth: Option<u32>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
}

impl GameArgs {
    fn into_config(self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => MatchConfig::default(),
        };
        if let Some(ms) = self.time_ms {
            config.time_per_move_ms = ms;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        Ok(config)
    }
}

fn play(first: &str, second: &str, game: GameArgs, quiet: bool) -> Result<()> {
    let mut config = game.into_config()?;
    config.verbose = !quiet;

    let mut engine1 = create_engine(first, config.depth)?;
    let mut engine2 = create_engine(second, config.depth)?;

    let runner = MatchRunner::new(config);
    let record = runner.play_game(engine1.as_mut(), engine2.as_mut())?;

    println!("{}", record.final_board);
    println!(
        "{} ({}) wins after {} moves: {:?}",
        record.winner,
        record.winner_name(),
        record.moves.len(),
        record.outcome
    );
    Ok(())
}

fn run_match(
    engine1_spec: &str,
    engine2_spec: &str,
    games: Option<u32>,
    results_path: Option<PathBuf>,
    game: GameArgs,
) -> Result<()> {
    let mut config = game.into_config()?;
    if let Some(n) = games {
        config.num_games = n;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Time: {} ms/move",
        config.num_games, config.depth, config.time_per_move_ms
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, config.depth)?;
    let mut engine2 = create_engine(engine2_spec, config.depth)?;

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    let mut results = TournamentResults::new(
        &format!("{} vs {}", engine1_spec, engine2_spec),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Some(path) = results_path {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            first,
            second,
            game,
            quiet,
        } => play(&first, &second, game, quiet),
        Commands::Match {
            engine1,
            engine2,
            games,
            results,
            game,
        } => run_match(&engine1, &engine2, games, results, game),
    }
}
