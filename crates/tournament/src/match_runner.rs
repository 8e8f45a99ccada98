//! Match runner for playing games between engines

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use isolation_core::{Engine, GridState, Move, PlayerId, TimeControl, TimeLeft};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TournamentError;
use crate::results::MatchResult;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for search engines
    pub depth: u32,
    /// Time budget per move in milliseconds
    pub time_per_move_ms: u64,
    /// Board width
    pub width: usize,
    /// Board height
    pub height: usize,
    /// Move cap per game (None = number of cells)
    pub max_moves: Option<u32>,
    /// Whether engine1 and engine2 take turns moving first
    pub alternate_first: bool,
    /// Render the board before every move
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            time_per_move_ms: 2000,
            width: 5,
            height: 5,
            max_moves: None,
            alternate_first: true,
            verbose: false,
        }
    }
}

impl MatchConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Clock for one move, started now
    fn move_clock(&self) -> TimeControl {
        TimeControl::with_millis(self.time_per_move_ms)
    }

    fn move_cap(&self) -> u32 {
        self.max_moves
            .unwrap_or_else(|| u32::try_from(self.width * self.height).unwrap_or(u32::MAX))
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The loser had no legal move on their turn
    NoLegalMoves,
    /// The loser's engine produced no move
    NoMoveProduced,
    /// The loser answered after their clock ran out
    Timeout,
    /// The loser answered with a move outside the legal set
    IllegalMove(Move),
    /// The configured move cap was hit; the side to move loses
    MoveCapReached,
}

impl GameOutcome {
    /// Whether the loser forfeited rather than being blocked in.
    pub fn is_forfeit(self) -> bool {
        !matches!(self, GameOutcome::NoLegalMoves)
    }
}

/// Full record of a finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Engine that moved first, then second
    pub engines: [String; 2],
    pub winner: PlayerId,
    pub outcome: GameOutcome,
    /// Moves in the order they were applied
    pub moves: Vec<Move>,
    /// Rendered final board
    pub final_board: String,
}

impl GameRecord {
    pub fn loser(&self) -> PlayerId {
        self.winner.other()
    }

    pub fn winner_name(&self) -> &str {
        &self.engines[self.winner.idx()]
    }
}

/// Runs games and matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, TournamentError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let (record, engine1_seat) = if engine1_first {
                (self.play_game(engine1, engine2)?, PlayerId::One)
            } else {
                (self.play_game(engine2, engine1)?, PlayerId::Two)
            };

            if record.winner == engine1_seat {
                result.wins += 1;
            } else {
                result.losses += 1;
            }

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                winner = record.winner_name(),
                outcome = ?record.outcome,
                plies = record.moves.len(),
                score = %format!("{}-{}", result.wins, result.losses),
                "game finished"
            );
            result.games.push(record);
        }

        Ok(result)
    }

    /// Play a single game; `first` moves as player one.
    pub fn play_game(
        &self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<GameRecord, TournamentError> {
        let mut state = GridState::new(self.config.width, self.config.height)?;
        let engines = [first.name().to_string(), second.name().to_string()];
        let mut moves = Vec::new();
        first.new_game();
        second.new_game();

        let cap = self.config.move_cap();

        loop {
            if self.config.verbose {
                println!("{}", "#".repeat(20));
                print!("{state}");
                println!("{}", "#".repeat(20));
            }

            let active = state.active_player();
            let finish = |outcome: GameOutcome, moves: Vec<Move>, state: &GridState| GameRecord {
                engines: engines.clone(),
                winner: active.other(),
                outcome,
                moves,
                final_board: state.to_string(),
            };

            let legal = state.legal_moves();
            if legal.is_empty() {
                return Ok(finish(GameOutcome::NoLegalMoves, moves, &state));
            }

            if moves.len() as u64 >= u64::from(cap) {
                warn!(cap, "move cap reached");
                return Ok(finish(GameOutcome::MoveCapReached, moves, &state));
            }

            let engine: &mut dyn Engine = match active {
                PlayerId::One => &mut *first,
                PlayerId::Two => &mut *second,
            };
            let clock = self.config.move_clock();
            let choice =
                panic::catch_unwind(AssertUnwindSafe(|| engine.select_move(&state, &legal, &clock)));
            let remaining = clock.remaining_ms();
            let name = &engines[active.idx()];

            if remaining <= 0 {
                warn!(engine = %name, remaining, "ran out of time");
                return Ok(finish(GameOutcome::Timeout, moves, &state));
            }
            let choice = match choice {
                Ok(choice) => choice,
                Err(_) => {
                    warn!(engine = %name, "panicked while selecting a move");
                    None
                }
            };
            let Some(mv) = choice else {
                warn!(engine = %name, "produced no move");
                return Ok(finish(GameOutcome::NoMoveProduced, moves, &state));
            };
            if !legal.contains(&mv) {
                warn!(engine = %name, %mv, "illegal move");
                return Ok(finish(GameOutcome::IllegalMove(mv), moves, &state));
            }

            debug!(engine = %name, %mv, remaining, "move");
            state = state.forecast(mv);
            moves.push(mv);
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> Result<MatchResult, TournamentError> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
