//! Match tallies, tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::{GameRecord, MatchConfig};

/// Result of a match (multiple games), from engine1's perspective.
///
/// Isolation has no draws: every game is a win or a loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    /// Every game in play order
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            games: Vec::new(),
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won by engine1 (0.5 when no games were played)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        self.wins as f64 / total
    }

    /// Games that ended by forfeit (timeout, illegal or missing move)
    pub fn forfeits(&self) -> usize {
        self.games.iter().filter(|g| g.outcome.is_forfeit()).count()
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {}x{} board, {} ms/move\n\n",
            self.config.num_games, self.config.width, self.config.height, self.config.time_per_move_ms
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5} {:>8}\n",
            "Engine 1", "Engine 2", "W", "L", "Forfeit"
        ));
        report.push_str(&"-".repeat(66));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5} {:>8}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.forfeits()
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_runner::GameOutcome;
    use isolation_core::{Move, PlayerId};

    fn record(winner: PlayerId, outcome: GameOutcome) -> GameRecord {
        GameRecord {
            engines: ["a".to_string(), "b".to_string()],
            winner,
            outcome,
            moves: vec![Move::new(0, 0)],
            final_board: String::new(),
        }
    }

    #[test]
    fn test_match_result_score() {
        let mut result = MatchResult::new();
        assert_eq!(result.score(), 0.5);

        result.wins = 3;
        result.losses = 1;
        result.games.push(record(PlayerId::One, GameOutcome::NoLegalMoves));
        result.games.push(record(PlayerId::Two, GameOutcome::Timeout));

        assert_eq!(result.total_games(), 4);
        assert!((result.score() - 0.75).abs() < 1e-9);
        assert_eq!(result.forfeits(), 1);
    }

    #[test]
    fn test_results_round_trip_through_json() {
        let mut results = TournamentResults::new(
            "smoke",
            vec!["a".to_string(), "b".to_string()],
            MatchConfig::default(),
        );
        let mut result = MatchResult::new();
        result.wins = 1;
        result
            .games
            .push(record(PlayerId::One, GameOutcome::IllegalMove(Move::new(4, 4))));
        results.add_match("a", "b", result);

        let path = std::env::temp_dir().join(format!("isolation-results-{}.json", std::process::id()));
        results.save(&path).unwrap();
        let loaded = TournamentResults::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.name, "smoke");
        assert_eq!(loaded.matches.len(), 1);
        assert_eq!(loaded.matches[0].result, results.matches[0].result);
        assert!(loaded.generate_report().contains("a                    vs b"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TournamentResults::load(Path::new("/nonexistent/isolation.json")).unwrap_err();
        assert!(matches!(err, TournamentError::Io { operation: "read", .. }));
    }
}
