//! Console move selector

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use isolation_core::{Engine, GridState, Move, TimeLeft};

/// Asks a person for a move by index into the legal move list.
///
/// Re-prompts on unparsable or out-of-range input. End of input or an IO
/// error yields no move, which the driver treats as a forfeit.
pub struct HumanEngine<R, W> {
    input: R,
    output: W,
}

impl HumanEngine<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanEngine<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, legal_moves: &[Move]) -> io::Result<Option<Move>> {
        let listing: Vec<String> = legal_moves
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("[{i}] {mv}"))
            .collect();
        writeln!(self.output, "{}", listing.join("\t"))?;

        let mut line = String::new();
        loop {
            write!(self.output, "Select move index: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(index) if index < legal_moves.len() => return Ok(Some(legal_moves[index])),
                Ok(_) => writeln!(self.output, "Illegal move! Try again.")?,
                Err(_) => writeln!(self.output, "Invalid index! Try again.")?,
            }
        }
    }
}

impl<R, W> Engine for HumanEngine<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn select_move(
        &mut self,
        state: &GridState,
        legal_moves: &[Move],
        _time_left: &dyn TimeLeft,
    ) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }
        if writeln!(self.output, "{state}").is_err() {
            return None;
        }
        match self.prompt(legal_moves) {
            Ok(choice) => choice,
            Err(e) => {
                tracing::warn!(error = %e, "console input failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolation_core::Unlimited;
    use std::io::Cursor;

    fn opened() -> GridState {
        GridState::default()
            .forecast(Move::new(0, 0))
            .forecast(Move::new(4, 4))
    }

    #[test]
    fn test_reprompts_until_valid_index() {
        let state = opened();
        let legal = state.legal_moves();
        let input = Cursor::new("abc\n99\n2\n");
        let mut human = HumanEngine::new(input, Vec::new());

        let mv = human.select_move(&state, &legal, &Unlimited);
        assert_eq!(mv, Some(legal[2]));

        let transcript = String::from_utf8(human.output).unwrap();
        assert!(transcript.contains("Invalid index! Try again."));
        assert!(transcript.contains("Illegal move! Try again."));
        assert!(transcript.contains("[0] "));
    }

    #[test]
    fn test_end_of_input_produces_no_move() {
        let state = opened();
        let legal = state.legal_moves();
        let mut human = HumanEngine::new(Cursor::new(""), Vec::new());
        assert_eq!(human.select_move(&state, &legal, &Unlimited), None);
    }
}
