//! Line-based console play.
//!
//! The session prints the board, prompts the side to move for a house number
//! (1-based) or `q`, and keeps prompting until the game ends or the player
//! quits. End of input counts as quitting.
//!
//! ## Example
//!
//! ```ignore
//! use kalah::console::Console;
//! use kalah::game::Game;
//!
//! let game = Game::new(Default::default())?;
//! Console::new(game).run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::board::Side;
use crate::constants::{MIN_HOUSE_NUMBER, QUIT_COMMAND};
use crate::display::BoardView;
use crate::game::{Game, GameResult, MoveError, Winner};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// 1-based house number, already range-checked.
    House(usize),
}

/// Parse a line typed by a player. `None` for anything that is neither a
/// quit command nor a house number in `1..=max_house`.
pub fn parse_command(line: &str, max_house: usize) -> Option<Command> {
    let line = line.trim();
    if line == QUIT_COMMAND {
        return Some(Command::Quit);
    }
    match line.parse::<usize>() {
        Ok(n) if (MIN_HOUSE_NUMBER..=max_house).contains(&n) => Some(Command::House(n)),
        _ => None,
    }
}

/// How a console session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player typed `q` or input ran out.
    Quit,
    /// The game was played to the end.
    Finished(GameResult),
}

/// Interactive session driving one [`Game`].
pub struct Console {
    game: Game,
}

impl Console {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the prompt loop until the game ends or the player quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<SessionEnd> {
        let mut lines = input.lines();
        let max_house = self.game.board().houses_per_side();

        loop {
            if self.game.is_game_over() {
                self.print_board(&mut output)?;
                writeln!(output, "Game over")?;
                self.print_board(&mut output)?;
                break;
            }

            self.print_board(&mut output)?;
            write!(
                output,
                "Player {}'s turn - Specify house number or '{QUIT_COMMAND}' to quit: ",
                self.game.current_player().name()
            )?;
            output.flush().context("failed to flush prompt")?;

            let line = match lines.next() {
                Some(line) => line.context("failed to read player input")?,
                None => {
                    debug!("input closed");
                    // The prompt line was never terminated.
                    writeln!(output)?;
                    return self.quit(&mut output);
                }
            };

            match parse_command(&line, max_house) {
                Some(Command::Quit) => return self.quit(&mut output),
                Some(Command::House(number)) => match self.game.make_move(number - 1) {
                    Ok(_) => {}
                    Err(MoveError::EmptyHouse(_)) => {
                        writeln!(output, "House is empty. Move again.")?;
                    }
                    Err(err) => {
                        writeln!(output, "{err}")?;
                    }
                },
                None => {
                    writeln!(
                        output,
                        "Invalid input. Please enter a house number between {MIN_HOUSE_NUMBER} and {max_house}, or '{QUIT_COMMAND}' to quit."
                    )?;
                }
            }
        }

        let result = self.game.end_game();
        print_result(&mut output, &result)?;
        info!(?result, "game finished");
        Ok(SessionEnd::Finished(result))
    }

    fn quit<W: Write>(&self, output: &mut W) -> Result<SessionEnd> {
        writeln!(output, "Game over")?;
        self.print_board(output)?;
        info!("game abandoned");
        Ok(SessionEnd::Quit)
    }

    fn print_board<W: Write>(&self, output: &mut W) -> Result<()> {
        let view = BoardView::new(self.game.board(), self.game.config().direction);
        write!(output, "{view}").context("failed to write board")?;
        Ok(())
    }
}

fn print_result<W: Write>(output: &mut W, result: &GameResult) -> Result<()> {
    for side in Side::ALL {
        writeln!(output, "\tplayer {}: {}", side.index() + 1, result.scores[side.index()])?;
    }
    match result.winner {
        Winner::Side(side) => writeln!(output, "Player {} wins!", side.index() + 1)?,
        Winner::Tie => writeln!(output, "A tie!")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, GameConfig};

    fn run_session(config: GameConfig, input: &str) -> (SessionEnd, String, Console) {
        let mut console = Console::new(Game::new(config).unwrap());
        let mut out = Vec::new();
        let end = console.run(input.as_bytes(), &mut out).unwrap();
        (end, String::from_utf8(out).unwrap(), console)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("q", 5), Some(Command::Quit));
        assert_eq!(parse_command("  q \n", 5), Some(Command::Quit));
        assert_eq!(parse_command("1", 5), Some(Command::House(1)));
        assert_eq!(parse_command(" 5 ", 5), Some(Command::House(5)));
        assert_eq!(parse_command("0", 5), None);
        assert_eq!(parse_command("6", 5), None);
        assert_eq!(parse_command("-1", 5), None);
        assert_eq!(parse_command("abc", 5), None);
        assert_eq!(parse_command("", 5), None);
        assert_eq!(parse_command("Q", 5), None);
    }

    #[test]
    fn test_quit_immediately() {
        let (end, out, console) = run_session(GameConfig::default(), "q\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("Player P1's turn - Specify house number or 'q' to quit: "));
        assert!(out.contains("to quit: Game over\n"));
        assert!(!out.contains("wins"));
        assert!(!console.game().is_finished());
    }

    #[test]
    fn test_end_of_input_is_quit() {
        let (end, out, _) = run_session(GameConfig::default(), "1\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("to quit: \nGame over\n"));
    }

    #[test]
    fn test_zero_seed_game_ends_before_first_prompt() {
        let config = GameConfig::new(5, 0, Direction::Anticlockwise);
        let (end, out, console) = run_session(config, "1\n2\n3\n");
        let result = match end {
            SessionEnd::Finished(result) => result,
            SessionEnd::Quit => panic!("expected the game to finish"),
        };
        assert_eq!(result.scores, [0, 0]);
        assert!(!out.contains("turn - Specify house number"));
        assert!(!out.contains("House is empty"));
        assert!(out.contains("Game over\n"));
        assert!(out.ends_with("A tie!\n"));
        assert!(console.game().is_finished());
    }

    #[test]
    fn test_invalid_and_empty_house_reprompt() {
        let (end, out, console) = run_session(GameConfig::default(), "x\n9\n1\n1\n1\nq\n");
        assert_eq!(end, SessionEnd::Quit);
        let invalid = "Invalid input. Please enter a house number between 1 and 5, or 'q' to quit.";
        assert_eq!(out.matches(invalid).count(), 2);
        // P1 plays house 1, P2 plays house 1, then P1's house 1 is empty.
        assert_eq!(out.matches("House is empty. Move again.").count(), 1);
        assert_eq!(console.game().current_side(), Side::One);
    }

    #[test]
    fn test_game_played_to_the_end() {
        // One house each: P1 sows into the store, keeps the turn, and has no
        // seeds left.
        let config = GameConfig::new(1, 1, Direction::Clockwise);
        let (end, out, _) = run_session(config, "1\n");
        let result = match end {
            SessionEnd::Finished(result) => result,
            SessionEnd::Quit => panic!("expected the game to finish"),
        };
        assert_eq!(result.scores, [1, 1]);
        assert!(out.contains("Game over"));
        assert!(out.contains("\tplayer 1: 1\n\tplayer 2: 1\nA tie!\n"));
    }
}
