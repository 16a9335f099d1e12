//! Line-oriented text interface for playing a session.
//!
//! This drives a `GameSession` with lines read from a `PlayerInput` and
//! writes everything the player sees to any `std::io::Write`. The binary
//! plugs in stdin and stdout; tests plug in scripted lines and a buffer.
//!
//! # Example
//!
//! ```ignore
//! use quest_core::headless::{self, LineInput};
//! use quest_core::SessionConfig;
//!
//! let input = LineInput::new("e\ne\ns\nProfa Violeta\n".as_bytes());
//! let judgment = headless::run(SessionConfig::new(), input, std::io::stdout())?;
//! println!("{:?}", judgment.verdict);
//! ```

use crate::explorer::{Arrival, ClueStatus, MoveError, Step};
use crate::session::{GameSession, SessionConfig, SessionError, TurnError};
use crate::verdict::Judgment;
use crate::world::{Direction, RoomView};
use std::io::{self, BufRead, Write};

/// Source of player input, one line at a time.
pub trait PlayerInput {
    /// The next line without its line terminator, or `None` at end of input.
    ///
    /// Only read failures are errors; malformed text is handed on as a line.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// `PlayerInput` over any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PlayerInput for LineInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Bytes that are not UTF-8 become U+FFFD, so they never match a
        // command or a suspect name.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// A game session wired to an input and an output.
pub struct HeadlessGame<I, W> {
    session: GameSession,
    input: I,
    output: W,
}

impl<I: PlayerInput, W: Write> HeadlessGame<I, W> {
    pub fn new(config: SessionConfig, input: I, output: W) -> Result<Self, SessionError> {
        Ok(Self {
            session: GameSession::new(config)?,
            input,
            output,
        })
    }

    /// Play the whole game: explore until the player stops, then judge.
    pub fn run(&mut self) -> Result<Judgment, SessionError> {
        self.explore()?;
        let judgment = self.judge()?;
        writeln!(self.output, "\nSession over. End of {}.", self.session.title())?;
        self.output.flush()?;
        Ok(judgment)
    }

    /// Exploration phase. Ends on `s` or at end of input.
    pub fn explore(&mut self) -> Result<(), SessionError> {
        writeln!(
            self.output,
            "=== {}: EXPLORING THE MANSION ===",
            self.session.title().to_uppercase()
        )?;
        let opening = self.session.last_arrival().clone();
        self.show_arrival(&opening)?;

        while self.session.is_exploring() {
            let Some(line) = self.input.next_line()? else {
                log::debug!("end of input while exploring, stopping");
                self.session.stop().map_err(io::Error::other)?;
                break;
            };

            match self.session.player_action(&line) {
                Ok(Step::Arrived(arrival)) => self.show_arrival(&arrival)?,
                Ok(Step::Stopped) => {
                    writeln!(self.output, "\nYou decided to end the exploration of the mansion.")?;
                }
                Err(err) => {
                    writeln!(self.output, "{}", rejection(&err))?;
                    self.show_current()?;
                }
            }
        }

        writeln!(self.output, "\nExploration finished.")?;
        Ok(())
    }

    /// Judgment phase. Asks for a suspect only if a clue was collected.
    pub fn judge(&mut self) -> Result<Judgment, SessionError> {
        if !self.session.can_accuse() {
            let judgment = Judgment::no_basis();
            writeln!(self.output, "\n{}", judgment.verdict.message())?;
            return Ok(judgment);
        }

        writeln!(self.output, "\n=== FINAL PHASE: JUDGMENT ===")?;
        writeln!(self.output, "Collected clues (alphabetical order):")?;
        for clue in self.session.ledger() {
            writeln!(self.output, "- {clue}")?;
        }

        writeln!(
            self.output,
            "\nSuspects (examples): {}",
            self.session.suspects().join(", ")
        )?;
        write!(self.output, "Enter the EXACT name of the suspect you accuse: ")?;
        self.output.flush()?;

        let accused = self.input.next_line()?.unwrap_or_default();
        let judgment = self.session.accuse(&accused);

        writeln!(
            self.output,
            "\nClues pointing to '{}': {}",
            accused, judgment.tally
        )?;
        writeln!(self.output, "Verdict: {}", judgment.verdict.message())?;
        Ok(judgment)
    }

    fn show_arrival(&mut self, arrival: &Arrival) -> io::Result<()> {
        if let ClueStatus::Found(clue) = &arrival.clue {
            writeln!(self.output, "\n>> CLUE COLLECTED: \"{clue}\"")?;
        }
        render_room(&mut self.output, &self.session.view(arrival), &arrival.clue)
    }

    /// Show the current room again after a rejected command.
    fn show_current(&mut self) -> io::Result<()> {
        let arrival = self.session.last_arrival();
        let view = self.session.view(arrival);
        let status = if view.collected {
            ClueStatus::AlreadyCollected
        } else {
            ClueStatus::None
        };
        render_room(&mut self.output, &view, &status)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Run a full game with the given input and output.
pub fn run<I: PlayerInput, W: Write>(
    config: SessionConfig,
    input: I,
    output: W,
) -> Result<Judgment, SessionError> {
    HeadlessGame::new(config, input, output)?.run()
}

fn rejection(err: &TurnError) -> String {
    match err {
        TurnError::Command(_) => "Invalid option. Try again.".to_string(),
        TurnError::Move(MoveError::NoPath { direction, .. }) => {
            format!("There is no room to the {direction} from here. Try another way.")
        }
        TurnError::Move(other) => other.to_string(),
    }
}

fn render_room(out: &mut impl Write, view: &RoomView<'_>, status: &ClueStatus) -> io::Result<()> {
    writeln!(out, "\nYou are in: {}", view.name)?;
    match status {
        ClueStatus::Found(clue) => writeln!(out, "Clue found in this room: \"{clue}\"")?,
        ClueStatus::AlreadyCollected => writeln!(out, "You already collected the clue in this room.")?,
        ClueStatus::None => writeln!(out, "There is no clue in this room.")?,
    }

    writeln!(out, "Available paths:")?;
    for (key, direction, room) in [
        ('e', Direction::Left, view.left),
        ('d', Direction::Right, view.right),
    ] {
        let label = match direction {
            Direction::Left => "Left ",
            Direction::Right => "Right",
        };
        writeln!(out, "- ({key}) {label} -> {}", room.unwrap_or("[no path]"))?;
    }
    writeln!(out, "- (s) Stop exploring")?;
    write!(out, "Choice (e/d/s): ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::CommandError;
    use crate::verdict::Verdict;

    #[test]
    fn test_line_input_strips_terminators() {
        let mut input = LineInput::new("e\r\nSr Mostarda \n\nlast".as_bytes());
        assert_eq!(input.next_line().unwrap().as_deref(), Some("e"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("Sr Mostarda "));
        assert_eq!(input.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_line_input_decodes_invalid_utf8_lossily() {
        let mut input = LineInput::new(&b"\xff\r\nSra Bran\xe7a\n"[..]);
        assert_eq!(input.next_line().unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("Sra Bran\u{FFFD}a"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_command_is_rejected() {
        let input = LineInput::new(&b"\xff\ne\ns\nSra Branca\n"[..]);
        let mut game = HeadlessGame::new(SessionConfig::new(), input, Vec::<u8>::new()).unwrap();
        let judgment = game.run().unwrap();
        let output = String::from_utf8(game.into_output()).unwrap();

        assert!(output.contains("Invalid option. Try again."));
        assert!(output.contains("You are in: Sala de Estar"));
        assert_eq!(judgment.tally, 1);
        assert_eq!(judgment.verdict, Verdict::Weak);
        assert!(output.contains("Session over. End of Detective Quest."));
    }

    #[test]
    fn test_invalid_utf8_accusation_is_unfounded() {
        let input = LineInput::new(&b"s\nSra Bran\xe7a\n"[..]);
        let judgment = run(SessionConfig::new(), input, io::sink()).unwrap();
        assert_eq!(judgment.accused.as_deref(), Some("Sra Bran\u{FFFD}a"));
        assert_eq!(judgment.tally, 0);
        assert_eq!(judgment.verdict, Verdict::Unfounded);
    }

    #[test]
    fn test_render_room_lists_exits() {
        let view = RoomView {
            name: "Corredor",
            clue: Some("Pegadas recentes no tapete"),
            collected: true,
            left: Some("Cozinha"),
            right: None,
        };
        let mut out = Vec::new();
        render_room(&mut out, &view, &ClueStatus::AlreadyCollected).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("You are in: Corredor"));
        assert!(text.contains("You already collected the clue in this room."));
        assert!(text.contains("- (e) Left  -> Cozinha"));
        assert!(text.contains("- (d) Right -> [no path]"));
        assert!(text.ends_with("Choice (e/d/s): "));
    }

    #[test]
    fn test_rejection_messages() {
        let err = TurnError::Move(MoveError::NoPath {
            direction: Direction::Left,
            room: "Jardim".to_string(),
        });
        assert_eq!(rejection(&err), "There is no room to the left from here. Try another way.");
        let err = TurnError::Command(CommandError::Unrecognized("x".to_string()));
        assert_eq!(rejection(&err), "Invalid option. Try again.");
    }
}
