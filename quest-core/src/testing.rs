//! Testing utilities for Detective Quest.
//!
//! This module provides tools for integration testing:
//! - `ScriptedInput` to feed the text interface a fixed list of lines
//! - `TestHarness` for scripted exploration and accusation
//! - Assertion helpers for verifying session state

use crate::case::CaseFile;
use crate::explorer::Step;
use crate::headless::{HeadlessGame, PlayerInput};
use crate::session::{GameSession, SessionConfig, SessionError, TurnError};
use crate::verdict::Judgment;
use std::collections::VecDeque;
use std::io;

/// Player input that replays a fixed list of lines, then reports end of
/// input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Run a scripted game through the text interface and capture the output.
pub fn play_transcript<S: Into<String>>(
    config: SessionConfig,
    lines: impl IntoIterator<Item = S>,
) -> Result<(Judgment, String), SessionError> {
    let mut game = HeadlessGame::new(config, ScriptedInput::new(lines), Vec::<u8>::new())?;
    let judgment = game.run()?;
    let output = String::from_utf8_lossy(&game.into_output()).into_owned();
    Ok((judgment, output))
}

/// Test harness for running scripted scenarios against a session.
pub struct TestHarness {
    pub session: GameSession,
    /// Results of every command, in order.
    pub steps: Vec<Result<Step, TurnError>>,
}

impl TestHarness {
    /// A harness on the reference mansion.
    pub fn new() -> Self {
        Self::with_case(CaseFile::mansion())
    }

    /// A harness on a custom case.
    ///
    /// # Panics
    ///
    /// Panics if the case is invalid.
    pub fn with_case(case: CaseFile) -> Self {
        let session = GameSession::new(SessionConfig::new().with_case(case))
            .expect("test case should be valid");
        Self {
            session,
            steps: Vec::new(),
        }
    }

    /// Send one line of input.
    pub fn input(&mut self, line: &str) -> &Result<Step, TurnError> {
        let step = self.session.player_action(line);
        self.steps.push(step);
        &self.steps[self.steps.len() - 1]
    }

    /// Send several lines of input.
    pub fn script(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.input(line);
        }
        self
    }

    /// Accuse a suspect.
    pub fn accuse(&self, suspect: &str) -> Judgment {
        self.session.accuse(suspect)
    }

    /// Collected clues in ascending order.
    pub fn clues(&self) -> Vec<&str> {
        self.session.collected_clues()
    }

    /// Number of commands that were rejected.
    pub fn rejections(&self) -> usize {
        self.steps.iter().filter(|s| s.is_err()).count()
    }

    /// Assert the player stands in the named room.
    pub fn assert_in_room(&self, expected: &str) {
        assert_eq!(
            self.session.current_room(),
            Some(expected),
            "expected to be in {expected}"
        );
    }

    /// Assert exploration has ended.
    pub fn assert_stopped(&self) {
        assert!(!self.session.is_exploring(), "expected exploration to be over");
    }

    /// Assert the ledger holds exactly these clues, in order.
    pub fn assert_clues(&self, expected: &[&str]) {
        assert_eq!(self.clues(), expected, "collected clues mismatch");
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
