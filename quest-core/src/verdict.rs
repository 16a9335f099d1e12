//! Judging an accusation against the collected evidence.

use crate::index::ClueIndex;
use crate::ledger::ClueLedger;
use serde::{Deserialize, Serialize};

/// Outcome of an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No clue was collected, so nobody can be accused.
    NoBasis,
    /// None of the collected clues point to the accused.
    Unfounded,
    /// Exactly one collected clue points to the accused.
    Weak,
    /// Two or more collected clues point to the accused.
    Sufficient,
}

impl Verdict {
    /// Classify a tally of corroborating clues.
    pub fn classify(tally: usize) -> Self {
        match tally {
            0 => Verdict::Unfounded,
            1 => Verdict::Weak,
            _ => Verdict::Sufficient,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::NoBasis => "No clue was collected. You have no basis to accuse anyone!",
            Verdict::Unfounded => "No collected clue points to this suspect. The accusation is unfounded!",
            Verdict::Weak => "Only ONE clue points to this suspect. The case is weak.",
            Verdict::Sufficient => "There is enough evidence. Your accusation stands!",
        }
    }
}

/// A judged accusation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    /// The accused suspect, `None` when there was no basis to accuse.
    pub accused: Option<String>,
    pub tally: usize,
    pub verdict: Verdict,
}

impl Judgment {
    /// The judgment when nothing was collected.
    pub fn no_basis() -> Self {
        Self {
            accused: None,
            tally: 0,
            verdict: Verdict::NoBasis,
        }
    }
}

/// Count the collected clues that point to `accused`.
///
/// Names are compared exactly, case included. Clues with no registered
/// suspect are skipped.
pub fn tally(ledger: &ClueLedger, index: &ClueIndex, accused: &str) -> usize {
    ledger
        .in_order()
        .filter(|clue| index.lookup(clue) == Some(accused))
        .count()
}

/// Judge an accusation.
pub fn judge(ledger: &ClueLedger, index: &ClueIndex, accused: &str) -> Judgment {
    if ledger.is_empty() {
        return Judgment::no_basis();
    }
    let tally = tally(ledger, index, accused);
    let verdict = Verdict::classify(tally);
    log::info!("accused '{accused}': {tally} corroborating clue(s), verdict {verdict:?}");
    Judgment {
        accused: Some(accused.to_string()),
        tally,
        verdict,
    }
}
