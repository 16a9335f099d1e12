//! Case files: the fixed content a game session is played with.
//!
//! A `CaseFile` describes the mansion layout and which suspect each clue
//! implicates. It is plain immutable data handed to the constructors of
//! `RoomTree` and `ClueIndex`, so several independent sessions can be
//! built from the same case.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Bucket count of the reference suspect index.
pub const DEFAULT_BUCKETS: usize = 11;

/// Errors found while validating or loading a case file.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Room names must not be empty")]
    EmptyRoomName,
    #[error("Room '{0}' appears more than once in the layout")]
    DuplicateRoom(String),
    #[error("The suspect index needs at least one bucket")]
    NoBuckets,
    #[error("Invalid case file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Description of one room and the rooms reachable from it.
///
/// The nesting itself is the topology: every room has exactly one parent
/// (the `RoomSpec` it is nested in), so a layout can never contain a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<RoomSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<RoomSpec>>,
}

impl RoomSpec {
    /// Create a room with no clue and no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clue: None,
            left: None,
            right: None,
        }
    }

    /// Set the clue found in this room.
    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Set the room reached by going left.
    pub fn with_left(mut self, room: RoomSpec) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Set the room reached by going right.
    pub fn with_right(mut self, room: RoomSpec) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The clue text, treating an empty string as "no clue".
    pub fn clue_text(&self) -> Option<&str> {
        self.clue.as_deref().filter(|c| !c.is_empty())
    }

    /// Number of rooms in this subtree.
    pub fn room_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.room_count())
            + self.right.as_ref().map_or(0, |r| r.room_count())
    }

    fn collect_names<'a>(&'a self, seen: &mut HashSet<&'a str>) -> Result<(), LayoutError> {
        if self.name.is_empty() {
            return Err(LayoutError::EmptyRoomName);
        }
        if !seen.insert(self.name.as_str()) {
            return Err(LayoutError::DuplicateRoom(self.name.clone()));
        }
        for child in [&self.left, &self.right].into_iter().flatten() {
            child.collect_names(seen)?;
        }
        Ok(())
    }
}

/// A clue and the suspect it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceLink {
    pub clue: String,
    pub suspect: String,
}

impl EvidenceLink {
    pub fn new(clue: impl Into<String>, suspect: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            suspect: suspect.into(),
        }
    }
}

fn default_buckets() -> usize {
    DEFAULT_BUCKETS
}

/// Everything needed to set up a game: layout, evidence and index shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub title: String,
    pub mansion: RoomSpec,
    /// Clue to suspect pairs, in insertion order.
    #[serde(default)]
    pub evidence: Vec<EvidenceLink>,
    #[serde(default = "default_buckets")]
    pub buckets: usize,
}

impl CaseFile {
    /// Create a case with no evidence and the default bucket count.
    pub fn new(title: impl Into<String>, mansion: RoomSpec) -> Self {
        Self {
            title: title.into(),
            mansion,
            evidence: Vec::new(),
            buckets: DEFAULT_BUCKETS,
        }
    }

    /// Register a clue as implicating a suspect.
    pub fn with_evidence(mut self, clue: impl Into<String>, suspect: impl Into<String>) -> Self {
        self.evidence.push(EvidenceLink::new(clue, suspect));
        self
    }

    /// Set the number of buckets used by the suspect index.
    pub fn with_buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }

    /// The reference mansion.
    ///
    /// ```text
    ///                Hall de Entrada
    ///               /               \
    ///       Sala de Estar          Corredor
    ///        /        \            /      \
    ///   Biblioteca  Sala de Jantar Cozinha  Jardim
    /// ```
    pub fn mansion() -> Self {
        let sala_de_estar = RoomSpec::new("Sala de Estar")
            .with_clue("Relogio quebrado")
            .with_left(RoomSpec::new("Biblioteca").with_clue("Livro de venenos"))
            .with_right(RoomSpec::new("Sala de Jantar").with_clue("Taca com residuo de veneno"));
        let corredor = RoomSpec::new("Corredor")
            .with_clue("Pegadas recentes no tapete")
            .with_left(RoomSpec::new("Cozinha").with_clue("Faca desaparecida"))
            .with_right(RoomSpec::new("Jardim").with_clue("Pegadas na lama"));
        let hall = RoomSpec::new("Hall de Entrada")
            .with_clue("Luvas sujas de sangue")
            .with_left(sala_de_estar)
            .with_right(corredor);

        Self::new("Detective Quest", hall)
            .with_evidence("Luvas sujas de sangue", "Sr Mostarda")
            .with_evidence("Relogio quebrado", "Sra Branca")
            .with_evidence("Livro de venenos", "Profa Violeta")
            .with_evidence("Taca com residuo de veneno", "Profa Violeta")
            .with_evidence("Pegadas recentes no tapete", "Sra Branca")
            .with_evidence("Faca desaparecida", "Sr Mostarda")
            .with_evidence("Pegadas na lama", "Sra Branca")
    }

    /// Load a case file from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let case: CaseFile = serde_json::from_str(json)?;
        case.validate()?;
        Ok(case)
    }

    /// Check that every room has a unique, non-empty name and that the
    /// index has somewhere to put its entries.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.buckets == 0 {
            return Err(LayoutError::NoBuckets);
        }
        let mut seen = HashSet::new();
        self.mansion.collect_names(&mut seen)
    }

    /// Iterate over the evidence as `(clue, suspect)` pairs.
    pub fn evidence_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.evidence
            .iter()
            .map(|link| (link.clue.as_str(), link.suspect.as_str()))
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::mansion()
    }
}
