//! Suspect index: which suspect each clue points to.
//!
//! A small hash table with separate chaining. The bucket of a clue is the
//! sum of its bytes modulo the bucket count, and new entries are pushed to
//! the front of their chain. If the same clue is registered twice, the
//! later mapping shadows the earlier one.

use crate::case::CaseFile;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("The suspect index needs at least one bucket")]
    NoBuckets,
}

#[derive(Debug)]
struct Entry {
    clue: String,
    suspect: String,
    next: Option<Box<Entry>>,
}

/// Bucket of `clue` in a table of `buckets` chains.
pub fn bucket_of(clue: &str, buckets: usize) -> usize {
    let sum = clue.bytes().fold(0u32, |acc, b| acc.wrapping_add(u32::from(b)));
    sum as usize % buckets
}

/// Read-only map from clue text to suspect name.
#[derive(Debug)]
pub struct ClueIndex {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
}

impl ClueIndex {
    /// Build an index from `(clue, suspect)` pairs, in order.
    pub fn build<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
        buckets: usize,
    ) -> Result<Self, IndexError> {
        if buckets == 0 {
            return Err(IndexError::NoBuckets);
        }
        let mut index = Self {
            buckets: (0..buckets).map(|_| None).collect(),
            len: 0,
        };
        for (clue, suspect) in pairs {
            index.prepend(clue, suspect);
        }
        Ok(index)
    }

    /// Build the index for a case file.
    pub fn from_case(case: &CaseFile) -> Result<Self, IndexError> {
        Self::build(case.evidence_pairs(), case.buckets)
    }

    fn prepend(&mut self, clue: &str, suspect: &str) {
        let bucket = bucket_of(clue, self.buckets.len());
        let slot = &mut self.buckets[bucket];
        let entry = Box::new(Entry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: slot.take(),
        });
        *slot = Some(entry);
        self.len += 1;
    }

    /// The suspect a clue points to, or `None` if the clue was never
    /// registered.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.chain(bucket_of(clue, self.buckets.len()))
            .find(|entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    fn chain(&self, bucket: usize) -> impl Iterator<Item = &Entry> {
        std::iter::successors(self.buckets[bucket].as_deref(), |entry| entry.next.as_deref())
    }

    /// Clues stored in one bucket, most recently inserted first.
    #[cfg(test)]
    fn bucket_clues(&self, bucket: usize) -> Vec<&str> {
        self.chain(bucket).map(|entry| entry.clue.as_str()).collect()
    }

    /// Distinct suspect names, in ascending order.
    pub fn suspects(&self) -> Vec<&str> {
        (0..self.buckets.len())
            .flat_map(|bucket| self.chain(bucket))
            .map(|entry| entry.suspect.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries, counting shadowed ones.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ClueIndex {
        ClueIndex::from_case(&CaseFile::mansion()).unwrap()
    }

    #[test]
    fn test_bucket_of_sums_bytes() {
        // 'a' + 'b' = 97 + 98 = 195, 195 % 11 = 8
        assert_eq!(bucket_of("ab", 11), 8);
        assert_eq!(bucket_of("", 11), 0);
        assert_eq!(bucket_of("ba", 11), bucket_of("ab", 11));
    }

    #[test]
    fn test_lookup_reference_evidence() {
        let index = reference();
        for link in &CaseFile::mansion().evidence {
            assert_eq!(index.lookup(&link.clue), Some(link.suspect.as_str()));
        }
        assert_eq!(index.len(), 7);
        assert_eq!(index.bucket_count(), 11);
    }

    #[test]
    fn test_lookup_unknown_clue() {
        let index = reference();
        assert_eq!(index.lookup("Chave enferrujada"), None);
        assert_eq!(index.lookup("livro de venenos"), None);
        assert_eq!(index.lookup(""), None);
    }

    #[test]
    fn test_later_insert_shadows_earlier() {
        let index = ClueIndex::build(
            [("Faca desaparecida", "Sr Mostarda"), ("Faca desaparecida", "Sra Branca")],
            11,
        )
        .unwrap();
        assert_eq!(index.lookup("Faca desaparecida"), Some("Sra Branca"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_collisions_are_chained_newest_first() {
        // Anagrams have equal byte sums and land in the same bucket.
        let index = ClueIndex::build([("ab", "X"), ("ba", "Y")], 11).unwrap();
        let bucket = bucket_of("ab", 11);
        assert_eq!(index.bucket_clues(bucket), vec!["ba", "ab"]);
        assert_eq!(index.lookup("ab"), Some("X"));
        assert_eq!(index.lookup("ba"), Some("Y"));
    }

    #[test]
    fn test_single_bucket_still_works() {
        let index = ClueIndex::build([("one", "A"), ("two", "B")], 1).unwrap();
        assert_eq!(index.lookup("one"), Some("A"));
        assert_eq!(index.lookup("two"), Some("B"));
    }

    #[test]
    fn test_zero_buckets_rejected() {
        assert!(matches!(ClueIndex::build(Vec::<(&str, &str)>::new(), 0), Err(IndexError::NoBuckets)));
    }

    #[test]
    fn test_suspects_are_distinct_and_sorted() {
        assert_eq!(reference().suspects(), vec!["Profa Violeta", "Sr Mostarda", "Sra Branca"]);
    }
}
