//! Chunk data model.
//!
//! A [`Chunk`] is one window of the source text as produced by the chunker.
//! A [`ChunkSet`] is the persisted artifact: the ordered chunk texts plus
//! their count.

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// A contiguous window of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the output sequence, starting at 0.
    pub index: usize,
    /// Character offset of the first character of `text` in the source.
    pub offset: usize,
    pub text: String,
}

impl Chunk {
    /// Length of the chunk in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered chunk texts plus their count.
///
/// Serializes as `{"chunks": [...], "total": N}`. `total` always equals
/// `chunks.len()`: it is derived on construction and checked when a record
/// is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChunkSet")]
pub struct ChunkSet {
    chunks: Vec<String>,
    total: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawChunkSet {
    chunks: Vec<String>,
    total: usize,
}

impl TryFrom<RawChunkSet> for ChunkSet {
    type Error = ChunkError;

    fn try_from(raw: RawChunkSet) -> Result<Self, Self::Error> {
        if raw.total != raw.chunks.len() {
            return Err(ChunkError::TotalMismatch {
                total: raw.total,
                actual: raw.chunks.len(),
            });
        }
        Ok(ChunkSet::from_texts(raw.chunks))
    }
}

impl ChunkSet {
    /// Build a set from chunk texts in document order.
    pub fn from_texts(chunks: Vec<String>) -> Self {
        let total = chunks.len();
        Self { chunks, total }
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn into_chunks(self) -> Vec<String> {
        self.chunks
    }
}

impl From<Vec<Chunk>> for ChunkSet {
    fn from(chunks: Vec<Chunk>) -> Self {
        ChunkSet::from_texts(chunks.into_iter().map(|c| c.text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tracks_chunk_count() {
        let set = ChunkSet::from_texts(vec!["a".into(), "b".into()]);
        assert_eq!(set.total(), 2);
        assert_eq!(set.chunks(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn into_chunks_returns_texts_in_order() {
        let set = ChunkSet::from_texts(vec!["one".into(), "two".into(), "three".into()]);
        assert_eq!(set.into_chunks(), vec!["one", "two", "three"]);
    }

    #[test]
    fn serializes_two_fields_in_order() {
        let set = ChunkSet::from_texts(vec!["alpha".into()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"chunks":["alpha"],"total":1}"#);
    }

    #[test]
    fn deserialize_rejects_mismatched_total() {
        let err = serde_json::from_str::<ChunkSet>(r#"{"chunks":["a"],"total":3}"#).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn deserialize_rejects_extra_fields() {
        let res = serde_json::from_str::<ChunkSet>(r#"{"chunks":[],"total":0,"extra":1}"#);
        assert!(res.is_err());
    }

    #[test]
    fn from_chunks_keeps_order() {
        let chunks = vec![
            Chunk {
                index: 0,
                offset: 0,
                text: "first".into(),
            },
            Chunk {
                index: 1,
                offset: 3,
                text: "st second".into(),
            },
        ];
        let set = ChunkSet::from(chunks);
        assert_eq!(set.total(), 2);
        assert_eq!(set.chunks()[1], "st second");
    }
}
