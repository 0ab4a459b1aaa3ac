use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Code assigned to labels that are not part of the vocabulary.
pub const FALLBACK_CODE: usize = 0;

/// Ordered set of known category labels. A label's position is its code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingVocabulary {
    classes: Vec<String>,
}

impl EncodingVocabulary {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid encoding vocabulary")
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|class| class == label)
    }

    /// Unseen labels collapse onto the first class instead of failing.
    pub fn encode(&self, label: &str) -> usize {
        self.index_of(label).unwrap_or(FALLBACK_CODE)
    }

    /// Missing labels take the fallback code as well.
    pub fn encode_optional(&self, label: Option<&str>) -> usize {
        label.map_or(FALLBACK_CODE, |label| self.encode(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_encode_to_their_position() {
        let vocabulary = EncodingVocabulary::new(["L", "M", "H"]);
        for (index, label) in vocabulary.classes().iter().enumerate() {
            assert_eq!(vocabulary.encode(label), index);
        }
    }

    #[test]
    fn unknown_and_missing_labels_fall_back_to_zero() {
        let vocabulary = EncodingVocabulary::new(["L", "M", "H"]);
        assert_eq!(vocabulary.encode("unknown"), FALLBACK_CODE);
        assert_eq!(vocabulary.encode("l"), FALLBACK_CODE);
        assert_eq!(vocabulary.encode(""), FALLBACK_CODE);
        assert_eq!(vocabulary.encode_optional(None), FALLBACK_CODE);
        assert_eq!(vocabulary.encode_optional(Some("H")), 2);
    }

    #[test]
    fn parses_classes_document() {
        let vocabulary = EncodingVocabulary::from_json(r#"{"classes": ["H", "L", "M"]}"#)
            .expect("vocabulary should parse");
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.encode("M"), 2);
    }

    #[test]
    fn rejects_documents_without_classes() {
        assert!(EncodingVocabulary::from_json(r#"["H", "L"]"#).is_err());
    }
}
