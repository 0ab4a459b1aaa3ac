use vigil_domain::EncodingVocabulary;

/// Turns `machine_type` labels into the integer codes the models were trained on.
#[derive(Debug, Clone, Copy)]
pub struct CategoryEncoder<'a> {
    vocabulary: &'a EncodingVocabulary,
}

impl<'a> CategoryEncoder<'a> {
    pub fn new(vocabulary: &'a EncodingVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn encode(&self, label: &str) -> usize {
        self.vocabulary.encode(label)
    }

    /// Encodes a whole column as feature values. Unseen or missing labels get code 0.
    pub fn encode_column<S: AsRef<str>>(&self, labels: &[Option<S>]) -> Vec<f64> {
        let mut unseen = 0usize;
        let codes = labels
            .iter()
            .map(|label| {
                let label: Option<&str> = label.as_ref().map(|label| label.as_ref());
                if label.is_none_or(|label| self.vocabulary.index_of(label).is_none()) {
                    unseen += 1;
                }
                self.vocabulary.encode_optional(label) as f64
            })
            .collect();
        if unseen > 0 {
            tracing::debug!(unseen, "labels outside the vocabulary encoded as 0");
        }
        codes
    }
}
