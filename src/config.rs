use serde::{Deserialize, Serialize};

/// Decode-side knobs for a [`Codec`](crate::Codec).
///
/// Compression output does not depend on any of these; two codecs with
/// different configs produce identical containers for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Reject containers declaring more output bytes than this. Default: `None`.
    pub max_decoded_len: Option<u64>,
    /// Compare the stored Adler-32 against the decoded bytes. Default: true.
    pub verify_checksum: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_decoded_len: None,
            verify_checksum: true,
        }
    }
}

impl CodecConfig {
    pub fn with_max_decoded_len(mut self, limit: u64) -> Self {
        self.max_decoded_len = Some(limit);
        self
    }

    pub fn with_verify_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }
}
