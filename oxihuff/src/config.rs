//! Decoder configuration.

/// Limits applied while extracting untrusted streams.
///
/// The default accepts any declared length. Decoding never allocates more
/// than one output byte per remaining input bit up front, so a limit only
/// matters when the caller wants to bound the size of genuine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Largest output length a stream may declare, in bytes.
    /// `None` disables the check.
    pub max_output_len: Option<u64>,
}

impl ExtractOptions {
    /// Accept any declared length.
    pub const UNLIMITED: Self = Self {
        max_output_len: None,
    };

    /// Preset for untrusted input: at most 256 MiB of output.
    pub const UNTRUSTED: Self = Self {
        max_output_len: Some(256 * 1024 * 1024),
    };

    /// Create options with the given output limit.
    pub fn with_max_output_len(max_output_len: u64) -> Self {
        Self {
            max_output_len: Some(max_output_len),
        }
    }

    /// Check a declared length against the limit, returning the limit it
    /// breaks.
    pub(crate) fn exceeded_by(&self, declared: u64) -> Option<u64> {
        self.max_output_len.filter(|&limit| declared > limit)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::UNLIMITED
    }
}
