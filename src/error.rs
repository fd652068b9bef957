/// Broad category of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The header or the overall layout of the container is invalid.
    MalformedContainer,
    /// The header parsed, but the payload bits do not decode to the declared data.
    CorruptStream,
}

/// Errors returned by [`decompress`](crate::decompress).
///
/// `compress` never fails; every variant here is a decode-time condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("container truncated: need {needed} bytes, have {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("bad magic {0:02x?}")]
    BadMagic([u8; 4]),

    #[error("padding count {0} out of range 0..=7")]
    BadPadding(u8),

    #[error("declared {0} distinct symbols, at most 256 exist")]
    TooManySymbols(u16),

    #[error("symbol table entries are not in strictly ascending order")]
    UnorderedSymbols,

    #[error("symbol {0:#04x} declared with zero frequency")]
    ZeroFrequency(u8),

    #[error("declared frequencies overflow")]
    FrequencyOverflow,

    #[error("payload is {actual} bytes, header implies {expected}")]
    PayloadLength { expected: u64, actual: u64 },

    #[error("padding count is {actual}, header implies {expected}")]
    PaddingMismatch { expected: u8, actual: u8 },

    #[error("empty symbol table with non-empty payload or trailer")]
    EmptyWithPayload,

    #[error("declared output of {declared} bytes exceeds limit of {limit}")]
    LimitExceeded { declared: u64, limit: u64 },

    #[error("bit stream ended in the middle of a code")]
    IncompleteCode,

    #[error("bit sequence matches no code")]
    InvalidCode,

    #[error("padding bits are not zero")]
    NonZeroPadding,

    #[error("decoded {actual} symbols, header declares {expected}")]
    SymbolCount { expected: u64, actual: u64 },

    #[error("checksum mismatch: stored {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Truncated { .. }
            | Self::BadMagic(_)
            | Self::BadPadding(_)
            | Self::TooManySymbols(_)
            | Self::UnorderedSymbols
            | Self::ZeroFrequency(_)
            | Self::FrequencyOverflow
            | Self::PayloadLength { .. }
            | Self::PaddingMismatch { .. }
            | Self::EmptyWithPayload
            | Self::LimitExceeded { .. } => ErrorKind::MalformedContainer,
            Self::IncompleteCode
            | Self::InvalidCode
            | Self::NonZeroPadding
            | Self::SymbolCount { .. }
            | Self::ChecksumMismatch { .. } => ErrorKind::CorruptStream,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_split_header_from_payload() {
        assert_eq!(Error::BadPadding(9).kind(), ErrorKind::MalformedContainer);
        assert_eq!(
            Error::PayloadLength { expected: 4, actual: 1 }.kind(),
            ErrorKind::MalformedContainer
        );
        assert_eq!(Error::IncompleteCode.kind(), ErrorKind::CorruptStream);
        assert_eq!(
            Error::ChecksumMismatch { expected: 1, actual: 2 }.kind(),
            ErrorKind::CorruptStream
        );
    }

    #[test]
    fn display_mentions_values() {
        let msg = Error::ZeroFrequency(0x41).to_string();
        assert_eq!(msg, "symbol 0x41 declared with zero frequency");
    }
}
