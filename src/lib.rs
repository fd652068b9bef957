//! Huffman compression of in-memory byte buffers.
//!
//! ```
//! let data = b"abracadabra, abracadabra";
//! let packed = huffpack::compress(data);
//! assert_eq!(huffpack::decompress(&packed).unwrap(), data);
//! ```
//!
//! The output is self-describing: it carries the symbol frequencies, from
//! which [`decompress`] rebuilds the same tree the encoder used. See
//! [`container`] for the byte layout.

pub mod bits;
pub mod checksum;
pub mod code;
pub mod config;
pub mod container;
pub mod decode;
pub mod error;
pub mod frequency;
pub mod tree;

pub use code::CodeTable;
pub use config::CodecConfig;
pub use error::{Error, ErrorKind, Result};
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;

use bits::{bytes_for, padding_for, BitPacker};
use checksum::adler32;
use container::Container;
use decode::Decoder;

/// Compressor/decompressor bound to a [`CodecConfig`].
///
/// Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Never fails; empty input yields the fixed 11-byte empty container.
    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        let frequencies = FrequencyTable::from_bytes(data);
        let checksum = adler32(data);

        let Some(tree) = HuffmanTree::build(&frequencies) else {
            tracing::debug!("compressing empty input");
            return Container {
                padding: 0,
                frequencies,
                checksum,
                payload: &[],
            }
            .encode();
        };

        let codes = CodeTable::from_tree(&tree);
        let packed = BitPacker::pack(data, &codes)
            .expect("code table is built from the same bytes it packs");

        let out = Container {
            padding: packed.padding,
            frequencies,
            checksum,
            payload: &packed.bytes,
        }
        .encode();

        tracing::debug!(
            input = data.len(),
            symbols = codes.len(),
            bits = packed.bit_len,
            output = out.len(),
            "compressed"
        );

        out
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let container = Container::parse(data)?;

        let Some(tree) = HuffmanTree::build(&container.frequencies) else {
            tracing::debug!("decompressing empty container");
            return Ok(Vec::new());
        };

        let expected = container
            .frequencies
            .total()
            .ok_or(Error::FrequencyOverflow)?;
        if let Some(limit) = self.config.max_decoded_len {
            if expected > limit {
                return Err(Error::LimitExceeded {
                    declared: expected,
                    limit,
                });
            }
        }

        let codes = CodeTable::from_tree(&tree);
        let bit_len = codes
            .encoded_bit_len(&container.frequencies)
            .ok_or(Error::FrequencyOverflow)?;

        let payload_len = bytes_for(bit_len);
        if container.payload.len() as u64 != payload_len {
            return Err(Error::PayloadLength {
                expected: payload_len,
                actual: container.payload.len() as u64,
            });
        }

        let padding = padding_for(bit_len);
        if container.padding != padding {
            return Err(Error::PaddingMismatch {
                expected: padding,
                actual: container.padding,
            });
        }

        let out = Decoder::new(&tree).decode(container.payload, bit_len, expected)?;

        if self.config.verify_checksum {
            let actual = adler32(&out);
            if actual != container.checksum {
                return Err(Error::ChecksumMismatch {
                    expected: container.checksum,
                    actual,
                });
            }
        }

        tracing::debug!(
            input = data.len(),
            symbols = codes.len(),
            output = out.len(),
            "decompressed"
        );

        Ok(out)
    }
}

/// Compresses `data` with the default configuration.
pub fn compress(data: &[u8]) -> Vec<u8> {
    Codec::default().compress(data)
}

/// Reverses [`compress`], failing on any malformed or corrupted input.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Codec::default().decompress(data)
}
