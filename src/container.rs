//! Self-describing container.
//!
//! ```text
//! magic         4 bytes   b"HUF1"
//! padding       u8        zero bits appended to the last payload byte (0..=7)
//! count         u16 LE    number of distinct symbols (0..=256)
//! entries       count * { symbol: u8, frequency: u64 LE }, ascending by symbol
//! checksum      u32 BE    Adler-32 of the original bytes
//! payload       rest      packed code bits, MSB-first
//! ```
//!
//! The header alone determines the payload size: the decoder rebuilds the
//! tree from the entries and the code lengths fix the bit count.

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

pub const MAGIC: [u8; 4] = *b"HUF1";

/// magic + padding + count
pub const FIXED_HEADER_LEN: usize = 7;
pub const ENTRY_LEN: usize = 9;
pub const CHECKSUM_LEN: usize = 4;

/// Adler-32 of no bytes at all.
const EMPTY_CHECKSUM: u32 = 1;

/// A parsed container borrowing its payload from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<'a> {
    pub padding: u8,
    pub frequencies: FrequencyTable,
    pub checksum: u32,
    pub payload: &'a [u8],
}

impl<'a> Container<'a> {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            FIXED_HEADER_LEN
                + self.frequencies.len() * ENTRY_LEN
                + CHECKSUM_LEN
                + self.payload.len(),
        );

        out.extend_from_slice(&MAGIC);
        out.push(self.padding);
        // at most 256 distinct byte values
        out.extend_from_slice(&(self.frequencies.len() as u16).to_le_bytes());
        for (symbol, count) in self.frequencies.iter() {
            out.push(symbol);
            out.extend_from_slice(&count.to_le_bytes());
        }
        out.extend_from_slice(&self.checksum.to_be_bytes());
        out.extend_from_slice(self.payload);

        out
    }

    /// Parses and validates the header.
    ///
    /// Payload length is checked later, against the rebuilt code table.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < FIXED_HEADER_LEN {
            return Err(Error::Truncated {
                needed: FIXED_HEADER_LEN,
                actual: data.len(),
            });
        }

        let magic = [data[0], data[1], data[2], data[3]];
        if magic != MAGIC {
            return Err(Error::BadMagic(magic));
        }

        let padding = data[4];
        if padding > 7 {
            return Err(Error::BadPadding(padding));
        }

        let count = u16::from_le_bytes([data[5], data[6]]);
        if count > 256 {
            return Err(Error::TooManySymbols(count));
        }

        let entries_end = FIXED_HEADER_LEN + count as usize * ENTRY_LEN;
        let header_end = entries_end + CHECKSUM_LEN;
        if data.len() < header_end {
            return Err(Error::Truncated {
                needed: header_end,
                actual: data.len(),
            });
        }

        let mut pairs = Vec::with_capacity(count as usize);
        let mut prev: Option<u8> = None;
        for entry in data[FIXED_HEADER_LEN..entries_end].chunks_exact(ENTRY_LEN) {
            let symbol = entry[0];
            if prev.is_some_and(|p| p >= symbol) {
                return Err(Error::UnorderedSymbols);
            }
            prev = Some(symbol);

            let mut freq = [0u8; 8];
            freq.copy_from_slice(&entry[1..]);
            let freq = u64::from_le_bytes(freq);
            if freq == 0 {
                return Err(Error::ZeroFrequency(symbol));
            }
            pairs.push((symbol, freq));
        }

        let frequencies = FrequencyTable::from_counts(pairs);
        if frequencies.total().is_none() {
            return Err(Error::FrequencyOverflow);
        }

        let checksum = u32::from_be_bytes([
            data[entries_end],
            data[entries_end + 1],
            data[entries_end + 2],
            data[entries_end + 3],
        ]);
        let payload = &data[header_end..];

        if frequencies.is_empty()
            && (padding != 0 || checksum != EMPTY_CHECKSUM || !payload.is_empty())
        {
            return Err(Error::EmptyWithPayload);
        }

        Ok(Self {
            padding,
            frequencies,
            checksum,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        Container {
            padding: 5,
            frequencies: FrequencyTable::from_bytes(b"aaaaabbc"),
            checksum: 0xdead_beef,
            payload: &[0b1111_1010, 0b1000_0000],
        }
        .encode()
    }

    #[test]
    fn layout() {
        let bytes = sample();
        assert_eq!(&bytes[..4], b"HUF1");
        assert_eq!(bytes[4], 5);
        assert_eq!(&bytes[5..7], &[3, 0]);
        assert_eq!(&bytes[7..16], &[b'a', 5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(bytes[16], b'b');
        assert_eq!(bytes[25], b'c');
        assert_eq!(&bytes[34..38], &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(&bytes[38..], &[0b1111_1010, 0b1000_0000]);
    }

    #[test]
    fn parse_back() {
        let bytes = sample();
        let c = Container::parse(&bytes).unwrap();
        assert_eq!(c.padding, 5);
        assert_eq!(c.frequencies, FrequencyTable::from_bytes(b"aaaaabbc"));
        assert_eq!(c.checksum, 0xdead_beef);
        assert_eq!(c.payload, &[0b1111_1010, 0b1000_0000]);
    }

    #[test]
    fn canonical_empty() {
        let bytes = Container {
            padding: 0,
            frequencies: FrequencyTable::default(),
            checksum: EMPTY_CHECKSUM,
            payload: &[],
        }
        .encode();
        assert_eq!(bytes, b"HUF1\x00\x00\x00\x00\x00\x00\x01");
        let c = Container::parse(&bytes).unwrap();
        assert!(c.frequencies.is_empty());
    }

    #[test]
    fn short_header() {
        assert_eq!(
            Container::parse(b"HUF1\x00"),
            Err(Error::Truncated {
                needed: 7,
                actual: 5
            })
        );
    }

    #[test]
    fn bad_magic() {
        let mut bytes = sample();
        bytes[0] ^= 0xff;
        assert!(matches!(Container::parse(&bytes), Err(Error::BadMagic(_))));
    }

    #[test]
    fn bad_padding() {
        let mut bytes = sample();
        bytes[4] = 8;
        assert_eq!(Container::parse(&bytes), Err(Error::BadPadding(8)));
    }

    #[test]
    fn too_many_symbols() {
        let mut bytes = sample();
        bytes[5..7].copy_from_slice(&257u16.to_le_bytes());
        assert_eq!(Container::parse(&bytes), Err(Error::TooManySymbols(257)));
    }

    #[test]
    fn count_exceeds_buffer() {
        let mut bytes = sample();
        bytes[5] = 200;
        assert!(matches!(
            Container::parse(&bytes),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn unordered_entries() {
        let mut bytes = sample();
        bytes[16] = b'a';
        assert_eq!(Container::parse(&bytes), Err(Error::UnorderedSymbols));
    }

    #[test]
    fn zero_frequency() {
        let mut bytes = sample();
        bytes[17] = 0;
        assert_eq!(Container::parse(&bytes), Err(Error::ZeroFrequency(b'b')));
    }

    #[test]
    fn overflowing_frequencies() {
        let mut bytes = sample();
        bytes[8..16].copy_from_slice(&u64::MAX.to_le_bytes());
        assert_eq!(Container::parse(&bytes), Err(Error::FrequencyOverflow));
    }

    #[test]
    fn empty_table_with_payload() {
        let mut bytes = b"HUF1\x00\x00\x00\x00\x00\x00\x01".to_vec();
        bytes.push(0);
        assert_eq!(Container::parse(&bytes), Err(Error::EmptyWithPayload));

        let bytes = b"HUF1\x03\x00\x00\x00\x00\x00\x01";
        assert_eq!(Container::parse(bytes), Err(Error::EmptyWithPayload));
    }
}
