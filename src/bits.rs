use bitvec::prelude::*;

use crate::code::CodeTable;

/// Byte-aligned output of the bit packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed {
    /// Code bits, MSB-first within each byte, zero-padded at the end.
    pub bytes: Vec<u8>,
    /// Number of zero bits appended to fill the last byte (0..=7).
    pub padding: u8,
    /// Number of meaningful bits in `bytes`.
    pub bit_len: u64,
}

pub struct BitPacker;

impl BitPacker {
    /// Concatenates the code of every byte in `data`.
    ///
    /// Returns `None` if a byte has no entry in `codes`.
    pub fn pack(data: &[u8], codes: &CodeTable) -> Option<Packed> {
        let mut lookup: [Option<&BitSlice<u8, Msb0>>; 256] = [None; 256];
        for (symbol, code) in codes.iter() {
            lookup[symbol as usize] = Some(code);
        }

        let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(data.len());
        for &b in data {
            bits.extend_from_bitslice(lookup[b as usize]?);
        }

        let bit_len = bits.len() as u64;
        let padding = padding_for(bit_len);
        bits.resize(bits.len() + padding as usize, false);

        Some(Packed {
            bytes: bits.into_vec(),
            padding,
            bit_len,
        })
    }
}

/// Padding needed after `bit_len` payload bits.
pub fn padding_for(bit_len: u64) -> u8 {
    ((8 - bit_len % 8) % 8) as u8
}

/// Bytes needed to hold `bit_len` bits.
pub fn bytes_for(bit_len: u64) -> u64 {
    bit_len / 8 + u64::from(bit_len % 8 != 0)
}
