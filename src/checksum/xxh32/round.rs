//! XXH32 compression rounds and finalization.
//!
//! The constants and rotation amounts below are the algorithm: changing any of
//! them produces a different hash family.

use byteorder::{ByteOrder, LittleEndian};

/// Multiplier for every lane round and the byte-tail round.
pub const PRIME32_1: u32 = 0x9E37_79B1;
/// Input multiplier of a lane round, first avalanche multiplier.
pub const PRIME32_2: u32 = 0x85EB_CA77;
/// Word-tail multiplier, second avalanche multiplier.
pub const PRIME32_3: u32 = 0xC2B2_AE3D;
/// Word-tail post-rotation multiplier.
pub const PRIME32_4: u32 = 0x27D4_EB2F;
/// Byte-tail multiplier and small-input seed offset.
pub const PRIME32_5: u32 = 0x1656_67B1;

/// Size of the block absorbed by one round over all four lanes.
pub const BLOCK_LEN: usize = 16;

/// The four parallel 32-bit lanes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulator {
    lanes: [u32; 4],
}

impl Accumulator {
    /// Initial lanes for a given seed.
    pub fn new(seed: u32) -> Accumulator {
        Accumulator {
            lanes: [
                seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
                seed.wrapping_add(PRIME32_2),
                seed,
                seed.wrapping_sub(PRIME32_1),
            ],
        }
    }

    /// Absorbs one block, one little-endian word per lane.
    #[inline]
    pub fn mix_block(&mut self, block: &[u8; BLOCK_LEN]) {
        for (i, lane) in self.lanes.iter_mut().enumerate() {
            let word = LittleEndian::read_u32(&block[4 * i..4 * i + 4]);
            *lane = round(*lane, word);
        }
    }

    /// Absorbs every whole block at the front of `input` and returns the
    /// unconsumed tail, which is always shorter than a block.
    #[inline]
    pub fn mix_blocks<'a>(&mut self, mut input: &'a [u8]) -> &'a [u8] {
        while let Some((block, rest)) = input.split_first_chunk::<BLOCK_LEN>() {
            self.mix_block(block);
            input = rest;
        }
        input
    }

    /// Folds the four lanes into a single word.
    pub fn fold(&self) -> u32 {
        let [v1, v2, v3, v4] = self.lanes;
        v1.rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18))
    }
}

#[inline]
fn round(lane: u32, word: u32) -> u32 {
    lane.wrapping_add(word.wrapping_mul(PRIME32_2))
        .rotate_left(13)
        .wrapping_mul(PRIME32_1)
}

/// Produces the digest from the lanes, the total number of bytes hashed and
/// the trailing bytes (fewer than `BLOCK_LEN`) that never filled a block.
///
/// The lanes are ignored when fewer than `BLOCK_LEN` bytes were hashed in
/// total; the fold then starts from the seed instead.
pub fn finalize(acc: &Accumulator, total_len: u64, tail: &[u8], seed: u32) -> u32 {
    debug_assert!(tail.len() < BLOCK_LEN);
    let mut h = if total_len >= BLOCK_LEN as u64 {
        acc.fold()
    } else {
        seed.wrapping_add(PRIME32_5)
    };
    h = h.wrapping_add(total_len as u32);

    let mut words = tail.chunks_exact(4);
    for word in words.by_ref() {
        let word = LittleEndian::read_u32(word);
        h = h.wrapping_add(word.wrapping_mul(PRIME32_3))
            .rotate_left(17)
            .wrapping_mul(PRIME32_4);
    }
    for &byte in words.remainder() {
        h = h.wrapping_add((byte as u32).wrapping_mul(PRIME32_5))
            .rotate_left(11)
            .wrapping_mul(PRIME32_1);
    }

    avalanche(h)
}

/// Final shift-xor-multiply scramble.
#[inline]
pub fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME32_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME32_3);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn initial_lanes() {
        let acc = Accumulator::new(0);
        assert_eq!(acc.lanes, [0x2423_4428, 0x85EB_CA77, 0, 0x61C8_864F]);
    }

    #[test]
    fn mix_block_reads_little_endian() {
        let mut a = Accumulator::new(7);
        let mut b = Accumulator::new(7);
        let mut block = [0u8; BLOCK_LEN];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = i as u8;
        }
        a.mix_block(&block);
        for (i, lane) in b.lanes.iter_mut().enumerate() {
            let word = u32::from_le_bytes([block[4 * i], block[4 * i + 1],
                                           block[4 * i + 2], block[4 * i + 3]]);
            *lane = round(*lane, word);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn mix_blocks_returns_tail() {
        let data = [0xAAu8; 37];
        let mut acc = Accumulator::new(0);
        let tail = acc.mix_blocks(&data);
        assert_eq!(tail.len(), 5);
        assert!(acc != Accumulator::new(0));
    }

    #[test]
    fn empty_input_digest() {
        assert_eq!(finalize(&Accumulator::new(0), 0, &[], 0), 0x02CC_5D05);
        assert_eq!(finalize(&Accumulator::new(PRIME32_1), 0, &[], PRIME32_1), 0x36B7_8AE7);
    }

    #[test]
    fn avalanche_of_zero() {
        assert_eq!(avalanche(0), 0);
    }
}
