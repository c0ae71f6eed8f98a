//! Property tests for the quiz core
//!
//! Tests are organized by topic:
//! - `sampling` - Statistical behavior of the samplers and mixture sizes
//! - `density` - Shape of estimated curves and strategy equivalence
//! - `rounds` - Round generation, determinism and answer checking

mod density;
mod rounds;

use rand::RngCore;

/// RNG that replays a fixed list of `u64` words, then repeats the last one.
///
/// `rand` maps a word `w` to the `f64` `(w >> 11) * 2^-53`, so `0` yields
/// exactly `0.0` and `1 << 63` yields `0.5`.
pub(crate) struct ScriptedRng {
    words: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    pub(crate) fn new(words: Vec<u64>) -> Self {
        Self { words, pos: 0 }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.pos.min(self.words.len() - 1)];
        self.pos += 1;
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
