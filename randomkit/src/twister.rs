//! MT19937 word generator
//!
//! The 32-bit Mersenne Twister exactly as numpy's `randomkit` runs it:
//! Knuth's linear-congruential seed expansion, the twist recurrence over
//! 624 words and the standard tempering transform.
//!
//! # Determinism
//!
//! Same seed → same sequence of words, on every platform. Every constant,
//! shift and loop boundary below is part of that contract; an "equivalent"
//! formula that changes a single bit desynchronizes every downstream draw.

use log::trace;

/// Number of words in the state array
pub const STATE_LEN: usize = 624;

const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Multiplier of Knuth's seed expansion
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// Raw Mersenne Twister state: 624 words plus a read cursor
///
/// `cursor == STATE_LEN` means the array is exhausted and the next draw
/// retwists it first.
#[derive(Debug, Clone, PartialEq)]
pub struct Twister {
    words: [u32; STATE_LEN],
    cursor: usize,
}

impl Twister {
    /// Create a twister seeded with `seed`
    ///
    /// # Example
    /// ```
    /// use randomkit::Twister;
    ///
    /// let mut mt = Twister::new(5489);
    /// assert_eq!(mt.next_u32(), 3499211612);
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut twister = Self {
            words: [0; STATE_LEN],
            cursor: STATE_LEN,
        };
        twister.reseed(seed);
        twister
    }

    /// Rebuild a twister from raw words and a cursor
    ///
    /// Callers validate `cursor <= STATE_LEN` beforehand.
    pub(crate) fn from_parts(words: [u32; STATE_LEN], cursor: usize) -> Self {
        debug_assert!(cursor <= STATE_LEN);
        Self { words, cursor }
    }

    /// Re-initialize the word array from `seed`
    ///
    /// The first draw after reseeding always retwists.
    pub fn reseed(&mut self, seed: u32) {
        let mut value = seed;
        for (i, word) in self.words.iter_mut().enumerate() {
            *word = value;
            value = SEED_MULTIPLIER
                .wrapping_mul(value ^ (value >> 30))
                .wrapping_add(i as u32 + 1);
        }
        self.cursor = STATE_LEN;
    }

    /// Next tempered 32-bit word
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor == STATE_LEN {
            self.twist();
            self.cursor = 0;
        }

        let mut y = self.words[self.cursor];
        self.cursor += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;

        y
    }

    /// Current read position in `[0, STATE_LEN]`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Untempered state words
    pub fn words(&self) -> &[u32; STATE_LEN] {
        &self.words
    }

    /// Regenerate the whole array
    ///
    /// Split into two linear passes and the wraparound element so the hot
    /// loops index without a modulo.
    fn twist(&mut self) {
        trace!("retwisting {} state words", STATE_LEN);

        #[inline(always)]
        fn mix(upper: u32, lower: u32, far: u32) -> u32 {
            let y = (upper & UPPER_MASK) | (lower & LOWER_MASK);
            far ^ (y >> 1) ^ ((y & 1).wrapping_neg() & MATRIX_A)
        }

        let words = &mut self.words;
        let mut i = 0;
        while i < STATE_LEN - M {
            words[i] = mix(words[i], words[i + 1], words[i + M]);
            i += 1;
        }
        while i < STATE_LEN - 1 {
            words[i] = mix(words[i], words[i + 1], words[i + M - STATE_LEN]);
            i += 1;
        }
        words[STATE_LEN - 1] = mix(words[STATE_LEN - 1], words[0], words[M - 1]);
    }
}
