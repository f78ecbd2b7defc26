/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::iter::FusedIterator;

/// Every generator in this crate starts from this seed unless told otherwise.
pub const DEFAULT_SEED: f64 = 1.0;

// 2^32, used to bring the mixed integer back down into [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;
// seeds below 1.0 (including every value the generator itself emits) get scaled up by this much
// before mixing, so that they land in the 32-bit integer domain
const FRACTION_SCALE: f64 = 1_000_000_000.0;
const MIX_INCREMENT: f64 = 0x6d2b_79f5 as f64;

///
/// Returns a value in [0, 1) derived purely from the seed.
///
/// The seed is scaled into the 32-bit integer domain (seeds with magnitude below 1 are multiplied
/// up, others are used as is), offset by a fixed constant, and then pushed through an avalanche
/// mix of xor-shifts and odd multiplications. The top bits are normalized to a float by dividing
/// by 2^32.
///
/// Every published word list depends on the exact stream this produces, so the arithmetic here
/// must not change. A seed of 0 is fine: the offset keeps the mix away from the all-zero state.
///
pub fn seeded_random(seed: f64) -> f64 {
    let scaled = if seed.abs() < 1.0 {
        (seed * FRACTION_SCALE).abs()
    } else {
        seed.abs()
    };

    let t = to_u32(scaled + MIX_INCREMENT);
    let t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    let t = t ^ t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));

    f64::from(t ^ (t >> 14)) / U32_RANGE
}

///
/// The pure form of the generator: returns the next value and the seed to use for the call after.
/// The emitted value doubles as the next seed.
///
pub fn advance(seed: f64) -> (f64, f64) {
    let value = seeded_random(seed);
    (value, value)
}

/// Truncates toward zero and wraps into 32 bits (non-finite input becomes 0)
fn to_u32(v: f64) -> u32 {
    if !v.is_finite() {
        return 0;
    }

    let wrapped = v.trunc() % U32_RANGE;
    if wrapped < 0.0 {
        (wrapped + U32_RANGE) as u32
    } else {
        wrapped as u32
    }
}

///
/// A restartable, seeded stream of floats in [0, 1).
///
/// The whole state is the current seed, so cloning a generator forks the stream, and
/// constructing a new one from the same seed replays it from the start.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeededRng {
    seed: f64,
}

impl SeededRng {
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    ///
    /// A generator that has already drawn its first value from seed, so the first call to
    /// next_value returns the second value of the stream.
    ///
    /// The extra letter shuffle has always been driven by a generator in this state, and the
    /// published extras depend on it.
    ///
    pub fn primed(seed: f64) -> Self {
        let mut out = Self::new(seed);
        out.next_value();
        out
    }

    /// Returns the next value in [0, 1), advancing the state
    pub fn next_value(&mut self) -> f64 {
        let (value, seed) = advance(self.seed);
        self.seed = seed;
        value
    }

    /// Returns a uniformly chosen index in [0, bound). bound must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        ((self.next_value() * bound as f64).floor() as usize).min(bound - 1)
    }

    /// The seed the next call will consume
    pub fn seed(&self) -> f64 {
        self.seed
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for SeededRng {}
