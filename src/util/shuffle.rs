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

use crate::puzzle::rng::SeededRng;

///
/// Fisher-Yates over a slice, driven by a SeededRng so that the permutation is reproducible.
///
/// The walk goes from the last index down to (and including) index 0, consuming exactly one value
/// from the generator per element. The final step always swaps index 0 with itself, but it still
/// consumes a value; lists published before this crate existed depend on that.
///
pub trait SeededShuffleExt {
    fn seeded_shuffle(&mut self, rng: &mut SeededRng);
}

impl<E> SeededShuffleExt for [E] {
    fn seeded_shuffle(&mut self, rng: &mut SeededRng) {
        for i in (0..self.len()).rev() {
            let j = rng.next_index(i + 1);
            self.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_matches_reference_permutation() {
        let mut items: Vec<usize> = (0..10).collect();
        items.seeded_shuffle(&mut SeededRng::primed(1.0));
        assert_eq!(items, vec![9, 5, 0, 3, 8, 7, 1, 6, 2, 4]);
    }

    #[test]
    fn test_shuffle_from_unprimed_generator() {
        let mut items: Vec<usize> = (0..10).collect();
        items.seeded_shuffle(&mut SeededRng::default());
        assert_eq!(items, vec![4, 0, 8, 7, 9, 1, 5, 2, 3, 6]);
    }

    #[test]
    fn test_shuffle_of_sub_slice_leaves_rest_alone() {
        let mut items: Vec<usize> = (0..10).collect();
        items[4..].seeded_shuffle(&mut SeededRng::default());
        assert_eq!(&items[..4], &[0, 1, 2, 3]);

        let mut tail = items[4..].to_vec();
        tail.sort_unstable();
        assert_eq!(tail, vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_shuffle_consumes_one_value_per_element() {
        let mut rng = SeededRng::default();
        let mut items = [(); 5];
        items.seeded_shuffle(&mut rng);

        let mut expected = SeededRng::default();
        for _ in 0..5 {
            expected.next_value();
        }
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_empty_shuffle_is_noop() {
        let mut rng = SeededRng::default();
        let mut items: [u8; 0] = [];
        items.seeded_shuffle(&mut rng);
        assert_eq!(rng, SeededRng::default());
    }
}
