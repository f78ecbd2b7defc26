use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;

///
/// Iterator adapter which emits each distinct item the first time it is seen, and skips every
/// later repeat. Order of first occurrence is preserved.
///
pub struct UniqueIter<I, E> {
    upstream: I,
    seen: HashSet<E>,
}

impl<I, E> UniqueIter<I, E>
where
    I: Iterator<Item=E>,
    E: Eq + Hash + Clone,
{
    pub fn new(upstream: I) -> Self {
        Self {
            upstream,
            seen: HashSet::new(),
        }
    }
}

impl<I, E> Iterator for UniqueIter<I, E>
where
    I: Iterator<Item=E>,
    E: Eq + Hash + Clone,
{
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        for next in self.upstream.by_ref() {
            if self.seen.insert(next.clone()) {
                return Some(next);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, max_size) = self.upstream.size_hint();
        (0, max_size)
    }
}

impl<I, E> FusedIterator for UniqueIter<I, E>
where
    I: FusedIterator<Item=E>,
    E: Eq + Hash + Clone,
{}

pub trait UniqueExt: Iterator + Sized {
    fn unique_items(self) -> UniqueIter<Self, Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        UniqueIter::new(self)
    }
}

impl<I> UniqueExt for I where I: Iterator + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence_order() {
        let got: Vec<char> = "eetaetnae".chars().unique_items().collect();
        assert_eq!(got, vec!['e', 't', 'a', 'n']);
    }

    #[test]
    fn test_empty() {
        assert_eq!(std::iter::empty::<u8>().unique_items().count(), 0);
    }
}
