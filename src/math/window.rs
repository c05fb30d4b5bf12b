/// Three consecutive elements of a sequence, with their position.
#[derive(Debug, Clone, Copy)]
pub struct Triple<'a, T> {
    pub prev: &'a T,
    pub cur: &'a T,
    pub next: &'a T,
    /// Index of `cur` in the underlying sequence.
    pub index: usize,
    len: usize,
}

impl<T> Triple<'_, T> {
    /// `true` when `prev` is the first element of the sequence.
    #[must_use]
    pub fn prev_is_first(&self) -> bool {
        self.index == 1
    }

    /// `true` when `next` is the last element of the sequence.
    #[must_use]
    pub fn next_is_last(&self) -> bool {
        self.index + 2 == self.len
    }
}

/// Iterates over every `(prev, cur, next)` window of `items`.
///
/// Yields nothing for sequences shorter than three elements.
pub fn triples<T>(items: &[T]) -> impl Iterator<Item = Triple<'_, T>> {
    let len = items.len();
    items.windows(3).enumerate().map(move |(i, w)| Triple {
        prev: &w[0],
        cur: &w[1],
        next: &w[2],
        index: i + 1,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sequences_yield_nothing() {
        assert_eq!(triples::<i32>(&[]).count(), 0);
        assert_eq!(triples(&[1]).count(), 0);
        assert_eq!(triples(&[1, 2]).count(), 0);
    }

    #[test]
    fn windows_cover_interior() {
        let items = [10, 20, 30, 40];
        let seen: Vec<_> = triples(&items).map(|t| (*t.prev, *t.cur, *t.next, t.index)).collect();
        assert_eq!(seen, vec![(10, 20, 30, 1), (20, 30, 40, 2)]);
    }

    #[test]
    fn boundary_flags() {
        let items = [0, 1, 2, 3];
        let flags: Vec<_> = triples(&items)
            .map(|t| (t.prev_is_first(), t.next_is_last()))
            .collect();
        assert_eq!(flags, vec![(true, false), (false, true)]);

        let single: Vec<_> = triples(&[0, 1, 2])
            .map(|t| (t.prev_is_first(), t.next_is_last()))
            .collect();
        assert_eq!(single, vec![(true, true)]);
    }
}
