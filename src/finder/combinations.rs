// Subset enumeration
// Yields index combinations in ascending size, lexicographic within a size

/// Iterator over the non-empty index subsets of `0..n`.
///
/// The order is part of the contract: every single-element subset first,
/// then every pair, and so on up to the full set; within one size the
/// subsets are lexicographic by index. For `n = 3` that is `[0]`, `[1]`,
/// `[2]`, `[0, 1]`, `[0, 2]`, `[1, 2]`, `[0, 1, 2]`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            indices: Vec::new(),
            done: n == 0,
        }
    }

    /// Number of combinations an iterator over `n` items yields (2^n - 1).
    pub fn total(n: usize) -> u128 {
        if n >= 128 {
            u128::MAX
        } else {
            (1u128 << n) - 1
        }
    }

    // Advance to the lexicographic successor of the current combination,
    // growing to the first combination of the next size when one is spent.
    fn advance(&mut self) {
        let k = self.indices.len();
        if k == 0 {
            self.indices.push(0);
            return;
        }

        // Rightmost index that can still move right.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }

        if k == self.n {
            self.done = true;
        } else {
            self.indices = (0..=k).collect();
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.advance();
        if self.done {
            None
        } else {
            Some(self.indices.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_ascending_sizes_lexicographic_within_a_size() {
        let all: Vec<Vec<usize>> = Combinations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 1, 2],
            ]
        );
    }

    #[test]
    fn counts_match_the_closed_form() {
        for n in 0..=10 {
            let count = Combinations::new(n).count() as u128;
            assert_eq!(count, Combinations::total(n), "wrong count for n = {n}");
        }
    }

    #[test]
    fn zero_items_yield_nothing() {
        assert_eq!(Combinations::new(0).next(), None);
        assert_eq!(Combinations::total(0), 0);
    }

    #[test]
    fn one_item_yields_one_subset() {
        let all: Vec<Vec<usize>> = Combinations::new(1).collect();
        assert_eq!(all, vec![vec![0]]);
    }

    #[test]
    fn every_subset_is_sorted_and_unique() {
        let all: Vec<Vec<usize>> = Combinations::new(5).collect();
        assert_eq!(all.len(), 31);
        for subset in &all {
            for pair in subset.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
        let mut deduped = all.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
    }
}
