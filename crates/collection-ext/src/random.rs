//! Randomized selection and shuffling.
//!
//! There is no hidden global generator: every helper takes the random source
//! explicitly, so a seeded generator such as [`PcgRng`](crate::PcgRng) makes
//! results reproducible.

use rand::Rng;

/// Randomized helpers for slices.
pub trait RandomExt<T> {
    /// Uniformly chosen element, or `None` when empty.
    fn random_element<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized;

    /// In-place Fisher–Yates shuffle.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index at or before it. Every permutation is equally
    /// likely.
    fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized;

    /// Up to `amount` distinct positions picked at random, as a new `Vec`.
    ///
    /// - `amount == 0` returns `None`, not an empty `Vec`.
    /// - `amount >= len` returns a copy of everything in the original order.
    /// - Otherwise a shuffled copy truncated to `amount`.
    fn random_unique<R>(&self, amount: usize, rng: &mut R) -> Option<Vec<T>>
    where
        T: Clone,
        R: Rng + ?Sized;
}

impl<T> RandomExt<T> for [T] {
    fn random_element<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        self.get(rng.gen_range(0..self.len()))
    }

    fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for i in (1..self.len()).rev() {
            let k = rng.gen_range(0..=i);
            self.swap(i, k);
        }
    }

    fn random_unique<R>(&self, amount: usize, rng: &mut R) -> Option<Vec<T>>
    where
        T: Clone,
        R: Rng + ?Sized,
    {
        if amount == 0 {
            return None;
        }

        if amount >= self.len() {
            return Some(self.to_vec());
        }

        let mut picked = self.to_vec();
        picked.shuffle_with(rng);
        picked.truncate(amount);
        Some(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PcgRng;

    #[test]
    fn random_element_on_empty_is_none() {
        let empty: [u8; 0] = [];
        assert_eq!(empty.random_element(&mut PcgRng::new(1)), None);
    }

    #[test]
    fn random_element_comes_from_the_slice() {
        let items = ["a", "b", "c"];
        let mut rng = PcgRng::new(5);
        for _ in 0..100 {
            let picked = items.random_element(&mut rng).copied();
            assert!(picked.is_some_and(|p| items.contains(&p)));
        }
    }

    #[test]
    fn random_element_reaches_every_position() {
        let items = [0usize, 1, 2, 3];
        let mut seen = [false; 4];
        let mut rng = PcgRng::new(11);
        for _ in 0..200 {
            if let Some(&i) = items.random_element(&mut rng) {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn shuffle_of_short_slices_is_noop() {
        let mut rng = PcgRng::new(3);
        let mut empty: [u8; 0] = [];
        empty.shuffle_with(&mut rng);
        let mut one = [9];
        one.shuffle_with(&mut rng);
        assert_eq!(one, [9]);
    }

    #[test]
    fn shuffle_is_reproducible_with_same_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        a.shuffle_with(&mut PcgRng::new(77));
        b.shuffle_with(&mut PcgRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn random_unique_zero_is_none() {
        let items = [1, 2, 3];
        assert_eq!(items.random_unique(0, &mut PcgRng::new(1)), None);
    }

    #[test]
    fn random_unique_with_large_amount_copies_in_order() {
        let items = [1, 2, 3];
        let mut rng = PcgRng::new(1);
        assert_eq!(items.random_unique(3, &mut rng), Some(vec![1, 2, 3]));
        assert_eq!(items.random_unique(10, &mut rng), Some(vec![1, 2, 3]));
    }

    #[test]
    fn random_unique_picks_distinct_positions() {
        let items: Vec<u32> = (0..10).collect();
        let mut rng = PcgRng::new(2024);
        let picked = items.random_unique(4, &mut rng).unwrap_or_default();
        assert_eq!(picked.len(), 4);
        for (i, value) in picked.iter().enumerate() {
            assert!(items.contains(value));
            assert!(!picked[i + 1..].contains(value));
        }
    }
}
