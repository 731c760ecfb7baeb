//! Linear-scan reductions: maxima, minima, sums and counts.

/// Numeric types whose maximum is measured against a zero baseline.
///
/// [`AggregateExt::find_max`] starts its running maximum at [`Baseline::ZERO`]
/// rather than at the smallest representable value, so an empty or
/// all-negative input reports `0`.
pub trait Baseline: Copy + PartialOrd {
    const ZERO: Self;
}

macro_rules! impl_baseline {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(impl Baseline for $ty {
            const ZERO: Self = $zero;
        })*
    };
}

impl_baseline! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

/// Numeric types that can be summed without panicking.
///
/// Integers wrap around on overflow; floats add normally.
pub trait WrappingSum: Copy {
    const ZERO: Self;

    fn add_wrapping(self, rhs: Self) -> Self;
}

macro_rules! impl_wrapping_sum {
    (wrapping: $($int:ty),*; plain: $($float:ty),* $(,)?) => {
        $(impl WrappingSum for $int {
            const ZERO: Self = 0;

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
        })*
        $(impl WrappingSum for $float {
            const ZERO: Self = 0.0;

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self + rhs
            }
        })*
    };
}

impl_wrapping_sum! {
    wrapping: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    plain: f32, f64,
}

/// Reductions over slices.
pub trait AggregateExt<T> {
    /// Largest element, never below zero.
    fn find_max(&self) -> T
    where
        T: Baseline;

    /// Largest projected value, never below zero.
    fn find_max_by<N, F>(&self, projection: F) -> N
    where
        N: Baseline,
        F: FnMut(&T) -> N;

    /// Element with the largest projected value.
    ///
    /// Only a strictly larger value replaces the current best, so the first
    /// of several tied elements wins. `None` when empty.
    fn find_max_mapped<F>(&self, projection: F) -> Option<&T>
    where
        F: FnMut(&T) -> f32;

    /// Element with the smallest projected value; ties go to the first.
    fn find_min_mapped<F>(&self, projection: F) -> Option<&T>
    where
        F: FnMut(&T) -> f32;

    /// Element chosen by a pairwise comparator.
    ///
    /// `better(candidate, current)` is asked for every element in order, with
    /// `current` being `None` until something has been accepted.
    fn find_best<F>(&self, better: F) -> Option<&T>
    where
        F: FnMut(&T, Option<&T>) -> bool;

    /// Sum of all elements. Integer overflow wraps around.
    fn find_sum(&self) -> T
    where
        T: WrappingSum;

    /// Sum of all projected values. Integer overflow wraps around.
    fn find_sum_by<N, F>(&self, projection: F) -> N
    where
        N: WrappingSum,
        F: FnMut(&T) -> N;

    /// Number of elements matching `predicate`.
    fn count_all<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool;

    /// Number of `true` flags.
    fn count_all_true(&self) -> usize
    where
        T: Copy + Into<bool>;

    /// Whether every element matches. Vacuously `true` when empty.
    fn is_all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;
}

impl<T> AggregateExt<T> for [T] {
    fn find_max(&self) -> T
    where
        T: Baseline,
    {
        self.iter()
            .fold(T::ZERO, |max, &value| if value > max { value } else { max })
    }

    fn find_max_by<N, F>(&self, mut projection: F) -> N
    where
        N: Baseline,
        F: FnMut(&T) -> N,
    {
        self.iter().fold(N::ZERO, |max, item| {
            let value = projection(item);
            if value > max { value } else { max }
        })
    }

    fn find_max_mapped<F>(&self, mut projection: F) -> Option<&T>
    where
        F: FnMut(&T) -> f32,
    {
        let mut max = f32::NEG_INFINITY;
        let mut best = None;
        for item in self {
            let value = projection(item);
            if value > max {
                max = value;
                best = Some(item);
            }
        }
        best
    }

    fn find_min_mapped<F>(&self, mut projection: F) -> Option<&T>
    where
        F: FnMut(&T) -> f32,
    {
        let mut min = f32::INFINITY;
        let mut best = None;
        for item in self {
            let value = projection(item);
            if value < min {
                min = value;
                best = Some(item);
            }
        }
        best
    }

    fn find_best<F>(&self, mut better: F) -> Option<&T>
    where
        F: FnMut(&T, Option<&T>) -> bool,
    {
        let mut best = None;
        for item in self {
            if better(item, best) {
                best = Some(item);
            }
        }
        best
    }

    fn find_sum(&self) -> T
    where
        T: WrappingSum,
    {
        self.iter().fold(T::ZERO, |sum, &value| sum.add_wrapping(value))
    }

    fn find_sum_by<N, F>(&self, mut projection: F) -> N
    where
        N: WrappingSum,
        F: FnMut(&T) -> N,
    {
        self.iter().fold(N::ZERO, |sum, item| sum.add_wrapping(projection(item)))
    }

    fn count_all<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    fn count_all_true(&self) -> usize
    where
        T: Copy + Into<bool>,
    {
        self.iter().filter(|flag| (**flag).into()).count()
    }

    fn is_all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Unit {
        name: &'static str,
        hp: i32,
        speed: f32,
    }

    fn squad() -> Vec<Unit> {
        vec![
            Unit { name: "scout", hp: 20, speed: 3.0 },
            Unit { name: "knight", hp: 50, speed: 1.0 },
            Unit { name: "rogue", hp: 20, speed: 3.0 },
            Unit { name: "mage", hp: 15, speed: -1.0 },
        ]
    }

    #[test]
    fn find_max_has_zero_baseline() {
        assert_eq!(Vec::<i32>::new().find_max(), 0);
        assert_eq!([-5, -3].find_max(), 0);
        assert_eq!([2, 9, 4].find_max(), 9);
        assert_eq!([-1.5f32, -0.5].find_max(), 0.0);
        assert_eq!([0.25f32, 1.5].find_max(), 1.5);
    }

    #[test]
    fn find_max_by_projection() {
        assert_eq!(squad().find_max_by(|u| u.hp), 50);
        assert_eq!(squad().find_max_by(|u| -u.hp), 0);
    }

    #[test]
    fn mapped_extremes_return_first_of_ties() {
        let units = squad();
        assert_eq!(units.find_max_mapped(|u| u.speed).map(|u| u.name), Some("scout"));
        assert_eq!(units.find_min_mapped(|u| u.speed).map(|u| u.name), Some("mage"));
        assert_eq!(units.find_max_mapped(|u| -u.speed).map(|u| u.name), Some("mage"));
    }

    #[test]
    fn mapped_extremes_on_empty() {
        let none: [Unit; 0] = [];
        assert_eq!(none.find_max_mapped(|u| u.speed), None);
        assert_eq!(none.find_min_mapped(|u| u.speed), None);
    }

    #[test]
    fn find_best_with_comparator() {
        let units = squad();
        let weakest = units.find_best(|candidate, best| match best {
            None => true,
            Some(best) => candidate.hp < best.hp,
        });
        assert_eq!(weakest.map(|u| u.name), Some("mage"));
    }

    #[test]
    fn sums_wrap_instead_of_overflowing() {
        assert_eq!(vec![200u8, 100].find_sum(), 44);
        assert_eq!([i32::MAX, 1].find_sum_by(|x| *x), i32::MIN);
        assert_eq!([0.5f64, 0.25].find_sum(), 0.75);
        assert_eq!(Vec::<u64>::new().find_sum(), 0);
    }

    #[test]
    fn sums_and_counts() {
        let units = squad();
        assert_eq!([1, 2, 3].find_sum(), 6);
        assert_eq!(units.find_sum_by(|u| u.hp), 105);
        assert_eq!(units.count_all(|u| u.hp == 20), 2);
        assert_eq!([true, false, true].count_all_true(), 2);
        assert!(units.is_all(|u| u.hp > 0));
        assert!(!units.is_all(|u| u.speed > 0.0));
        assert!(Vec::<Unit>::new().is_all(|u| u.hp > 1_000));
    }
}
