//! Wrapped indexing, checked swaps, neighbour moves and progress fractions.
//!
//! Index-based mutations never panic. Instead of silently doing nothing they
//! return an outcome, so callers can tell "nothing to do" apart from "bad
//! index".

/// Result of [`IndexExt::swap_checked`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapOutcome {
    /// The two positions were exchanged.
    Swapped,
    /// Both indices were the same; nothing changed.
    SameIndex,
    /// At least one index was out of range; nothing changed.
    OutOfBounds,
}

impl SwapOutcome {
    /// Returns `true` if the slice was modified.
    #[inline]
    pub fn is_swapped(self) -> bool {
        matches!(self, SwapOutcome::Swapped)
    }
}

/// Result of [`IndexExt::move_item`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The element at `from` now sits at `to`.
    Moved { from: usize, to: usize },
    /// The element is already first (moving up) or last (moving down).
    AtBoundary,
    /// The direction clamped to zero. Carries the value that was passed in.
    InvalidDirection(i32),
    /// The index does not exist.
    OutOfBounds,
}

impl MoveOutcome {
    /// Returns `true` if the slice was modified.
    #[inline]
    pub fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Index and ordering helpers for slices.
pub trait IndexExt<T> {
    /// Element at `index` modulo the length. Negative indices clamp to 0.
    ///
    /// Returns `None` only for an empty slice.
    fn get_wrapped(&self, index: isize) -> Option<&T>;

    /// Exchange the elements at `first` and `second` if both are in range.
    fn swap_checked(&mut self, first: usize, second: usize) -> SwapOutcome;

    /// Swap the element at `index` with its neighbour.
    ///
    /// `direction` is clamped to `-1..=1`. `1` moves the element up (towards
    /// index 0), `-1` moves it down.
    fn move_item(&mut self, index: usize, direction: i32) -> MoveOutcome;

    /// Progress fraction of the first element equal to `item`, for progress
    /// bars that walk the slice. `None` when `item` is absent.
    fn progress_of(&self, item: &T) -> Option<f32>
    where
        T: PartialEq;
}

impl<T> IndexExt<T> for [T] {
    fn get_wrapped(&self, index: isize) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let index = index.max(0).unsigned_abs();
        self.get(index % self.len())
    }

    fn swap_checked(&mut self, first: usize, second: usize) -> SwapOutcome {
        if first >= self.len() || second >= self.len() {
            return SwapOutcome::OutOfBounds;
        }
        if first == second {
            return SwapOutcome::SameIndex;
        }
        self.swap(first, second);
        SwapOutcome::Swapped
    }

    fn move_item(&mut self, index: usize, direction: i32) -> MoveOutcome {
        if index >= self.len() {
            return MoveOutcome::OutOfBounds;
        }

        let target = match direction.clamp(-1, 1) {
            1 if index > 0 => index - 1,
            -1 if index + 1 < self.len() => index + 1,
            0 => {
                tracing::error!(direction, "move direction was not in bounds 1 or -1");
                return MoveOutcome::InvalidDirection(direction);
            }
            _ => {
                tracing::debug!(index, direction, "move at boundary ignored");
                return MoveOutcome::AtBoundary;
            }
        };

        self.swap(index, target);
        MoveOutcome::Moved {
            from: index,
            to: target,
        }
    }

    fn progress_of(&self, item: &T) -> Option<f32>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|candidate| candidate == item)
            .map(|index| progress_at(self.len(), index))
    }
}

/// Normalized position of `current` within `count` steps: `current / count`.
///
/// An empty range reports `0.0`.
pub fn progress_at(count: usize, current: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (1.0 / count as f32) * current as f32
}
