//! Extension traits for everyday collection chores.
//!
//! `collection-ext` layers small, stateless helpers over `[T]`, `Vec<T>`,
//! `HashMap` and `BTreeMap`: random picks and shuffles with an injected
//! generator, wrapped indexing, checked swaps and neighbour moves, null and
//! duplicate cleanup, zero-baseline reductions, projections, and map
//! utilities.
//!
//! - [`SearchExt`]: equality, predicate and kind lookups
//! - [`RandomExt`]: random element, Fisher–Yates shuffle, unique picks
//! - [`IndexExt`]: wrapped indexing, [`SwapOutcome`], [`MoveOutcome`]
//! - [`NullableExt`], [`CleanupExt`]: removal and replacement
//! - [`MapExt`]: fallbacks, upserts, value conversion
//! - [`AggregateExt`]: maxima, minima, sums, counts
//! - [`ProjectExt`]: order-preserving projections
//!
//! Nothing here panics on bad input. Empty results come back as `None` or a
//! default; index mistakes come back as outcome enums; the two genuine caller
//! errors (a missing key, a missing map) come back as [`CollectionError`] and
//! are logged through `tracing`.
//!
//! ```rust
//! use collection_ext::prelude::*;
//! use collection_ext::PcgRng;
//!
//! let mut deck: Vec<u32> = (1..=10).collect();
//! deck.shuffle_with(&mut PcgRng::new(7));
//! assert_eq!(deck.find_sum(), 55);
//! assert_eq!(deck.swap_checked(0, 99), SwapOutcome::OutOfBounds);
//! ```
pub mod aggregate;
pub mod cleanup;
pub mod dict;
pub mod error;
pub mod index;
pub mod project;
pub mod random;
pub mod rng;
pub mod search;
pub mod text;

pub use aggregate::{AggregateExt, Baseline, WrappingSum};
pub use cleanup::{CleanupExt, NullableExt};
pub use dict::{MapExt, Upsert};
pub use error::{CollectionError, ErrorSeverity};
pub use index::{IndexExt, MoveOutcome, SwapOutcome, progress_at};
pub use project::ProjectExt;
pub use random::RandomExt;
pub use rng::PcgRng;
pub use search::{KindOf, SearchExt, is_null_or_empty};
pub use text::{DisplayMap, EntryDisplay, format_map, joined, joined_lines};

/// Every extension trait plus the outcome types, for a single glob import.
pub mod prelude {
    pub use crate::{
        AggregateExt, CleanupExt, IndexExt, KindOf, MapExt, MoveOutcome, NullableExt, ProjectExt,
        RandomExt, SearchExt, SwapOutcome, Upsert,
    };
}
