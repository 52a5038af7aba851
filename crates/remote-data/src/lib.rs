//! Four-state container for data obtained from a remote source.
//!
//! [`RemoteData<E, A>`] models the full lifecycle of a remotely fetched
//! value — not yet requested, in flight, failed, or succeeded — as a single
//! sum type, so consumers branch on one value instead of juggling booleans,
//! options, and error slots.
//!
//! The crate is deliberately small and pure: no async runtime, no caching,
//! no retry policy. The driver that performs the actual fetch owns those
//! concerns; it constructs states via the four variants and reads them back
//! via [`RemoteData::fold`], [`RemoteData::fold_with`], or pattern matching
//! (see `examples/fetch_driver.rs`).
//!
//! # Law Sheet
//!
//! Every operation is defined per tag and verified against these laws in
//! `tests/`:
//!
//! | Law | Statement |
//! |-----|-----------|
//! | FUNCTOR-ID | `x.map(id) = x`, payloads moved, never cloned |
//! | FUNCTOR-COMP | `x.map(g ∘ h) = x.map(h).map(g)` |
//! | MONAD-LEFT | `Success(a).and_then(f) = f(a)` |
//! | MONAD-RIGHT | `x.and_then(Success) = x` |
//! | MONAD-ASSOC | `x.and_then(f).and_then(g) = x.and_then(\|a\| f(a).and_then(g))` |
//! | ALT-STICKY | `x.or(y) = x` iff `x` is `Success`, else `y` |
//! | ALT-ZERO | `Initial.or(y) = y` (`Initial` is the identity for `or`) |
//! | AP-TABLE | the 16-entry precedence table of [`RemoteData::ap`], exactly |
//! | ORD-RANK | `Initial < Pending < Failure < Success`, payload on equal rank |
//! | COMBINE-PERM | aggregate merge is permutation-invariant except the first-failure tie-break |
//!
//! # Modules
//!
//! - [`state`] — the sum type, its constructors, and the per-instance
//!   operation set.
//! - [`combine`] — merging many states into one under a fixed precedence.
//! - [`algebra`] — type-constructor witnesses that let generic code
//!   sequence and traverse these containers (and `Option`/`Result`) without
//!   knowing the concrete tag set.

#![forbid(unsafe_code)]

/// Type-constructor witnesses and generic sequencing/traversal.
pub mod algebra;

/// Aggregate merge of many states under a fixed precedence.
pub mod combine;

/// The four-state sum type and its operation set.
pub mod state;

pub use algebra::{
    sequence, Alternative, Applicative, Apply, Foldable, Functor, Kind, Monad, OptionKind,
    RemoteDataKind, ResultKind, Traversable,
};
pub use combine::{combine_all, Combine};
pub use state::RemoteData;
