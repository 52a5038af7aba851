//! Test utilities for crates working with [`remote_data::RemoteData`].
//!
//! Property tests over the four-state container need values drawn from all
//! four states with controllable payload distributions. The [`strategies`]
//! module provides the proptest building blocks; sibling crates pull this
//! crate in as a dev-dependency.

#![forbid(unsafe_code)]

pub mod strategies;

pub use strategies::{remote_data, resolved, unresolved};
