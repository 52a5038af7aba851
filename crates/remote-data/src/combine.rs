//! Merging many remote states into one under a fixed precedence.
//!
//! When a view depends on several independently fetched values, the states
//! collapse into one by precedence:
//!
//! 1. any `Initial` wins — nothing can be shown before everything was asked for
//! 2. else any `Pending` wins
//! 3. else the first `Failure` in argument order wins
//! 4. else all payloads are kept, in argument order
//!
//! The result is independent of argument order except for rule 3's
//! tie-break, which is order-sensitive on purpose. Heterogeneous payload
//! types merge through the [`Combine`] tuple implementations; homogeneous
//! collections collect via [`FromIterator`] or [`combine_all`].

use crate::state::RemoteData;

use RemoteData::{Failure, Initial, Pending, Success};

/// Merge a fixed-size group of remote states into one.
///
/// Implemented for tuples of states sharing an error type but carrying
/// arbitrary payload types; the output payload is the tuple of payloads.
pub trait Combine {
    /// The merged state.
    type Output;

    /// Collapses the group under the precedence described in the module
    /// docs.
    fn combine(self) -> Self::Output;
}

impl<E, A, B> Combine for (RemoteData<E, A>, RemoteData<E, B>) {
    type Output = RemoteData<E, (A, B)>;

    fn combine(self) -> Self::Output {
        match self {
            (Initial, _) | (_, Initial) => Initial,
            (Pending, _) | (_, Pending) => Pending,
            (Failure(e), _) | (_, Failure(e)) => Failure(e),
            (Success(a), Success(b)) => Success((a, b)),
        }
    }
}

impl<E, A, B, C> Combine for (RemoteData<E, A>, RemoteData<E, B>, RemoteData<E, C>) {
    type Output = RemoteData<E, (A, B, C)>;

    fn combine(self) -> Self::Output {
        match self {
            (Initial, _, _) | (_, Initial, _) | (_, _, Initial) => Initial,
            (Pending, _, _) | (_, Pending, _) | (_, _, Pending) => Pending,
            (Failure(e), _, _) | (_, Failure(e), _) | (_, _, Failure(e)) => Failure(e),
            (Success(a), Success(b), Success(c)) => Success((a, b, c)),
        }
    }
}

// Higher arities reduce through the lower ones. The pairwise merge keeps the
// global precedence: a dominant state wins at any nesting depth, and the
// or-pattern order above keeps the leftmost failure.

impl<E, A, B, C, D> Combine
    for (
        RemoteData<E, A>,
        RemoteData<E, B>,
        RemoteData<E, C>,
        RemoteData<E, D>,
    )
{
    type Output = RemoteData<E, (A, B, C, D)>;

    fn combine(self) -> Self::Output {
        let (a, b, c, d) = self;
        ((a, b).combine(), (c, d).combine())
            .combine()
            .map(|((a, b), (c, d))| (a, b, c, d))
    }
}

impl<E, A, B, C, D, F> Combine
    for (
        RemoteData<E, A>,
        RemoteData<E, B>,
        RemoteData<E, C>,
        RemoteData<E, D>,
        RemoteData<E, F>,
    )
{
    type Output = RemoteData<E, (A, B, C, D, F)>;

    fn combine(self) -> Self::Output {
        let (a, b, c, d, f) = self;
        ((a, b, c).combine(), (d, f).combine())
            .combine()
            .map(|((a, b, c), (d, f))| (a, b, c, d, f))
    }
}

/// Collects an iterator of states into one state of all payloads.
///
/// A single explicit pass, not repeated pairwise application: the scan exits
/// early only on `Initial` (which no later element can override), remembers
/// whether any `Pending` was seen, keeps the first error, and otherwise
/// accumulates payloads in iteration order.
impl<E, A, V> FromIterator<RemoteData<E, A>> for RemoteData<E, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = RemoteData<E, A>>,
    {
        let mut any_pending = false;
        let mut first_failure: Option<E> = None;
        let mut values = Vec::new();

        for state in iter {
            match state {
                Initial => return Initial,
                Pending => any_pending = true,
                Failure(e) => {
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
                Success(a) => values.push(a),
            }
        }

        if any_pending {
            Pending
        } else if let Some(e) = first_failure {
            Failure(e)
        } else {
            Success(values.into_iter().collect())
        }
    }
}

/// Merges every state in `items` into one `RemoteData` of all payloads.
///
/// Equivalent to `items.into_iter().collect()`, spelled as a function for
/// call sites that read better without the turbofish.
pub fn combine_all<E, A, I>(items: I) -> RemoteData<E, Vec<A>>
where
    I: IntoIterator<Item = RemoteData<E, A>>,
{
    items.into_iter().collect()
}
