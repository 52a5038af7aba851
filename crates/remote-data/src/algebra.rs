//! Type-constructor witnesses for generic sequencing and traversal.
//!
//! Generic combinator code (fold a list of containers, traverse a container
//! with an effectful function) should not need to know the concrete tag set
//! of [`RemoteData`]. This module packages the container's operations behind
//! small capability traits keyed by a zero-sized *witness* type: the witness
//! is the value such code passes around, and its associated type `Of<A>`
//! names the concrete container.
//!
//! Witnesses are provided for `RemoteData` ([`RemoteDataKind`]) and for the
//! std containers generic traversals commonly target ([`OptionKind`],
//! [`ResultKind`]). [`sequence`] is written purely against the traits, as a
//! demonstration that the descriptor is sufficient.

use std::marker::PhantomData;

use crate::state::RemoteData;

/// A type constructor: the shape `Self::Of<_>` that the capability traits
/// below operate on.
pub trait Kind {
    /// The concrete container holding an `A`.
    type Of<A>;
}

/// Structure-preserving transformation of the contained value.
pub trait Functor: Kind {
    /// Applies `f` inside the container.
    fn map<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> B;
}

/// Application of a contained function to a contained value.
pub trait Apply: Functor {
    /// Applies the function held by `ff` to the value held by `fa`.
    fn ap<A, B, F>(fa: Self::Of<A>, ff: Self::Of<F>) -> Self::Of<B>
    where
        F: FnOnce(A) -> B;

    /// Combines two containers with a binary function, via `map` then `ap`.
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, f: F) -> Self::Of<C>
    where
        F: FnOnce(A, B) -> C,
    {
        let partial = Self::map(fa, |a| move |b| f(a, b));
        Self::ap(fb, partial)
    }
}

/// Lifting a bare value into the container.
pub trait Applicative: Apply {
    /// Wraps `a` in the container's success shape.
    fn of<A>(a: A) -> Self::Of<A>;
}

/// Sequencing of dependent computations.
pub trait Monad: Applicative {
    /// Feeds the contained value into `f`, whose result replaces the
    /// container entirely.
    fn chain<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> Self::Of<B>;
}

/// A "prefer this, else that" merge with an identity element.
pub trait Alternative: Applicative {
    /// The identity for [`Alternative::alt`].
    fn zero<A>() -> Self::Of<A>;

    /// Keeps `fa` when it holds a value, otherwise yields `fb`.
    fn alt<A>(fa: Self::Of<A>, fb: Self::Of<A>) -> Self::Of<A>;
}

/// Folding the contained value (if any) into an accumulator.
pub trait Foldable: Kind {
    /// Left fold: the seed is threaded through every contained value.
    fn reduce<A, B, F>(fa: Self::Of<A>, seed: B, f: F) -> B
    where
        F: FnMut(B, A) -> B;
}

/// Swapping the container with an inner effect.
pub trait Traversable: Functor + Foldable {
    /// Applies the effectful `f` to the contained value and pulls the
    /// effect outside the container.
    fn traverse<G, A, B, F>(fa: Self::Of<A>, f: F) -> G::Of<Self::Of<B>>
    where
        G: Applicative,
        F: FnOnce(A) -> G::Of<B>;
}

// === RemoteData witness ===

/// Witness for `RemoteData<E, _>` with the error type pinned.
pub struct RemoteDataKind<E>(PhantomData<E>);

impl<E> Kind for RemoteDataKind<E> {
    type Of<A> = RemoteData<E, A>;
}

impl<E> Functor for RemoteDataKind<E> {
    fn map<A, B, F>(fa: RemoteData<E, A>, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(f)
    }
}

impl<E> Apply for RemoteDataKind<E> {
    fn ap<A, B, F>(fa: RemoteData<E, A>, ff: RemoteData<E, F>) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        fa.ap(ff)
    }
}

impl<E> Applicative for RemoteDataKind<E> {
    fn of<A>(a: A) -> RemoteData<E, A> {
        RemoteData::Success(a)
    }
}

impl<E> Monad for RemoteDataKind<E> {
    fn chain<A, B, F>(fa: RemoteData<E, A>, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        fa.and_then(f)
    }
}

impl<E> Alternative for RemoteDataKind<E> {
    fn zero<A>() -> RemoteData<E, A> {
        RemoteData::Initial
    }

    fn alt<A>(fa: RemoteData<E, A>, fb: RemoteData<E, A>) -> RemoteData<E, A> {
        fa.or(fb)
    }
}

impl<E> Foldable for RemoteDataKind<E> {
    fn reduce<A, B, F>(fa: RemoteData<E, A>, seed: B, f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.reduce(seed, f)
    }
}

impl<E> Traversable for RemoteDataKind<E> {
    fn traverse<G, A, B, F>(fa: RemoteData<E, A>, f: F) -> G::Of<RemoteData<E, B>>
    where
        G: Applicative,
        F: FnOnce(A) -> G::Of<B>,
    {
        fa.traverse::<G, B, F>(f)
    }
}

impl<E, A> RemoteData<E, A> {
    /// Applies the effectful `f` to a `Success` payload and pulls the effect
    /// outside: `Success(a)` becomes `f(a)` with its result re-wrapped in
    /// `Success`; every other state is lifted unchanged into the effect.
    ///
    /// The target effect is named by its witness, e.g.
    /// `state.traverse::<OptionKind, _, _>(f)`.
    pub fn traverse<G, B, F>(self, f: F) -> G::Of<RemoteData<E, B>>
    where
        G: Applicative,
        F: FnOnce(A) -> G::Of<B>,
    {
        match self {
            RemoteData::Initial => G::of(RemoteData::Initial),
            RemoteData::Pending => G::of(RemoteData::Pending),
            RemoteData::Failure(e) => G::of(RemoteData::Failure(e)),
            RemoteData::Success(a) => G::map(f(a), RemoteData::Success),
        }
    }
}

// === Std container witnesses ===

/// Witness for `Option<_>`.
pub struct OptionKind;

impl Kind for OptionKind {
    type Of<A> = Option<A>;
}

impl Functor for OptionKind {
    fn map<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(f)
    }
}

impl Apply for OptionKind {
    fn ap<A, B, F>(fa: Option<A>, ff: Option<F>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match (fa, ff) {
            (Some(a), Some(f)) => Some(f(a)),
            _ => None,
        }
    }
}

impl Applicative for OptionKind {
    fn of<A>(a: A) -> Option<A> {
        Some(a)
    }
}

impl Monad for OptionKind {
    fn chain<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        fa.and_then(f)
    }
}

impl Alternative for OptionKind {
    fn zero<A>() -> Option<A> {
        None
    }

    fn alt<A>(fa: Option<A>, fb: Option<A>) -> Option<A> {
        fa.or(fb)
    }
}

impl Foldable for OptionKind {
    fn reduce<A, B, F>(fa: Option<A>, seed: B, mut f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Some(a) => f(seed, a),
            None => seed,
        }
    }
}

impl Traversable for OptionKind {
    fn traverse<G, A, B, F>(fa: Option<A>, f: F) -> G::Of<Option<B>>
    where
        G: Applicative,
        F: FnOnce(A) -> G::Of<B>,
    {
        match fa {
            Some(a) => G::map(f(a), Some),
            None => G::of(None),
        }
    }
}

/// Witness for `Result<_, E>` with the error type pinned.
///
/// `Result` has no empty element, so there is deliberately no
/// [`Alternative`] implementation.
pub struct ResultKind<E>(PhantomData<E>);

impl<E> Kind for ResultKind<E> {
    type Of<A> = Result<A, E>;
}

impl<E> Functor for ResultKind<E> {
    fn map<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(f)
    }
}

impl<E> Apply for ResultKind<E> {
    fn ap<A, B, F>(fa: Result<A, E>, ff: Result<F, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (fa, ff) {
            (_, Err(e)) => Err(e),
            (Err(e), Ok(_)) => Err(e),
            (Ok(a), Ok(f)) => Ok(f(a)),
        }
    }
}

impl<E> Applicative for ResultKind<E> {
    fn of<A>(a: A) -> Result<A, E> {
        Ok(a)
    }
}

impl<E> Monad for ResultKind<E> {
    fn chain<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        fa.and_then(f)
    }
}

impl<E> Foldable for ResultKind<E> {
    fn reduce<A, B, F>(fa: Result<A, E>, seed: B, mut f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Ok(a) => f(seed, a),
            Err(_) => seed,
        }
    }
}

impl<E> Traversable for ResultKind<E> {
    fn traverse<G, A, B, F>(fa: Result<A, E>, f: F) -> G::Of<Result<B, E>>
    where
        G: Applicative,
        F: FnOnce(A) -> G::Of<B>,
    {
        match fa {
            Ok(a) => G::map(f(a), Ok),
            Err(e) => G::of(Err(e)),
        }
    }
}

// === Generic combinators ===

/// Folds an iterator of containers into one container of all values,
/// using only the capability traits.
///
/// For `RemoteDataKind` this reproduces the applicative merge: one
/// `Initial` anywhere collapses the whole sequence to `Initial`, then
/// `Pending`, then failures, and only an all-`Success` input produces a
/// `Success` of the collected values.
pub fn sequence<W, A, I>(items: I) -> W::Of<Vec<A>>
where
    W: Applicative,
    I: IntoIterator<Item = W::Of<A>>,
{
    let mut acc = W::of(Vec::new());
    for item in items {
        acc = W::map2(acc, item, |mut values, value| {
            values.push(value);
            values
        });
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use RemoteData::{Failure, Initial, Pending, Success};

    #[test]
    fn zero_is_initial() {
        assert_eq!(RemoteDataKind::<&str>::zero::<i32>(), Initial);
    }

    #[test]
    fn sequence_collapses_to_the_dominant_state() {
        let initial: RemoteData<&str, i32> = Initial;
        let pending: RemoteData<&str, i32> = Pending;
        let failed: RemoteData<&str, i32> = Failure("foo");
        let succeeded: RemoteData<&str, i32> = Success(1);

        assert_eq!(sequence::<RemoteDataKind<&str>, _, _>([initial, succeeded]), Initial);
        assert_eq!(sequence::<RemoteDataKind<&str>, _, _>([pending, succeeded]), Pending);
        assert_eq!(sequence::<RemoteDataKind<&str>, _, _>([failed, succeeded]), Failure("foo"));
    }

    #[test]
    fn sequence_of_successes_collects_in_order() {
        let all = sequence::<RemoteDataKind<&str>, _, _>([Success(123), Success(456)]);
        assert_eq!(all, Success(vec![123, 456]));
    }

    #[test]
    fn sequence_works_for_foreign_containers_too() {
        assert_eq!(sequence::<OptionKind, _, _>([Some(1), Some(2)]), Some(vec![1, 2]));
        assert_eq!(sequence::<OptionKind, _, _>([Some(1), None]), None);
    }

    #[test]
    fn traverse_lifts_non_success_states_unchanged() {
        let gate = |x: i32| if x >= 2 { Some(x) } else { None };

        let initial: RemoteData<&str, i32> = Initial;
        let pending: RemoteData<&str, i32> = Pending;
        let failed: RemoteData<&str, i32> = Failure("foo");

        assert_eq!(initial.traverse::<OptionKind, _, _>(gate), Some(Initial));
        assert_eq!(pending.traverse::<OptionKind, _, _>(gate), Some(Pending));
        assert_eq!(failed.traverse::<OptionKind, _, _>(gate), Some(Failure("foo")));
    }

    #[test]
    fn traverse_threads_the_effect_through_success() {
        let gate = |x: i32| if x >= 2 { Some(x) } else { None };

        let small: RemoteData<&str, i32> = Success(1);
        let large: RemoteData<&str, i32> = Success(3);

        assert_eq!(small.traverse::<OptionKind, _, _>(gate), None);
        assert_eq!(large.traverse::<OptionKind, _, _>(gate), Some(Success(3)));
    }

    #[test]
    fn traverse_into_result_carries_the_error_out() {
        let parse = |s: &str| s.parse::<i32>();

        let ready: RemoteData<&str, &str> = Success("42");
        assert_eq!(
            ready.traverse::<ResultKind<std::num::ParseIntError>, _, _>(parse),
            Ok(Success(42))
        );

        let broken: RemoteData<&str, &str> = Success("not a number");
        assert!(broken.traverse::<ResultKind<std::num::ParseIntError>, _, _>(parse).is_err());

        let waiting: RemoteData<&str, &str> = Pending;
        assert_eq!(
            waiting.traverse::<ResultKind<std::num::ParseIntError>, _, _>(parse),
            Ok(Pending)
        );
    }

    #[test]
    fn descriptor_operations_match_the_inherent_ones() {
        let succeeded: RemoteData<&str, i32> = Success(2);

        assert_eq!(RemoteDataKind::map(succeeded, |x| x + 1), Success(3));
        assert_eq!(RemoteDataKind::<&str>::of(2), succeeded);
        assert_eq!(RemoteDataKind::chain(succeeded, |x| Success(x * 10)), Success(20));
        assert_eq!(RemoteDataKind::alt(Failure("e"), succeeded), succeeded);
        assert_eq!(RemoteDataKind::reduce(succeeded, 1, |acc, x| acc + x), 3);
    }
}
