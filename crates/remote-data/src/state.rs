//! The four-state sum type and its per-instance operation set.
//!
//! [`RemoteData`] is the canonical representation of a value that must be
//! fetched: nothing requested yet, request in flight, request failed, or
//! request succeeded. All transformations consume or borrow and return a new
//! (possibly identical) value; nothing is ever mutated in place.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a value obtained through an external operation.
///
/// The variant set is closed: exactly these four states exist, and the tag
/// can never disagree with its payload (there is no "success without a
/// value"). `Initial` and `Pending` are zero-sized unit variants, so the
/// no-data states cost nothing to construct or copy.
///
/// Operations that do not change state return the value they were given:
/// payloads are moved through unchanged, never cloned or rebuilt. Tests rely
/// on this (they compare `Rc` payload pointers, not just values).
///
/// The variant declaration order is load-bearing: the derived `Ord` ranks
/// `Initial < Pending < Failure < Success`, with payload comparison deciding
/// ties between two `Failure`s or two `Success`es.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RemoteData<E, A> {
    /// No request has been made yet.
    Initial,
    /// A request is in flight.
    Pending,
    /// The request finished with an error.
    Failure(E),
    /// The request finished with a value.
    Success(A),
}

use RemoteData::{Failure, Initial, Pending, Success};

impl<E, A> RemoteData<E, A> {
    // === Predicates ===

    /// Returns true if no request has been made yet.
    pub fn is_initial(&self) -> bool {
        matches!(self, Initial)
    }

    /// Returns true if a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Pending)
    }

    /// Returns true if the request failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Returns true if the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Converts from `&RemoteData<E, A>` to `RemoteData<&E, &A>`.
    ///
    /// Useful for running the consuming operations against a borrowed value.
    pub fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            Initial => Initial,
            Pending => Pending,
            Failure(e) => Failure(e),
            Success(a) => Success(a),
        }
    }

    // === Transformation ===

    /// Applies `f` to a `Success` payload; every other state passes through
    /// unchanged.
    pub fn map<B, F>(self, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Initial => Initial,
            Pending => Pending,
            Failure(e) => Failure(e),
            Success(a) => Success(f(a)),
        }
    }

    /// Applies `f` to a `Failure` payload; every other state passes through
    /// unchanged.
    pub fn map_failure<G, F>(self, f: F) -> RemoteData<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Initial => Initial,
            Pending => Pending,
            Failure(e) => Failure(f(e)),
            Success(a) => Success(a),
        }
    }

    /// Applies `on_failure` or `on_success` to whichever payload is present.
    pub fn bimap<G, B, F, S>(self, on_failure: F, on_success: S) -> RemoteData<G, B>
    where
        F: FnOnce(E) -> G,
        S: FnOnce(A) -> B,
    {
        match self {
            Initial => Initial,
            Pending => Pending,
            Failure(e) => Failure(on_failure(e)),
            Success(a) => Success(on_success(a)),
        }
    }

    /// Sequences a dependent computation: on `Success(a)` the result is
    /// `f(a)` in its entirety; every other state short-circuits.
    pub fn and_then<B, F>(self, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        match self {
            Initial => Initial,
            Pending => Pending,
            Failure(e) => Failure(e),
            Success(a) => f(a),
        }
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// `self` carries the argument, `other` carries the function. The
    /// precedence is fixed, first match wins:
    ///
    /// 1. `self` is `Initial`
    /// 2. `other` is `Initial`
    /// 3. `self` is `Pending`
    /// 4. `other` is `Pending`
    /// 5. `other` is `Failure` — the function-side failure wins
    /// 6. `self` is `Failure`
    /// 7. both `Success` — apply
    ///
    /// Nothing is known until both sides have been requested, hence `Initial`
    /// dominating everything. Note the asymmetry of arms 5 and 6: between two
    /// failures the function-side error is kept. This is deliberate and
    /// relied upon; do not "fix" it to first-failure-wins.
    pub fn ap<B, F>(self, other: RemoteData<E, F>) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, other) {
            (Initial, _) => Initial,
            (_, Initial) => Initial,
            (Pending, _) => Pending,
            (_, Pending) => Pending,
            (_, Failure(e)) => Failure(e),
            (Failure(e), _) => Failure(e),
            (Success(a), Success(f)) => Success(f(a)),
        }
    }

    /// Extends a computation over the whole state rather than the payload:
    /// on `Success` the result is `Success(f(&self))`; every other state
    /// passes through unchanged.
    pub fn extend<B, F>(self, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(&RemoteData<E, A>) -> B,
    {
        match self {
            Initial => Initial,
            Pending => Pending,
            Failure(e) => Failure(e),
            whole @ Success(_) => {
                let b = f(&whole);
                Success(b)
            }
        }
    }

    // === Alternatives ===

    /// Keeps `self` if it is `Success`; otherwise yields `other`
    /// unconditionally, even when `other` is a lesser state.
    pub fn or(self, other: RemoteData<E, A>) -> RemoteData<E, A> {
        match self {
            settled @ Success(_) => settled,
            _ => other,
        }
    }

    /// Lazy [`RemoteData::or`]: the alternative is only built when `self` is
    /// not `Success`.
    pub fn or_else<F>(self, f: F) -> RemoteData<E, A>
    where
        F: FnOnce() -> RemoteData<E, A>,
    {
        match self {
            settled @ Success(_) => settled,
            _ => f(),
        }
    }

    /// Gives a `Failure` one chance to become a `Success`: when `f` maps the
    /// error to `Some(a)` the state upgrades to `Success(a)`, otherwise the
    /// failure is kept. Other states pass through unchanged.
    pub fn recover<F>(self, f: F) -> RemoteData<E, A>
    where
        F: FnOnce(&E) -> Option<A>,
    {
        match self {
            Failure(e) => match f(&e) {
                Some(a) => Success(a),
                None => Failure(e),
            },
            other => other,
        }
    }

    // === Folding and extraction ===

    /// Folds the payload (if any) into an accumulator: `Success(a)` yields
    /// `f(seed, a)`, every other state yields the seed untouched.
    pub fn reduce<B, F>(self, seed: B, f: F) -> B
    where
        F: FnOnce(B, A) -> B,
    {
        match self {
            Success(a) => f(seed, a),
            _ => seed,
        }
    }

    /// Collapses all four states into one result. The no-data states take
    /// eager values; the payload states take functions.
    pub fn fold<B, F, S>(self, initial: B, pending: B, on_failure: F, on_success: S) -> B
    where
        F: FnOnce(E) -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Initial => initial,
            Pending => pending,
            Failure(e) => on_failure(e),
            Success(a) => on_success(a),
        }
    }

    /// Fully lazy [`RemoteData::fold`]: every arm is a function, evaluated
    /// only for the active state.
    pub fn fold_with<B, I, P, F, S>(
        self,
        on_initial: I,
        on_pending: P,
        on_failure: F,
        on_success: S,
    ) -> B
    where
        I: FnOnce() -> B,
        P: FnOnce() -> B,
        F: FnOnce(E) -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Initial => on_initial(),
            Pending => on_pending(),
            Failure(e) => on_failure(e),
            Success(a) => on_success(a),
        }
    }

    /// Returns the `Success` payload, or `default` for every other state.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Success(a) => a,
            _ => default,
        }
    }

    /// Returns the `Success` payload, or computes a fallback for every other
    /// state.
    pub fn unwrap_or_else<F>(self, f: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Success(a) => a,
            _ => f(),
        }
    }

    /// Returns the `Success` payload, or `A::default()` for every other
    /// state.
    pub fn unwrap_or_default(self) -> A
    where
        A: Default,
    {
        match self {
            Success(a) => a,
            _ => A::default(),
        }
    }

    // === Conversions ===

    /// Returns the `Success` payload, discarding every other state.
    pub fn success(self) -> Option<A> {
        match self {
            Success(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the `Failure` payload, discarding every other state.
    pub fn failure(self) -> Option<E> {
        match self {
            Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Lifts a settled `Result` into the corresponding settled state.
    pub fn from_result(result: Result<A, E>) -> RemoteData<E, A> {
        match result {
            Ok(a) => Success(a),
            Err(e) => Failure(e),
        }
    }

    /// Lifts an `Option` into a settled state, computing the error for
    /// `None`.
    pub fn from_option<F>(option: Option<A>, on_none: F) -> RemoteData<E, A>
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(a) => Success(a),
            None => Failure(on_none()),
        }
    }

    // === Comparator-injected relations ===

    /// Tag-discriminating equality with payload comparison supplied by the
    /// caller, for payload types without `PartialEq`.
    pub fn eq_by<F, G>(&self, other: &RemoteData<E, A>, eq_failure: F, eq_success: G) -> bool
    where
        F: FnOnce(&E, &E) -> bool,
        G: FnOnce(&A, &A) -> bool,
    {
        match (self, other) {
            (Initial, Initial) | (Pending, Pending) => true,
            (Failure(a), Failure(b)) => eq_failure(a, b),
            (Success(x), Success(y)) => eq_success(x, y),
            _ => false,
        }
    }

    /// Rank-then-payload total order with payload comparison supplied by the
    /// caller, for payload types without `Ord`. The rank is
    /// `Initial < Pending < Failure < Success`; equal-rank no-data states
    /// compare equal.
    pub fn cmp_by<F, G>(&self, other: &RemoteData<E, A>, cmp_failure: F, cmp_success: G) -> Ordering
    where
        F: FnOnce(&E, &E) -> Ordering,
        G: FnOnce(&A, &A) -> Ordering,
    {
        match (self, other) {
            (Initial, Initial) | (Pending, Pending) => Ordering::Equal,
            (Failure(a), Failure(b)) => cmp_failure(a, b),
            (Success(x), Success(y)) => cmp_success(x, y),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Position of the tag in the lifecycle order.
    fn rank(&self) -> u8 {
        match self {
            Initial => 0,
            Pending => 1,
            Failure(_) => 2,
            Success(_) => 3,
        }
    }
}

/// The default state is `Initial`: nothing has been requested.
impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        Initial
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(result: Result<A, E>) -> Self {
        RemoteData::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn map_transforms_only_success() {
        let double = |x: i32| x * 2;
        assert_eq!(RemoteData::<&str, i32>::Initial.map(double), Initial);
        assert_eq!(RemoteData::<&str, i32>::Pending.map(double), Pending);
        assert_eq!(RemoteData::<&str, i32>::Failure("foo").map(double), Failure("foo"));
        assert_eq!(RemoteData::<&str, i32>::Success(123).map(double), Success(246));
    }

    #[test]
    fn no_op_branches_move_payloads_without_cloning() {
        let error = Rc::new("boom".to_string());
        let failed: RemoteData<Rc<String>, i32> = Failure(Rc::clone(&error));

        let mapped = failed.map(|x| x * 2);
        let survivor = mapped.failure().unwrap_or_default();
        assert!(
            Rc::ptr_eq(&survivor, &error),
            "map must move the failure payload through, not clone it"
        );

        let value = Rc::new(41);
        let settled: RemoteData<String, Rc<i32>> = Success(Rc::clone(&value));
        let kept = settled.or(Pending);
        assert_matches!(&kept, Success(v) if Rc::ptr_eq(v, &value));
    }

    #[test]
    fn map_failure_transforms_only_failure() {
        let upper = |e: &str| e.to_uppercase();
        assert_eq!(RemoteData::<&str, i32>::Failure("foo").map_failure(upper), Failure("FOO".to_string()));
        assert_eq!(RemoteData::<&str, i32>::Success(1).map_failure(upper), Success(1));
        assert_eq!(RemoteData::<&str, i32>::Initial.map_failure(upper), Initial);
    }

    #[test]
    fn bimap_touches_whichever_payload_exists() {
        let states: RemoteData<&str, i32> = Failure("nope");
        assert_eq!(states.bimap(str::len, |x| x + 1), Failure(4));
        let states: RemoteData<&str, i32> = Success(9);
        assert_eq!(states.bimap(str::len, |x| x + 1), Success(10));
    }

    #[test]
    fn recover_upgrades_matching_failures() {
        let cached: RemoteData<&str, i32> = Failure("stale");
        assert_eq!(cached.recover(|e| (*e == "stale").then_some(7)), Success(7));

        let fatal: RemoteData<&str, i32> = Failure("gone");
        assert_eq!(fatal.recover(|e| (*e == "stale").then_some(7)), Failure("gone"));

        let waiting: RemoteData<&str, i32> = Pending;
        assert_eq!(waiting.recover(|_| Some(7)), Pending);
    }

    #[test]
    fn extend_sees_the_whole_state() {
        let succeeded: RemoteData<&str, i32> = Success(3);
        assert_eq!(succeeded.extend(|s| s.as_ref().unwrap_or(&0) + 1), Success(4));

        let failed: RemoteData<&str, i32> = Failure("foo");
        assert_eq!(failed.extend(|_| 1), Failure("foo"));
    }

    #[test]
    fn unwrap_family_extracts_or_falls_back() {
        assert_eq!(RemoteData::<&str, i32>::Success(1).unwrap_or(0), 1);
        assert_eq!(RemoteData::<&str, i32>::Failure("e").unwrap_or(0), 0);
        assert_eq!(RemoteData::<&str, i32>::Initial.unwrap_or_else(|| 0), 0);
        assert_eq!(RemoteData::<&str, i32>::Pending.unwrap_or_default(), 0);
    }

    #[test]
    fn conversions_round_trip_through_std_types() {
        assert_eq!(RemoteData::from(Ok::<_, &str>(5)), Success(5));
        assert_eq!(RemoteData::from(Err::<i32, _>("no")), Failure("no"));
        assert_eq!(RemoteData::<&str, i32>::from_option(Some(5), || "missing"), Success(5));
        assert_eq!(RemoteData::<&str, i32>::from_option(None, || "missing"), Failure("missing"));
        assert_eq!(RemoteData::<&str, i32>::Success(5).success(), Some(5));
        assert_eq!(RemoteData::<&str, i32>::Pending.success(), None);
        assert_eq!(RemoteData::<&str, i32>::Failure("no").failure(), Some("no"));
    }

    #[test]
    fn default_is_initial() {
        assert_eq!(RemoteData::<String, u32>::default(), Initial);
    }

    #[test]
    fn serde_round_trips_every_state() {
        let states: [RemoteData<String, u32>; 4] = [
            Initial,
            Pending,
            Failure("boom".to_string()),
            Success(17),
        ];
        for state in states {
            let encoded = serde_json::to_string(&state).unwrap();
            let decoded: RemoteData<String, u32> = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, state, "serde round trip must preserve {encoded}");
        }
    }
}
