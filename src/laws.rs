//! Executable monad laws.
//!
//! Monads built from functions (Reader, State, Continuation) cannot be
//! compared directly, and infinite streams cannot be compared in full. The
//! [`Observable`] trait reduces a monadic value to something comparable,
//! given a probe: the environment of a Reader, the initial state of a
//! State, the continuation of a Continuation, the prefix length of a
//! Stream. Two values are observationally equal when their observations
//! under the same probe are equal.
//!
//! Each check builds both sides of one law, observes them, and returns a
//! [`LawViolation`] if they differ. Checks emit `tracing` events: `debug`
//! when a law holds and `warn` when it is violated.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::laws::{check_associativity, check_left_identity, check_right_identity};
//! use monadkit::persistent::List;
//!
//! let mirror = |x: i32| List::from_iter([x, -x]);
//! let double = |x: i32| List::unit(x * 2);
//!
//! assert!(check_left_identity::<List<i32>, _, _>(3, mirror, &()).is_ok());
//! assert!(check_right_identity(List::from_iter([1, 2, 3]), &()).is_ok());
//! assert!(check_associativity(List::from_iter([1, 2]), mirror, double, &()).is_ok());
//! ```

use std::fmt;

use crate::typeclass::{Identity, Monad, TypeConstructor};

/// A value that can be reduced to a comparable observation.
pub trait Observable {
    /// Input needed to observe the value.
    type Probe;

    /// What observing produces.
    type Observation: PartialEq + fmt::Debug;

    /// Observes `self` under `probe`.
    fn observe(&self, probe: &Self::Probe) -> Self::Observation;
}

/// The three monad laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `unit(a).flat_map(f) == f(a)`
    LeftIdentity,
    /// `m.flat_map(unit) == m`
    RightIdentity,
    /// `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
    Associativity,
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::LeftIdentity => "left identity",
            Self::RightIdentity => "right identity",
            Self::Associativity => "associativity",
        })
    }
}

/// Two sides of a law that observed differently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{law} violated by `{subject}`: {left} != {right}")]
pub struct LawViolation {
    /// The violated law.
    pub law: Law,
    /// Type name of the monad under test.
    pub subject: &'static str,
    /// Debug rendering of the left-hand observation.
    pub left: String,
    /// Debug rendering of the right-hand observation.
    pub right: String,
}

fn compare<O>(law: Law, subject: &'static str, left: &O, right: &O) -> Result<(), LawViolation>
where
    O: PartialEq + fmt::Debug,
{
    if left == right {
        tracing::debug!(law = %law, subject, "monad law holds");
        Ok(())
    } else {
        let violation = LawViolation {
            law,
            subject,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        };
        tracing::warn!(
            law = %law,
            subject,
            left = %violation.left,
            right = %violation.right,
            "monad law violated"
        );
        Err(violation)
    }
}

/// Checks `M::unit(value).flat_map(function) == function(value)`.
///
/// # Errors
///
/// Returns a [`LawViolation`] if the two sides observe differently under `probe`.
pub fn check_left_identity<M, B, F>(
    value: M::Inner,
    function: F,
    probe: &<M::WithType<B> as Observable>::Probe,
) -> Result<(), LawViolation>
where
    M: Monad,
    M::Inner: Clone,
    B: Clone + 'static,
    F: Fn(M::Inner) -> M::WithType<B> + Clone + 'static,
    M::WithType<B>: Observable,
{
    let left = M::unit(value.clone()).flat_map(function.clone());
    let right = function(value);
    compare(
        Law::LeftIdentity,
        std::any::type_name::<M>(),
        &left.observe(probe),
        &right.observe(probe),
    )
}

/// Checks `monad.flat_map(unit) == monad`.
///
/// # Errors
///
/// Returns a [`LawViolation`] if the two sides observe differently under `probe`.
pub fn check_right_identity<M>(monad: M, probe: &M::Probe) -> Result<(), LawViolation>
where
    M: Monad + Observable + Clone + 'static,
    M::Inner: Clone + 'static,
    M::WithType<M::Inner>: Monad + Observable<Probe = M::Probe, Observation = M::Observation>,
{
    let left = monad
        .clone()
        .flat_map(<M::WithType<M::Inner> as Monad>::unit);
    compare(
        Law::RightIdentity,
        std::any::type_name::<M>(),
        &left.observe(probe),
        &monad.observe(probe),
    )
}

/// Checks `monad.flat_map(f).flat_map(g) == monad.flat_map(|x| f(x).flat_map(g))`.
///
/// # Errors
///
/// Returns a [`LawViolation`] if the two sides observe differently under `probe`.
pub fn check_associativity<M, B, C, F, G>(
    monad: M,
    first: F,
    second: G,
    probe: &<M::WithType<C> as Observable>::Probe,
) -> Result<(), LawViolation>
where
    M: Monad + Clone,
    B: Clone + 'static,
    C: Clone + 'static,
    F: Fn(M::Inner) -> M::WithType<B> + Clone + 'static,
    G: Fn(B) -> M::WithType<C> + Clone + 'static,
    M::WithType<B>: Monad + TypeConstructor<WithType<C> = M::WithType<C>>,
    M::WithType<C>: Observable,
{
    let left: M::WithType<C> = monad
        .clone()
        .flat_map::<B, F>(first.clone())
        .flat_map::<C, G>(second.clone());
    let right: M::WithType<C> =
        monad.flat_map::<C, _>(move |value| first(value).flat_map::<C, G>(second.clone()));
    compare(
        Law::Associativity,
        std::any::type_name::<M>(),
        &left.observe(probe),
        &right.observe(probe),
    )
}

// =============================================================================
// Observable Implementations
// =============================================================================

impl<A: Clone + PartialEq + fmt::Debug> Observable for Identity<A> {
    type Probe = ();
    type Observation = A;

    fn observe(&self, _: &()) -> A {
        self.as_inner().clone()
    }
}

#[cfg(feature = "persistent")]
mod persistent_observations {
    use super::Observable;
    use crate::persistent::{List, Stream};
    use std::fmt;

    impl<T: Clone + PartialEq + fmt::Debug> Observable for List<T> {
        type Probe = ();
        type Observation = Vec<T>;

        fn observe(&self, _: &()) -> Vec<T> {
            self.to_vec()
        }
    }

    /// Streams are observed through a finite prefix of the given length.
    impl<T: Clone + PartialEq + fmt::Debug + 'static> Observable for Stream<T> {
        type Probe = usize;
        type Observation = Vec<T>;

        fn observe(&self, prefix: &usize) -> Vec<T> {
            self.take(*prefix).to_vec()
        }
    }
}

#[cfg(feature = "control")]
mod control_observations {
    use super::Observable;
    use crate::control::{Continuation, Continue, Either, Maybe};
    use std::fmt;
    use std::rc::Rc;

    impl<T: Clone + PartialEq + fmt::Debug> Observable for Maybe<T> {
        type Probe = ();
        type Observation = Self;

        fn observe(&self, _: &()) -> Self {
            self.clone()
        }
    }

    impl<L, R> Observable for Either<L, R>
    where
        L: Clone + PartialEq + fmt::Debug,
        R: Clone + PartialEq + fmt::Debug,
    {
        type Probe = ();
        type Observation = Self;

        fn observe(&self, _: &()) -> Self {
            self.clone()
        }
    }

    /// Continuations are observed by running them with the probe as continuation.
    impl<R, A> Observable for Continuation<R, A>
    where
        R: PartialEq + fmt::Debug + 'static,
        A: 'static,
    {
        type Probe = Continue<A, R>;
        type Observation = R;

        fn observe(&self, continuation: &Continue<A, R>) -> R {
            self.run_with(Rc::clone(continuation))
        }
    }
}

#[cfg(feature = "effect")]
mod effect_observations {
    use super::Observable;
    use crate::effect::{Reader, State, Writer};
    use std::fmt;

    impl<W, A> Observable for Writer<W, A>
    where
        W: Clone + PartialEq + fmt::Debug,
        A: Clone + PartialEq + fmt::Debug,
    {
        type Probe = ();
        type Observation = (A, W);

        fn observe(&self, _: &()) -> (A, W) {
            (self.value().clone(), self.log().clone())
        }
    }

    /// Readers are observed by running them in the probe environment.
    impl<R, A> Observable for Reader<R, A>
    where
        R: Clone + 'static,
        A: PartialEq + fmt::Debug + 'static,
    {
        type Probe = R;
        type Observation = A;

        fn observe(&self, environment: &R) -> A {
            self.run(environment.clone())
        }
    }

    /// States are observed by running them from the probe state.
    impl<S, A> Observable for State<S, A>
    where
        S: Clone + PartialEq + fmt::Debug + 'static,
        A: PartialEq + fmt::Debug + 'static,
    {
        type Probe = S;
        type Observation = (A, S);

        fn observe(&self, initial_state: &S) -> (A, S) {
            self.run(initial_state.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Breaks right identity by counting binds in the payload.
    #[derive(Debug, Clone, PartialEq)]
    struct Counted<A> {
        value: A,
        binds: usize,
    }

    impl<A> TypeConstructor for Counted<A> {
        type Inner = A;
        type WithType<B> = Counted<B>;
    }

    impl<A> crate::typeclass::Functor for Counted<A> {
        fn fmap<B, F>(self, function: F) -> Counted<B>
        where
            B: Clone + 'static,
            F: Fn(A) -> B + 'static,
        {
            Counted {
                value: function(self.value),
                binds: self.binds,
            }
        }
    }

    impl<A> Monad for Counted<A> {
        fn unit(value: A) -> Self {
            Self { value, binds: 0 }
        }

        fn flat_map<B, F>(self, function: F) -> Counted<B>
        where
            B: Clone + 'static,
            F: Fn(A) -> Counted<B> + 'static,
        {
            let next = function(self.value);
            Counted {
                value: next.value,
                binds: self.binds + next.binds + 1,
            }
        }
    }

    impl<A: Clone + PartialEq + fmt::Debug> Observable for Counted<A> {
        type Probe = ();
        type Observation = Self;

        fn observe(&self, _: &()) -> Self {
            self.clone()
        }
    }

    #[rstest]
    fn identity_satisfies_all_laws() {
        let increment = |x: i32| Identity::new(x + 1);
        let double = |x: i32| Identity::new(x * 2);
        assert_eq!(check_left_identity::<Identity<i32>, _, _>(5, increment, &()), Ok(()));
        assert_eq!(check_right_identity(Identity::new(5), &()), Ok(()));
        assert_eq!(check_associativity(Identity::new(5), increment, double, &()), Ok(()));
    }

    #[rstest]
    fn associativity_across_element_types() {
        let render = |x: i32| Identity::new(format!("{x}!"));
        let measure = |text: String| Identity::new(text.len());
        assert_eq!(check_associativity(Identity::new(-42), render, measure, &()), Ok(()));
    }

    #[cfg(feature = "persistent")]
    #[rstest]
    fn associativity_of_list_is_checked() {
        use crate::persistent::List;

        let mirror = |x: i32| List::from_iter([x, -x]);
        let describe = |x: i32| List::unit(x.to_string());
        let list: List<i32> = (1..=3).collect();
        assert_eq!(check_associativity(list, mirror, describe, &()), Ok(()));
    }

    #[rstest]
    fn counting_monad_is_reported() {
        let violation = check_right_identity(Counted { value: 1, binds: 0 }, &());
        let Err(violation) = violation else {
            panic!("expected a violation");
        };
        assert_eq!(violation.law, Law::RightIdentity);
        assert!(violation.subject.contains("Counted"));
        assert!(violation.to_string().starts_with("right identity violated by"));
    }

    #[rstest]
    #[case(Law::LeftIdentity, "left identity")]
    #[case(Law::RightIdentity, "right identity")]
    #[case(Law::Associativity, "associativity")]
    fn law_names(#[case] law: Law, #[case] expected: &str) {
        assert_eq!(law.to_string(), expected);
    }
}
