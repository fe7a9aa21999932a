//! Do-notation for any type with a `flat_map` method.
//!
//! `eff!` turns a sequence of statements into nested `flat_map` calls:
//!
//! - `binder <= monad;` binds the contents of `monad`. The binder is a
//!   single token tree: a name, `_`, or a parenthesized tuple pattern
//! - `monad;` runs `monad` for its effect and discards its value
//! - `let pattern = expression;` is an ordinary binding
//! - the last expression is the result and must be a monadic value
//!
//! Each bind becomes a `move` closure, so values bound earlier are
//! captured by the later closures. Bound values that are used inside a
//! nested bind of a multi-shot monad (List, Stream, Reader, State,
//! Continuation) must be `Copy`, or cloned into a `let` first.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::eff;
//! use monadkit::persistent::List;
//!
//! let pairs: List<(i32, char)> = eff! {
//!     number <= List::from_iter([1, 2]);
//!     letter <= List::from_iter(['a', 'b']);
//!     List::unit((number, letter))
//! };
//! assert_eq!(pairs.to_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

/// Chains monadic computations in do-notation.
///
/// `x <= m;` binds through `m.flat_map`, `m;` sequences without binding,
/// `let x = e;` binds a plain value, and the final expression is the
/// monadic result.
///
/// ```rust
/// use monadkit::eff;
/// use monadkit::control::Maybe;
///
/// let sum = eff! {
///     x <= Maybe::just(1);
///     y <= Maybe::just(2);
///     Maybe::just(x + y)
/// };
/// assert_eq!(sum, Maybe::just(3));
/// ```
#[macro_export]
macro_rules! eff {
    ($binder:tt <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$binder| $crate::eff!($($rest)+))
    };

    (let $binder:pat = $value:expr ; $($rest:tt)+) => {{
        let $binder = $value;
        $crate::eff!($($rest)+)
    }};

    // Sequencing: the value of `$monad` is dropped.
    ($monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| $crate::eff!($($rest)+))
    };

    ($result:expr) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use crate::control::{Continuation, Maybe};
    use crate::effect::{Reader, State, Writer};
    use crate::persistent::List;
    use rstest::rstest;

    #[rstest]
    fn maybe_bind() {
        let result = eff! {
            x <= Maybe::just(5);
            y <= Maybe::just(10);
            Maybe::just(x + y)
        };
        assert_eq!(result, Maybe::just(15));
    }

    #[rstest]
    fn maybe_short_circuits() {
        let result: Maybe<i32> = eff! {
            x <= Maybe::just(5);
            y <= Maybe::<i32>::nothing();
            Maybe::just(x + y)
        };
        assert_eq!(result, Maybe::nothing());
    }

    #[rstest]
    fn list_comprehension_with_let() {
        let result: List<i32> = eff! {
            x <= List::from_iter([1, 2, 3]);
            let negated = -x;
            List::from_iter([x, negated])
        };
        assert_eq!(result.to_vec(), vec![1, -1, 2, -2, 3, -3]);
    }

    #[rstest]
    fn tuple_pattern_bind() {
        let result = eff! {
            (left, right) <= Maybe::just((2, 3));
            Maybe::just(left * right)
        };
        assert_eq!(result, Maybe::just(6));
    }

    #[rstest]
    fn wildcard_bind_keeps_writer_log() {
        let result: Writer<String, i32> = eff! {
            _ <= Writer::tell("hello ".to_string());
            _ <= Writer::tell("world".to_string());
            Writer::unit(1)
        };
        assert_eq!(result.run(), (1, "hello world".to_string()));
    }

    #[rstest]
    fn bare_statement_sequences_writer_log() {
        let result: Writer<String, i32> = eff! {
            Writer::tell("a".to_string());
            x <= Writer::unit(2);
            Writer::tell("b".to_string());
            Writer::unit(x * 10)
        };
        assert_eq!(result.run(), (20, "ab".to_string()));
    }

    #[rstest]
    fn bare_statement_short_circuits_on_nothing() {
        let result: Maybe<i32> = eff! {
            Maybe::<()>::nothing();
            Maybe::just(1)
        };
        assert_eq!(result, Maybe::nothing());
    }

    #[rstest]
    fn let_binds_array_patterns() {
        let result = eff! {
            x <= Maybe::just(4);
            let [low, high] = [x - 1, x + 1];
            Maybe::just(low * high)
        };
        assert_eq!(result, Maybe::just(15));
    }

    #[rstest]
    fn reader_bind() {
        let computation: Reader<i32, i32> = eff! {
            x <= Reader::ask();
            Reader::unit(x + 10)
        };
        assert_eq!(computation.run(1), 11);
    }

    #[rstest]
    fn state_bind() {
        let computation: State<u32, (u32, u32)> = eff! {
            first <= State::fresh();
            second <= State::fresh();
            State::unit((first, second))
        };
        assert_eq!(computation.run(0), ((0, 1), 2));
    }

    #[rstest]
    fn continuation_bind() {
        let computation: Continuation<i64, i64> = eff! {
            x <= Continuation::unit(2);
            let squared = x * x;
            y <= Continuation::unit(3);
            Continuation::unit(squared + y * y)
        };
        assert_eq!(computation.eval(), 13);
    }
}
