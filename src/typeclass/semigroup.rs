//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use super::Identity;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, leaving both intact.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every element of a non-empty iterator, left to right.
    /// Returns `None` for an empty iterator.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("left");
        let right = String::from("right");
        assert_eq!(left.combine_ref(&right), "leftright");
        assert_eq!(left, "left");
    }

    #[rstest]
    fn vec_combine_concatenates() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let combined = (String::from("a"), vec![1]).combine((String::from("b"), vec![2]));
        assert_eq!(combined, (String::from("ab"), vec![1, 2]));
    }

    #[rstest]
    fn identity_combines_inner() {
        assert_eq!(
            Identity::new(String::from("x")).combine(Identity::new(String::from("y"))),
            Identity::new(String::from("xy"))
        );
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec!["a"], Some("a"))]
    #[case(vec!["a", "b", "c"], Some("abc"))]
    fn reduce_all_combines_left_to_right(
        #[case] parts: Vec<&str>,
        #[case] expected: Option<&str>,
    ) {
        let result = String::reduce_all(parts.into_iter().map(String::from));
        assert_eq!(result.as_deref(), expected);
    }

    #[rstest]
    fn string_associativity() {
        let a = String::from("a");
        let b = String::from("b");
        let c = String::from("c");
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }
}
