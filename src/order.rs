//! The ordering capability. Payloads that implement [`Ordered`] can live in a
//! [`Tree`][crate::tree::Tree], which keeps them sorted and supports search,
//! removal, and balancing. Payloads that only support equality (or nothing at
//! all) can still be collected in a [`Chain`][crate::chain::Chain].
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use bintree::order::Ordered;
//! use bintree::tree::Tree;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Student {
//!     id: (i32, i32),
//!     name: String,
//! }
//!
//! // Students are ordered by id alone.
//! impl Ordered for Student {
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.id.compare(&other.id)
//!     }
//! }
//!
//! let mut tree = Tree::new();
//! tree.insert(Student { id: (2, 7), name: "Ada".into() });
//! tree.insert(Student { id: (1, 9), name: "Grace".into() });
//!
//! assert_eq!(tree.min().map(|s| s.name.as_str()), Some("Grace"));
//! ```

use std::cmp::Ordering;

/// A strict total order over a payload type.
///
/// `compare` must be consistent: antisymmetric, transitive, and returning
/// [`Ordering::Equal`] only for payloads the tree should treat as duplicates.
pub trait Ordered {
    /// Three-way comparison of `self` against `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! ordered_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

ordered_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, (), String,
);

// Floats use the IEEE 754 total order: -0.0 sorts before 0.0 and NaNs sort at
// the ends, so every value has a place.
impl Ordered for f32 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Ordered for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Ordered for str {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    fn compare(&self, other: &Self) -> Ordering {
        T::compare(*self, *other)
    }
}

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    fn compare(&self, other: &Self) -> Ordering {
        T::compare(self, other)
    }
}

impl<T: Ordered> Ordered for std::cmp::Reverse<T> {
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}

/// Lexicographic: the first components decide unless they're equal.
impl<A: Ordered, B: Ordered> Ordered for (A, B) {
    fn compare(&self, other: &Self) -> Ordering {
        self.0
            .compare(&other.0)
            .then_with(|| self.1.compare(&other.1))
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;

    use super::*;

    #[test]
    fn integers_and_strings() {
        assert_eq!(1i32.compare(&2), Ordering::Less);
        assert_eq!("b".compare("a"), Ordering::Greater);
        assert_eq!(String::from("x").compare(&String::from("x")), Ordering::Equal);
    }

    #[test]
    fn floats_are_totally_ordered() {
        assert_eq!(1.5f64.compare(&2.5), Ordering::Less);
        assert_eq!(f64::NAN.compare(&f64::NAN), Ordering::Equal);
        assert_eq!(1.0f64.compare(&f64::NAN), Ordering::Less);
        assert_eq!((-0.0f32).compare(&0.0), Ordering::Less);
    }

    #[test]
    fn pairs_are_lexicographic() {
        assert_eq!((1i32, 9i32).compare(&(2, 0)), Ordering::Less);
        assert_eq!((2i32, 1i32).compare(&(2, 0)), Ordering::Greater);
        assert_eq!((2i32, 0i32).compare(&(2, 0)), Ordering::Equal);
    }

    #[test]
    fn reverse_flips() {
        assert_eq!(Reverse(1i32).compare(&Reverse(2)), Ordering::Greater);
        assert_eq!(Box::new(3u8).compare(&Box::new(3)), Ordering::Equal);
    }
}
