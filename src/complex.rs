//! Complex numbers as tree payloads.
//!
//! Complex numbers have no natural order, so [`Complex`] is ordered
//! lexicographically: by real part, then by imaginary part.
//!
//! # Examples
//!
//! ```
//! use bintree::complex::Complex;
//! use bintree::traversal::Traverse;
//! use bintree::tree::Tree;
//!
//! let tree: Tree<_> = [
//!     Complex::new(1.0f64, 2.0),
//!     Complex::new(0.5, 1.5),
//!     Complex::new(1.0, -1.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let sorted: Vec<String> = tree.traverse_in_order().iter().map(|c| c.to_string()).collect();
//! assert_eq!(sorted, ["0.5+1.5i", "1-1i", "1+2i"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::order::Ordered;

/// A complex number `re + im·i`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<F> {
    /// Real part.
    pub re: F,
    /// Imaginary part.
    pub im: F,
}

impl<F> Complex<F> {
    /// Create a new complex number.
    pub const fn new(re: F, im: F) -> Self {
        Self { re, im }
    }
}

impl<F: Ordered> Ordered for Complex<F> {
    fn compare(&self, other: &Self) -> Ordering {
        self.re
            .compare(&other.re)
            .then_with(|| self.im.compare(&other.im))
    }
}

impl<F: fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.re, self.im)
    }
}
