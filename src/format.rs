//! Traversal formats. A format is a short program over three steps that is
//! replayed at every node of a tree:
//!
//! - `K` visits the node's key,
//! - `L` recurses into the left subtree,
//! - `P` recurses into the right subtree.
//!
//! Steps run in the order and with the multiplicity they're written, so `KLP`
//! is a pre-order traversal, `KKLP` visits each key twice, and `KL` never
//! visits a right subtree. Letters are case-insensitive.
//!
//! # Examples
//!
//! ```
//! use bintree::format::{Format, Step};
//!
//! let format: Format = "lkp".parse().unwrap();
//!
//! assert_eq!(format, Format::LKP);
//! assert_eq!(format.steps(), &[Step::Left, Step::Key, Step::Right]);
//! assert_eq!(format.to_string(), "LKP");
//! assert!("LKX".parse::<Format>().is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// A single action of a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Visit the current node's key (`K`).
    Key,
    /// Recurse into the left subtree (`L`).
    Left,
    /// Recurse into the right subtree (`P`).
    Right,
}

impl Step {
    /// Parses a single (case-insensitive) format letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(Self::Key),
            'L' => Some(Self::Left),
            'P' => Some(Self::Right),
            _ => None,
        }
    }

    /// The canonical upper case letter for this step.
    pub fn as_char(self) -> char {
        match self {
            Self::Key => 'K',
            Self::Left => 'L',
            Self::Right => 'P',
        }
    }
}

/// A validated, non-empty sequence of [`Step`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(Cow<'static, [Step]>);

impl Format {
    /// Node, left, right. Pre-order.
    pub const KLP: Format = Format(Cow::Borrowed(&[Step::Key, Step::Left, Step::Right]));
    /// Node, right, left.
    pub const KPL: Format = Format(Cow::Borrowed(&[Step::Key, Step::Right, Step::Left]));
    /// Left, right, node. Post-order.
    pub const LPK: Format = Format(Cow::Borrowed(&[Step::Left, Step::Right, Step::Key]));
    /// Left, node, right. In-order.
    pub const LKP: Format = Format(Cow::Borrowed(&[Step::Left, Step::Key, Step::Right]));
    /// Right, left, node.
    pub const PLK: Format = Format(Cow::Borrowed(&[Step::Right, Step::Left, Step::Key]));
    /// Right, node, left. Descending in-order.
    pub const PKL: Format = Format(Cow::Borrowed(&[Step::Right, Step::Key, Step::Left]));

    /// Builds a format from explicit steps.
    ///
    /// # Errors
    ///
    /// [`FormatError::Empty`] if `steps` is empty.
    pub fn new(steps: Vec<Step>) -> Result<Self, FormatError> {
        if steps.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(Self(Cow::Owned(steps)))
    }

    /// The steps replayed at every node.
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// The same steps in the opposite order.
    pub fn reversed(&self) -> Self {
        Self(Cow::Owned(self.0.iter().rev().copied().collect()))
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::KLP
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let steps = s
            .chars()
            .enumerate()
            .map(|(position, found)| {
                Step::from_char(found).ok_or(FormatError::InvalidStep { position, found })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(steps)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|step| write!(f, "{}", step.as_char()))
    }
}
