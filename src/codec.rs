//! Text serialization.
//!
//! A tree is written by replaying a [`Format`] at every node: a `K` step writes
//! the key followed by a comma and an `L` or `P` step writes the child's
//! encoding. An absent node is written as `null,`. The text is read back by
//! consuming tokens in the same order the format wrote them.
//!
//! Only formats that visit the key first (`KLP`, `KPL`, ...) or last (`LPK`,
//! `PLK`, ...) can be read back. With the key in the middle, every shape with
//! the same keys produces the same text: in-order with `null` markers always
//! alternates `null` with keys.
//!
//! # Examples
//!
//! ```
//! use bintree::format::Format;
//! use bintree::tree::Tree;
//!
//! let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
//!
//! let text = tree.save_to_string(&Format::KLP);
//! assert_eq!(text, "2,1,null,null,3,null,null,");
//!
//! let loaded = Tree::from_str_with(&text, &Format::KLP).unwrap();
//! assert_eq!(loaded, tree);
//! ```

use crate::error::ParseError;
use crate::format::{Format, Step};
use crate::node::{self, Link, Node};
use crate::traversal::{walk, Visit};

/// The token written for an absent node.
const NULL: &str = "null";

/// Payloads with a lossless, comma-free text encoding.
///
/// Only these payloads can be saved to and loaded from text.
pub trait TextKey: Sized {
    /// Appends this key's canonical text to `out`.
    fn encode(&self, out: &mut String);

    /// Parses a key from its canonical text, or `None` if `token` isn't one.
    fn decode(token: &str) -> Option<Self>;
}

macro_rules! text_key_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl TextKey for $t {
                fn encode(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }

                fn decode(token: &str) -> Option<Self> {
                    token.parse().ok()
                }
            }
        )*
    };
}

// `Display` for floats writes the shortest text that parses back to the same
// value, so the encoding is lossless.
text_key_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Writes the subtree at `root` using `format`.
pub(crate) fn save<T: TextKey>(root: Option<&Node<T>>, format: &Format) -> String {
    let mut out = String::new();
    walk(root, format, |visit| {
        match visit {
            Visit::Key(key) => key.encode(&mut out),
            Visit::Empty => out.push_str(NULL),
        }
        out.push(',');
    });

    out
}

/// Reads a subtree written by [`save`] with the same `format`.
pub(crate) fn load<T: TextKey>(text: &str, format: &Format) -> Result<Link<T>, ParseError> {
    let steps = format.steps();
    let (steps, backwards) = match (steps.first(), steps.last()) {
        (Some(Step::Key), _) => (format.clone(), false),
        (_, Some(Step::Key)) => (format.reversed(), true),
        _ => {
            log::trace!("Refusing to decode with format {}", format);
            return Err(ParseError::Undecodable {
                format: format.to_string(),
            });
        }
    };

    let mut tokens = Tokens::new(text, backwards);
    let root = decode(&mut tokens, steps.steps())?;
    match tokens.remaining() {
        0 => Ok(root),
        count => Err(ParseError::TrailingTokens { count }),
    }
}

/// The comma separated tokens of a serialized tree, consumed from the front or
/// from the back.
struct Tokens<'a> {
    items: Vec<&'a str>,
    cursor: usize,
    backwards: bool,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str, backwards: bool) -> Self {
        let mut items: Vec<&str> = text.split(',').map(str::trim).collect();
        // The final comma leaves an empty token behind.
        if items.last() == Some(&"") {
            items.pop();
        }
        if backwards {
            items.reverse();
        }

        Self {
            items,
            cursor: 0,
            backwards,
        }
    }

    /// Where the token at `cursor` sits in the original text.
    fn index_of(&self, cursor: usize) -> usize {
        if self.backwards {
            self.items.len() - 1 - cursor
        } else {
            cursor
        }
    }

    fn next(&mut self) -> Result<(usize, &'a str), ParseError> {
        let token = *self
            .items
            .get(self.cursor)
            .ok_or(ParseError::UnexpectedEnd)?;
        let index = self.index_of(self.cursor);
        self.cursor += 1;

        Ok((index, token))
    }

    fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Where the tokens in `again` first disagree with those in `first`, or
    /// `None` if they're the same.
    fn mismatch(&self, first: (usize, usize), again: (usize, usize)) -> Option<usize> {
        let first = &self.items[first.0..first.1];
        let repeat = &self.items[again.0..again.1];
        if first == repeat {
            return None;
        }
        let offset = first.iter().zip(repeat).take_while(|(a, b)| a == b).count();

        Some(self.index_of((again.0 + offset).min(again.1 - 1)))
    }
}

/// A node whose steps are still being replayed.
struct Frame<'a, T> {
    node: Box<Node<T>>,
    /// The token the node's key was read from.
    key: &'a str,
    /// Index of the next step to replay.
    step: usize,
    /// Whether the child being read goes to the left.
    into_left: bool,
    /// Cursor where the child being read starts.
    child_start: usize,
    left_span: Option<(usize, usize)>,
    right_span: Option<(usize, usize)>,
}

impl<'a, T> Frame<'a, T> {
    /// Hangs a finished child off the node. The first time a child is read its
    /// token span is recorded; any later encoding of the same child must
    /// repeat it.
    fn attach(&mut self, child: Link<T>, tokens: &Tokens<'a>) -> Result<(), ParseError> {
        let span = (self.child_start, tokens.cursor);
        let (slot, seen) = if self.into_left {
            (&mut self.node.left, &mut self.left_span)
        } else {
            (&mut self.node.right, &mut self.right_span)
        };
        node::dismantle(std::mem::replace(slot, child));

        match *seen {
            None => *seen = Some(span),
            Some(first) => {
                if let Some(index) = tokens.mismatch(first, span) {
                    return Err(ParseError::Mismatch { index });
                }
            }
        }

        Ok(())
    }
}

/// Reads the key of the next node, or `None` for a `null` token.
fn open<'a, T: TextKey>(tokens: &mut Tokens<'a>) -> Result<Option<Frame<'a, T>>, ParseError> {
    let (index, token) = tokens.next()?;
    if token == NULL {
        return Ok(None);
    }
    let value = T::decode(token).ok_or_else(|| {
        log::trace!("Token {} ({:?}) is not a key", index, token);
        ParseError::InvalidKey {
            index,
            token: token.to_owned(),
        }
    })?;

    Ok(Some(Frame {
        node: Node::leaf(value),
        key: token,
        step: 1,
        into_left: false,
        child_start: tokens.cursor,
        left_span: None,
        right_span: None,
    }))
}

/// Decodes one (possibly absent) node. `steps` always starts with
/// [`Step::Key`].
///
/// Half-built nodes wait on a heap-allocated stack, so neither the depth of the
/// tree nor the length of malformed input bounds the depth of the call stack.
fn decode<T: TextKey>(tokens: &mut Tokens<'_>, steps: &[Step]) -> Result<Link<T>, ParseError> {
    let mut frames = Vec::new();
    let result = replay(tokens, steps, &mut frames);
    for frame in frames {
        node::dismantle(Some(frame.node));
    }

    result
}

fn replay<'a, T: TextKey>(
    tokens: &mut Tokens<'a>,
    steps: &[Step],
    frames: &mut Vec<Frame<'a, T>>,
) -> Result<Link<T>, ParseError> {
    match open(tokens)? {
        Some(frame) => frames.push(frame),
        None => return Ok(None),
    }

    // A subtree that has been read but not yet attached to the frame below it.
    let mut finished: Option<Link<T>> = None;
    while let Some(frame) = frames.last_mut() {
        if let Some(child) = finished.take() {
            frame.attach(child, tokens)?;
        }

        let Some(&step) = steps.get(frame.step) else {
            finished = frames.pop().map(|done| Some(done.node));
            continue;
        };
        frame.step += 1;

        match step {
            Step::Key => {
                let (index, repeated) = tokens.next()?;
                if repeated != frame.key {
                    return Err(ParseError::Mismatch { index });
                }
            }
            Step::Left | Step::Right => {
                frame.into_left = step == Step::Left;
                frame.child_start = tokens.cursor;
                match open(tokens)? {
                    Some(child) => frames.push(child),
                    None => finished = Some(None),
                }
            }
        }
    }

    Ok(finished.flatten())
}
