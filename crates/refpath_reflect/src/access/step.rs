//! Single-step path tokenizer.

use core::fmt;

// -----------------------------------------------------------------------------
// Step

/// How a [`Step`] addresses its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// `Name` or `.Name`: a record field, or a map key.
    Field,
    /// `[n]` with a non-negative base-10 integer.
    Index(usize),
    /// `[]`: the end of a sequence.
    Append,
    /// `[text]` where `text` is not an index: a map key.
    Key,
}

/// One parsed segment of a path, plus the text that follows it.
///
/// Parsing is restartable: the next step is obtained by parsing
/// [`rest`](Step::rest) again.
///
/// # Examples
///
/// ```
/// use refpath_reflect::access::{Step, StepKind};
///
/// let step = Step::parse("Departments[2].Name").unwrap();
/// assert_eq!(step.token, "Departments");
/// assert_eq!(step.kind, StepKind::Field);
///
/// let step = Step::parse(step.rest).unwrap();
/// assert_eq!(step.kind, StepKind::Index(2));
///
/// let step = Step::parse(step.rest).unwrap();
/// assert_eq!(step.token, "Name");
/// assert!(step.rest.is_empty());
///
/// assert!(Step::parse("").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step<'a> {
    /// The field name, or the text between the brackets.
    pub token: &'a str,
    pub kind: StepKind,
    /// The unparsed remainder of the path.
    pub rest: &'a str,
}

impl<'a> Step<'a> {
    /// Parses the first step of `path`.
    ///
    /// Returns `None` if nothing but separators is left.
    pub fn parse(path: &'a str) -> Option<Self> {
        let path = path.trim_matches(['.', '[']);
        if path.is_empty() {
            return None;
        }

        let (field, rest) = match path.char_indices().skip(1).find(|&(_, c)| c == '.' || c == '[') {
            Some((at, _)) => (&path[..at], &path[at + 1..]),
            None => (path, ""),
        };

        let Some(inner) = field.strip_suffix(']') else {
            return Some(Self {
                token: field,
                kind: StepKind::Field,
                rest,
            });
        };

        let kind = if inner.is_empty() {
            StepKind::Append
        } else if inner.bytes().all(|b| b.is_ascii_digit()) {
            match inner.parse() {
                Ok(index) => StepKind::Index(index),
                Err(_) => StepKind::Key,
            }
        } else {
            StepKind::Key
        };

        Some(Self {
            token: inner,
            kind,
            rest,
        })
    }

    /// Splits a path ending in `[key]` into the part before the last
    /// bracket and `key`.
    ///
    /// ```
    /// use refpath_reflect::access::Step;
    ///
    /// assert_eq!(Step::split_key("Tags[en]"), Some(("Tags", "en")));
    /// assert_eq!(Step::split_key("A[1].B[2]"), Some(("A[1].B", "2")));
    /// assert_eq!(Step::split_key("A.B"), None);
    /// ```
    pub fn split_key(path: &'a str) -> Option<(&'a str, &'a str)> {
        let inner = path.strip_suffix(']')?;
        let at = inner.rfind('[')?;
        Some((&inner[..at], &inner[at + 1..]))
    }

    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self.kind {
            StepKind::Index(index) => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StepKind::Field => write!(f, ".{}", self.token),
            StepKind::Index(index) => write!(f, "[{index}]"),
            StepKind::Append => f.write_str("[]"),
            StepKind::Key => write!(f, "[{}]", self.token),
        }
    }
}

// -----------------------------------------------------------------------------
// Steps

/// Iterator over every [`Step`] of a path.
///
/// ```
/// use refpath_reflect::access::steps;
///
/// let tokens: Vec<_> = steps("A.B[2].C[].D[key]").map(|s| s.to_string()).collect();
/// assert_eq!(tokens, [".A", ".B", "[2]", ".C", "[]", ".D", "[key]"]);
/// ```
#[inline]
pub fn steps(path: &str) -> Steps<'_> {
    Steps { rest: path }
}

/// See [`steps`].
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = Step::parse(self.rest)?;
        self.rest = step.rest;
        Some(step)
    }
}

impl core::iter::FusedIterator for Steps<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Step, StepKind, steps};

    fn kinds(path: &str) -> Vec<(&str, StepKind)> {
        steps(path).map(|step| (step.token, step.kind)).collect()
    }

    #[test]
    fn grammar_chains_segments() {
        assert_eq!(
            kinds("A.B[2].C[].D[key]"),
            [
                ("A", StepKind::Field),
                ("B", StepKind::Field),
                ("2", StepKind::Index(2)),
                ("C", StepKind::Field),
                ("", StepKind::Append),
                ("D", StepKind::Field),
                ("key", StepKind::Key),
            ],
        );
    }

    #[test]
    fn leading_separators_are_ignored() {
        assert_eq!(kinds(".Name"), [("Name", StepKind::Field)]);
        assert_eq!(kinds("[3]"), [("3", StepKind::Index(3))]);
        assert!(kinds("...").is_empty());
    }

    #[test]
    fn non_index_brackets_are_keys() {
        assert_eq!(kinds("[-1]"), [("-1", StepKind::Key)]);
        assert_eq!(kinds("[1x]"), [("1x", StepKind::Key)]);
        assert_eq!(
            kinds("[99999999999999999999999]"),
            [("99999999999999999999999", StepKind::Key)],
        );
    }

    #[test]
    fn index_only_for_numeric_brackets() {
        assert_eq!(Step::parse("[7]").unwrap().index(), Some(7));
        assert_eq!(Step::parse("[]").unwrap().index(), None);
        assert_eq!(Step::parse("Name").unwrap().index(), None);
    }

    #[test]
    fn split_key_needs_a_bracket() {
        assert_eq!(Step::split_key("[3]"), Some(("", "3")));
        assert_eq!(Step::split_key("Items]"), None);
    }
}
