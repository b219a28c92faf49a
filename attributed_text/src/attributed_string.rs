// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::OBJECT_REPLACEMENT_CHARACTER;

/// A run of text sharing one attribute container.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<A> {
    /// The byte range of the run.
    pub range: Range<usize>,
    /// The complete set of attributes for every byte in `range`.
    pub attributes: A,
}

/// A value-type attributed string.
///
/// Unlike [`AttributedText`](crate::AttributedText), attributes never overlap: every byte belongs
/// to exactly one [`Run`], and adjacent runs always carry different attribute containers.
///
/// ## Example
///
/// ```
/// use attributed_text::AttributedString;
///
/// let mut text = AttributedString::new();
/// text.push_str("Hello", "bold");
/// text.push_str(", ", "bold");
/// text.push_str("world", "plain");
///
/// let runs: Vec<_> = text.runs().iter().map(|r| (r.range.clone(), r.attributes)).collect();
/// assert_eq!(runs, [(0..7, "bold"), (7..12, "plain")]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedString<A> {
    text: String,
    runs: Vec<Run<A>>,
}

impl<A> Default for AttributedString<A> {
    fn default() -> Self {
        Self {
            text: String::new(),
            runs: Vec::new(),
        }
    }
}

impl<A: PartialEq> AttributedString<A> {
    /// Creates an empty attributed string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` carrying `attributes`.
    ///
    /// The text joins the previous run when that run has equal attributes. Empty text is ignored.
    pub fn push_str(&mut self, text: &str, attributes: A) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        self.push_run(start..self.text.len(), attributes);
    }

    /// Appends an [`OBJECT_REPLACEMENT_CHARACTER`] carrying `attributes`.
    pub fn push_attachment(&mut self, attributes: A) {
        let start = self.text.len();
        self.text.push(OBJECT_REPLACEMENT_CHARACTER);
        self.push_run(start..self.text.len(), attributes);
    }

    /// Appends all of `other`, shifting its runs to the end of this string.
    pub fn append(&mut self, other: Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        for run in other.runs {
            self.push_run(
                run.range.start + offset..run.range.end + offset,
                run.attributes,
            );
        }
    }

    fn push_run(&mut self, range: Range<usize>, attributes: A) {
        match self.runs.last_mut() {
            Some(last) if last.range.end == range.start && last.attributes == attributes => {
                last.range.end = range.end;
            }
            _ => self.runs.push(Run { range, attributes }),
        }
    }
}

impl<A> AttributedString<A> {
    /// Borrow the plain text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the attribute runs in text order.
    #[inline]
    pub fn runs(&self) -> &[Run<A>] {
        &self.runs
    }

    /// Returns the attributes of the run containing byte `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&A> {
        let ix = self.runs.partition_point(|run| run.range.end <= index);
        self.runs
            .get(ix)
            .filter(|run| run.range.contains(&index))
            .map(|run| &run.attributes)
    }
}

impl<A> fmt::Display for AttributedString<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
