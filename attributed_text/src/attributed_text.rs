// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::TextRange;

/// The character that stands in for an embedded object, such as an image.
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// A growable block of text with attributes applied to ranges within the text.
///
/// Text is only ever appended, so ranges handed out by [`push_str`](Self::push_str) and
/// [`push_attachment`](Self::push_attachment) stay valid for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct AttributedText<Attr: Debug> {
    text: String,
    attributes: Vec<(Range<usize>, Attr)>,
}

impl<Attr: Debug> Default for AttributedText<Attr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Attr: Debug> AttributedText<Attr> {
    /// Creates an empty `AttributedText`.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends `text` and returns the range it now occupies.
    pub fn push_str(&mut self, text: &str) -> TextRange {
        let start = self.text.len();
        self.text.push_str(text);
        TextRange::new_unchecked(start, self.text.len())
    }

    /// Appends an [`OBJECT_REPLACEMENT_CHARACTER`] and returns the range it occupies.
    ///
    /// The embedded object itself is expected to be attached as an attribute over the range.
    pub fn push_attachment(&mut self) -> TextRange {
        let start = self.text.len();
        self.text.push(OBJECT_REPLACEMENT_CHARACTER);
        TextRange::new_unchecked(start, self.text.len())
    }

    /// Apply an `attribute` to a `range` handed out by this text.
    #[inline]
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) {
        debug_assert!(
            range.end() <= self.text.len(),
            "range {:?} does not belong to this text",
            range
        );
        self.attributes.push((range.as_range(), attribute));
    }

    /// Iterate over all attributes and the ranges they apply to.
    ///
    /// Attributes are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.attributes.iter().map(|(range, attr)| (range, attr))
    }

    /// Get an iterator over the attributes that apply at the given byte `index`.
    ///
    /// Conflicting attributes are not resolved; everything is reported in application order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |(range, _)| range.contains(&index))
            .map(|(_, attr)| attr)
    }

    /// Returns the number of attribute spans applied to the text.
    #[inline]
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedText, OBJECT_REPLACEMENT_CHARACTER};
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum TestAttribute {
        Bold,
        Italic,
    }

    #[test]
    fn push_returns_occupied_ranges() {
        let mut text = AttributedText::<TestAttribute>::new();
        let hello = text.push_str("Hello ");
        let image = text.push_attachment();
        let tail = text.push_str("!");

        assert_eq!(hello.as_range(), 0..6);
        assert_eq!(image.as_range(), 6..9);
        assert_eq!(tail.as_range(), 9..10);
        assert_eq!(text.as_str().chars().nth(6), Some(OBJECT_REPLACEMENT_CHARACTER));
    }

    #[test]
    fn attributes_at() {
        let mut text = AttributedText::new();
        let h = text.push_str("H");
        let el = text.push_str("el");
        let lo = text.push_str("lo!");
        text.apply_attribute(h.union(el), TestAttribute::Bold);
        text.apply_attribute(el.union(lo), TestAttribute::Italic);

        assert_eq!(text.attributes_at(0).collect::<Vec<_>>(), [&TestAttribute::Bold]);
        assert_eq!(
            text.attributes_at(2).collect::<Vec<_>>(),
            [&TestAttribute::Bold, &TestAttribute::Italic]
        );
        assert_eq!(text.attributes_at(5).collect::<Vec<_>>(), [&TestAttribute::Italic]);
        assert!(text.attributes_at(6).next().is_none());
        assert_eq!(text.attributes_len(), 2);
    }

    #[test]
    fn attributes_iter_keeps_application_order() {
        let mut text = AttributedText::new();
        let range = text.push_str("abc");
        text.apply_attribute(range, TestAttribute::Italic);
        text.apply_attribute(range, TestAttribute::Bold);
        let applied: Vec<_> = text.attributes_iter().map(|(_, attr)| attr).collect();
        assert_eq!(applied, [&TestAttribute::Italic, &TestAttribute::Bold]);
    }
}
