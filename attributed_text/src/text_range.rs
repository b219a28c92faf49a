// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A byte range into the text of an [`AttributedText`](crate::AttributedText).
///
/// Ranges are only created by appending to a text, so a `TextRange` upholds:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 character boundaries
///
/// A `TextRange` does not record which text it came from. Only use it with that text.
///
/// ## Example
///
/// ```
/// use attributed_text::AttributedText;
///
/// let mut text = AttributedText::<()>::new();
/// let head = text.push_str("é");
/// let tail = text.push_str("clair");
/// assert_eq!(head.as_range(), 0..2);
/// assert_eq!(head.union(tail).as_range(), 0..7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    #[inline]
    pub(crate) const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the smallest range covering both `self` and `other`.
    ///
    /// Both ranges must come from the same text.
    #[must_use]
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::TextRange;

    #[test]
    fn union_covers_gaps() {
        let a = TextRange::new_unchecked(2, 4);
        let b = TextRange::new_unchecked(7, 9);
        assert_eq!(a.union(b).as_range(), 2..9);
        assert_eq!(b.union(a), a.union(b));
        assert_eq!(a.union(b).len(), 7);
    }

    #[test]
    fn empty_ranges() {
        let empty = TextRange::new_unchecked(3, 3);
        assert!(empty.is_empty());
        assert_eq!(empty.union(empty), empty);
        assert!(!empty.union(TextRange::new_unchecked(3, 4)).is_empty());
    }
}
