// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Align according to the writing direction of the text.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center each line.
    Center,
    /// Stretch lines to fill the width, except the last one.
    Justified,
}

/// How lines that are too long for the available width are broken or truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrapping,
    /// Wrap at character boundaries.
    CharWrapping,
    /// Do not wrap; clip overflowing text.
    Clipping,
    /// Truncate the start of the line.
    TruncatingHead,
    /// Truncate the end of the line.
    TruncatingTail,
    /// Truncate the middle of the line.
    TruncatingMiddle,
}

/// The base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WritingDirection {
    /// Determine the direction from the first strong character.
    #[default]
    Natural,
    /// Left-to-right.
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

/// Paragraph-level layout settings.
///
/// This is the accumulator of a [`Paragraph`](crate::Paragraph): modifiers mutate it in place and
/// the finished value is stored under [`StyleKey::ParagraphStyle`](crate::StyleKey::ParagraphStyle)
/// on the paragraph's content. Distances are in points.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub alignment: TextAlignment,
    /// Extra space between lines of the paragraph.
    pub line_spacing: f32,
    /// Space after the paragraph.
    pub paragraph_spacing: f32,
    /// Space before the paragraph.
    pub paragraph_spacing_before: f32,
    /// Indent of the first line.
    pub first_line_head_indent: f32,
    /// Indent of every line but the first.
    pub head_indent: f32,
    /// Trailing indent. Positive values are distances from the leading margin, zero and negative
    /// values are distances from the trailing margin.
    pub tail_indent: f32,
    /// Multiplier applied to the natural line height. `0.0` means unset.
    pub line_height_multiple: f32,
    /// Line breaking behavior.
    pub line_break_mode: LineBreakMode,
    /// Base writing direction.
    pub base_writing_direction: WritingDirection,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            alignment: TextAlignment::Natural,
            line_spacing: 0.0,
            paragraph_spacing: 0.0,
            paragraph_spacing_before: 0.0,
            first_line_head_indent: 0.0,
            head_indent: 0.0,
            tail_indent: 0.0,
            line_height_multiple: 0.0,
            line_break_mode: LineBreakMode::WordWrapping,
            base_writing_direction: WritingDirection::Natural,
        }
    }
}

impl ParagraphStyle {
    /// Creates the default paragraph style.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no setting differs from the default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
