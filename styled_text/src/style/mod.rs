// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style attribute vocabulary.
//!
//! This module defines:
//! - A closed set of attribute keys ([`StyleKey`]) with a deterministic order
//! - The values stored under those keys ([`StyleValue`])
//! - The style map every ordinary node accumulates ([`Attributes`])
//!
//! Keys that a renderer does not understand are carried through unchanged and ignored.

mod paragraph;
mod values;

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::sync::Arc;

use peniko::Color;

use crate::Image;

pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment, WritingDirection};
pub use values::{Font, FontWeight, LineStyle, Shadow, TextEffect};

use values::same_color;

/// Key of a style attribute.
///
/// The declaration order is the iteration order of [`Attributes`] and therefore the order in
/// which renderers apply attributes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    /// [`Font`].
    Font,
    /// Text color.
    ForegroundColor,
    /// Background color behind the glyphs.
    BackgroundColor,
    /// Ligature level as a [`StyleValue::Number`].
    Ligature,
    /// Extra kerning in points.
    Kern,
    /// [`LineStyle`] of the strikethrough.
    StrikethroughStyle,
    /// [`LineStyle`] of the underline.
    UnderlineStyle,
    /// Outline color.
    StrokeColor,
    /// Outline width, as a percentage of the font size.
    StrokeWidth,
    /// [`Shadow`].
    Shadow,
    /// [`TextEffect`].
    TextEffect,
    /// Embedded [`Image`].
    Attachment,
    /// Link target.
    Link,
    /// Vertical offset from the baseline, in points.
    BaselineOffset,
    /// Underline color.
    UnderlineColor,
    /// Strikethrough color.
    StrikethroughColor,
    /// Skew applied to glyphs.
    Obliqueness,
    /// Log of the horizontal expansion factor.
    Expansion,
    /// [`ParagraphStyle`] of a paragraph container.
    ParagraphStyle,
    /// Any key outside the closed vocabulary.
    Custom(Arc<str>),
}

/// Value of a style attribute.
#[derive(Clone, Debug)]
pub enum StyleValue {
    /// A color.
    Color(Color),
    /// A font.
    Font(Font),
    /// A decoration line pattern.
    Line(LineStyle),
    /// A shadow.
    Shadow(Shadow),
    /// A text effect.
    TextEffect(TextEffect),
    /// A plain number.
    Number(f32),
    /// A link target.
    Link(Arc<str>),
    /// An embedded image.
    Image(Image),
    /// A paragraph style.
    Paragraph(ParagraphStyle),
    /// Free-form text, mostly for [`StyleKey::Custom`] attributes.
    Text(Arc<str>),
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Color(a), Self::Color(b)) => same_color(a, b),
            (Self::Font(a), Self::Font(b)) => a == b,
            (Self::Line(a), Self::Line(b)) => a == b,
            (Self::Shadow(a), Self::Shadow(b)) => a == b,
            (Self::TextEffect(a), Self::TextEffect(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Link(a), Self::Link(b)) | (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Image(a), Self::Image(b)) => a == b,
            (Self::Paragraph(a), Self::Paragraph(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_for_style_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for StyleValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_style_value! {
    Color => Color,
    Font => Font,
    LineStyle => Line,
    Shadow => Shadow,
    TextEffect => TextEffect,
    f32 => Number,
    Image => Image,
    ParagraphStyle => Paragraph,
}

/// A single key/value pair, as applied to a range of an
/// [`AttributedText`](attributed_text::AttributedText).
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// The attribute key.
    pub key: StyleKey,
    /// The attribute value.
    pub value: StyleValue,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(key: StyleKey, value: impl Into<StyleValue>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// A style map: at most one value per [`StyleKey`].
///
/// This is the accumulator of every ordinary node, and the attribute scope of every
/// [`AttributedContent`](crate::AttributedContent).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(BTreeMap<StyleKey, StyleValue>);

impl Attributes {
    /// Creates an empty style map.
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `key` to `value`, returning the value it replaces.
    pub fn insert(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.0.insert(key, value.into())
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// Returns `true` if a value is stored under `key`.
    #[inline]
    pub fn contains_key(&self, key: &StyleKey) -> bool {
        self.0.contains_key(key)
    }

    /// Removes the value stored under `key`.
    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.0.remove(key)
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, StyleKey, StyleValue> {
        self.0.iter()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, StyleKey, StyleValue> {
        self.0.keys()
    }

    /// Returns these attributes with `own` layered on top.
    ///
    /// Values in `own` take precedence over values in `self`.
    #[must_use]
    pub fn merged(&self, own: &Self) -> Self {
        if own.is_empty() {
            return self.clone();
        }
        let mut merged = self.clone();
        merged.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

impl FromIterator<(StyleKey, StyleValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(StyleKey, StyleValue)> for Attributes {
    fn extend<I: IntoIterator<Item = (StyleKey, StyleValue)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a StyleKey, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
