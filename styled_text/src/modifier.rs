// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{
    AnyAttributedText, AttributedContent, AttributedText, Attribute, Attributes, Font, Interpolation,
    LineStyle, ParagraphStyle, Proxy, Shadow, StyleKey, StyleValue, TextEffect,
};
use peniko::Color;

/// A mutation of a node's accumulator.
pub trait Modifier {
    /// The accumulator this modifier mutates.
    type Modifiable;

    /// Mutates `target` in place.
    fn modify(&self, target: &mut Self::Modifiable);
}

/// Sets one attribute in a style map, overwriting any previous value.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeModifier {
    attribute: Attribute,
}

impl AttributeModifier {
    /// Creates a modifier setting `key` to `value`.
    pub fn new(key: StyleKey, value: impl Into<StyleValue>) -> Self {
        Self {
            attribute: Attribute::new(key, value),
        }
    }

    /// Returns the attribute this modifier sets.
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }
}

impl Modifier for AttributeModifier {
    type Modifiable = Attributes;

    fn modify(&self, target: &mut Attributes) {
        target.insert(self.attribute.key.clone(), self.attribute.value.clone());
    }
}

/// Mutates a [`ParagraphStyle`] with a closure.
#[derive(Clone)]
pub struct ParagraphModifier<F> {
    f: F,
}

impl<F: Fn(&mut ParagraphStyle)> ParagraphModifier<F> {
    /// Creates a modifier that runs `f` on the paragraph style.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Fn(&mut ParagraphStyle)> Modifier for ParagraphModifier<F> {
    type Modifiable = ParagraphStyle;

    fn modify(&self, target: &mut ParagraphStyle) {
        (self.f)(target);
    }
}

impl<F> fmt::Debug for ParagraphModifier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParagraphModifier").finish_non_exhaustive()
    }
}

/// A node with a modifier applied.
///
/// Creating the interpolation creates the wrapped node's interpolation and applies the modifier
/// to it right away, so when modified nodes are nested the outermost modifier runs last and wins.
#[derive(Clone, Debug)]
pub struct Modified<C, M> {
    content: C,
    modifier: M,
}

impl<C, M> Modified<C, M> {
    /// Wraps `content` with `modifier`.
    pub fn new(content: C, modifier: M) -> Self {
        Self { content, modifier }
    }

    /// Returns the wrapped node.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Returns the modifier.
    pub fn modifier(&self) -> &M {
        &self.modifier
    }
}

impl<C, M> AttributedText for Modified<C, M>
where
    C: AttributedText,
    M: Modifier<Modifiable = C::Modifiable>,
{
    type Modifiable = C::Modifiable;
    type Interpolation<'a>
        = C::Interpolation<'a>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        let mut interpolation = self.content.interpolation();
        interpolation.modify(&self.modifier);
        interpolation
    }
}

/// An accumulator type that style attributes can be attached to.
///
/// Style maps take attributes directly; other accumulators are bridged through a [`Proxy`].
pub trait AttributeTarget: Sized {
    /// The node produced by attaching an attribute to a node with this accumulator.
    type Styled<N: AttributedText<Modifiable = Self>>: AttributedText<Modifiable = Attributes>;

    /// Attaches `modifier` to `node`.
    fn with_attribute<N: AttributedText<Modifiable = Self>>(
        node: N,
        modifier: AttributeModifier,
    ) -> Self::Styled<N>;
}

impl AttributeTarget for Attributes {
    type Styled<N: AttributedText<Modifiable = Self>> = Modified<N, AttributeModifier>;

    fn with_attribute<N: AttributedText<Modifiable = Self>>(
        node: N,
        modifier: AttributeModifier,
    ) -> Self::Styled<N> {
        Modified::new(node, modifier)
    }
}

impl AttributeTarget for ParagraphStyle {
    type Styled<N: AttributedText<Modifiable = Self>> = Modified<Proxy<N>, AttributeModifier>;

    fn with_attribute<N: AttributedText<Modifiable = Self>>(
        node: N,
        modifier: AttributeModifier,
    ) -> Self::Styled<N> {
        Modified::new(Proxy::new(node), modifier)
    }
}

/// The node [`AttributedTextExt::attribute`] returns for `N`.
pub type Styled<N> = <<N as AttributedText>::Modifiable as AttributeTarget>::Styled<N>;

/// Convenience methods available on every [`AttributedText`].
///
/// ## Example
///
/// ```
/// use styled_text::{AttributedTextExt, LineStyle, StyleKey, StyleValue};
/// use styled_text::peniko::color::palette::css;
///
/// let content = "Hi"
///     .foreground_color(css::RED)
///     .underline(LineStyle::Single)
///     .foreground_color(css::BLUE)
///     .make_content();
///
/// assert_eq!(
///     content.attributes.get(&StyleKey::ForegroundColor),
///     Some(&StyleValue::Color(css::BLUE))
/// );
/// ```
pub trait AttributedTextExt: AttributedText + Sized {
    /// Wraps this node with `modifier`.
    fn modifier<M: Modifier<Modifiable = Self::Modifiable>>(self, modifier: M) -> Modified<Self, M> {
        Modified::new(self, modifier)
    }

    /// Sets the attribute `key` to `value`.
    ///
    /// Nodes whose accumulator is not a style map are proxied first.
    fn attribute(self, key: StyleKey, value: impl Into<StyleValue>) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        <Self::Modifiable as AttributeTarget>::with_attribute(self, AttributeModifier::new(key, value))
    }

    /// Sets the font.
    fn font(self, font: Font) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::Font, font)
    }

    /// Sets the text color.
    fn foreground_color(self, color: Color) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::ForegroundColor, color)
    }

    /// Sets the background color.
    fn background_color(self, color: Color) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::BackgroundColor, color)
    }

    /// Underlines the text.
    fn underline(self, style: LineStyle) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::UnderlineStyle, style)
    }

    /// Strikes the text through.
    fn strikethrough(self, style: LineStyle) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::StrikethroughStyle, style)
    }

    /// Draws a shadow behind the text.
    fn shadow(self, shadow: Shadow) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::Shadow, shadow)
    }

    /// Applies a text effect.
    fn text_effect(self, effect: TextEffect) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::TextEffect, effect)
    }

    /// Links the text to `target`.
    fn link(self, target: &str) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::Link, StyleValue::Link(target.into()))
    }

    /// Adds `points` of kerning.
    fn kern(self, points: f32) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::Kern, points)
    }

    /// Moves the text `points` above the baseline.
    fn baseline_offset(self, points: f32) -> Styled<Self>
    where
        Self::Modifiable: AttributeTarget,
    {
        self.attribute(StyleKey::BaselineOffset, points)
    }

    /// Mutates the paragraph style of a paragraph container.
    fn paragraph_style<F>(self, f: F) -> Modified<Self, ParagraphModifier<F>>
    where
        Self: AttributedText<Modifiable = ParagraphStyle>,
        F: Fn(&mut ParagraphStyle),
    {
        Modified::new(self, ParagraphModifier::new(f))
    }

    /// Erases the type of this node.
    fn erased(self) -> AnyAttributedText
    where
        Self: AttributedText<Modifiable = Attributes> + 'static,
    {
        AnyAttributedText::new(self)
    }

    /// Builds this node.
    fn make_content(&self) -> AttributedContent {
        log::trace!("building {}", core::any::type_name::<Self>());
        self.interpolation().build()
    }
}

impl<T: AttributedText> AttributedTextExt for T {}
