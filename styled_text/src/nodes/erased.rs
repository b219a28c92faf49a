// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use crate::{AttributedContent, AttributedText, Attributes, Interpolation, Modifier};

/// Bridges a node with any accumulator into one whose accumulator is a style map.
///
/// The proxied node is built with its own default accumulator and nested inside a scope that
/// holds the proxy's attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Proxy<N> {
    node: N,
}

impl<N> Proxy<N> {
    /// Wraps `node`.
    pub fn new(node: N) -> Self {
        Self { node }
    }

    /// Returns the proxied node.
    pub fn node(&self) -> &N {
        &self.node
    }
}

/// Interpolation of a [`Proxy`] node.
#[derive(Debug)]
pub struct ProxyInterpolation<'a, N> {
    node: &'a N,
    attributes: Attributes,
}

impl<N: AttributedText> Interpolation for ProxyInterpolation<'_, N> {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        modifier.modify(&mut self.attributes);
    }

    fn build(self) -> AttributedContent {
        AttributedContent::wrapping(self.node.interpolation().build(), self.attributes)
    }
}

impl<N: AttributedText> AttributedText for Proxy<N> {
    type Modifiable = Attributes;
    type Interpolation<'a>
        = ProxyInterpolation<'a, N>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        ProxyInterpolation {
            node: &self.node,
            attributes: Attributes::new(),
        }
    }
}

trait ErasedText {
    fn erased_interpolation(&self) -> Box<dyn ErasedInterpolation + '_>;
    fn type_name(&self) -> &'static str;
}

impl<T: AttributedText<Modifiable = Attributes>> ErasedText for T {
    fn erased_interpolation(&self) -> Box<dyn ErasedInterpolation + '_> {
        Box::new(self.interpolation())
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

trait ErasedInterpolation {
    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>);
    fn build_boxed(self: Box<Self>) -> AttributedContent;
}

impl<I: Interpolation<Modifiable = Attributes, Output = AttributedContent>> ErasedInterpolation
    for I
{
    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        Interpolation::modify(self, modifier);
    }

    fn build_boxed(self: Box<Self>) -> AttributedContent {
        (*self).build()
    }
}

/// A type-erased node whose accumulator is a style map.
///
/// Use [`AnyAttributedText::erasing`] for nodes with other accumulators, such as paragraphs.
///
/// ```
/// use styled_text::{AnyAttributedText, AttributedTextExt, Paragraph};
///
/// let nodes = [
///     AnyAttributedText::new("plain"),
///     AnyAttributedText::erasing(Paragraph::new("paragraph")),
/// ];
/// let text: String = nodes.iter().map(|n| n.make_content().plain_text()).collect();
/// assert_eq!(text, "plainparagraph\n");
/// ```
pub struct AnyAttributedText {
    inner: Box<dyn ErasedText>,
}

impl AnyAttributedText {
    /// Erases `node`.
    pub fn new<T>(node: T) -> Self
    where
        T: AttributedText<Modifiable = Attributes> + 'static,
    {
        Self {
            inner: Box::new(node),
        }
    }

    /// Erases `node` behind a [`Proxy`], whatever its accumulator.
    pub fn erasing<T: AttributedText + 'static>(node: T) -> Self {
        Self::new(Proxy::new(node))
    }
}

impl fmt::Debug for AnyAttributedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyAttributedText")
            .field(&self.inner.type_name())
            .finish()
    }
}

/// Interpolation of an [`AnyAttributedText`] node.
pub struct AnyInterpolation<'a> {
    inner: Box<dyn ErasedInterpolation + 'a>,
}

impl fmt::Debug for AnyInterpolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyInterpolation").finish_non_exhaustive()
    }
}

impl Interpolation for AnyInterpolation<'_> {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        self.inner.modify(modifier);
    }

    fn build(self) -> AttributedContent {
        self.inner.build_boxed()
    }
}

impl AttributedText for AnyAttributedText {
    type Modifiable = Attributes;
    type Interpolation<'a> = AnyInterpolation<'a>;

    fn interpolation(&self) -> AnyInterpolation<'_> {
        AnyInterpolation {
            inner: self.inner.erased_interpolation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        AnyAttributedText, AttributedContent, AttributedTextExt, NestedItem, Paragraph, StyleKey,
    };
    use peniko::color::palette::css;

    #[test]
    fn erasure_is_transparent() {
        let direct = "x".foreground_color(css::RED).make_content();
        let erased = AnyAttributedText::new("x").foreground_color(css::RED).make_content();
        assert_eq!(direct, erased);
        let erased = "x".foreground_color(css::RED).erased().make_content();
        assert_eq!(direct, erased);
    }

    #[test]
    fn proxy_wraps_with_empty_scope() {
        let content = AnyAttributedText::erasing(Paragraph::new("p")).make_content();
        assert!(content.attributes.is_empty());
        let [NestedItem::Nested(paragraph)] = content.items.as_slice() else {
            panic!("expected one nested paragraph, got {:?}", content.items);
        };
        assert!(paragraph.attributes.contains_key(&StyleKey::ParagraphStyle));
        assert_ne!(*paragraph, AttributedContent::new());
    }
}
