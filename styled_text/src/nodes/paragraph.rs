// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    AttributedContent, AttributedText, Interpolation, Modifier, NestedItem, ParagraphStyle,
    StyleKey,
};

/// A paragraph container.
///
/// The accumulator is a [`ParagraphStyle`] rather than a style map; set it with
/// [`paragraph_style`](crate::AttributedTextExt::paragraph_style). Building appends a newline
/// to the child content and stores the style under [`StyleKey::ParagraphStyle`].
///
/// ```
/// use styled_text::{AttributedTextExt, Paragraph, StyleKey, TextAlignment};
///
/// let content = Paragraph::new("Centered")
///     .paragraph_style(|style| style.alignment = TextAlignment::Center)
///     .make_content();
///
/// assert_eq!(content.plain_text(), "Centered\n");
/// assert!(content.attributes.contains_key(&StyleKey::ParagraphStyle));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paragraph<C> {
    content: C,
}

impl<C> Paragraph<C> {
    /// Creates a paragraph holding `content`.
    pub fn new(content: C) -> Self {
        Self { content }
    }

    /// Returns the paragraph's content.
    pub fn content(&self) -> &C {
        &self.content
    }
}

/// Interpolation of a [`Paragraph`].
#[derive(Debug)]
pub struct ParagraphInterpolation<'a, C> {
    content: &'a C,
    style: ParagraphStyle,
}

impl<C: AttributedText> Interpolation for ParagraphInterpolation<'_, C> {
    type Modifiable = ParagraphStyle;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = ParagraphStyle>) {
        modifier.modify(&mut self.style);
    }

    fn build(self) -> AttributedContent {
        let mut content = self.content.interpolation().build();
        content.push(NestedItem::Text("\n".into()));
        content.attributes.insert(StyleKey::ParagraphStyle, self.style);
        content
    }
}

impl<C: AttributedText> AttributedText for Paragraph<C> {
    type Modifiable = ParagraphStyle;
    type Interpolation<'a>
        = ParagraphInterpolation<'a, C>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        ParagraphInterpolation {
            content: &self.content,
            style: ParagraphStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedTextExt, NestedItem, Paragraph, StyleKey, StyleValue};
    use peniko::color::palette::css;

    #[test]
    fn newline_joins_child_scope() {
        let content = Paragraph::new("Hi".foreground_color(css::YELLOW)).make_content();
        assert_eq!(
            content.items,
            [NestedItem::Text("Hi".into()), NestedItem::Text("\n".into())]
        );
        assert_eq!(
            content.attributes.get(&StyleKey::ForegroundColor),
            Some(&StyleValue::Color(css::YELLOW))
        );
        assert_eq!(content.attributes.len(), 2);
    }

    #[test]
    fn outer_paragraph_style_replaces_inner() {
        let content = Paragraph::new(Paragraph::new("x"))
            .paragraph_style(|style| style.line_spacing = 2.0)
            .make_content();
        assert_eq!(content.plain_text(), "x\n\n");
        let Some(StyleValue::Paragraph(style)) = content.attributes.get(&StyleKey::ParagraphStyle)
        else {
            panic!("missing paragraph style");
        };
        assert_eq!(style.line_spacing, 2.0);
    }
}
