// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec;
use core::fmt::Display;

use crate::{
    AttributedContent, AttributedText, Attributes, Image, Interpolation, Modifier, NestedItem,
};

/// Interpolation of a text leaf.
#[derive(Debug)]
pub struct TextInterpolation<'a> {
    text: &'a str,
    attributes: Attributes,
}

impl<'a> TextInterpolation<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            attributes: Attributes::new(),
        }
    }
}

impl Interpolation for TextInterpolation<'_> {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        modifier.modify(&mut self.attributes);
    }

    fn build(self) -> AttributedContent {
        AttributedContent::text(self.text, self.attributes)
    }
}

impl AttributedText for String {
    type Modifiable = Attributes;
    type Interpolation<'a> = TextInterpolation<'a>;

    fn interpolation(&self) -> TextInterpolation<'_> {
        TextInterpolation::new(self)
    }
}

impl AttributedText for &str {
    type Modifiable = Attributes;
    type Interpolation<'a>
        = TextInterpolation<'a>
    where
        Self: 'a;

    fn interpolation(&self) -> TextInterpolation<'_> {
        TextInterpolation::new(self)
    }
}

/// Interpolation of an [`Image`] leaf.
#[derive(Debug)]
pub struct ImageInterpolation<'a> {
    image: &'a Image,
    attributes: Attributes,
}

impl Interpolation for ImageInterpolation<'_> {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        modifier.modify(&mut self.attributes);
    }

    fn build(self) -> AttributedContent {
        AttributedContent {
            items: vec![NestedItem::Image(self.image.clone())],
            attributes: self.attributes,
        }
    }
}

impl AttributedText for Image {
    type Modifiable = Attributes;
    type Interpolation<'a> = ImageInterpolation<'a>;

    fn interpolation(&self) -> ImageInterpolation<'_> {
        ImageInterpolation {
            image: self,
            attributes: Attributes::new(),
        }
    }
}

/// A leaf rendering any [`Display`] value as plain text.
///
/// ```
/// use styled_text::{AttributedTextExt, Plain};
///
/// assert_eq!(Plain(42).make_content().plain_text(), "42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plain<T>(pub T);

/// Interpolation of a [`Plain`] leaf.
#[derive(Debug)]
pub struct PlainInterpolation<'a, T> {
    value: &'a T,
    attributes: Attributes,
}

impl<T: Display> Interpolation for PlainInterpolation<'_, T> {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        modifier.modify(&mut self.attributes);
    }

    fn build(self) -> AttributedContent {
        AttributedContent::text(self.value.to_string(), self.attributes)
    }
}

impl<T: Display> AttributedText for Plain<T> {
    type Modifiable = Attributes;
    type Interpolation<'a>
        = PlainInterpolation<'a, T>
    where
        T: 'a;

    fn interpolation(&self) -> PlainInterpolation<'_, T> {
        PlainInterpolation {
            value: &self.0,
            attributes: Attributes::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedTextExt, Attributes, Image, NestedItem, Plain, StyleKey, StyleValue};
    use alloc::string::String;
    use alloc::vec;
    use peniko::color::palette::css;

    #[test]
    fn text_leaf_builds_one_item() {
        let content = String::from("owned").make_content();
        assert_eq!(content.items, [NestedItem::Text("owned".into())]);
        assert_eq!(content.attributes, Attributes::new());
    }

    #[test]
    fn image_leaf_keeps_handle() {
        let image = Image::from_vec(vec![1, 2, 3, 4], 1, 1);
        let content = image.clone().background_color(css::WHITE).make_content();
        assert_eq!(content.items, [NestedItem::Image(image)]);
        assert_eq!(
            content.attributes.get(&StyleKey::BackgroundColor),
            Some(&StyleValue::Color(css::WHITE))
        );
    }

    #[test]
    fn plain_uses_display() {
        let content = Plain(1.5_f32).kern(2.0).make_content();
        assert_eq!(content.plain_text(), "1.5");
        assert_eq!(content.attributes.len(), 1);
    }
}
