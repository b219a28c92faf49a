// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Attributes, Image};

/// One item of an [`AttributedContent`].
#[derive(Clone, Debug, PartialEq)]
pub enum NestedItem {
    /// Raw text, styled by the enclosing scopes.
    Text(String),
    /// A nested scope with its own attributes.
    Nested(AttributedContent),
    /// An embedded image.
    Image(Image),
}

/// The flattened, renderer-agnostic result of building a node.
///
/// `items` are in render order. `attributes` apply to every item as an enclosing scope; they are
/// not attached to any single item. Nesting is the only recursion, so content is always a tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributedContent {
    /// Items in render order.
    pub items: Vec<NestedItem>,
    /// Attributes of this scope.
    pub attributes: Attributes,
}

impl AttributedContent {
    /// Creates an empty content with no attributes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty content scope carrying `attributes`.
    pub fn with_attributes(attributes: Attributes) -> Self {
        Self {
            items: Vec::new(),
            attributes,
        }
    }

    /// Creates a scope with a single text item.
    pub fn text(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            items: alloc::vec![NestedItem::Text(text.into())],
            attributes,
        }
    }

    /// Creates a scope that holds `inner` as its only nested item.
    pub fn wrapping(inner: Self, attributes: Attributes) -> Self {
        Self {
            items: alloc::vec![NestedItem::Nested(inner)],
            attributes,
        }
    }

    /// Appends an item.
    #[inline]
    pub fn push(&mut self, item: NestedItem) {
        self.items.push(item);
    }

    /// Appends `other` as one nested item.
    #[inline]
    pub fn append(&mut self, other: Self) {
        self.items.push(NestedItem::Nested(other));
    }

    /// Returns `true` if there are no items and no attributes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.attributes.is_empty()
    }

    /// Returns `true` if no text or image is reachable from this scope.
    pub fn has_no_output(&self) -> bool {
        self.items.iter().all(|item| match item {
            NestedItem::Text(text) => text.is_empty(),
            NestedItem::Nested(nested) => nested.has_no_output(),
            NestedItem::Image(_) => false,
        })
    }

    /// Returns the concatenated text of every reachable text item, skipping images.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for item in &self.items {
            match item {
                NestedItem::Text(text) => out.push_str(text),
                NestedItem::Nested(nested) => nested.collect_text(out),
                NestedItem::Image(_) => {}
            }
        }
    }
}
