// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative styled text documents, built into nested content and rendered to
//! [`attributed_text`] targets.
//!
//! - Documents are trees of nodes implementing [`AttributedText`]: text and image leaves,
//!   paragraphs, optional and conditional content, repetition, and user types implementing
//!   [`Composite`].
//! - Building a node runs its [`Interpolation`]: modifiers mutate the node's accumulator, then
//!   the node is folded into an [`AttributedContent`] tree of text, images and attribute scopes.
//! - Renderers walk that tree once and produce an [`attributed_text::AttributedText`], an
//!   [`attributed_text::AttributedString`], or console text with ANSI escapes.
//!
//! ## Attribute scopes
//!
//! Attributes belong to scopes, not to individual items. When rendering, every scope's own
//! attributes are layered over those inherited from its ancestors, and the scope's own value for
//! a key always wins. When modifiers applied to the same node set the same key, the outermost
//! modifier wins.
//!
//! ## Example
//!
//! ```
//! use styled_text::{AttributedTextExt, FontWeight, Font, LineStyle, Paragraph, text_body};
//! use styled_text::peniko::color::palette::css;
//!
//! let unread = 3;
//! let document = Paragraph::new(text_body!(
//!     "Inbox: ".font(Font::system(14.0, FontWeight::BOLD)),
//!     (unread > 0).then(|| "new mail".foreground_color(css::ORANGE)),
//! ))
//! .underline(LineStyle::Single);
//!
//! let content = document.make_content();
//! assert_eq!(content.plain_text(), "Inbox: new mail\n");
//!
//! let text = content.attributed_text();
//! assert_eq!(text.as_str(), "Inbox: new mail\n");
//!
//! let console = content.console_string();
//! assert!(console.starts_with("\x1b[4m\x1b[1mInbox: \x1b[0m"));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub use peniko;

pub mod render;
pub mod style;

mod content;
mod image;
mod interpolation;
mod modifier;
mod nodes;

#[cfg(test)]
mod tests;

pub use content::{AttributedContent, NestedItem};
pub use image::Image;
pub use interpolation::{AttributedText, Composite, DefaultInterpolation, Interpolation};
pub use modifier::{
    AttributeModifier, AttributeTarget, AttributedTextExt, Modified, Modifier, ParagraphModifier,
    Styled,
};
pub use nodes::{
    AnyAttributedText, AnyInterpolation, Conditional, ConditionalInterpolation, Empty,
    EmptyInterpolation, ForEach, ForEachInterpolation, Group, ImageInterpolation,
    OptionalInterpolation, Paragraph, ParagraphInterpolation, Plain, PlainInterpolation, Proxy,
    ProxyInterpolation, TextInterpolation, TupleInterpolation, TupleText,
};
pub use render::{AnsiStyles, ContentVisitor, walk};
pub use style::{
    Attribute, Attributes, Font, FontWeight, LineBreakMode, LineStyle, ParagraphStyle, Shadow,
    StyleKey, StyleValue, TextAlignment, TextEffect, WritingDirection,
};
