// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderers from [`AttributedContent`] to output formats.
//!
//! Every renderer is a [`ContentVisitor`] driven by one depth-first [`walk`]. The walk keeps the
//! active style of each scope: the inherited style with the scope's own attributes layered on
//! top, so a scope's own value for a key always overrides an ancestor's.

mod attributed;
mod console;
mod string;

pub use console::{AnsiStyles, RESET};

use alloc::vec::Vec;

use crate::{AttributedContent, Attributes, Image, NestedItem};

/// Receives the events of a [`walk`].
///
/// Scopes that produce no output are skipped entirely, so every `enter_scope` is followed by at
/// least one `text` or `image` before the matching `exit_scope`.
pub trait ContentVisitor {
    /// A scope with attributes `own` starts; `active` is its merged style.
    fn enter_scope(&mut self, own: &Attributes, active: &Attributes);

    /// The scope entered last ends.
    fn exit_scope(&mut self, own: &Attributes, active: &Attributes);

    /// A nested scope ended and more output follows in the enclosing scope, whose merged style is
    /// `active`.
    fn resume_scope(&mut self, active: &Attributes) {
        let _ = active;
    }

    /// Non-empty text under the merged style `active`.
    fn text(&mut self, text: &str, active: &Attributes);

    /// An embedded image under the merged style `active`.
    fn image(&mut self, image: &Image, active: &Attributes);

    /// Whether images count as output.
    ///
    /// When this is `false`, `image` is never called and scopes holding only images are skipped.
    fn visits_images(&self) -> bool {
        true
    }
}

/// Walks `content` depth first, starting with no inherited attributes.
///
/// The walk never mutates `content`; walking the same content twice produces the same events.
/// Every item is visited once: a scope is entered when its first output is reached, so whether a
/// scope has output is never computed ahead of time.
pub fn walk<V: ContentVisitor + ?Sized>(content: &AttributedContent, visitor: &mut V) {
    let mut walker = Walker {
        images: visitor.visits_images(),
        visitor,
        frames: Vec::new(),
        pending: 0,
    };
    walker.scope(content);
}

struct Frame<'c> {
    own: &'c Attributes,
    active: Attributes,
    entered: bool,
}

struct Walker<'c, 'v, V: ?Sized> {
    visitor: &'v mut V,
    images: bool,
    frames: Vec<Frame<'c>>,
    /// Frames from this index up must be entered or resumed before the next output.
    pending: usize,
}

impl<'c, V: ContentVisitor + ?Sized> Walker<'c, '_, V> {
    fn scope(&mut self, content: &'c AttributedContent) {
        let active = match self.frames.last() {
            Some(parent) => parent.active.merged(&content.attributes),
            None => content.attributes.clone(),
        };
        self.pending = self.pending.min(self.frames.len());
        self.frames.push(Frame {
            own: &content.attributes,
            active,
            entered: false,
        });
        for item in &content.items {
            match item {
                NestedItem::Text(text) if !text.is_empty() => {
                    self.flush();
                    if let Some(frame) = self.frames.last() {
                        self.visitor.text(text, &frame.active);
                    }
                }
                NestedItem::Image(image) if self.images => {
                    self.flush();
                    if let Some(frame) = self.frames.last() {
                        self.visitor.image(image, &frame.active);
                    }
                }
                NestedItem::Nested(nested) => self.scope(nested),
                NestedItem::Text(_) | NestedItem::Image(_) => {}
            }
        }
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if frame.entered {
            self.visitor.exit_scope(frame.own, &frame.active);
            if let Some(parent) = self.frames.len().checked_sub(1) {
                self.pending = self.pending.min(parent);
            }
        }
    }

    /// Enters or resumes every pending frame, outermost first.
    fn flush(&mut self) {
        let start = self.pending.min(self.frames.len());
        for frame in &mut self.frames[start..] {
            if frame.entered {
                self.visitor.resume_scope(&frame.active);
            } else {
                frame.entered = true;
                self.visitor.enter_scope(frame.own, &frame.active);
            }
        }
        self.pending = self.frames.len();
    }
}
