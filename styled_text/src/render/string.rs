// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::AttributedString;

use super::{ContentVisitor, walk};
use crate::{AttributedContent, Attributes, Image, StyleKey, StyleValue};

struct RunWriter<'a> {
    target: &'a mut AttributedString<Attributes>,
}

impl ContentVisitor for RunWriter<'_> {
    fn enter_scope(&mut self, _own: &Attributes, _active: &Attributes) {}

    fn exit_scope(&mut self, _own: &Attributes, _active: &Attributes) {}

    fn text(&mut self, text: &str, active: &Attributes) {
        self.target.push_str(text, active.clone());
    }

    fn image(&mut self, image: &Image, active: &Attributes) {
        let mut attributes = active.clone();
        attributes.insert(StyleKey::Attachment, StyleValue::Image(image.clone()));
        self.target.push_attachment(attributes);
    }
}

impl AttributedContent {
    /// Renders this content into a new value-type [`AttributedString`].
    ///
    /// Each run carries the complete merged style of its text; adjacent text with equal styles
    /// shares a run.
    pub fn attributed_string(&self) -> AttributedString<Attributes> {
        let mut target = AttributedString::new();
        self.append_attributed_string(&mut target);
        target
    }

    /// Renders this content at the end of `target`.
    pub fn append_attributed_string(&self, target: &mut AttributedString<Attributes>) {
        log::trace!("rendering attributed string at offset {}", target.len());
        walk(self, &mut RunWriter { target: &mut *target });
        log::debug!(
            "rendered attributed string: {} bytes in {} runs",
            target.len(),
            target.runs().len()
        );
    }
}
