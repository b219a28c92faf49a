// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::{AttributedText, TextRange};

use super::{ContentVisitor, walk};
use crate::{Attribute, AttributedContent, Attributes, Image, StyleKey, StyleValue};

struct SpanWriter<'a> {
    target: &'a mut AttributedText<Attribute>,
    /// Text written under one merged style that has not been styled yet.
    run: Option<(TextRange, Attributes)>,
}

impl SpanWriter<'_> {
    fn apply(&mut self, range: TextRange, active: &Attributes) {
        for (key, value) in active {
            self.target.apply_attribute(
                range,
                Attribute {
                    key: key.clone(),
                    value: value.clone(),
                },
            );
        }
    }

    fn finish_run(&mut self) {
        if let Some((range, active)) = self.run.take() {
            self.apply(range, &active);
        }
    }
}

impl ContentVisitor for SpanWriter<'_> {
    fn enter_scope(&mut self, _own: &Attributes, _active: &Attributes) {}

    fn exit_scope(&mut self, _own: &Attributes, _active: &Attributes) {}

    fn text(&mut self, text: &str, active: &Attributes) {
        let range = self.target.push_str(text);
        if let Some((run, style)) = &mut self.run {
            if *style == *active {
                *run = run.union(range);
                return;
            }
        }
        self.finish_run();
        self.run = Some((range, active.clone()));
    }

    fn image(&mut self, image: &Image, active: &Attributes) {
        self.finish_run();
        let range = self.target.push_attachment();
        self.apply(range, active);
        self.target.apply_attribute(
            range,
            Attribute::new(StyleKey::Attachment, StyleValue::Image(image.clone())),
        );
    }
}

impl AttributedContent {
    /// Renders this content into a new mutable [`AttributedText`].
    ///
    /// Consecutive text with equal merged styles gets one span per attribute of that style, so a
    /// target holds a full copy of the merged style for every change of style. Images become an
    /// object replacement character carrying a [`StyleKey::Attachment`] attribute.
    pub fn attributed_text(&self) -> AttributedText<Attribute> {
        let mut target = AttributedText::new();
        self.append_attributed_text(&mut target);
        target
    }

    /// Renders this content at the end of `target`.
    pub fn append_attributed_text(&self, target: &mut AttributedText<Attribute>) {
        log::trace!("rendering attributed text at offset {}", target.len());
        let spans_before = target.attributes_len();
        let mut writer = SpanWriter {
            target: &mut *target,
            run: None,
        };
        walk(self, &mut writer);
        writer.finish_run();
        log::debug!(
            "rendered attributed text: {} bytes, {} new spans",
            target.len(),
            target.attributes_len() - spans_before
        );
    }
}
