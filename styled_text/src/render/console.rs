// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;

use super::{ContentVisitor, walk};
use crate::{AttributedContent, Attributes, Image, StyleKey};

/// The ANSI sequence that clears all styling.
pub const RESET: &str = "\x1b[0m";

/// Escape sequences the console renderer emits per style key.
///
/// Keys without an entry are ignored. The mapping is by key only: any value under
/// [`StyleKey::Font`] is rendered bold, any [`StyleKey::ForegroundColor`] as yellow, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnsiStyles {
    escapes: BTreeMap<StyleKey, String>,
    reset: String,
}

impl Default for AnsiStyles {
    fn default() -> Self {
        let mut styles = Self::empty();
        styles
            .set(StyleKey::BackgroundColor, "\x1b[41m")
            .set(StyleKey::ForegroundColor, "\x1b[33m")
            .set(StyleKey::UnderlineStyle, "\x1b[4m")
            .set(StyleKey::StrikethroughStyle, "\x1b[9m")
            .set(StyleKey::Font, "\x1b[1m")
            .set(StyleKey::TextEffect, "\x1b[5m")
            .set(StyleKey::Shadow, "\x1b[2m");
        styles
    }
}

impl AnsiStyles {
    /// A table without any escapes, using [`RESET`] as the reset sequence.
    pub fn empty() -> Self {
        Self {
            escapes: BTreeMap::new(),
            reset: RESET.into(),
        }
    }

    /// Maps `key` to `escape`.
    pub fn set(&mut self, key: StyleKey, escape: impl Into<String>) -> &mut Self {
        self.escapes.insert(key, escape.into());
        self
    }

    /// Stops rendering `key`.
    pub fn remove(&mut self, key: &StyleKey) -> &mut Self {
        self.escapes.remove(key);
        self
    }

    /// Replaces the reset sequence.
    pub fn set_reset(&mut self, reset: impl Into<String>) -> &mut Self {
        self.reset = reset.into();
        self
    }

    /// Returns the escape for `key`.
    pub fn escape(&self, key: &StyleKey) -> Option<&str> {
        self.escapes.get(key).map(String::as_str)
    }

    /// Returns the reset sequence.
    pub fn reset(&self) -> &str {
        &self.reset
    }
}

struct ConsoleWriter<'a> {
    styles: &'a AnsiStyles,
    out: &'a mut String,
}

impl ConsoleWriter<'_> {
    fn emit(&mut self, attributes: &Attributes) {
        let styles = self.styles;
        for escape in attributes.keys().filter_map(|key| styles.escape(key)) {
            self.out.push_str(escape);
        }
    }
}

impl ContentVisitor for ConsoleWriter<'_> {
    fn enter_scope(&mut self, own: &Attributes, _active: &Attributes) {
        self.emit(own);
    }

    fn exit_scope(&mut self, _own: &Attributes, _active: &Attributes) {
        self.out.push_str(&self.styles.reset);
    }

    fn resume_scope(&mut self, active: &Attributes) {
        self.emit(active);
    }

    fn text(&mut self, text: &str, _active: &Attributes) {
        self.out.push_str(text);
    }

    fn image(&mut self, _image: &Image, _active: &Attributes) {}

    fn visits_images(&self) -> bool {
        false
    }
}

impl AttributedContent {
    /// Renders this content as text with the default [`AnsiStyles`].
    ///
    /// Images are skipped.
    ///
    /// ```
    /// use styled_text::{AttributedTextExt, Paragraph};
    /// use styled_text::peniko::color::palette::css;
    ///
    /// let content = Paragraph::new("Hi".foreground_color(css::YELLOW)).make_content();
    /// assert_eq!(content.console_string(), "\x1b[33mHi\n\x1b[0m");
    /// ```
    pub fn console_string(&self) -> String {
        self.console_string_with(&AnsiStyles::default())
    }

    /// Renders this content as text with the given escape table.
    pub fn console_string_with(&self, styles: &AnsiStyles) -> String {
        let mut out = String::new();
        self.append_console(&mut out, styles);
        out
    }

    /// Renders this content at the end of `out`.
    ///
    /// Entering a scope emits the escapes of its own attributes, and every scope with output
    /// closes with a reset. When more output follows a nested scope, the enclosing scope's
    /// complete style is emitted again.
    pub fn append_console(&self, out: &mut String, styles: &AnsiStyles) {
        log::trace!("rendering console text at offset {}", out.len());
        let start = out.len();
        walk(
            self,
            &mut ConsoleWriter {
                styles,
                out: &mut *out,
            },
        );
        log::debug!("rendered console text: {} bytes", out.len() - start);
    }
}

#[cfg(test)]
mod tests {
    use super::{AnsiStyles, RESET};
    use crate::{AttributedTextExt, Font, FontWeight, Image, LineStyle, StyleKey, text_body};
    use alloc::string::String;
    use alloc::vec;
    use peniko::color::palette::css;

    #[test]
    fn reset_reemits_enclosing_style() {
        let content = text_body!("a", "b".underline(LineStyle::Single), "c")
            .foreground_color(css::RED)
            .make_content();
        assert_eq!(
            content.console_string(),
            "\x1b[33ma\x1b[0m\x1b[33m\x1b[4mb\x1b[0m\x1b[33mc\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn own_escapes_follow_key_order() {
        let content = "x"
            .strikethrough(LineStyle::Single)
            .background_color(css::BLACK)
            .font(Font::system(12.0, FontWeight::BOLD))
            .make_content();
        assert_eq!(content.console_string(), "\x1b[1m\x1b[41m\x1b[9mx\x1b[0m");
    }

    #[test]
    fn unmapped_keys_and_images_emit_no_escapes() {
        let image = Image::from_vec(vec![], 0, 0);
        let content = text_body!("a".kern(2.0), image.foreground_color(css::RED), "b")
            .make_content();
        assert_eq!(content.console_string(), "a\x1b[0mb\x1b[0m\x1b[0m");
    }

    #[test]
    fn every_scope_with_output_resets() {
        let plain = text_body!("a", "b").make_content();
        assert_eq!(plain.console_string(), "a\x1b[0mb\x1b[0m\x1b[0m");

        let styled = text_body!("x".underline(LineStyle::Single), "y")
            .foreground_color(css::RED)
            .make_content();
        let rendered = styled.console_string();
        assert_eq!(rendered, "\x1b[33m\x1b[4mx\x1b[0m\x1b[33my\x1b[0m\x1b[0m");
        assert_eq!(rendered.matches(RESET).count(), 3);
    }

    #[test]
    fn custom_table() {
        let mut styles = AnsiStyles::empty();
        styles.set(StyleKey::Kern, "<k>").set_reset("</>");
        let content = "x".kern(1.0).underline(LineStyle::Single).make_content();
        assert_eq!(content.console_string_with(&styles), "<k>x</>");

        let mut out = String::from("> ");
        content.append_console(&mut out, &AnsiStyles::default());
        assert_eq!(out, alloc::format!("> \x1b[4mx{RESET}"));
    }
}
