// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;

use crate::{
    AnyAttributedText, AttributeModifier, AttributedContent, AttributedText, AttributedTextExt,
    Attributes, Composite, Conditional, ForEach, Image, LineStyle, Modified, NestedItem,
    Paragraph, Plain, StyleKey, StyleValue, TextEffect, TupleText, text_body,
};

fn color(content: &AttributedContent) -> Option<&StyleValue> {
    content.attributes.get(&StyleKey::ForegroundColor)
}

fn nested(content: &AttributedContent) -> Vec<&AttributedContent> {
    content
        .items
        .iter()
        .map(|item| match item {
            NestedItem::Nested(nested) => nested,
            other => panic!("expected a nested item, got {other:?}"),
        })
        .collect()
}

/// A document whose body must never be built.
struct Unreachable;

impl Composite for Unreachable {
    type Body<'a> = &'static str;

    fn text_body(&self) -> &'static str {
        panic!("built a branch that is not live");
    }
}

/// A document made of a title and a list of entries.
struct Listing {
    title: String,
    entries: Vec<u32>,
}

impl Composite for Listing {
    type Body<'a> = TupleText<(
        Paragraph<Modified<&'a str, AttributeModifier>>,
        ForEach<Vec<u32>, fn(u32) -> Paragraph<Plain<u32>>>,
    )>;

    fn text_body(&self) -> Self::Body<'_> {
        let entry: fn(u32) -> Paragraph<Plain<u32>> = |n| Paragraph::new(Plain(n));
        text_body!(
            Paragraph::new(self.title.as_str().foreground_color(css::RED)),
            ForEach::new(self.entries.clone(), entry),
        )
    }
}

#[test]
fn leaf_builds_one_text_item() {
    let content = "leaf"
        .underline(LineStyle::Thick)
        .text_effect(TextEffect::LetterpressStyle)
        .make_content();
    let mut expected = Attributes::new();
    expected.insert(StyleKey::UnderlineStyle, LineStyle::Thick);
    expected.insert(StyleKey::TextEffect, TextEffect::LetterpressStyle);

    assert_eq!(content.items, [NestedItem::Text("leaf".into())]);
    assert_eq!(content.attributes, expected);
}

#[test]
fn tuple_children_match_independent_builds() {
    let first = "one".foreground_color(css::RED);
    let second = Paragraph::new("two");
    let third = Plain(3);
    let content = text_body!(first.clone(), second, third).make_content();

    assert_eq!(
        nested(&content),
        [
            &first.make_content(),
            &second.make_content(),
            &third.make_content()
        ]
    );
}

#[test]
fn for_each_follows_sequence_order() {
    let make = |n: i32| Plain(n).kern(n as f32);
    let forward = ForEach::new(vec![1, 2, 3], make).make_content();
    let backward = ForEach::new(vec![3, 2, 1], make).make_content();

    let expected: Vec<_> = [1, 2, 3].map(|n| make(n).make_content()).into();
    assert_eq!(nested(&forward), expected.iter().collect::<Vec<_>>());

    let mut reversed = nested(&forward);
    reversed.reverse();
    assert_eq!(nested(&backward), reversed);
}

#[test]
fn rendering_is_idempotent() {
    let image = Image::from_vec(vec![0xff; 4], 1, 1);
    let content = Paragraph::new(text_body!(
        "a".foreground_color(css::BLUE),
        image.underline(LineStyle::Single),
        "b".link("https://example.invalid"),
    ))
    .paragraph_style(|style| style.head_indent = 12.0)
    .make_content();

    assert_eq!(content.console_string(), content.console_string());
    assert_eq!(content.attributed_string(), content.attributed_string());
    let (a, b) = (content.attributed_text(), content.attributed_text());
    assert_eq!(a.as_str(), b.as_str());
    assert_eq!(
        a.attributes_iter().collect::<Vec<_>>(),
        b.attributes_iter().collect::<Vec<_>>()
    );
}

#[test]
fn own_attributes_override_inherited() {
    let content = text_body!(
        Paragraph::new(text_body!("deep".foreground_color(css::GREEN), "plain")),
        "sibling".kern(1.0),
    )
    .foreground_color(css::RED)
    .strikethrough(LineStyle::Double)
    .make_content();
    let string = content.attributed_string();

    let at = |needle: &str| {
        let ix = string.as_str().find(needle).unwrap();
        string.attributes_at(ix).unwrap().clone()
    };
    let green = StyleValue::Color(css::GREEN);
    let red = StyleValue::Color(css::RED);
    let double = StyleValue::Line(LineStyle::Double);

    assert_eq!(at("deep").get(&StyleKey::ForegroundColor), Some(&green));
    assert_eq!(at("deep").get(&StyleKey::StrikethroughStyle), Some(&double));
    assert_eq!(at("plain").get(&StyleKey::ForegroundColor), Some(&red));
    assert_eq!(at("sibling").get(&StyleKey::ForegroundColor), Some(&red));
    assert!(at("sibling").contains_key(&StyleKey::Kern));
    assert!(!at("plain").contains_key(&StyleKey::Kern));

    let text = content.attributed_text();
    let ix = text.as_str().find("deep").unwrap();
    let colors: Vec<_> = text
        .attributes_at(ix)
        .filter(|a| a.key == StyleKey::ForegroundColor)
        .collect();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].value, green);
}

#[test]
fn console_paragraph() {
    let content = Paragraph::new("Hi".foreground_color(css::YELLOW)).make_content();
    assert_eq!(content.console_string(), "\x1b[33mHi\n\x1b[0m");

    let proxied = Paragraph::new("Hi")
        .foreground_color(css::YELLOW)
        .make_content();
    assert_eq!(proxied.console_string(), "\x1b[33mHi\n\x1b[0m\x1b[0m");
}

#[test]
fn conditional_touches_only_live_branch() {
    let node: Conditional<_, Unreachable> = Conditional::First("live");
    let content = node.foreground_color(css::RED).make_content();
    assert_eq!(content.plain_text(), "live");
    assert_eq!(color(&content), Some(&StyleValue::Color(css::RED)));

    let node: Conditional<Unreachable, _> = Conditional::Second(Plain('x'));
    let content = node.kern(2.0).make_content();
    assert_eq!(content.plain_text(), "x");
    assert!(content.attributes.contains_key(&StyleKey::Kern));
}

#[test]
fn absent_optional_is_empty() {
    let absent: Option<Paragraph<&str>> = None;
    let content = absent
        .paragraph_style(|style| style.line_spacing = 4.0)
        .make_content();
    assert!(content.items.is_empty());
    assert!(content.attributes.is_empty());
    assert_eq!(content.console_string(), "");
    assert!(content.attributed_text().is_empty());
}

#[test]
fn outermost_modifier_wins() {
    let inner_first = "x".foreground_color(css::RED).foreground_color(css::BLUE);
    assert_eq!(
        color(&inner_first.make_content()),
        Some(&StyleValue::Color(css::BLUE))
    );

    let erased = "x".foreground_color(css::RED).erased().foreground_color(css::BLUE);
    assert_eq!(
        color(&erased.make_content()),
        Some(&StyleValue::Color(css::BLUE))
    );
}

#[test]
fn composite_documents_nest_their_body() {
    let listing = Listing {
        title: "Scores".into(),
        entries: vec![10, 20],
    };
    let content = listing.background_color(css::WHITE).make_content();

    assert!(content.attributes.contains_key(&StyleKey::BackgroundColor));
    assert_eq!(nested(&content).len(), 1);
    assert_eq!(content.plain_text(), "Scores\n10\n20\n");

    assert_eq!(
        content.console_string(),
        "\x1b[41m\x1b[33mScores\n\x1b[0m\x1b[41m10\n\x1b[0m\x1b[41m20\n\x1b[0m\x1b[0m\x1b[0m\x1b[0m"
    );
}

#[test]
fn erased_documents_mix_in_one_list() {
    let items: Vec<AnyAttributedText> = vec![
        "text".erased(),
        AnyAttributedText::erasing(Paragraph::new("para")),
        Plain(7).underline(LineStyle::Single).erased(),
    ];
    let mut rendered = String::new();
    for item in &items {
        item.make_content().append_console(&mut rendered, &Default::default());
    }
    assert_eq!(rendered, "text\x1b[0mpara\n\x1b[0m\x1b[0m\x1b[4m7\x1b[0m");
}

#[test]
fn several_documents_share_one_target() {
    let mut target = attributed_text::AttributedString::new();
    "a".make_content().append_attributed_string(&mut target);
    "b".make_content().append_attributed_string(&mut target);
    "c".kern(1.0).make_content().append_attributed_string(&mut target);

    assert_eq!(target.as_str(), "abc");
    assert_eq!(target.runs().len(), 2);
    assert_eq!(target.runs()[0].range, 0..2);
}

#[test]
fn custom_keys_pass_through_renderers() {
    let key = StyleKey::Custom(Arc::from("x-note"));
    let note = StyleValue::Text(Arc::from("reviewed"));
    let content = text_body!(
        "noted".attribute(key.clone(), note.clone()),
        Paragraph::new("para").attribute(key.clone(), note.clone()),
    )
    .make_content();

    let string = content.attributed_string();
    assert_eq!(string.as_str(), "notedpara\n");
    assert_eq!(string.runs().len(), 2);
    for run in string.runs() {
        assert_eq!(run.attributes.get(&key), Some(&note));
    }

    let text = content.attributed_text();
    let spans: Vec<_> = text
        .attributes_iter()
        .filter(|(_, attribute)| attribute.key == key)
        .map(|(range, attribute)| (range.clone(), attribute.value.clone()))
        .collect();
    assert_eq!(spans, [(0..5, note.clone()), (5..10, note)]);

    let console = content.console_string();
    assert_eq!(console, "noted\x1b[0mpara\n\x1b[0m\x1b[0m\x1b[0m");
    assert!(!console.contains("x-note"));
}

fn assert_node<T: AttributedText>() {}

#[test]
fn common_nodes_are_attributed_text() {
    assert_node::<String>();
    assert_node::<&str>();
    assert_node::<Image>();
    assert_node::<Option<Paragraph<String>>>();
    assert_node::<AnyAttributedText>();
}
