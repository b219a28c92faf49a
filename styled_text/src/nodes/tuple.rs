// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{AttributedContent, AttributedText, Attributes, Interpolation, Modifier};

/// An ordered group of 2 to 10 sibling nodes of possibly different types.
///
/// Usually created with [`text_body!`](crate::text_body). Each child is built independently and
/// kept as its own nested scope, in declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TupleText<T>(pub T);

/// Interpolation of a [`TupleText`] node.
#[derive(Debug)]
pub struct TupleInterpolation<'a, T> {
    children: &'a T,
    attributes: Attributes,
}

macro_rules! impl_tuple_text {
    ($($child:ident $ix:tt),+) => {
        impl<$($child: AttributedText),+> Interpolation for TupleInterpolation<'_, ($($child,)+)> {
            type Modifiable = Attributes;
            type Output = AttributedContent;

            fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
                modifier.modify(&mut self.attributes);
            }

            fn build(self) -> AttributedContent {
                let mut content = AttributedContent::with_attributes(self.attributes);
                $(content.append(self.children.$ix.interpolation().build());)+
                content
            }
        }

        impl<$($child: AttributedText),+> AttributedText for TupleText<($($child,)+)> {
            type Modifiable = Attributes;
            type Interpolation<'a>
                = TupleInterpolation<'a, ($($child,)+)>
            where
                Self: 'a;

            fn interpolation(&self) -> Self::Interpolation<'_> {
                TupleInterpolation {
                    children: &self.0,
                    attributes: Attributes::new(),
                }
            }
        }
    };
}

impl_tuple_text!(C0 0, C1 1);
impl_tuple_text!(C0 0, C1 1, C2 2);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3, C4 4);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7, C8 8);
impl_tuple_text!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7, C8 8, C9 9);

/// Combines the nodes of a document body into one node.
///
/// A single node is returned as is. Two to ten nodes become a [`TupleText`] that builds them in
/// order, each as its own nested scope.
///
/// ```
/// use styled_text::{AttributedTextExt, NestedItem, text_body};
/// use styled_text::peniko::color::palette::css;
///
/// let body = text_body!("Hello, ", "world".foreground_color(css::GREEN), "!");
/// let content = body.make_content();
///
/// assert_eq!(content.items.len(), 3);
/// assert!(content.items.iter().all(|item| matches!(item, NestedItem::Nested(_))));
/// assert_eq!(content.plain_text(), "Hello, world!");
/// ```
#[macro_export]
macro_rules! text_body {
    ($single:expr $(,)?) => {
        $single
    };
    ($c0:expr, $c1:expr $(,)?) => {
        $crate::TupleText(($c0, $c1))
    };
    ($c0:expr, $c1:expr, $c2:expr $(,)?) => {
        $crate::TupleText(($c0, $c1, $c2))
    };
    ($c0:expr, $c1:expr, $c2:expr, $c3:expr $(,)?) => {
        $crate::TupleText(($c0, $c1, $c2, $c3))
    };
    ($c0:expr, $c1:expr, $c2:expr, $c3:expr, $c4:expr $(,)?) => {
        $crate::TupleText(($c0, $c1, $c2, $c3, $c4))
    };
    ($c0:expr, $c1:expr, $c2:expr, $c3:expr, $c4:expr, $c5:expr $(,)?) => {
        $crate::TupleText(($c0, $c1, $c2, $c3, $c4, $c5))
    };
    ($c0:expr, $c1:expr, $c2:expr, $c3:expr, $c4:expr, $c5:expr, $c6:expr $(,)?) => {
        $crate::TupleText(($c0, $c1, $c2, $c3, $c4, $c5, $c6))
    };
    ($c0:expr, $c1:expr, $c2:expr, $c3:expr, $c4:expr, $c5:expr, $c6:expr, $c7:expr $(,)?) => {
        $crate::TupleText(($c0, $c1, $c2, $c3, $c4, $c5, $c6, $c7))
    };
    (
        $c0:expr, $c1:expr, $c2:expr, $c3:expr, $c4:expr, $c5:expr, $c6:expr, $c7:expr,
        $c8:expr $(,)?
    ) => {
        $crate::TupleText(($c0, $c1, $c2, $c3, $c4, $c5, $c6, $c7, $c8))
    };
    (
        $c0:expr, $c1:expr, $c2:expr, $c3:expr, $c4:expr, $c5:expr, $c6:expr, $c7:expr,
        $c8:expr, $c9:expr $(,)?
    ) => {
        $crate::TupleText(($c0, $c1, $c2, $c3, $c4, $c5, $c6, $c7, $c8, $c9))
    };
}

#[cfg(test)]
mod tests {
    use crate::{AttributedTextExt, Empty, NestedItem, StyleKey, TupleText};
    use alloc::vec::Vec;

    #[test]
    fn children_keep_their_own_scopes() {
        let body = text_body!("a".kern(1.0), "b", Empty, "c".kern(2.0)).baseline_offset(3.0);
        let content = body.make_content();

        assert_eq!(content.attributes.len(), 1);
        assert!(content.attributes.contains_key(&StyleKey::BaselineOffset));
        let kerned: Vec<bool> = content
            .items
            .iter()
            .map(|item| match item {
                NestedItem::Nested(child) => child.attributes.contains_key(&StyleKey::Kern),
                other => panic!("unexpected item {other:?}"),
            })
            .collect();
        assert_eq!(kerned, [true, false, false, true]);
    }

    #[test]
    fn widest_tuple() {
        let body = text_body!("0", "1", "2", "3", "4", "5", "6", "7", "8", "9");
        let _: &TupleText<(&str, &str, &str, &str, &str, &str, &str, &str, &str, &str)> = &body;
        assert_eq!(body.make_content().plain_text(), "0123456789");
    }

    #[test]
    fn single_child_is_unwrapped() {
        let body = text_body!("only");
        assert_eq!(body, "only");
    }
}
