// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The protocol that turns one document node into [`AttributedContent`].

use crate::{AttributedContent, Attributes, Modifier};

/// Build state for one node.
///
/// An interpolation is created from a node by [`AttributedText::interpolation`], receives zero or
/// more [`modify`](Self::modify) calls, and is then consumed by exactly one
/// [`build`](Self::build). Consuming `self` makes building twice, or modifying after building,
/// impossible to express.
pub trait Interpolation {
    /// The accumulator that modifiers of this node mutate.
    type Modifiable;
    /// The result of building.
    type Output;

    /// Applies `modifier` to the accumulator.
    ///
    /// Later modifications overwrite earlier ones where they touch the same state.
    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Self::Modifiable>);

    /// Consumes the accumulator and any child content.
    fn build(self) -> Self::Output;
}

/// A document node that can be built into [`AttributedContent`].
///
/// Most documents implement [`Composite`] instead and get this trait, with a style map as the
/// accumulator, for free.
pub trait AttributedText {
    /// The accumulator type modifiers applied to this node must target.
    type Modifiable;
    /// The interpolation created for this node.
    type Interpolation<'a>: Interpolation<Modifiable = Self::Modifiable, Output = AttributedContent>
        + 'a
    where
        Self: 'a;

    /// Creates a fresh interpolation borrowing this node.
    fn interpolation(&self) -> Self::Interpolation<'_>;
}

/// A document node defined by the content of its body.
///
/// ## Example
///
/// ```
/// use styled_text::{AttributedTextExt, Composite, TupleText, text_body};
///
/// struct Greeting<'n> {
///     name: &'n str,
/// }
///
/// impl Composite for Greeting<'_> {
///     type Body<'a>
///         = TupleText<(&'static str, &'a str)>
///     where
///         Self: 'a;
///
///     fn text_body(&self) -> Self::Body<'_> {
///         text_body!("Hello, ", self.name)
///     }
/// }
///
/// let content = Greeting { name: "world" }.make_content();
/// assert_eq!(content.plain_text(), "Hello, world");
/// ```
pub trait Composite {
    /// The node type returned by [`text_body`](Self::text_body).
    type Body<'a>: AttributedText + 'a
    where
        Self: 'a;

    /// Returns the body of this node.
    fn text_body(&self) -> Self::Body<'_>;
}

impl<T: Composite> AttributedText for T {
    type Modifiable = Attributes;
    type Interpolation<'a>
        = DefaultInterpolation<'a, T>
    where
        T: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        DefaultInterpolation {
            node: self,
            attributes: Attributes::new(),
        }
    }
}

/// Interpolation of a [`Composite`] node.
///
/// Building builds the body and nests it inside a scope carrying the accumulated attributes.
#[derive(Debug)]
pub struct DefaultInterpolation<'a, T> {
    node: &'a T,
    attributes: Attributes,
}

impl<T: Composite> Interpolation for DefaultInterpolation<'_, T> {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        modifier.modify(&mut self.attributes);
    }

    fn build(self) -> AttributedContent {
        let body = self.node.text_body();
        AttributedContent::wrapping(body.interpolation().build(), self.attributes)
    }
}
