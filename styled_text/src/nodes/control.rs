// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural nodes: optional, conditional, repeated, grouped and empty content.

use core::fmt;

use crate::{AttributedContent, AttributedText, Attributes, Interpolation, Modifier};

/// Interpolation of an `Option` node.
#[derive(Debug)]
pub struct OptionalInterpolation<I>(Option<I>);

impl<I> Interpolation for OptionalInterpolation<I>
where
    I: Interpolation<Output = AttributedContent>,
{
    type Modifiable = I::Modifiable;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = I::Modifiable>) {
        if let Some(inner) = &mut self.0 {
            inner.modify(modifier);
        }
    }

    fn build(self) -> AttributedContent {
        match self.0 {
            Some(inner) => inner.build(),
            None => AttributedContent::new(),
        }
    }
}

impl<T: AttributedText> AttributedText for Option<T> {
    type Modifiable = T::Modifiable;
    type Interpolation<'a>
        = OptionalInterpolation<T::Interpolation<'a>>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        OptionalInterpolation(self.as_ref().map(T::interpolation))
    }
}

/// A node that is exactly one of two alternatives.
///
/// Both alternatives share an accumulator type, so modifiers can be applied without knowing which
/// one is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conditional<A, B> {
    /// The first alternative.
    First(A),
    /// The second alternative.
    Second(B),
}

impl<A, B> Conditional<A, B> {
    /// Picks `first` when `condition` holds, `second` otherwise.
    ///
    /// Both alternatives are constructed; use [`Conditional::First`] and
    /// [`Conditional::Second`] directly when constructing one of them is costly.
    pub fn new(condition: bool, first: A, second: B) -> Self {
        if condition {
            Self::First(first)
        } else {
            Self::Second(second)
        }
    }
}

/// Interpolation of a [`Conditional`] node.
#[derive(Debug)]
pub enum ConditionalInterpolation<A, B> {
    /// Building the first alternative.
    First(A),
    /// Building the second alternative.
    Second(B),
}

impl<A, B> Interpolation for ConditionalInterpolation<A, B>
where
    A: Interpolation<Output = AttributedContent>,
    B: Interpolation<Modifiable = A::Modifiable, Output = AttributedContent>,
{
    type Modifiable = A::Modifiable;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = A::Modifiable>) {
        match self {
            Self::First(first) => first.modify(modifier),
            Self::Second(second) => second.modify(modifier),
        }
    }

    fn build(self) -> AttributedContent {
        match self {
            Self::First(first) => first.build(),
            Self::Second(second) => second.build(),
        }
    }
}

impl<A, B> AttributedText for Conditional<A, B>
where
    A: AttributedText,
    B: AttributedText<Modifiable = A::Modifiable>,
{
    type Modifiable = A::Modifiable;
    type Interpolation<'a>
        = ConditionalInterpolation<A::Interpolation<'a>, B::Interpolation<'a>>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        match self {
            Self::First(first) => ConditionalInterpolation::First(first.interpolation()),
            Self::Second(second) => ConditionalInterpolation::Second(second.interpolation()),
        }
    }
}

/// A node repeated once per element of a sequence.
///
/// ```
/// use styled_text::{AttributedTextExt, ForEach, Plain};
///
/// let list = ForEach::new([1, 2, 3], Plain);
/// assert_eq!(list.make_content().plain_text(), "123");
/// ```
#[derive(Clone)]
pub struct ForEach<D, F> {
    data: D,
    make: F,
}

impl<D, F> ForEach<D, F> {
    /// Creates a node building `make(element)` for every element of `data`.
    pub fn new(data: D, make: F) -> Self {
        Self { data, make }
    }
}

impl<D: fmt::Debug, F> fmt::Debug for ForEach<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEach")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Interpolation of a [`ForEach`] node.
pub struct ForEachInterpolation<'a, D, F> {
    node: &'a ForEach<D, F>,
    attributes: Attributes,
}

impl<D: fmt::Debug, F> fmt::Debug for ForEachInterpolation<'_, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEachInterpolation")
            .field("node", self.node)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl<D, F, C> Interpolation for ForEachInterpolation<'_, D, F>
where
    D: Clone + IntoIterator,
    F: Fn(D::Item) -> C,
    C: AttributedText,
{
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, modifier: &dyn Modifier<Modifiable = Attributes>) {
        modifier.modify(&mut self.attributes);
    }

    fn build(self) -> AttributedContent {
        let mut content = AttributedContent::with_attributes(self.attributes);
        for element in self.node.data.clone() {
            let child = (self.node.make)(element);
            content.append(child.interpolation().build());
        }
        content
    }
}

impl<D, F, C> AttributedText for ForEach<D, F>
where
    D: Clone + IntoIterator,
    F: Fn(D::Item) -> C,
    C: AttributedText,
{
    type Modifiable = Attributes;
    type Interpolation<'a>
        = ForEachInterpolation<'a, D, F>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        ForEachInterpolation {
            node: self,
            attributes: Attributes::new(),
        }
    }
}

/// A single-child node that is transparent to modifiers and building.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Group<C>(pub C);

impl<C: AttributedText> AttributedText for Group<C> {
    type Modifiable = C::Modifiable;
    type Interpolation<'a>
        = C::Interpolation<'a>
    where
        Self: 'a;

    fn interpolation(&self) -> Self::Interpolation<'_> {
        self.0.interpolation()
    }
}

/// A node that always builds empty content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Empty;

/// Interpolation of [`Empty`]. Modifications are discarded.
#[derive(Debug)]
pub struct EmptyInterpolation;

impl Interpolation for EmptyInterpolation {
    type Modifiable = Attributes;
    type Output = AttributedContent;

    fn modify(&mut self, _modifier: &dyn Modifier<Modifiable = Attributes>) {}

    fn build(self) -> AttributedContent {
        AttributedContent::new()
    }
}

impl AttributedText for Empty {
    type Modifiable = Attributes;
    type Interpolation<'a> = EmptyInterpolation;

    fn interpolation(&self) -> EmptyInterpolation {
        EmptyInterpolation
    }
}
