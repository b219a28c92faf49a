// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node types and their interpolations.

mod control;
mod erased;
mod leaf;
mod paragraph;
mod tuple;

pub use control::{
    Conditional, ConditionalInterpolation, Empty, EmptyInterpolation, ForEach,
    ForEachInterpolation, Group, OptionalInterpolation,
};
pub use erased::{AnyAttributedText, AnyInterpolation, Proxy, ProxyInterpolation};
pub use leaf::{ImageInterpolation, Plain, PlainInterpolation, TextInterpolation};
pub use paragraph::{Paragraph, ParagraphInterpolation};
pub use tuple::{TupleInterpolation, TupleText};
