// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text targets that attributed content is rendered into.
//!
//! Two representations are provided:
//!
//! - [`AttributedText`]: a growable text buffer with attribute spans applied to byte ranges.
//!   Spans may overlap; later spans are reported after earlier ones. Embedded objects (such as
//!   images) are represented by U+FFFC OBJECT REPLACEMENT CHARACTER with an attribute applied
//!   over it.
//! - [`AttributedString`]: a value type where every byte of text belongs to exactly one run, and
//!   each run carries the complete attribute container for its range. Adjacent runs with equal
//!   containers are coalesced on insertion.
//!
//! All ranges are **byte indices** into UTF-8 text. They are only ever handed out by the
//! targets themselves, so they always lie on character boundaries.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use attributed_text::AttributedText;
//!
//! #[derive(Debug, PartialEq)]
//! enum Attr {
//!     Bold,
//! }
//!
//! let mut text = AttributedText::new();
//! text.push_str("Hello ");
//! let world = text.push_str("world");
//! text.apply_attribute(world, Attr::Bold);
//!
//! assert_eq!(text.as_str(), "Hello world");
//! assert_eq!(text.attributes_at(7).collect::<Vec<_>>(), [&Attr::Bold]);
//! assert!(text.attributes_at(0).next().is_none());
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

mod attributed_string;
mod attributed_text;
mod text_range;

pub use crate::attributed_string::{AttributedString, Run};
pub use crate::attributed_text::{AttributedText, OBJECT_REPLACEMENT_CHARACTER};
pub use crate::text_range::TextRange;
