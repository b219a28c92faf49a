// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::Color;
use peniko::kurbo::Vec2;

/// Visual weight (boldness) of a font, on the CSS `100..=900` scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);
    /// Weight value of 400.
    pub const NORMAL: Self = Self(400.0);
    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);
    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);
    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);
    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight from a raw value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the raw weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font description: family name, point size and weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name. An empty name selects the platform's system font.
    pub family: Arc<str>,
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl Font {
    /// Creates a font of the given family and size with normal weight.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// Creates a system font of the given size and weight.
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            family: Arc::from(""),
            size,
            weight,
        }
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns `true` if this font selects the system font.
    pub fn is_system(&self) -> bool {
        self.family.is_empty()
    }
}

/// Line pattern for underline and strikethrough decorations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// A single thin line.
    #[default]
    Single,
    /// Two thin lines.
    Double,
    /// A single thick line.
    Thick,
    /// A dotted line.
    Dotted,
    /// A dashed line.
    Dashed,
}

/// Special text rendering effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEffect {
    /// Embossed "letterpress" look.
    LetterpressStyle,
}

/// A drop shadow behind glyphs.
#[derive(Clone, Copy, Debug)]
pub struct Shadow {
    /// Offset of the shadow from the glyphs, in points.
    pub offset: Vec2,
    /// Blur radius, in points.
    pub blur_radius: f64,
    /// Shadow color. `None` uses a platform default (black at one third opacity).
    pub color: Option<Color>,
}

impl Shadow {
    /// Creates a shadow with the default color.
    pub fn new(offset: Vec2, blur_radius: f64) -> Self {
        Self {
            offset,
            blur_radius,
            color: None,
        }
    }

    /// Returns this shadow with an explicit color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl PartialEq for Shadow {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.blur_radius == other.blur_radius
            && match (&self.color, &other.color) {
                (Some(a), Some(b)) => same_color(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

/// Component-wise color equality.
#[inline]
pub(crate) fn same_color(a: &Color, b: &Color) -> bool {
    a.components == b.components
}
