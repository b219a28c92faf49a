// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use peniko::Blob;

/// An opaque handle to an embedded image.
///
/// The pixel data is shared, never decoded, and never copied by this crate; cloning an `Image`
/// clones the handle. Two images are equal when they share the same data and dimensions.
#[derive(Clone)]
pub struct Image {
    data: Blob<u8>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates an image from shared data of the given dimensions.
    pub fn new(data: Blob<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates an image taking ownership of `data`.
    pub fn from_vec(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self::new(Blob::new(Arc::new(data)), width, height)
    }

    /// Returns the shared image data.
    #[inline]
    pub fn data(&self) -> &Blob<u8> {
        &self.data
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.data.id() == other.data.id() && self.width == other.width && self.height == other.height
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.data.id())
            .field("bytes", &self.data.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Image;
    use alloc::vec;

    #[test]
    fn equality_is_handle_identity() {
        let a = Image::from_vec(vec![0; 4], 1, 1);
        let b = Image::from_vec(vec![0; 4], 1, 1);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a, Image::new(a.data().clone(), 2, 2));
    }
}
