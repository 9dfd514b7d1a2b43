// SPDX-License-Identifier: MPL-2.0
//! Decoded-size probing for fetched assets.
//!
//! Fetched bytes are checked with the `image` crate before they reach the
//! cache: the format must be recognised and the header must yield
//! dimensions. Full decoding is left to the Iced renderer.

use crate::error::{FetchError, Result};
use iced::widget::image;
use image_rs::ImageReader;
use std::io::Cursor;

/// An encoded image ready for display, with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct AssetImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    encoded_len: usize,
}

impl AssetImage {
    /// Validates encoded bytes (PNG, JPEG, etc.) and wraps them in a handle.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let (width, height) = probe_dimensions(&bytes)?;
        let encoded_len = bytes.len();
        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
            encoded_len,
        })
    }

    /// Size of the decoded RGBA pixels in bytes.
    #[must_use]
    pub fn decoded_size(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    /// Size of the encoded payload in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }
}

/// Reads the image dimensions from the header without decoding pixels.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FetchError::InvalidImage(e.to_string()))?;

    if reader.format().is_none() {
        return Err(FetchError::InvalidImage("unrecognised format".to_string()).into());
    }

    reader
        .into_dimensions()
        .map_err(|e| FetchError::InvalidImage(e.to_string()).into())
}

#[cfg(test)]
pub(crate) fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let img = image_rs::RgbaImage::new(width, height);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image_rs::ImageFormat::Png)
        .expect("failed to encode png");
    out.into_inner()
}
