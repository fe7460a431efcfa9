//! # tilepx
//!
//! *Straighten your slides.*
//!
//! Whole-slide readers hand back tiles as native-endian `u32` words packed
//! `0xAARRGGBB`, with color premultiplied by alpha. Everything downstream of
//! them (encoders, display surfaces, `image::RgbaImage`) wants straight RGBA
//! bytes. This crate does that one conversion, fast.
//!
//! Per pixel:
//!
//! - alpha 0 → all four bytes zero, whatever color garbage was left behind
//! - alpha 255 → `[r, g, b, 255]`, no arithmetic
//! - otherwise → `[255*r/a, 255*g/a, 255*b/a, a]` with truncating division
//!
//! Output bytes are written by position, so the result is `[r, g, b, a]` in
//! memory on every host, big- or little-endian.
//!
//! ## Core operations (always available)
//!
//! [`argb_to_rgba_words`] converts a `&mut [u32]` in place and cannot fail.
//! The byte-level functions in the crate root operate on raw `&[u8]` /
//! `&mut [u8]` slices, contiguous or strided, and validate sizes up front.
//! They are SIMD-accelerated on x86-64 AVX2 with automatic scalar fallback.
//!
//! ```rust
//! let mut tile = [0x00FF_FFFF_u32, 0xFF80_4020, 0x8080_4020];
//! tilepx::argb_to_rgba_words(&mut tile);
//! assert_eq!(tile[0], 0);
//! assert_eq!(tile[1].to_ne_bytes(), [0x80, 0x40, 0x20, 0xFF]);
//! assert_eq!(tile[2].to_ne_bytes(), [255, 127, 63, 128]);
//! ```
//!
//! ## Feature flags
//!
//! - **`rgb`**: Type-safe output as [`rgb`] crate `Rgba<u8>` via bytemuck.
//! - **`imgref`**: Whole-image conversions using [`imgref`] types
//!   (`ImgRef`, `ImgVec`). Implies `rgb`.
//! - **`rayon`**: Data-parallel variants for large regions. Implies `std`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use core::fmt;

mod argb;

pub use argb::*;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

#[cfg(feature = "rayon")]
pub mod par;

/// Buffer size or geometry rejected before any pixel was touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// Buffer is empty or its length is not a multiple of 4 bytes.
    NotPixelAligned,
    /// Destination holds fewer pixels than the source.
    PixelCountMismatch,
    /// Width/height is zero, `width * 4` exceeds the stride, or the buffer
    /// is shorter than `(height - 1) * stride + width * 4`.
    InvalidStride,
    /// Source and destination images differ in width or height.
    DimensionMismatch,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPixelAligned => write!(f, "buffer is empty or not a whole number of pixels"),
            Self::PixelCountMismatch => {
                write!(f, "destination is smaller than the source pixel count")
            }
            Self::InvalidStride => write!(f, "width, height and stride do not fit the buffer"),
            Self::DimensionMismatch => write!(f, "source and destination dimensions differ"),
        }
    }
}

impl core::error::Error for SizeError {}
