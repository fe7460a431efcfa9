//! Type-safe output as [`rgb`] crate `Rgba<u8>` via bytemuck.
//!
//! Source tiles stay `u32` words, the shape slide readers hand them out in.
//! Output is `Rgba<u8>`, either reinterpreted in place or copied.
//!
//! # In-place conversion
//!
//! ```rust
//! use rgb::Rgba;
//! use tilepx::typed_rgb;
//!
//! let mut tile: Vec<u32> = vec![0x8080_4020; 64];
//! let rgba: &mut [Rgba<u8>] = typed_rgb::argb_to_rgba_mut(&mut tile);
//! assert_eq!(rgba[0], Rgba::new(255, 127, 63, 128));
//! ```
//!
//! # Copy conversion
//!
//! ```rust
//! use rgb::Rgba;
//! use tilepx::typed_rgb;
//!
//! let tile: Vec<u32> = vec![0xFF80_4020; 64];
//! let mut out = vec![Rgba::default(); 64];
//! typed_rgb::argb_to_rgba_buf(&tile, &mut out).unwrap();
//! assert_eq!(out[63], Rgba::new(0x80, 0x40, 0x20, 0xFF));
//! ```

use crate::SizeError;
use rgb::Rgba;

/// Convert `&mut [u32]` premultiplied ARGB words to `&mut [Rgba<u8>]` in place.
///
/// Returns a bytemuck-reinterpreted reference to the same memory.
pub fn argb_to_rgba_mut(pixels: &mut [u32]) -> &mut [Rgba<u8>] {
    crate::argb_to_rgba_words(pixels);
    bytemuck::cast_slice_mut(pixels)
}

/// Copy `&[u32]` premultiplied ARGB words into `&mut [Rgba<u8>]`.
///
/// `dst` may be longer than `src`; the extra pixels are left alone.
pub fn argb_to_rgba_buf(src: &[u32], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::argb_words_to_rgba(src, dst_bytes)
}
