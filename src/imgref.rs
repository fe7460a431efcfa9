//! Whole-image conversions using [`imgref`] types.
//!
//! A region read from a slide is a `width × height` grid of `u32` words,
//! possibly a window into a larger strided buffer. These functions walk it
//! row by row with the SIMD-optimized core operations.
//!
//! # Copy into a caller-owned destination
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::{ImgVec, ImgRefMut};
//! use tilepx::imgref;
//!
//! let region = ImgVec::new(vec![0xFF80_4020u32; 4], 2, 2);
//! let mut dst_buf = vec![Rgba::default(); 4];
//! let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
//! imgref::convert_argb_to_rgba(region.as_ref(), dst).unwrap();
//! assert_eq!(dst_buf[3], Rgba::new(0x80, 0x40, 0x20, 0xFF));
//! ```
//!
//! # Allocate a packed RGBA image
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::ImgVec;
//! use tilepx::imgref;
//!
//! let region = ImgVec::new(vec![0x8080_4020u32; 6], 3, 2);
//! let rgba: ImgVec<Rgba<u8>> = imgref::argb_to_rgba_img(region.as_ref());
//! assert_eq!((rgba.width(), rgba.height()), (3, 2));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::Rgba;

use crate::SizeError;

// ---------------------------------------------------------------------------
// Dimension check
// ---------------------------------------------------------------------------

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::DimensionMismatch)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Convert `ImgRef<u32>` premultiplied ARGB into `ImgRefMut<Rgba<u8>>`.
///
/// Both images may be strided; only the visible `width` pixels of each
/// row are read or written.
pub fn convert_argb_to_rgba(
    src: ImgRef<'_, u32>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::argb_words_to_rgba(src_row, d)?;
    }
    Ok(())
}

/// Convert `ImgRef<u32>` premultiplied ARGB into a new, tightly packed
/// `ImgVec<Rgba<u8>>` of the same dimensions.
pub fn argb_to_rgba_img(src: ImgRef<'_, u32>) -> ImgVec<Rgba<u8>> {
    let (w, h) = (src.width(), src.height());
    let buf: Vec<Rgba<u8>> = vec![Rgba::default(); w * h];
    let mut dst = ImgVec::new(buf, w, h);
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        // `d` always fits; the only error is an empty row, which has nothing to convert.
        let _ = crate::argb_words_to_rgba(src_row, d);
    }
    dst
}

/// Convert the visible rows of `ImgRefMut<u32>` in place.
///
/// Afterwards each converted word reads `[r, g, b, a]` in memory; view the
/// rows through `bytemuck::cast_slice` to get RGBA bytes. Stride padding is
/// not touched.
pub fn argb_to_rgba_rows(mut img: ImgRefMut<'_, u32>) {
    for row in img.rows_mut() {
        crate::argb_to_rgba_words(row);
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    #[test]
    fn test_convert_argb_to_rgba_img() {
        let src = ImgVec::new(vec![0x0011_2233u32, 0xFF01_0203, 0x8080_4020, 0xFF00_0000], 2, 2);
        let mut dst_buf = vec![Rgba::default(); 4];
        let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
        convert_argb_to_rgba(src.as_ref(), dst).unwrap();
        assert_eq!(
            dst_buf,
            [
                Rgba::new(0, 0, 0, 0),
                Rgba::new(1, 2, 3, 255),
                Rgba::new(255, 127, 63, 128),
                Rgba::new(0, 0, 0, 255),
            ]
        );
    }

    #[test]
    fn test_convert_dimension_mismatch() {
        let src = ImgVec::new(vec![0u32; 4], 2, 2);
        let mut dst_buf = vec![Rgba::default(); 4];
        let dst = ImgRefMut::new(&mut dst_buf, 4, 1);
        assert_eq!(
            convert_argb_to_rgba(src.as_ref(), dst),
            Err(SizeError::DimensionMismatch)
        );
    }

    #[test]
    fn test_argb_to_rgba_img_strided_source() {
        // 2×2 window over a 3-wide buffer; the third column is padding.
        let buf = vec![
            0xFF0A_0B0Cu32, 0x8040_2010, 0xDEAD_BEEF, //
            0x0000_00FF, 0xFFFF_FFFF, 0xDEAD_BEEF,
        ];
        let src = ImgRef::new_stride(&buf, 2, 2, 3);
        let out = argb_to_rgba_img(src);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.stride(), 2);
        assert_eq!(
            out.buf().as_slice(),
            [
                Rgba::new(10, 11, 12, 255),
                Rgba::new(127, 63, 31, 128),
                Rgba::new(0, 0, 0, 0),
                Rgba::new(255, 255, 255, 255),
            ]
        );
    }

    #[test]
    fn test_argb_to_rgba_rows_skips_padding() {
        let mut buf = vec![0x8080_4020u32, 0xDEAD_BEEF, 0xFF80_4020, 0xDEAD_BEEF];
        argb_to_rgba_rows(ImgRefMut::new_stride(&mut buf, 1, 2, 2));
        assert_eq!(buf[0].to_ne_bytes(), [255, 127, 63, 128]);
        assert_eq!(buf[1], 0xDEAD_BEEF);
        assert_eq!(buf[2].to_ne_bytes(), [0x80, 0x40, 0x20, 0xFF]);
        assert_eq!(buf[3], 0xDEAD_BEEF);
    }
}
