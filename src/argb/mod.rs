// ---------------------------------------------------------------------------
// Premultiplied ARGB32 → straight RGBA8 with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
//
// Source pixels are native-endian u32 words 0xAARRGGBB. Output pixels are
// the bytes [r, g, b, a] in memory regardless of host byte order.
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(4) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize) -> Result<(), SizeError> {
    check_inplace(src_len)?;
    if dst_len < src_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(4).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Per-pixel reference
// ===========================================================================

/// Un-premultiply one `0xAARRGGBB` word into `[r, g, b, a]` bytes.
///
/// Alpha 0 yields all zeros. Alpha 255 passes color through unchanged.
/// Anything else divides each channel as `255 * c / a`, truncating.
///
/// The quotient is narrowed to `u8` by truncation, not clamped. Input whose
/// color exceeds its alpha (never produced by a correct premultiply) wraps
/// exactly as the native slide-reader conversion does.
///
/// ```rust
/// assert_eq!(tilepx::unpremultiply_argb(0x8080_4020), [255, 127, 63, 128]);
/// assert_eq!(tilepx::unpremultiply_argb(0x00FF_FFFF), [0, 0, 0, 0]);
/// assert_eq!(tilepx::unpremultiply_argb(0xFF80_4020), [0x80, 0x40, 0x20, 0xFF]);
/// ```
#[inline(always)]
pub const fn unpremultiply_argb(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) as u8;
    let r = (argb >> 16) as u8;
    let g = (argb >> 8) as u8;
    let b = argb as u8;
    match a {
        0 => [0; 4],
        255 => [r, g, b, 255],
        _ => [
            (255 * r as u32 / a as u32) as u8,
            (255 * g as u32 / a as u32) as u8,
            (255 * b as u32 / a as u32) as u8,
            a,
        ],
    }
}

// ===========================================================================
// Public API — words
// ===========================================================================

/// Convert premultiplied ARGB words to straight RGBA in place.
///
/// Every word of `buf` is rewritten so that its bytes in memory read
/// `[r, g, b, a]`. Words outside the slice are never touched. An empty
/// slice is a no-op.
pub fn argb_to_rgba_words(buf: &mut [u32]) {
    if buf.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(buf);
    incant!(unpremul_impl(bytes), [v3, scalar]);
}

/// Copy premultiplied ARGB words into `dst` as straight RGBA bytes.
///
/// `dst` must hold at least `4 * src.len()` bytes; only that prefix is written.
pub fn argb_words_to_rgba(src: &[u32], dst: &mut [u8]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    argb_to_rgba(src_bytes, dst)
}

// ===========================================================================
// Public API — contiguous bytes
// ===========================================================================

/// Convert native-endian premultiplied ARGB words, stored as bytes, to
/// straight RGBA in place.
pub fn argb_to_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    incant!(unpremul_impl(buf), [v3, scalar]);
    Ok(())
}

/// Copy native-endian premultiplied ARGB pixels into `dst` as straight RGBA.
///
/// `src` is left untouched. Only the first `src.len()` bytes of `dst` are written.
pub fn argb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    let dst = &mut dst[..src.len()];
    incant!(copy_unpremul_impl(src, dst), [v3, scalar]);
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Convert a strided ARGB region to straight RGBA in place.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
/// The buffer must be at least `(height - 1) * stride + width * 4` bytes.
pub fn argb_to_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    incant!(
        unpremul_strided(buf, width, height, stride),
        [v3, scalar]
    );
    Ok(())
}

/// Copy a strided ARGB region into a strided RGBA destination.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows in the source and destination buffers respectively.
/// Padding bytes between rows are never read or written.
pub fn argb_to_rgba_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    incant!(
        copy_unpremul_strided(src, dst, width, height, src_stride, dst_stride),
        [v3, scalar]
    );
    Ok(())
}

/// Row helper for callers that have already validated geometry.
#[cfg(feature = "rayon")]
pub(crate) fn unpremul_row(row: &mut [u8]) {
    incant!(unpremul_impl(row), [v3, scalar]);
}
