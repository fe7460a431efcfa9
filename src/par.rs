//! Data-parallel conversions on the rayon global pool.
//!
//! Pixels are independent, so the buffer is split into disjoint chunks (or
//! rows) and each task runs the same SIMD-dispatched kernel. Intended for
//! large region reads; a single tile gains little.
//!
//! ```rust
//! let mut region = vec![0x8080_4020u32; 1 << 20];
//! tilepx::par::par_argb_to_rgba_words(&mut region);
//! assert!(region.iter().all(|w| w.to_ne_bytes() == [255, 127, 63, 128]));
//! ```

use rayon::prelude::*;

use crate::SizeError;

/// Pixels per task for contiguous buffers (1 MiB of pixel data).
pub const PAR_CHUNK_PIXELS: usize = 1 << 18;

/// Parallel [`argb_to_rgba_words`](crate::argb_to_rgba_words).
pub fn par_argb_to_rgba_words(buf: &mut [u32]) {
    buf.par_chunks_mut(PAR_CHUNK_PIXELS)
        .for_each(crate::argb_to_rgba_words);
}

/// Parallel [`argb_to_rgba_inplace_strided`](crate::argb_to_rgba_inplace_strided),
/// one task per row.
pub fn par_argb_to_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    crate::argb::check_strided(buf.len(), width, height, stride)?;
    buf.par_chunks_mut(stride)
        .take(height)
        .for_each(|row| crate::argb::unpremul_row(&mut row[..width * 4]));
    Ok(())
}
