use archmage::prelude::*;

use super::unpremultiply_argb;

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn unpremul_row_scalar(_token: ScalarToken, row: &mut [u8]) {
    for px in row.chunks_exact_mut(4) {
        let v = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&unpremultiply_argb(v));
    }
}

pub(super) fn copy_unpremul_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let v = u32::from_ne_bytes([s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&unpremultiply_argb(v));
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn unpremul_impl_scalar(t: ScalarToken, b: &mut [u8]) {
    unpremul_row_scalar(t, b);
}
pub(super) fn copy_unpremul_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    copy_unpremul_row_scalar(t, s, d);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn unpremul_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        unpremul_row_scalar(t, &mut buf[y * stride..][..w * 4]);
    }
}
pub(super) fn copy_unpremul_strided_scalar(
    t: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        copy_unpremul_row_scalar(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
