use core::arch::x86_64::{
    __m256, __m256i, _mm256_and_si256, _mm256_andnot_si256, _mm256_cmpeq_epi32,
    _mm256_cvtepi32_ps, _mm256_cvttps_epi32, _mm256_div_ps, _mm256_mullo_epi32, _mm256_or_si256,
    _mm256_set1_epi32, _mm256_setzero_si256, _mm256_slli_epi32, _mm256_srli_epi32,
};

use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::unpremultiply_argb;

// ===========================================================================
// x86-64 AVX2 — 8-pixel kernel
//
// 255 * c fits in 16 bits and a ≤ 255, so the f32 quotient never lands on
// the wrong side of an integer: truncating it equals integer floor division
// for every possible input word.
// ===========================================================================

#[rite]
fn unpremul_channel_v3(_token: X64V3Token, c: __m256i, alpha: __m256) -> __m256i {
    let scaled = _mm256_mullo_epi32(c, _mm256_set1_epi32(255));
    let q = _mm256_div_ps(_mm256_cvtepi32_ps(scaled), alpha);
    _mm256_and_si256(_mm256_cvttps_epi32(q), _mm256_set1_epi32(0xFF))
}

#[rite]
fn unpremul_8px_v3(token: X64V3Token, argb: __m256i) -> __m256i {
    let lo = _mm256_set1_epi32(0xFF);
    let a = _mm256_srli_epi32::<24>(argb);
    let r = _mm256_and_si256(_mm256_srli_epi32::<16>(argb), lo);
    let g = _mm256_and_si256(_mm256_srli_epi32::<8>(argb), lo);
    let b = _mm256_and_si256(argb, lo);

    // Alpha-0 lanes divide 0/0; their garbage is masked off below.
    let alpha = _mm256_cvtepi32_ps(a);
    let r = unpremul_channel_v3(token, r, alpha);
    let g = unpremul_channel_v3(token, g, alpha);
    let b = unpremul_channel_v3(token, b, alpha);

    let rg = _mm256_or_si256(r, _mm256_slli_epi32::<8>(g));
    let ba = _mm256_or_si256(_mm256_slli_epi32::<16>(b), _mm256_slli_epi32::<24>(a));
    let rgba = _mm256_or_si256(rg, ba);
    let transparent = _mm256_cmpeq_epi32(a, _mm256_setzero_si256());
    _mm256_andnot_si256(transparent, rgba)
}

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn unpremul_row_v3(token: X64V3Token, row: &mut [u8]) {
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, unpremul_8px_v3(token, v));
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        let v = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&unpremultiply_argb(v));
    }
}

#[rite]
pub(super) fn copy_unpremul_row_v3(token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, unpremul_8px_v3(token, v));
        i += 32;
    }
    for (s, d) in src[i..n].chunks_exact(4).zip(dst[i..n].chunks_exact_mut(4)) {
        let v = u32::from_ne_bytes([s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&unpremultiply_argb(v));
    }
}

// ===========================================================================
// x86-64 arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn unpremul_impl_v3(t: X64V3Token, b: &mut [u8]) {
    unpremul_row_v3(t, b);
}
#[arcane]
pub(super) fn copy_unpremul_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    copy_unpremul_row_v3(t, s, d);
}

// ===========================================================================
// x86-64 arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn unpremul_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        unpremul_row_v3(t, &mut buf[y * stride..][..w * 4]);
    }
}
#[arcane]
pub(super) fn copy_unpremul_strided_v3(
    t: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        copy_unpremul_row_v3(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
