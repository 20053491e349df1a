use crate::foundation::{
    core::Rgb8,
    error::{SpiroError, SpiroResult},
    math::mul_div255_u16,
};

/// Composite RGBA8 pixels over an opaque `bg`, writing opaque RGBA8 into `dst`.
pub fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg: Rgb8,
) -> SpiroResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SpiroError::validation(
            "flatten_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg = [u16::from(bg.r), u16::from(bg.g), u16::from(bg.b)];
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        for c in 0..3 {
            let fg = if src_is_premul {
                u16::from(s[c])
            } else {
                mul_div255_u16(u16::from(s[c]), a)
            };
            d[c] = (fg + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

/// Parallel [`flatten_to_opaque_rgba8`] over row bands, run on `pool`.
pub fn flatten_parallel(
    pool: &rayon::ThreadPool,
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg: Rgb8,
    row_bytes: usize,
) -> SpiroResult<()> {
    use rayon::prelude::*;

    if dst.len() != src.len() || row_bytes == 0 || !row_bytes.is_multiple_of(4) {
        return Err(SpiroError::validation(
            "flatten_parallel expects equal-length rgba8 buffers and a whole-pixel row size",
        ));
    }
    let band = row_bytes * 16;
    pool.install(|| {
        dst.par_chunks_mut(band)
            .zip(src.par_chunks(band))
            .try_for_each(|(d, s)| flatten_to_opaque_rgba8(d, s, src_is_premul, bg))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/flatten.rs"]
mod tests;
