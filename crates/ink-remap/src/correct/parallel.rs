//! Threshold-based dispatch between sequential and `rayon` iteration.

use rayon::prelude::*;

/// Pixel count above which correction fans out to the rayon pool.
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Pixels handed to one rayon task at a time.
const PIXELS_PER_TASK: usize = 4_096;

/// Apply `f` to every `chunk_size`-byte pixel of `data`.
///
/// With `parallel` set and at least [`PARALLEL_THRESHOLD`] pixels, the work
/// is split into blocks of [`PIXELS_PER_TASK`] pixels on the rayon pool;
/// otherwise it runs in order on the calling thread. `f` must not depend on
/// visiting order.
pub(crate) fn for_each_pixel_mut<F>(data: &mut [u8], chunk_size: usize, parallel: bool, f: F)
where
    F: Fn(&mut [u8]) + Sync,
{
    let num_pixels = data.len() / chunk_size;

    if parallel && num_pixels >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(chunk_size * PIXELS_PER_TASK)
            .for_each(|block| block.chunks_exact_mut(chunk_size).for_each(&f));
    } else {
        data.chunks_exact_mut(chunk_size).for_each(f);
    }
}
