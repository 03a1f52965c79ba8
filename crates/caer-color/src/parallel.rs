use rayon::prelude::*;

use caer_image::{Image, ImageView};

/// Apply a function to each pixel in the image, processing rows in parallel.
///
/// Precondition: `src` and `dst` have the same size.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &ImageView<'_, T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Map every pixel of `src` into a new image with `C` channels.
pub fn map_pixels<T, const C: usize>(
    src: &ImageView<'_, T, 3>,
    f: impl Fn(&[T]) -> [T; C] + Send + Sync,
) -> Image<T, C>
where
    T: Copy + Default + Send + Sync,
{
    let mut dst = Image::<T, C>::from_size_val(src.size(), T::default());
    par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&f(src_pixel));
    });
    dst
}

#[cfg(test)]
mod tests {
    use caer_image::{Image, ImageError, ImageSize};

    #[test]
    fn par_iter_rows_swap() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        )?;
        let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0);
        super::par_iter_rows(&src.view(), &mut dst, |s, d| {
            d[0] = s[2];
            d[1] = s[1];
            d[2] = s[0];
        });
        assert_eq!(
            dst.as_slice(),
            &[3, 2, 1, 6, 5, 4, 9, 8, 7, 12, 11, 10]
        );
        Ok(())
    }

    #[test]
    fn map_pixels_reduces_channels() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![1, 2, 3, 4, 5, 6],
        )?;
        let dst = super::map_pixels(&src.view(), |p| [p[0] + p[1] + p[2]]);
        assert_eq!(dst.num_channels(), 1);
        assert_eq!(dst.as_slice(), &[6, 15]);
        Ok(())
    }

    #[test]
    fn empty_image() {
        let src = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 0,
                height: 3,
            },
            0,
        );
        let dst = super::map_pixels(&src.view(), |p| [p[0]]);
        assert_eq!(dst.size(), src.size());
    }
}
