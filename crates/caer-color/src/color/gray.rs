use caer_image::{Image, ImageError};

use crate::{depth::ColorDepth, parallel};

/// Define the RGB weights for the grayscale conversion.
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Luminance of a pixel, in the same scale as its channels.
#[inline]
pub(crate) fn luma<T: ColorDepth>(r: T, g: T, b: T) -> T {
    T::from_f32(RW * r.into() + GW * g.into() + BW * b.into())
}

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use caer_image::{Image, ImageSize};
/// use caer_color::color::gray_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0);
///
/// gray_from_rgb(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb<T: ColorDepth>(
    src: &Image<T, 3>,
    dst: &mut Image<T, 1>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(&src.view(), dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = luma(src_pixel[0], src_pixel[1], src_pixel[2]);
    });

    Ok(())
}

/// Convert an RGB image to BGR by swapping the red and blue channels.
///
/// The same swap turns BGR back into RGB.
///
/// Precondition: the input and output images must have the same size.
pub fn bgr_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(&src.view(), dst, |src_pixel, dst_pixel| {
        dst_pixel
            .iter_mut()
            .zip(src_pixel.iter().rev())
            .for_each(|(d, s)| {
                *d = *s;
            });
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use caer_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgb_regression() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                1.0, 0.0, 0.0,
                0.0, 1.0, 0.0,
                0.0, 0.0, 1.0,
                0.0, 0.0, 0.0,
                0.0, 0.0, 0.0,
                0.0, 0.0, 0.0,
            ],
        )?;

        let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0);

        super::gray_from_rgb(&image, &mut gray)?;

        let expected = [0.299, 0.587, 0.114, 0.0, 0.0, 0.0];

        for (a, b) in gray.as_slice().iter().zip(expected.iter()) {
            approx::assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0u8, 128, 255, 128, 0, 128],
        )?;

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0);

        super::gray_from_rgb(&image, &mut gray)?;

        // 0.587 * 128 + 0.114 * 255 = 104.2, 0.299 * 128 + 0.114 * 128 = 52.9
        assert_eq!(gray.as_slice(), &[104, 53]);

        Ok(())
    }

    #[test]
    fn gray_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        );
        let mut gray = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 2,
            },
            0,
        );
        let res = super::gray_from_rgb(&image, &mut gray);
        assert_eq!(res, Err(ImageError::InvalidImageSize(2, 2, 1, 2)));
        Ok(())
    }

    #[test]
    fn bgr_from_rgb() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize {
                width: 1,
                height: 3,
            },
            vec![
                0.0, 1.0, 2.0,
                3.0, 4.0, 5.0,
                6.0, 7.0, 8.0,
            ],
        )?;

        let mut bgr = Image::<f32, 3>::from_size_val(image.size(), 0.0);

        super::bgr_from_rgb(&image, &mut bgr)?;

        #[rustfmt::skip]
        let expected = [
            2.0, 1.0, 0.0,
            5.0, 4.0, 3.0,
            8.0, 7.0, 6.0,
        ];

        assert_eq!(bgr.as_slice(), &expected);

        Ok(())
    }
}
