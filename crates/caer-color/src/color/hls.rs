use caer_image::{Image, ImageError};

use super::hsv::{hue_degrees, rgb_from_hue};
use crate::{
    depth::{self, ColorDepth},
    parallel,
};

/// Unit RGB to HLS with hue in degrees and lightness, saturation in [0, 1].
#[inline]
pub(crate) fn rgb_to_hls([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) * 0.5;

    if delta == 0.0 {
        return [0.0, l, 0.0];
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [hue_degrees(r, g, b, max, delta), l, s]
}

/// HLS with hue in degrees to unit RGB.
#[inline]
pub(crate) fn hls_to_rgb([h, l, s]: [f32; 3]) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let p2 = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p1 = 2.0 * l - p2;

    rgb_from_hue(h, p2, p1)
}

/// Encode one RGB pixel as HLS in the storage of `T`.
#[inline]
pub(crate) fn hls_pixel_from_rgb<T: ColorDepth>([r, g, b]: [T; 3]) -> [T; 3] {
    depth::encode_hue(rgb_to_hls(depth::decode_unit(r, g, b)))
}

/// Decode one HLS pixel stored as `T` into RGB.
#[inline]
pub(crate) fn rgb_pixel_from_hls<T: ColorDepth>(p: &[T]) -> [T; 3] {
    depth::encode_unit(hls_to_rgb(depth::decode_hue(p)))
}

/// Convert an RGB image to an HLS image.
///
/// The output channels are stored in the order hue, lightness, saturation.
///
/// # Arguments
///
/// * `src` - The input RGB image assumed to have 3 channels.
/// * `dst` - The output HLS image.
///
/// Precondition: the input and output images must have the same size.
pub fn hls_from_rgb<T: ColorDepth>(
    src: &Image<T, 3>,
    dst: &mut Image<T, 3>,
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
        dst_pixel.copy_from_slice(&hls_pixel_from_rgb([src_pixel[0], src_pixel[1], src_pixel[2]]));
    });

    Ok(())
}

/// Convert an HLS image to an RGB image.
///
/// # Arguments
///
/// * `src` - The input HLS image assumed to have 3 channels.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use caer_image::{Image, ImageSize};
/// use caer_color::color::rgb_from_hls;
///
/// let hls = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![0, 128, 255],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<u8, 3>::from_size_val(hls.size(), 0);
/// rgb_from_hls(&hls, &mut rgb).unwrap();
///
/// assert_eq!(rgb.as_slice(), &[255, 1, 1]);
/// ```
pub fn rgb_from_hls<T: ColorDepth>(
    src: &Image<T, 3>,
    dst: &mut Image<T, 3>,
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
        dst_pixel.copy_from_slice(&rgb_pixel_from_hls(src_pixel));
    });

    Ok(())
}
