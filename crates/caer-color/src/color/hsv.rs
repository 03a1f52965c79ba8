use caer_image::{Image, ImageError};

use crate::{
    depth::{self, ColorDepth},
    parallel,
};

/// Hue in degrees [0, 360) of a unit RGB pixel given its extremes.
#[inline]
pub(super) fn hue_degrees(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }

    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Unit RGB pixel for a hue in degrees spanning `min..=max`.
#[inline]
pub(super) fn rgb_from_hue(h: f32, max: f32, min: f32) -> [f32; 3] {
    let mut h = (h / 60.0).rem_euclid(6.0);
    // rem_euclid rounds tiny negative hues up to a full turn
    if h >= 6.0 {
        h = 0.0;
    }
    let sector = h.floor();
    let f = h - sector;
    let rising = min + (max - min) * f;
    let falling = min + (max - min) * (1.0 - f);

    match sector as u8 {
        0 => [max, rising, min],
        1 => [falling, max, min],
        2 => [min, max, rising],
        3 => [min, falling, max],
        4 => [rising, min, max],
        _ => [max, min, falling],
    }
}

/// Unit RGB to HSV with hue in degrees and saturation, value in [0, 1].
#[inline]
pub(crate) fn rgb_to_hsv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_degrees(r, g, b, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max };

    [h, s, max]
}

/// HSV with hue in degrees to unit RGB.
#[inline]
pub(crate) fn hsv_to_rgb([h, s, v]: [f32; 3]) -> [f32; 3] {
    if s == 0.0 {
        return [v, v, v];
    }
    rgb_from_hue(h, v, v * (1.0 - s))
}

/// Encode one RGB pixel as HSV in the storage of `T`.
#[inline]
pub(crate) fn hsv_pixel_from_rgb<T: ColorDepth>([r, g, b]: [T; 3]) -> [T; 3] {
    depth::encode_hue(rgb_to_hsv(depth::decode_unit(r, g, b)))
}

/// Decode one HSV pixel stored as `T` into RGB.
#[inline]
pub(crate) fn rgb_pixel_from_hsv<T: ColorDepth>(p: &[T]) -> [T; 3] {
    depth::encode_unit(hsv_to_rgb(depth::decode_hue(p)))
}

/// Convert an RGB image to an HSV image.
///
/// The input image is assumed to have 3 channels in the order R, G, B.
/// The channel ranges depend on the element type, see [`ColorDepth`].
///
/// # Arguments
///
/// * `src` - The input RGB image assumed to have 3 channels.
/// * `dst` - The output HSV image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use caer_image::{Image, ImageSize};
/// use caer_color::color::hsv_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<f32, 3>::from_size_val(image.size(), 0.0);
///
/// hsv_from_rgb(&image, &mut hsv).unwrap();
///
/// assert_eq!(hsv.num_channels(), 3);
/// assert_eq!(hsv.size().width, 4);
/// assert_eq!(hsv.size().height, 5);
/// ```
pub fn hsv_from_rgb<T: ColorDepth>(
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
        dst_pixel.copy_from_slice(&hsv_pixel_from_rgb([src_pixel[0], src_pixel[1], src_pixel[2]]));
    });

    Ok(())
}

/// Convert an HSV image to an RGB image.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_hsv<T: ColorDepth>(
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
        dst_pixel.copy_from_slice(&rgb_pixel_from_hsv(src_pixel));
    });

    Ok(())
}
