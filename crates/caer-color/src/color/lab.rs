use caer_image::{Image, ImageError};

use crate::{
    depth::{self, ColorDepth},
    parallel,
};

/// D65 reference white, with Y normalized to one.
const WHITE_X: f32 = 0.950456;
const WHITE_Z: f32 = 1.088754;

/// CIE threshold between the cube root and the linear segment.
const EPSILON: f32 = 0.008856;

#[inline]
fn linearize(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Unit sRGB to CIE L*a*b* under D65, with L* in [0, 100].
#[inline]
pub(crate) fn rgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb.map(linearize);

    let x = (0.412453 * r + 0.357580 * g + 0.180423 * b) / WHITE_X;
    let y = 0.212671 * r + 0.715160 * g + 0.072169 * b;
    let z = (0.019334 * r + 0.119193 * g + 0.950227 * b) / WHITE_Z;

    let l = if y > EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        903.3 * y
    };

    let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));

    [l, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Encode one RGB pixel as L*a*b* in the storage of `T`.
#[inline]
pub(crate) fn lab_pixel_from_rgb<T: ColorDepth>([r, g, b]: [T; 3]) -> [T; 3] {
    depth::encode_lab(rgb_to_lab(depth::decode_unit(r, g, b)))
}

/// Convert an RGB image to the CIE L*a*b* color space.
///
/// The storage of each channel depends on the element type, see
/// [`ColorDepth`].
///
/// # Arguments
///
/// * `src` - The input RGB image assumed to have 3 channels.
/// * `dst` - The output LAB image.
///
/// Precondition: the input and output images must have the same size.
pub fn lab_from_rgb<T: ColorDepth>(
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
        dst_pixel.copy_from_slice(&lab_pixel_from_rgb([src_pixel[0], src_pixel[1], src_pixel[2]]));
    });

    Ok(())
}
