use caer_image::{ColorSpace, ImageView, TaggedImage};
use caer_tensor::Tensor3;

use crate::{
    code::{self, ConversionCode},
    color,
    depth::ColorDepth,
    error::{ColorError, Conversion},
    parallel::map_pixels,
};

/// Apply the single-pass transformation selected by `code` to a 3-channel view.
///
/// The result keeps the height and width of the input. Its channel count is
/// set by the destination of the code.
pub(crate) fn cvt_color<T: ColorDepth>(
    src: &ImageView<'_, T, 3>,
    code: ConversionCode,
) -> Result<Tensor3<T>, ColorError> {
    log::trace!(
        "cvt_color code={} size={}x{}",
        code.0,
        src.cols(),
        src.rows()
    );

    let dst = match code {
        ConversionCode::BGR2RGB => map_pixels(src, |p| [p[2], p[1], p[0]]).0,
        ConversionCode::BGR2GRAY => map_pixels(src, |p| [color::luma(p[2], p[1], p[0])]).0,
        ConversionCode::RGB2GRAY => map_pixels(src, |p| [color::luma(p[0], p[1], p[2])]).0,
        ConversionCode::BGR2HSV => {
            map_pixels(src, |p| color::hsv_pixel_from_rgb([p[2], p[1], p[0]])).0
        }
        ConversionCode::RGB2HSV => {
            map_pixels(src, |p| color::hsv_pixel_from_rgb([p[0], p[1], p[2]])).0
        }
        ConversionCode::BGR2HLS => {
            map_pixels(src, |p| color::hls_pixel_from_rgb([p[2], p[1], p[0]])).0
        }
        ConversionCode::RGB2HLS => {
            map_pixels(src, |p| color::hls_pixel_from_rgb([p[0], p[1], p[2]])).0
        }
        ConversionCode::BGR2LAB => {
            map_pixels(src, |p| color::lab_pixel_from_rgb([p[2], p[1], p[0]])).0
        }
        ConversionCode::RGB2LAB => {
            map_pixels(src, |p| color::lab_pixel_from_rgb([p[0], p[1], p[2]])).0
        }
        ConversionCode::HSV2RGB => map_pixels(src, |p| color::rgb_pixel_from_hsv(p)).0,
        ConversionCode::HSV2BGR => map_pixels(src, |p| {
            let [r, g, b] = color::rgb_pixel_from_hsv(p);
            [b, g, r]
        })
        .0,
        ConversionCode::HLS2RGB => map_pixels(src, |p| color::rgb_pixel_from_hls(p)).0,
        ConversionCode::HLS2BGR => map_pixels(src, |p| {
            let [r, g, b] = color::rgb_pixel_from_hls(p);
            [b, g, r]
        })
        .0,
        other => {
            log::debug!("no transformation registered for code {}", other.0);
            return Err(ColorError::UnknownCode(other.0));
        }
    };

    Ok(dst)
}

/// Convert a 3-channel view claimed to be in `src` into `dst` in one pass.
///
/// The pair must be listed in the conversion table, otherwise
/// [`ColorError::UnsupportedConversion`] is returned.
pub(crate) fn convert<T: ColorDepth>(
    view: &ImageView<'_, T, 3>,
    src: ColorSpace,
    dst: ColorSpace,
) -> Result<TaggedImage<T>, ColorError> {
    let code = code::lookup(src, dst)
        .ok_or(ColorError::UnsupportedConversion(Conversion::new(src, dst)))?;
    let tensor = cvt_color(view, code)?;
    Ok(TaggedImage::new(tensor, dst)?)
}

/// Convert a view claimed to be in `src` to BGR, then on to `dst`.
///
/// The BGR intermediate is produced here, so it is not admitted again.
pub(crate) fn convert_through_bgr<T: ColorDepth>(
    view: &ImageView<'_, T, 3>,
    src: ColorSpace,
    dst: ColorSpace,
) -> Result<TaggedImage<T>, ColorError> {
    let bgr = convert(view, src, ColorSpace::Bgr)?;
    convert(&bgr.view::<3>()?, ColorSpace::Bgr, dst)
}
