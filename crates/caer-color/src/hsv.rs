use caer_image::{ColorSpace, ImageLike, TaggedImage};

use crate::{
    cvt,
    depth::ColorDepth,
    error::{ColorError, Conversion},
    validate::validate,
};

/// Converts a HSV image to its RGB version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
///
/// # Example
///
/// ```
/// use caer_color::hsv::hsv2rgb;
/// use caer_tensor::Tensor3;
///
/// // hue 120 degrees, full saturation and value
/// let hsv = Tensor3::<u8>::from_shape_vec([1, 1, 3], vec![60, 255, 255]).unwrap();
/// let rgb = hsv2rgb(&hsv).unwrap();
///
/// assert!(rgb.is_rgb());
/// assert_eq!(rgb.tensor().as_slice(), &[0, 255, 0]);
/// ```
pub fn hsv2rgb<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    let view = validate(img, Conversion::new(ColorSpace::Hsv, ColorSpace::Rgb))?;
    cvt::convert(&view, ColorSpace::Hsv, ColorSpace::Rgb)
}

/// Converts a HSV image to its BGR version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hsv2bgr<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    let view = validate(img, Conversion::new(ColorSpace::Hsv, ColorSpace::Bgr))?;
    cvt::convert(&view, ColorSpace::Hsv, ColorSpace::Bgr)
}

fn through_bgr<T, I>(img: &I, dst: ColorSpace) -> Result<TaggedImage<T>, ColorError>
where
    T: ColorDepth,
    I: ImageLike<T> + ?Sized,
{
    let view = validate(img, Conversion::new(ColorSpace::Hsv, dst))?;
    cvt::convert_through_bgr(&view, ColorSpace::Hsv, dst)
}

/// Converts a HSV image to its grayscale version, going through BGR.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hsv2gray<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    through_bgr(img, ColorSpace::Gray)
}

/// Converts a HSV image to its HLS version, going through BGR.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hsv2hls<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    through_bgr(img, ColorSpace::Hls)
}

/// Converts a HSV image to its LAB version, going through BGR.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hsv2lab<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    through_bgr(img, ColorSpace::Lab)
}
