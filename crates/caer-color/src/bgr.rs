use caer_image::{ColorSpace, ImageLike, TaggedImage};

use crate::{
    cvt,
    depth::ColorDepth,
    error::{ColorError, Conversion},
    validate::validate,
};

fn from_bgr<T, I>(img: &I, dst: ColorSpace) -> Result<TaggedImage<T>, ColorError>
where
    T: ColorDepth,
    I: ImageLike<T> + ?Sized,
{
    let view = validate(img, Conversion::new(ColorSpace::Bgr, dst))?;
    cvt::convert(&view, ColorSpace::Bgr, dst)
}

/// Converts a BGR image to its RGB version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn bgr2rgb<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_bgr(img, ColorSpace::Rgb)
}

/// Converts a BGR image to its grayscale version.
///
/// The output has a single channel.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
///
/// # Example
///
/// ```
/// use caer_color::bgr::bgr2gray;
/// use caer_tensor::Tensor3;
///
/// let bgr = Tensor3::<u8>::from_shape_vec([1, 1, 3], vec![0, 0, 255]).unwrap();
/// let gray = bgr2gray(&bgr).unwrap();
///
/// assert!(gray.is_gray());
/// assert_eq!(gray.tensor().as_slice(), &[76]);
/// ```
pub fn bgr2gray<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_bgr(img, ColorSpace::Gray)
}

/// Converts a BGR image to its HSV version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn bgr2hsv<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_bgr(img, ColorSpace::Hsv)
}

/// Converts a BGR image to its HLS version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn bgr2hls<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_bgr(img, ColorSpace::Hls)
}

/// Converts a BGR image to its LAB version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn bgr2lab<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_bgr(img, ColorSpace::Lab)
}
