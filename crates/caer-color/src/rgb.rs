use caer_image::{ColorSpace, ImageLike, TaggedImage};

use crate::{
    cvt,
    depth::ColorDepth,
    error::{ColorError, Conversion},
    validate::validate,
};

fn from_rgb<T, I>(img: &I, dst: ColorSpace) -> Result<TaggedImage<T>, ColorError>
where
    T: ColorDepth,
    I: ImageLike<T> + ?Sized,
{
    let view = validate(img, Conversion::new(ColorSpace::Rgb, dst))?;
    cvt::convert(&view, ColorSpace::Rgb, dst)
}

/// Converts an RGB image to its BGR version.
pub fn rgb2bgr<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_rgb(img, ColorSpace::Bgr)
}

/// Converts an RGB image to its grayscale version.
pub fn rgb2gray<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_rgb(img, ColorSpace::Gray)
}

/// Converts an RGB image to its HSV version.
pub fn rgb2hsv<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_rgb(img, ColorSpace::Hsv)
}

/// Converts an RGB image to its HLS version.
pub fn rgb2hls<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_rgb(img, ColorSpace::Hls)
}

/// Converts an RGB image to its LAB version.
pub fn rgb2lab<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    from_rgb(img, ColorSpace::Lab)
}
