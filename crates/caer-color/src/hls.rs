use caer_image::{ColorSpace, ImageLike, TaggedImage};

use crate::{
    cvt,
    depth::ColorDepth,
    error::{ColorError, Conversion},
    validate::validate,
};

/// Converts a HLS image to its RGB version.
///
/// # Arguments
///
/// * `img` - A height × width × 3 buffer holding HLS values.
///
/// # Returns
///
/// The RGB image, of the same height and width, tagged [`ColorSpace::Rgb`].
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hls2rgb<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    let view = validate(img, Conversion::new(ColorSpace::Hls, ColorSpace::Rgb))?;
    cvt::convert(&view, ColorSpace::Hls, ColorSpace::Rgb)
}

/// Converts a HLS image to its BGR version.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
///
/// # Example
///
/// ```
/// use caer_color::hls::hls2bgr;
/// use caer_tensor::Tensor2;
///
/// let plane = Tensor2::<u8>::from_shape_val([4, 4], 0);
/// let err = hls2bgr(&plane).unwrap_err();
///
/// assert!(err.to_string().contains("shape 3"));
/// assert!(err.to_string().contains("BGR"));
/// ```
pub fn hls2bgr<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    let view = validate(img, Conversion::new(ColorSpace::Hls, ColorSpace::Bgr))?;
    cvt::convert(&view, ColorSpace::Hls, ColorSpace::Bgr)
}

/// Admit `img` for HLS to `dst` and convert it through BGR, the hub for
/// every destination without a direct path.
fn through_bgr<T, I>(img: &I, dst: ColorSpace) -> Result<TaggedImage<T>, ColorError>
where
    T: ColorDepth,
    I: ImageLike<T> + ?Sized,
{
    let view = validate(img, Conversion::new(ColorSpace::Hls, dst))?;
    cvt::convert_through_bgr(&view, ColorSpace::Hls, dst)
}

/// Converts a HLS image to its grayscale version.
///
/// The image is converted to BGR first, then to grayscale. The output has a
/// single channel.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hls2gray<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    through_bgr(img, ColorSpace::Gray)
}

/// Converts a HLS image to its HSV version, going through BGR.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hls2hsv<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    through_bgr(img, ColorSpace::Hsv)
}

/// Converts a HLS image to its LAB version, going through BGR.
///
/// # Errors
///
/// Returns [`ColorError::Shape`] if `img` is not of shape height × width × 3.
pub fn hls2lab<T: ColorDepth, I: ImageLike<T> + ?Sized>(
    img: &I,
) -> Result<TaggedImage<T>, ColorError> {
    through_bgr(img, ColorSpace::Lab)
}

#[cfg(test)]
mod tests {
    use caer_image::ColorSpace;
    use caer_tensor::{Tensor2, Tensor3};

    use crate::{bgr, error::ColorError};

    #[test]
    fn hls2bgr_scenario() -> Result<(), ColorError> {
        let hls = Tensor3::<u8>::from_shape_fn([4, 4, 3], |[y, x, c]| (y * 40 + x * 10 + c) as u8);
        let out = super::hls2bgr(&hls)?;
        assert_eq!(out.color_space(), ColorSpace::Bgr);
        assert_eq!(out.tensor().shape, [4, 4, 3]);

        let plane = Tensor2::<u8>::from_shape_val([4, 4], 0);
        let err = super::hls2bgr(&plane).unwrap_err();
        assert!(matches!(err, ColorError::Shape(_)));
        let msg = err.to_string();
        assert!(msg.contains("shape 3"), "{msg}");
        assert!(msg.contains("BGR"), "{msg}");
        Ok(())
    }

    #[test]
    fn chained_matches_two_steps() -> Result<(), ColorError> {
        let hls = Tensor3::<u8>::from_shape_fn([3, 5, 3], |[y, x, c]| {
            ((y * 53 + x * 31 + c * 97) % 256) as u8
        });
        let bgr = super::hls2bgr(&hls)?;

        let gray = super::hls2gray(&hls)?;
        assert!(gray.is_gray());
        assert_eq!(gray, bgr::bgr2gray(&bgr)?);
        assert_eq!(super::hls2hsv(&hls)?, bgr::bgr2hsv(&bgr)?);
        assert_eq!(super::hls2lab(&hls)?, bgr::bgr2lab(&bgr)?);
        Ok(())
    }

    #[test]
    fn chained_names_the_final_destination() {
        let bad = Tensor3::<f32>::from_shape_val([2, 2, 4], 0.0);
        let err = super::hls2lab(&bad).unwrap_err();
        assert!(err.to_string().ends_with("HLS to LAB"));
    }

    #[test]
    fn rgb_and_bgr_agree() -> Result<(), ColorError> {
        let hls = Tensor3::<f32>::from_shape_fn([2, 2, 3], |[y, x, c]| match c {
            0 => (y * 2 + x) as f32 * 90.0,
            _ => 0.5,
        });
        let rgb = super::hls2rgb(&hls)?;
        let bgr = super::hls2bgr(&hls)?;
        for (p, q) in rgb
            .tensor()
            .as_slice()
            .chunks_exact(3)
            .zip(bgr.tensor().as_slice().chunks_exact(3))
        {
            assert_eq!([p[0], p[1], p[2]], [q[2], q[1], q[0]]);
        }
        Ok(())
    }
}
