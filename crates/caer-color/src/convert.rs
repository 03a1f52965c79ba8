use caer_image::{ColorSpace, TaggedImage};

use crate::{
    bgr,
    depth::ColorDepth,
    error::{ColorError, Conversion},
    hls, hsv, rgb,
};

/// Convert a tagged image by naming only the destination color space.
///
/// The source is read from the tag of the image, and the conversion is routed
/// to the matching entry point, so the same shape check and chaining rules
/// apply.
///
/// # Example
///
/// ```
/// use caer_color::ConvertColor;
/// use caer_image::{ColorSpace, TaggedImage};
/// use caer_tensor::Tensor3;
///
/// let tensor = Tensor3::<u8>::from_shape_val([2, 2, 3], 128);
/// let hls = TaggedImage::new(tensor, ColorSpace::Hls).unwrap();
///
/// let gray = hls.convert_to(ColorSpace::Gray).unwrap();
/// assert!(gray.is_gray());
/// assert_eq!(gray.num_channels(), 1);
/// ```
pub trait ConvertColor<T> {
    /// Convert into `dst`.
    ///
    /// Converting into the color space the image is already in returns a copy.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedConversion`] when no conversion from
    /// the tagged color space into `dst` exists.
    fn convert_to(&self, dst: ColorSpace) -> Result<TaggedImage<T>, ColorError>;
}

impl<T: ColorDepth> ConvertColor<T> for TaggedImage<T> {
    fn convert_to(&self, dst: ColorSpace) -> Result<TaggedImage<T>, ColorError> {
        use ColorSpace::*;

        let src = self.color_space();
        if src == dst {
            return Ok(self.clone());
        }

        match (src, dst) {
            (Bgr, Rgb) => bgr::bgr2rgb(self),
            (Bgr, Gray) => bgr::bgr2gray(self),
            (Bgr, Hsv) => bgr::bgr2hsv(self),
            (Bgr, Hls) => bgr::bgr2hls(self),
            (Bgr, Lab) => bgr::bgr2lab(self),
            (Rgb, Bgr) => rgb::rgb2bgr(self),
            (Rgb, Gray) => rgb::rgb2gray(self),
            (Rgb, Hsv) => rgb::rgb2hsv(self),
            (Rgb, Hls) => rgb::rgb2hls(self),
            (Rgb, Lab) => rgb::rgb2lab(self),
            (Hls, Rgb) => hls::hls2rgb(self),
            (Hls, Bgr) => hls::hls2bgr(self),
            (Hls, Gray) => hls::hls2gray(self),
            (Hls, Hsv) => hls::hls2hsv(self),
            (Hls, Lab) => hls::hls2lab(self),
            (Hsv, Rgb) => hsv::hsv2rgb(self),
            (Hsv, Bgr) => hsv::hsv2bgr(self),
            (Hsv, Gray) => hsv::hsv2gray(self),
            (Hsv, Hls) => hsv::hsv2hls(self),
            (Hsv, Lab) => hsv::hsv2lab(self),
            _ => {
                log::debug!("no conversion from {src} to {dst}");
                Err(ColorError::UnsupportedConversion(Conversion::new(src, dst)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use caer_image::{ColorSpace, TaggedImage};
    use caer_tensor::Tensor3;

    use super::ConvertColor;
    use crate::{error::ColorError, hls, Conversion};

    fn tagged(color_space: ColorSpace) -> Result<TaggedImage<u8>, ColorError> {
        let channels = color_space.num_channels();
        let tensor = Tensor3::from_shape_fn([2, 3, channels], |[y, x, c]| (y * 70 + x * 20 + c * 5) as u8);
        Ok(TaggedImage::new(tensor, color_space)?)
    }

    #[test]
    fn routes_to_entry_points() -> Result<(), ColorError> {
        let image = tagged(ColorSpace::Hls)?;
        assert_eq!(image.convert_to(ColorSpace::Bgr)?, hls::hls2bgr(&image)?);
        assert_eq!(image.convert_to(ColorSpace::Lab)?, hls::hls2lab(&image)?);
        Ok(())
    }

    #[test]
    fn every_color_source_reaches_every_destination() -> Result<(), ColorError> {
        let sources = [ColorSpace::Rgb, ColorSpace::Bgr, ColorSpace::Hsv, ColorSpace::Hls];
        for src in sources {
            let image = tagged(src)?;
            for dst in ColorSpace::ALL {
                let out = image.convert_to(dst)?;
                assert_eq!(out.color_space(), dst);
                assert_eq!(out.size(), image.size());
                assert_eq!(out.num_channels(), dst.num_channels());
            }
        }
        Ok(())
    }

    #[test]
    fn identity_is_a_copy() -> Result<(), ColorError> {
        let image = tagged(ColorSpace::Hsv)?;
        assert_eq!(image.convert_to(ColorSpace::Hsv)?, image);
        Ok(())
    }

    #[test]
    fn gray_and_lab_are_terminal() -> Result<(), ColorError> {
        let gray = tagged(ColorSpace::Gray)?;
        assert_eq!(
            gray.convert_to(ColorSpace::Rgb),
            Err(ColorError::UnsupportedConversion(Conversion::new(
                ColorSpace::Gray,
                ColorSpace::Rgb
            )))
        );

        let lab = tagged(ColorSpace::Lab)?;
        assert!(lab.convert_to(ColorSpace::Hls).is_err());
        Ok(())
    }
}
