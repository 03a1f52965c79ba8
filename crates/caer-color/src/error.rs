use std::fmt;

use caer_image::{ColorSpace, ImageError};

/// A requested conversion from one color space to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Conversion {
    /// The color space the input is claimed to be in.
    pub src: ColorSpace,
    /// The color space of the output.
    pub dst: ColorSpace,
}

impl Conversion {
    /// Describe a conversion from `src` to `dst`.
    pub const fn new(src: ColorSpace, dst: ColorSpace) -> Self {
        Self { src, dst }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.src, self.dst)
    }
}

/// The input buffer is not a 3-dimensional image with the expected channels.
///
/// Raised before any pixel is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Tensor of shape {expected} with {expected_channels} channels expected. \
     Found shape {found} {dims:?}. Cannot convert {conversion}"
)]
pub struct ShapeError {
    /// Number of dimensions the conversion expects.
    pub expected: usize,
    /// Number of channels the conversion expects in the last dimension.
    pub expected_channels: usize,
    /// Number of dimensions of the input.
    pub found: usize,
    /// The full shape of the input.
    pub dims: Vec<usize>,
    /// The conversion that was attempted.
    pub conversion: Conversion,
}

impl ShapeError {
    /// Build the error for an input of shape `dims` rejected by `conversion`.
    pub fn new(
        expected: usize,
        expected_channels: usize,
        dims: &[usize],
        conversion: Conversion,
    ) -> Self {
        Self {
            expected,
            expected_channels,
            found: dims.len(),
            dims: dims.to_vec(),
            conversion,
        }
    }
}

/// An error type for the color module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input failed the shape admission check.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// An error raised while building or reading an image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// There is no conversion between the two color spaces.
    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(Conversion),

    /// The conversion primitive was handed a code it does not know.
    #[error("Unknown conversion code {0}")]
    UnknownCode(i32),
}

#[cfg(test)]
mod tests {
    use caer_image::ColorSpace;

    use super::{ColorError, Conversion, ShapeError};

    #[test]
    fn shape_error_message() {
        let err = ShapeError::new(3, 3, &[4, 4], Conversion::new(ColorSpace::Hls, ColorSpace::Bgr));
        assert_eq!(err.found, 2);
        assert_eq!(
            err.to_string(),
            "Tensor of shape 3 with 3 channels expected. Found shape 2 [4, 4]. Cannot convert HLS to BGR"
        );
    }

    #[test]
    fn color_error_is_transparent() {
        let conversion = Conversion::new(ColorSpace::Hsv, ColorSpace::Lab);
        let err: ColorError = ShapeError::new(3, 3, &[2, 2, 4], conversion).into();
        assert!(err.to_string().contains("Found shape 3 [2, 2, 4]"));
        assert!(err.to_string().ends_with("HSV to LAB"));
    }
}
