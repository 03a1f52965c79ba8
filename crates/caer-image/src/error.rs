use caer_tensor::TensorError;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the underlying tensor could not be built.
    #[error("Failed to create image data: {0}")]
    InvalidShape(#[from] TensorError),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination sizes differ.
    #[error("Image size mismatch: source is {0}x{1}, destination is {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the channel count does not fit the color space tag.
    #[error("Color space {color_space} expects {expected} channels, found {found}")]
    ColorSpaceChannelMismatch {
        /// Name of the color space the image is tagged with.
        color_space: String,
        /// Number of channels the color space requires.
        expected: usize,
        /// Number of channels in the buffer.
        found: usize,
    },

    /// Error when a color space name cannot be parsed.
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),
}
