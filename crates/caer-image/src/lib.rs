#![deny(missing_docs)]
//! Image types and the color-space tagged image container

/// closed set of color spaces an image can be tagged with.
pub mod color_space;

/// Error types for the image module.
pub mod error;

/// image representation for computer vision purposes.
pub mod image;

/// image container stamped with a color space.
pub mod tagged;

pub use crate::color_space::ColorSpace;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageLike, ImageSize, ImageView};
pub use crate::tagged::TaggedImage;
