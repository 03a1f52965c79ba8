#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every public conversion has the same shape: the input is admitted only if
//! it is a 3-dimensional buffer with 3 channels, it is converted, and the
//! result comes back as a [`TaggedImage`](caer_image::TaggedImage) stamped
//! with the destination color space.
//!
//! ```
//! use caer_color::hls::hls2bgr;
//! use caer_image::{ColorSpace, ImageSize};
//! use caer_tensor::Tensor3;
//!
//! let hls = Tensor3::<u8>::from_shape_val([4, 4, 3], 100);
//! let bgr = hls2bgr(&hls).unwrap();
//!
//! assert_eq!(bgr.color_space(), ColorSpace::Bgr);
//! assert_eq!(bgr.size(), ImageSize { width: 4, height: 4 });
//! ```

/// conversions from the BGR color space.
pub mod bgr;

/// per-pixel color math and typed image kernels.
pub mod color;

/// conversion dispatch on the tag of an image.
pub mod convert;

/// element types the conversions accept.
pub mod depth;

/// Error types for the color module.
pub mod error;

/// conversions from the HLS color space.
pub mod hls;

/// conversions from the HSV color space.
pub mod hsv;

/// module containing parallelization utilities.
pub mod parallel;

/// conversions from the RGB color space.
pub mod rgb;

/// admission check shared by every conversion.
pub mod validate;

mod code;
mod cvt;

pub use crate::convert::ConvertColor;
pub use crate::depth::ColorDepth;
pub use crate::error::{ColorError, Conversion, ShapeError};
pub use crate::validate::is_valid_3channel_image;
