#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use caer_tensor as tensor;

#[doc(inline)]
pub use caer_image as image;

#[doc(inline)]
pub use caer_color as color;
