mod gray;
mod hls;
mod hsv;
mod lab;

pub use gray::{bgr_from_rgb, gray_from_rgb};
pub use hls::{hls_from_rgb, rgb_from_hls};
pub use hsv::{hsv_from_rgb, rgb_from_hsv};
pub use lab::lab_from_rgb;

pub(crate) use gray::luma;
pub(crate) use hls::{hls_pixel_from_rgb, rgb_pixel_from_hls};
pub(crate) use hsv::{hsv_pixel_from_rgb, rgb_pixel_from_hsv};
pub(crate) use lab::lab_pixel_from_rgb;
