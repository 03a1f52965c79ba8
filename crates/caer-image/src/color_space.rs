use std::fmt;
use std::str::FromStr;

use crate::error::ImageError;

/// The color space an image buffer is encoded in.
///
/// The tag is metadata: nothing checks that the pixel values actually follow
/// the encoding, only that the channel count fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorSpace {
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red.
    Bgr,
    /// Single channel luminance.
    Gray,
    /// Hue, saturation, value.
    Hsv,
    /// Hue, lightness, saturation.
    Hls,
    /// CIE L*a*b*.
    Lab,
}

impl ColorSpace {
    /// Every color space, in declaration order.
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Rgb,
        ColorSpace::Bgr,
        ColorSpace::Gray,
        ColorSpace::Hsv,
        ColorSpace::Hls,
        ColorSpace::Lab,
    ];

    /// Number of channels a buffer in this color space carries.
    pub const fn num_channels(&self) -> usize {
        match self {
            ColorSpace::Gray => 1,
            _ => 3,
        }
    }

    /// Lowercase name of the color space.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Bgr => "bgr",
            ColorSpace::Gray => "gray",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hls => "hls",
            ColorSpace::Lab => "lab",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for ColorSpace {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "bgr" => Ok(ColorSpace::Bgr),
            "gray" | "grey" | "grayscale" => Ok(ColorSpace::Gray),
            "hsv" => Ok(ColorSpace::Hsv),
            "hls" => Ok(ColorSpace::Hls),
            "lab" => Ok(ColorSpace::Lab),
            _ => Err(ImageError::UnknownColorSpace(s.to_string())),
        }
    }
}
