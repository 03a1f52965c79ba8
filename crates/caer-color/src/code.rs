use caer_image::ColorSpace;

/// Opaque code selecting one transformation of [`cvt_color`](crate::cvt::cvt_color).
///
/// The values match the numbering vision libraries use for the same
/// transformations, which keeps the table readable next to their docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ConversionCode(pub(crate) i32);

impl ConversionCode {
    /// Swaps the first and last channel, so it also serves RGB to BGR.
    pub(crate) const BGR2RGB: Self = Self(4);
    pub(crate) const BGR2GRAY: Self = Self(6);
    pub(crate) const RGB2GRAY: Self = Self(7);
    pub(crate) const BGR2HSV: Self = Self(40);
    pub(crate) const RGB2HSV: Self = Self(41);
    pub(crate) const BGR2LAB: Self = Self(44);
    pub(crate) const RGB2LAB: Self = Self(45);
    pub(crate) const BGR2HLS: Self = Self(52);
    pub(crate) const RGB2HLS: Self = Self(53);
    pub(crate) const HSV2BGR: Self = Self(54);
    pub(crate) const HSV2RGB: Self = Self(55);
    pub(crate) const HLS2BGR: Self = Self(60);
    pub(crate) const HLS2RGB: Self = Self(61);
}

/// Pairs the conversion primitive handles in a single pass.
const TABLE: [(ColorSpace, ColorSpace, ConversionCode); 14] = [
    (ColorSpace::Bgr, ColorSpace::Rgb, ConversionCode::BGR2RGB),
    (ColorSpace::Rgb, ColorSpace::Bgr, ConversionCode::BGR2RGB),
    (ColorSpace::Bgr, ColorSpace::Gray, ConversionCode::BGR2GRAY),
    (ColorSpace::Rgb, ColorSpace::Gray, ConversionCode::RGB2GRAY),
    (ColorSpace::Bgr, ColorSpace::Hsv, ConversionCode::BGR2HSV),
    (ColorSpace::Rgb, ColorSpace::Hsv, ConversionCode::RGB2HSV),
    (ColorSpace::Bgr, ColorSpace::Lab, ConversionCode::BGR2LAB),
    (ColorSpace::Rgb, ColorSpace::Lab, ConversionCode::RGB2LAB),
    (ColorSpace::Bgr, ColorSpace::Hls, ConversionCode::BGR2HLS),
    (ColorSpace::Rgb, ColorSpace::Hls, ConversionCode::RGB2HLS),
    (ColorSpace::Hsv, ColorSpace::Bgr, ConversionCode::HSV2BGR),
    (ColorSpace::Hsv, ColorSpace::Rgb, ConversionCode::HSV2RGB),
    (ColorSpace::Hls, ColorSpace::Bgr, ConversionCode::HLS2BGR),
    (ColorSpace::Hls, ColorSpace::Rgb, ConversionCode::HLS2RGB),
];

/// Look up the code converting `src` into `dst` in one pass.
pub(crate) fn lookup(src: ColorSpace, dst: ColorSpace) -> Option<ConversionCode> {
    TABLE
        .iter()
        .find(|(s, d, _)| *s == src && *d == dst)
        .map(|(_, _, code)| *code)
}
