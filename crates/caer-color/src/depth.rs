use caer_image::ImageDtype;

/// An element type the color conversions can encode into and decode from.
///
/// The encodings follow the usual vision-library conventions:
///
/// | space | `u8` | `f32` |
/// |-------|------|-------|
/// | RGB / BGR / gray | [0, 255] | [0, 1] |
/// | hue | degrees / 2, [0, 180) | degrees, [0, 360) |
/// | saturation, value, lightness | [0, 255] | [0, 1] |
/// | LAB | (L * 255 / 100, a + 128, b + 128) | (L, a, b) |
pub trait ColorDepth: ImageDtype + PartialEq + std::fmt::Debug + 'static {
    /// Full scale of a color, saturation, value or lightness channel.
    const MAX: f32;

    /// Value a full turn of hue is stored as.
    const HUE_RANGE: f32;

    /// Scale applied to L* when storing it.
    const LAB_L_SCALE: f32;

    /// Offset added to a* and b* when storing them.
    const LAB_AB_OFFSET: f32;
}

impl ColorDepth for u8 {
    const MAX: f32 = 255.0;
    const HUE_RANGE: f32 = 180.0;
    const LAB_L_SCALE: f32 = 255.0 / 100.0;
    const LAB_AB_OFFSET: f32 = 128.0;
}

impl ColorDepth for f32 {
    const MAX: f32 = 1.0;
    const HUE_RANGE: f32 = 360.0;
    const LAB_L_SCALE: f32 = 1.0;
    const LAB_AB_OFFSET: f32 = 0.0;
}

/// Read three channels scaled to [0, 1].
#[inline]
pub(crate) fn decode_unit<T: ColorDepth>(a: T, b: T, c: T) -> [f32; 3] {
    [a.into() / T::MAX, b.into() / T::MAX, c.into() / T::MAX]
}

/// Store three channels given in [0, 1].
#[inline]
pub(crate) fn encode_unit<T: ColorDepth>([a, b, c]: [f32; 3]) -> [T; 3] {
    [
        T::from_f32(a * T::MAX),
        T::from_f32(b * T::MAX),
        T::from_f32(c * T::MAX),
    ]
}

/// Read a hue-first pixel (HSV or HLS) as degrees and two unit channels.
#[inline]
pub(crate) fn decode_hue<T: ColorDepth>(p: &[T]) -> [f32; 3] {
    [
        p[0].into() * 360.0 / T::HUE_RANGE,
        p[1].into() / T::MAX,
        p[2].into() / T::MAX,
    ]
}

/// Store a hue-first pixel (HSV or HLS) given as degrees and two unit channels.
#[inline]
pub(crate) fn encode_hue<T: ColorDepth>([h, x, y]: [f32; 3]) -> [T; 3] {
    let mut hue = T::from_f32(h * T::HUE_RANGE / 360.0);
    // rounding may land exactly on a full turn
    if hue.into() >= T::HUE_RANGE {
        hue = T::from_f32(hue.into() - T::HUE_RANGE);
    }
    [hue, T::from_f32(x * T::MAX), T::from_f32(y * T::MAX)]
}

/// Store an L*a*b* triple.
#[inline]
pub(crate) fn encode_lab<T: ColorDepth>([l, a, b]: [f32; 3]) -> [T; 3] {
    [
        T::from_f32(l * T::LAB_L_SCALE),
        T::from_f32(a + T::LAB_AB_OFFSET),
        T::from_f32(b + T::LAB_AB_OFFSET),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_u8_is_half_degrees() {
        let px: [u8; 3] = encode_hue([240.0, 1.0, 0.5]);
        assert_eq!(px, [120, 255, 128]);
        assert_eq!(decode_hue(&px)[0], 240.0);
    }

    #[test]
    fn hue_wraps_full_turn() {
        let px: [u8; 3] = encode_hue([359.5, 0.0, 0.0]);
        assert_eq!(px[0], 0);
    }

    #[test]
    fn hue_f32_is_degrees() {
        let px: [f32; 3] = encode_hue([200.0, 0.25, 0.75]);
        assert_eq!(px, [200.0, 0.25, 0.75]);
    }

    #[test]
    fn lab_u8_offsets() {
        let px: [u8; 3] = encode_lab([100.0, 0.0, -10.0]);
        assert_eq!(px, [255, 128, 118]);
        let px: [f32; 3] = encode_lab([100.0, 0.0, -10.0]);
        assert_eq!(px, [100.0, 0.0, -10.0]);
    }

    #[test]
    fn unit_roundtrip_u8() {
        let unit = decode_unit(0u8, 51, 255);
        let back: [u8; 3] = encode_unit(unit);
        assert_eq!(back, [0, 51, 255]);
    }
}
