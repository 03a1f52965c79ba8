//! Convert a synthetic HLS gradient into every other color space.
//!
//! Run with `RUST_LOG=trace` to see each conversion as it is dispatched.

use caer_color::{hls, ColorError, ConvertColor};
use caer_image::{ColorSpace, TaggedImage};
use caer_tensor::Tensor3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // hue sweeps along the columns, lightness along the rows
    let hls = Tensor3::<u8>::from_shape_fn([4, 6, 3], |[y, x, c]| match c {
        0 => (x * 30) as u8,
        1 => (40 + y * 50) as u8,
        _ => 255,
    });

    let image = TaggedImage::new(hls, ColorSpace::Hls)?;
    log::info!("input {} {:?}", image.color_space(), image.tensor().shape);

    for dst in ColorSpace::ALL {
        let out = image.convert_to(dst)?;
        log::info!(
            "{} -> {}: shape {:?}, first pixel {:?}",
            image.color_space(),
            out.color_space(),
            out.tensor().shape,
            &out.tensor().as_slice()[..out.num_channels()]
        );
    }

    // a bare plane is refused before any pixel is read
    let plane = Tensor3::<u8>::from_shape_val([4, 6, 1], 0);
    match hls::hls2bgr(&plane) {
        Err(ColorError::Shape(err)) => log::warn!("{err}"),
        other => log::error!("expected a shape error, got {other:?}"),
    }

    Ok(())
}
