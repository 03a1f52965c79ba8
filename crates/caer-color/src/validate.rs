use caer_image::{ImageLike, ImageSize, ImageView};

use crate::error::{ColorError, Conversion, ShapeError};

/// Check whether a buffer is a height × width × 3 image.
///
/// Only the number of dimensions and the size of the last one are
/// inspected. The values are never looked at, so a buffer that is really
/// RGB passes a check made for a BGR conversion.
///
/// # Example
///
/// ```
/// use caer_color::is_valid_3channel_image;
/// use caer_tensor::{Tensor2, Tensor3};
///
/// let image = Tensor3::<u8>::from_shape_val([4, 4, 3], 0);
/// assert!(is_valid_3channel_image(&image));
///
/// let plane = Tensor2::<u8>::from_shape_val([4, 4], 0);
/// assert!(!is_valid_3channel_image(&plane));
/// ```
pub fn is_valid_3channel_image<T, I>(img: &I) -> bool
where
    I: ImageLike<T> + ?Sized,
{
    matches!(img.shape(), [_, _, 3])
}

/// Admit `img` into `conversion` and borrow it as a 3-channel view.
pub(crate) fn validate<'a, T, I>(
    img: &'a I,
    conversion: Conversion,
) -> Result<ImageView<'a, T, 3>, ColorError>
where
    I: ImageLike<T> + ?Sized,
{
    let shape = img.shape();

    if !is_valid_3channel_image::<T, I>(img) {
        log::debug!("rejected shape {shape:?} for {conversion}");
        return Err(ShapeError::new(3, 3, shape, conversion).into());
    }

    let size = ImageSize {
        width: shape[1],
        height: shape[0],
    };

    Ok(ImageView::new(size, img.as_slice())?)
}

#[cfg(test)]
mod tests {
    use caer_image::{ColorSpace, Image, ImageSize};
    use caer_tensor::{Tensor2, Tensor3, Tensor4};

    use super::{is_valid_3channel_image, validate};
    use crate::error::{ColorError, Conversion, ShapeError};

    #[test]
    fn accepts_three_channels() -> Result<(), ColorError> {
        let tensor = Tensor3::<f32>::from_shape_val([2, 5, 3], 0.5);
        assert!(is_valid_3channel_image(&tensor));

        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 5,
                height: 2,
            },
            0,
        );
        assert!(is_valid_3channel_image(&image));

        let conversion = Conversion::new(ColorSpace::Bgr, ColorSpace::Rgb);
        let view = validate(&tensor, conversion)?;
        assert_eq!(view.cols(), 5);
        assert_eq!(view.rows(), 2);
        Ok(())
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(!is_valid_3channel_image(&Tensor2::<u8>::from_shape_val([4, 4], 0)));
        assert!(!is_valid_3channel_image(&Tensor3::<u8>::from_shape_val([4, 4, 4], 0)));
        assert!(!is_valid_3channel_image(&Tensor3::<u8>::from_shape_val([4, 4, 1], 0)));
        assert!(!is_valid_3channel_image(&Tensor4::<u8>::from_shape_val([1, 4, 4, 3], 0)));
    }

    #[test]
    fn rejection_carries_the_shape() {
        let conversion = Conversion::new(ColorSpace::Hls, ColorSpace::Bgr);
        let tensor = Tensor2::<u8>::from_shape_val([4, 4], 0);
        let res = validate(&tensor, conversion);
        assert_eq!(
            res.err(),
            Some(ColorError::Shape(ShapeError::new(3, 3, &[4, 4], conversion)))
        );
    }
}
