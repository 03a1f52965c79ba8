use caer_tensor::Tensor3;

use crate::{
    color_space::ColorSpace,
    error::ImageError,
    image::{Image, ImageLike, ImageSize, ImageView},
};

/// An image buffer stamped with the color space it is encoded in.
///
/// Every color conversion returns one of these. The buffer is always
/// height × width × channels and the channel count always matches the tag.
///
/// # Example
///
/// ```
/// use caer_image::{ColorSpace, TaggedImage};
/// use caer_tensor::Tensor3;
///
/// let tensor = Tensor3::<u8>::from_shape_val([4, 4, 3], 0);
/// let image = TaggedImage::new(tensor, ColorSpace::Hls).unwrap();
///
/// assert!(image.is_hls());
/// assert_eq!(image.num_channels(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedImage<T> {
    tensor: Tensor3<T>,
    color_space: ColorSpace,
}

impl<T> TaggedImage<T> {
    /// Stamp `tensor` with `color_space`.
    ///
    /// # Errors
    ///
    /// Returns an error if the last dimension of the tensor does not match the
    /// number of channels of the color space.
    pub fn new(tensor: Tensor3<T>, color_space: ColorSpace) -> Result<Self, ImageError> {
        if tensor.shape[2] != color_space.num_channels() {
            return Err(ImageError::ColorSpaceChannelMismatch {
                color_space: color_space.to_string(),
                expected: color_space.num_channels(),
                found: tensor.shape[2],
            });
        }
        Ok(Self {
            tensor,
            color_space,
        })
    }

    /// Stamp a typed image with `color_space`.
    ///
    /// # Errors
    ///
    /// Returns an error if `C` does not match the channels of the color space.
    pub fn from_image<const C: usize>(
        image: Image<T, C>,
        color_space: ColorSpace,
    ) -> Result<Self, ImageError> {
        Self::new(image.0, color_space)
    }

    /// The color space the buffer is tagged with.
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Borrow the underlying tensor.
    pub fn tensor(&self) -> &Tensor3<T> {
        &self.tensor
    }

    /// Consume the container and return the underlying tensor.
    pub fn into_tensor(self) -> Tensor3<T> {
        self.tensor
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.tensor.shape[1],
            height: self.tensor.shape[0],
        }
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.tensor.shape[1]
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.tensor.shape[0]
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.tensor.shape[2]
    }

    /// Borrow the buffer as a view with a compile-time channel count.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer does not carry `C` channels.
    pub fn view<const C: usize>(&self) -> Result<ImageView<'_, T, C>, ImageError> {
        ImageView::new(self.size(), self.tensor.as_slice())
    }

    /// Convert into a typed image with `C` channels, dropping the tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer does not carry `C` channels.
    pub fn into_image<const C: usize>(self) -> Result<Image<T, C>, ImageError> {
        Image::from_tensor(self.tensor)
    }

    /// Whether the image is tagged RGB.
    pub fn is_rgb(&self) -> bool {
        self.color_space == ColorSpace::Rgb
    }

    /// Whether the image is tagged BGR.
    pub fn is_bgr(&self) -> bool {
        self.color_space == ColorSpace::Bgr
    }

    /// Whether the image is tagged grayscale.
    pub fn is_gray(&self) -> bool {
        self.color_space == ColorSpace::Gray
    }

    /// Whether the image is tagged HSV.
    pub fn is_hsv(&self) -> bool {
        self.color_space == ColorSpace::Hsv
    }

    /// Whether the image is tagged HLS.
    pub fn is_hls(&self) -> bool {
        self.color_space == ColorSpace::Hls
    }

    /// Whether the image is tagged LAB.
    pub fn is_lab(&self) -> bool {
        self.color_space == ColorSpace::Lab
    }
}

impl<T> ImageLike<T> for TaggedImage<T> {
    fn shape(&self) -> &[usize] {
        &self.tensor.shape
    }

    fn as_slice(&self) -> &[T] {
        self.tensor.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use caer_tensor::Tensor3;

    use crate::{ColorSpace, Image, ImageError, ImageLike, ImageSize, TaggedImage};

    #[test]
    fn tag_is_stamped() -> Result<(), ImageError> {
        let tensor = Tensor3::<u8>::from_shape_val([4, 4, 3], 7);
        let image = TaggedImage::new(tensor, ColorSpace::Bgr)?;
        assert_eq!(image.color_space(), ColorSpace::Bgr);
        assert!(image.is_bgr());
        assert!(!image.is_rgb());
        assert_eq!(image.shape(), &[4, 4, 3]);
        assert_eq!(image.size(), ImageSize::from([4, 4]));
        Ok(())
    }

    #[test]
    fn gray_requires_one_channel() {
        let tensor = Tensor3::<u8>::from_shape_val([2, 2, 3], 0);
        let res = TaggedImage::new(tensor, ColorSpace::Gray);
        assert_eq!(
            res,
            Err(ImageError::ColorSpaceChannelMismatch {
                color_space: "GRAY".to_string(),
                expected: 1,
                found: 3,
            })
        );
    }

    #[test]
    fn view_and_into_image() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.25, 0.75],
        )?;
        let tagged = TaggedImage::from_image(image, ColorSpace::Gray)?;
        assert!(tagged.is_gray());
        assert!(tagged.view::<3>().is_err());
        assert_eq!(tagged.view::<1>()?.as_slice(), &[0.25, 0.75]);

        let back: Image<f32, 1> = tagged.into_image()?;
        assert_eq!(back.width(), 2);
        Ok(())
    }
}
