use std::ops;

use caer_tensor::{Tensor, Tensor3};

use crate::error::ImageError;

/// Image size in pixels
///
/// # Examples
///
/// ```
/// use caer_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image data types.
///
/// Send and Sync is required to process rows in parallel.
pub trait ImageDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert a f32 value to the image data type.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Anything that exposes a row-major buffer together with its shape.
///
/// This is what the conversion entry points accept: the shape is inspected at
/// runtime, so a 2-dimensional tensor is a valid argument that simply fails
/// admission.
pub trait ImageLike<T> {
    /// The dimensions of the buffer, outermost first.
    fn shape(&self) -> &[usize];

    /// The buffer in row-major order.
    fn as_slice(&self) -> &[T];
}

impl<T, const N: usize> ImageLike<T> for Tensor<T, N> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn as_slice(&self) -> &[T] {
        Tensor::as_slice(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Represents an image with pixel data.
///
/// The image is represented as a 3D Tensor with shape (H, W, C), where H is the height of the image,
/// W its width and C the number of channels fixed at compile time.
pub struct Image<T, const CHANNELS: usize>(pub Tensor3<T>);

/// helper to deference the inner tensor
impl<T, const CHANNELS: usize> ops::Deref for Image<T, CHANNELS> {
    type Target = Tensor3<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// helper to deference the inner tensor
impl<T, const CHANNELS: usize> ops::DerefMut for Image<T, CHANNELS> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T, const CHANNELS: usize> ImageLike<T> for Image<T, CHANNELS> {
    fn shape(&self) -> &[usize] {
        &self.0.shape
    }

    fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use caer_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self(Tensor3::from_shape_vec(
            [size.height, size.width, CHANNELS],
            data,
        )?))
    }

    /// Create a new image with the given size filled with `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caer_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0u8,
    /// );
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Self
    where
        T: Clone,
    {
        Self(Tensor3::from_shape_val(
            [size.height, size.width, CHANNELS],
            val,
        ))
    }

    /// Wrap a tensor whose last dimension must equal `CHANNELS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tensor carries a different number of channels.
    pub fn from_tensor(tensor: Tensor3<T>) -> Result<Self, ImageError> {
        if tensor.shape[2] != CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                tensor.numel(),
                tensor.shape[0] * tensor.shape[1] * CHANNELS,
            ));
        }
        Ok(Self(tensor))
    }

    /// Borrow the image as a read-only view.
    pub fn view(&self) -> ImageView<'_, T, CHANNELS> {
        ImageView {
            size: self.size(),
            data: self.0.as_slice(),
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.0.shape[1],
            height: self.0.shape[0],
        }
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.0.shape[1]
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.0.shape[0]
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

}

/// A borrowed image with a compile-time channel count.
///
/// Views are how validated buffers travel into the conversion kernels without
/// copying the caller's data.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a, T, const CHANNELS: usize> {
    size: ImageSize,
    data: &'a [T],
}

impl<'a, T, const CHANNELS: usize> ImageView<'a, T, CHANNELS> {
    /// Create a view over `data` interpreted as an image of `size`.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the image size, an error is returned.
    pub fn new(size: ImageSize, data: &'a [T]) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }
        Ok(Self { size, data })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// The pixel data in row-major order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Copy the view into an owned image.
    pub fn to_image(&self) -> Result<Image<T, CHANNELS>, ImageError>
    where
        T: Clone,
    {
        Image::new(self.size, self.data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use caer_tensor::Tensor2;

    use crate::image::{Image, ImageError, ImageLike, ImageSize, ImageView};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);
        assert_eq!(ImageLike::shape(&image), &[20, 10, 3]);

        Ok(())
    }

    #[test]
    fn image_wrong_length() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn image_from_tensor_checks_channels() -> Result<(), ImageError> {
        let tensor = caer_tensor::Tensor3::<u8>::from_shape_val([2, 2, 1], 0);
        assert!(Image::<u8, 3>::from_tensor(tensor.clone()).is_err());
        let gray = Image::<u8, 1>::from_tensor(tensor)?;
        assert_eq!(gray.num_channels(), 1);
        Ok(())
    }

    #[test]
    fn view_roundtrip() -> Result<(), ImageError> {
        let data = vec![1u8, 2, 3, 4, 5, 6];
        let view = ImageView::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            &data,
        )?;
        assert_eq!(view.cols(), 2);
        assert_eq!(view.rows(), 1);
        let image = view.to_image()?;
        assert_eq!(image.view().as_slice(), data.as_slice());
        Ok(())
    }

    #[test]
    fn tensor_is_image_like() -> Result<(), caer_tensor::TensorError> {
        let tensor = Tensor2::<u8>::from_shape_vec([4, 4], vec![0; 16])?;
        assert_eq!(ImageLike::shape(&tensor), &[4, 4]);
        assert_eq!(ImageLike::as_slice(&tensor).len(), 16);
        Ok(())
    }
}
