#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `caer-tensor` provides the owned, row-major multi-dimensional buffer that
//! every caer image is built on. Dimensionality is a const generic, so a
//! `Tensor<T, 3>` is statically known to be height × width × channels.
//!
//! ```rust
//! use caer_tensor::Tensor;
//!
//! let tensor = Tensor::<u8, 3>::from_shape_vec([2, 1, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
//!
//! assert_eq!(tensor.shape, [2, 1, 3]);
//! assert_eq!(tensor.get([1, 0, 2]), Some(&6));
//! ```

/// Serde module for serialization and deserialization of tensors.
///
/// Available when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub mod serde;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;

/// Type alias for a 4-dimensional tensor.
pub type Tensor4<T> = Tensor<T, 4>;
