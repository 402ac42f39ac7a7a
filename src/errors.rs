//! Error type for lazy_mats

use thiserror::Error;

/// Every way a matrix operation can be rejected.
///
/// All of these are detected eagerly: dimension problems when a matrix or
/// an expression node is built, index problems when an element is accessed.
#[derive(PartialEq, Eq, Clone, Debug, Error)]
pub enum MatError {
    /// A matrix was requested with a zero or overflowing extent.
    #[error("invalid matrix dimensions {rows}x{cols}")]
    BadDimensions { rows: usize, cols: usize },
    /// Element-wise operands do not share the same shape.
    #[error("matrices dimensions do not agree: {lhs:?} vs {rhs:?}")]
    IncompatibleDimensions { lhs: [usize; 2], rhs: [usize; 2] },
    /// Left columns differ from right rows in a matrix product.
    #[error("inner dimensions do not agree for product: {lhs:?} * {rhs:?}")]
    IncompatibleInnerDims { lhs: [usize; 2], rhs: [usize; 2] },
    /// A reshape would change the number of elements.
    #[error("cannot reshape {size} elements into {rows}x{cols}")]
    BadReshape { size: usize, rows: usize, cols: usize },
    /// An element was accessed outside the matrix.
    #[error("index {index:?} is out of bounds for shape {shape:?}")]
    OutOfBoundsIndex { index: [usize; 2], shape: [usize; 2] },
    /// A list of values does not fill the destination exactly.
    #[error("expected {expected} values, found {found}")]
    SizeMismatch { expected: usize, found: usize },
}

impl MatError {
    /// Whether the error stems from operands with disagreeing shapes.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            *self,
            MatError::IncompatibleDimensions { .. }
                | MatError::IncompatibleInnerDims { .. }
        )
    }
}
