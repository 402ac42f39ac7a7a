//! The contract shared by matrices and lazy matrix expressions.
//!
//! Building an expression such as `&a + &b - &c` never touches any data:
//! it only nests expression nodes which borrow their operands. Elements are
//! computed when the expression is finally evaluated into a `MatOwned`,
//! see `MatOwned::from_expr`.

use crate::errors::MatError;
use crate::mat::MatOwned;

/// Something that can be read as a matrix, element by element.
///
/// Dense matrices implement this trait, as well as every node of an
/// expression tree. Nodes compute `at` from their operands on every call,
/// nothing is cached.
pub trait MatExpr {
    /// The type of the elements produced by this expression
    type Elem: Copy;

    /// Compute the element at row `i` and column `j`.
    ///
    /// `i` must be lower than `self.rows()` and `j` lower than
    /// `self.cols()`. Dense matrices panic on out of bounds indices, nodes
    /// forward the indices to their operands.
    fn at(&self, i: usize, j: usize) -> Self::Elem;

    /// The number of rows of the expression
    fn rows(&self) -> usize;

    /// The number of cols of the expression
    fn cols(&self) -> usize;

    /// The number of elements of the expression
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// The number of rows and cols of the expression
    fn shape(&self) -> [usize; 2] {
        [self.rows(), self.cols()]
    }

    /// Evaluate this expression into a new matrix
    fn eval(&self) -> MatOwned<Self::Elem> {
        MatOwned::from_expr(self)
    }
}

impl<'a, E> MatExpr for &'a E
where E: MatExpr + ?Sized {
    type Elem = E::Elem;

    fn at(&self, i: usize, j: usize) -> E::Elem {
        (**self).at(i, j)
    }

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Check that two expressions can be combined element by element
pub(crate) fn check_same_shape<L, R>(lhs: &L, rhs: &R) -> Result<(), MatError>
where L: MatExpr,
      R: MatExpr {
    if lhs.size() != rhs.size()
        || lhs.rows() != rhs.rows()
        || lhs.cols() != rhs.cols() {
        return Err(MatError::IncompatibleDimensions {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_same_shape, MatExpr};
    use crate::errors::MatError;
    use crate::mat::{MatOwned, MatView};

    #[test]
    fn references_are_expressions() {
        let mat = MatOwned::new_owned(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        let by_ref = &mat;
        let by_double_ref = &by_ref;
        assert_eq!(by_double_ref.shape(), [2, 3]);
        assert_eq!(by_double_ref.size(), 6);
        assert_eq!(by_double_ref.at(1, 2), 6);
        assert_eq!(by_double_ref.eval(), mat);
    }

    #[test]
    fn shape_check() {
        let a = MatOwned::from_elem(2, 3, 1).unwrap();
        let b = MatOwned::from_elem(2, 3, 2).unwrap();
        let c = MatOwned::from_elem(3, 2, 2).unwrap();
        assert_eq!(check_same_shape(&a, &b), Ok(()));
        assert_eq!(check_same_shape(&a, &c),
                   Err(MatError::IncompatibleDimensions { lhs: [2, 3],
                                                          rhs: [3, 2] }));
        let raw = [1, 2, 3, 4, 5, 6];
        let view = MatView::new_borrowed(&raw, 2, 3).unwrap();
        assert_eq!(check_same_shape(&view, &a), Ok(()));
    }
}
