//! A dense vector, stored as a single row matrix.

use std::fmt;
use std::ops::{Index, IndexMut};

use num::cast::AsPrimitive;
use num::traits::Num;

use crate::errors::MatError;
use crate::expr::MatExpr;
use crate::mat::MatOwned;

/// A simple dense vector
///
/// A vector of length `n` behaves as a `1 x n` matrix in expressions, so
/// `&v * &m` is a row vector times matrix product. Its shape is fixed, see
/// `resize`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Vector<N> {
    mat: MatOwned<N>,
}

impl<N> Vector<N> {
    /// Create a vector of length `len` where every element is `fill`
    pub fn from_elem(len: usize, fill: N) -> Result<Vector<N>, MatError>
    where N: Clone {
        MatOwned::from_elem(1, len, fill).map(|mat| Vector { mat })
    }

    /// Create an all-zero vector
    pub fn zeros(len: usize) -> Result<Vector<N>, MatError>
    where N: Num + Clone {
        MatOwned::zeros(1, len).map(|mat| Vector { mat })
    }

    /// Create a vector holding a copy of `values`
    pub fn from_slice(values: &[N]) -> Vector<N>
    where N: Clone {
        Vector::from(values.to_vec())
    }

    /// Evaluate an expression into a vector.
    ///
    /// The elements of the expression are laid out in row-major order, so
    /// an `r x c` expression gives a vector of length `r * c`.
    pub fn from_expr<E>(expr: E) -> Vector<N>
    where E: MatExpr<Elem = N> {
        Vector::from(MatOwned::from_expr(expr).into_data())
    }

    /// Evaluate an expression into a vector of another element type,
    /// converting elements with `as` semantics.
    pub fn from_expr_as<E>(expr: E) -> Vector<N>
    where E: MatExpr,
          E::Elem: AsPrimitive<N>,
          N: Copy + 'static {
        Vector::from(MatOwned::from_expr_as(expr).into_data())
    }

    /// The number of elements of the vector
    pub fn len(&self) -> usize {
        self.mat.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying data
    pub fn data(&self) -> &[N] {
        self.mat.data()
    }

    /// The underlying data as a mutable slice
    pub fn data_mut(&mut self) -> &mut [N] {
        self.mat.data_mut()
    }

    /// Get the element at index `i`
    pub fn get(&self, i: usize) -> Result<&N, MatError> {
        self.mat.get(0, i)
    }

    /// Get a mutable reference to the element at index `i`
    pub fn get_mut(&mut self, i: usize) -> Result<&mut N, MatError> {
        self.mat.get_mut(0, i)
    }

    /// Vectors cannot be reshaped.
    ///
    /// Only the current shape, `1 x len`, is accepted and leaves the vector
    /// untouched. Any other shape is rejected, even when it holds the same
    /// number of elements.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), MatError> {
        if rows != 1 || cols != self.len() {
            return Err(MatError::BadReshape {
                size: self.len(),
                rows,
                cols,
            });
        }
        Ok(())
    }

    /// Overwrite all elements with `values`
    pub fn assign_slice(&mut self, values: &[N]) -> Result<(), MatError>
    where N: Clone {
        self.mat.assign_slice(values)
    }

    /// Replace this vector by the evaluation of `expr`
    pub fn assign_expr<E>(&mut self, expr: E)
    where E: MatExpr<Elem = N> {
        *self = Vector::from_expr(expr);
    }

    /// Replace this vector by the evaluation of `expr`, converting its
    /// elements like `from_expr_as`.
    pub fn assign_expr_as<E>(&mut self, expr: E)
    where E: MatExpr,
          E::Elem: AsPrimitive<N>,
          N: Copy + 'static {
        *self = Vector::from_expr_as(expr);
    }

    /// Get the transpose of this vector, a `len x 1` matrix
    pub fn transpose(&self) -> MatOwned<N>
    where N: Copy {
        self.mat.transpose()
    }

    /// The vector as a single row matrix
    pub fn as_mat(&self) -> &MatOwned<N> {
        &self.mat
    }

    pub fn into_mat(self) -> MatOwned<N> {
        self.mat
    }
}

impl<N> From<Vec<N>> for Vector<N> {
    fn from(data: Vec<N>) -> Vector<N> {
        Vector {
            mat: MatOwned::from(data),
        }
    }
}

impl<N> Index<usize> for Vector<N> {
    type Output = N;

    fn index(&self, i: usize) -> &N {
        match self.get(i) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<N> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, i: usize) -> &mut N {
        match self.get_mut(i) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<N: Copy> MatExpr for Vector<N> {
    type Elem = N;

    fn at(&self, i: usize, j: usize) -> N {
        self.mat.at(i, j)
    }

    fn rows(&self) -> usize {
        1
    }

    fn cols(&self) -> usize {
        self.len()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<N: fmt::Display> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.mat, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;
    use crate::errors::MatError;
    use crate::expr::MatExpr;
    use crate::mat::MatOwned;

    fn square() -> MatOwned<i32> {
        MatOwned::new_owned(vec![1, 2, 3, 4], 2, 2).unwrap()
    }

    #[test]
    fn shape() {
        let v = Vector::from(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(MatExpr::rows(&v), 1);
        assert_eq!(MatExpr::cols(&v), 3);
        assert_eq!(v.shape(), [1, 3]);
        assert_eq!(Vector::<f32>::zeros(0),
                   Err(MatError::BadDimensions { rows: 1, cols: 0 }));
        assert_eq!(Vector::from_elem(2, 1.5).unwrap().data(), &[1.5, 1.5]);
    }

    #[test]
    fn element_access() {
        let mut v = Vector::from_slice(&[1, 2, 3]);
        v[1] = 5;
        *v.get_mut(2).unwrap() = 6;
        assert_eq!(v[0], 1);
        assert_eq!(v.get(1), Ok(&5));
        assert_eq!(v.at(0, 2), 6);
        assert_eq!(v.get(3),
                   Err(MatError::OutOfBoundsIndex { index: [0, 3],
                                                    shape: [1, 3] }));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let v = Vector::from(vec![1, 2]);
        let _ = v[2];
    }

    #[test]
    fn resize_keeps_row_shape() {
        let mut v = Vector::from(vec![1, 2, 3, 4]);
        assert_eq!(v.resize(1, 4), Ok(()));
        assert_eq!(v.resize(2, 2),
                   Err(MatError::BadReshape { size: 4, rows: 2, cols: 2 }));
        assert_eq!(v.resize(1, 5),
                   Err(MatError::BadReshape { size: 4, rows: 1, cols: 5 }));
        assert_eq!(v.shape(), [1, 4]);
    }

    #[test]
    fn vector_matrix_product() {
        let v = Vector::from(vec![1, 2]);
        let m = square();
        let res = (&v * &m).eval();
        assert_eq!(res.shape(), [1, 2]);
        assert_eq!(res.data(), &[7, 10]);
        assert_eq!(Vector::from_expr(&v * &m).data(), &[7, 10]);

        let vt = v.transpose();
        assert_eq!(vt.shape(), [2, 1]);
        let res = (&m * &vt).eval();
        assert_eq!(res.shape(), [2, 1]);
        assert_eq!(res.data(), &[5, 11]);
    }

    #[test]
    #[should_panic(expected = "inner dimensions do not agree")]
    fn matrix_vector_needs_transpose() {
        let v = Vector::from(vec![1, 2]);
        let m = square();
        let _ = &m * &v;
    }

    #[test]
    fn elementwise_with_vectors() {
        let v = Vector::from(vec![1, 2, 3]);
        let w = Vector::from(vec![4, 5, 6]);
        assert_eq!(Vector::from_expr(&v + &w).data(), &[5, 7, 9]);
        assert_eq!(Vector::from_expr(&w - &v).data(), &[3, 3, 3]);
        assert_eq!(Vector::from_expr(&v & &w).data(), &[4, 10, 18]);
        assert_eq!(Vector::from_expr(3_i32 * &v + 1_i32).data(), &[4, 7, 10]);

        let row = MatOwned::from(vec![1, 1, 1]);
        assert_eq!(Vector::from_expr(&v + &row).data(), &[2, 3, 4]);
    }

    #[test]
    fn from_expr_flattens() {
        let m = square();
        let v = Vector::from_expr(&m + &m);
        assert_eq!(v.len(), 4);
        assert_eq!(v.data(), &[2, 4, 6, 8]);

        let f = Vector::from(vec![1.5, 2.5]);
        let ints: Vector<u8> = Vector::from_expr_as(&f);
        assert_eq!(ints.data(), &[1, 2]);
    }

    #[test]
    fn assign() {
        let mut v = Vector::from(vec![0, 0, 0]);
        v.assign_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.data(), &[1, 2, 3]);
        assert_eq!(v.assign_slice(&[1]),
                   Err(MatError::SizeMismatch { expected: 3, found: 1 }));
        let w = Vector::from(vec![1, 1]);
        v.assign_expr(&w + &w);
        assert_eq!(v.data(), &[2, 2]);
        v.data_mut()[0] = 7;
        assert_eq!(v.into_mat().data(), &[7, 2]);
    }

    #[test]
    fn assign_converted() {
        let mut v: Vector<i32> = Vector::from(vec![0, 0]);
        let f = Vector::from(vec![1.5_f64, -2.5, 3.25]);
        v.assign_expr_as(&f + 1.0_f64);
        assert_eq!(v.len(), 3);
        assert_eq!(v.data(), &[2, -1, 4]);

        let m = MatOwned::new_owned(vec![1.9_f32, 2.1, 3.5, 4.0], 2, 2).unwrap();
        v.assign_expr_as(&m);
        assert_eq!(v.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn display() {
        let v = Vector::from(vec![1, 2]);
        assert_eq!(v.to_string(), "\n1 2 \n\n");
        assert_eq!(v.as_mat().to_string(), v.to_string());
    }
}
