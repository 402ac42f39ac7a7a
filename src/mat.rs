//! A dense row-major matrix implementation

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use log::{debug, trace};
use num::cast::AsPrimitive;
use num::traits::Num;

use crate::errors::MatError;
use crate::expr::MatExpr;

/// A simple dense matrix
///
/// The data array is always contiguous and row major: the element located
/// at row `i` and column `j` is found at index `i * cols + j`. The storage
/// decides whether the matrix owns its data (`MatOwned`) or borrows it
/// (`MatView`, `MatViewMut`).
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DenseMat<N, Storage> {
    data: Storage,
    rows: usize,
    cols: usize,
    elem: PhantomData<N>,
}

pub type MatView<'a, N> = DenseMat<N, &'a [N]>;
pub type MatViewMut<'a, N> = DenseMat<N, &'a mut [N]>;
pub type MatOwned<N> = DenseMat<N, Vec<N>>;

/// Validate the extents of a new matrix, returning its element count
fn checked_size(rows: usize, cols: usize) -> Result<usize, MatError> {
    if rows == 0 || cols == 0 || rows == usize::MAX || cols == usize::MAX {
        return Err(MatError::BadDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatError::BadDimensions { rows, cols })
}

impl<N> DenseMat<N, Vec<N>> {
    /// Create a dense matrix from owned row-major data
    pub fn new_owned(data: Vec<N>, rows: usize,
                     cols: usize) -> Result<MatOwned<N>, MatError> {
        let size = checked_size(rows, cols)?;
        if data.len() != size {
            return Err(MatError::SizeMismatch {
                expected: size,
                found: data.len(),
            });
        }
        Ok(DenseMat {
            data,
            rows,
            cols,
            elem: PhantomData,
        })
    }

    /// Create a matrix where every element is `fill`
    pub fn from_elem(rows: usize, cols: usize,
                     fill: N) -> Result<MatOwned<N>, MatError>
    where N: Clone {
        let size = checked_size(rows, cols)?;
        Ok(DenseMat {
            data: vec![fill; size],
            rows,
            cols,
            elem: PhantomData,
        })
    }

    /// Create an all-zero dense matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<MatOwned<N>, MatError>
    where N: Num + Clone {
        Self::from_elem(rows, cols, N::zero())
    }

    /// Create a matrix by copying the first `rows * cols` values of a slice,
    /// read in row-major order.
    pub fn from_slice(rows: usize, cols: usize,
                      values: &[N]) -> Result<MatOwned<N>, MatError>
    where N: Clone {
        let size = checked_size(rows, cols)?;
        if values.len() < size {
            return Err(MatError::SizeMismatch {
                expected: size,
                found: values.len(),
            });
        }
        Ok(DenseMat {
            data: values[..size].to_vec(),
            rows,
            cols,
            elem: PhantomData,
        })
    }

    /// Return the identity matrix of dimension `dim`
    pub fn eye(dim: usize) -> Result<MatOwned<N>, MatError>
    where N: Num + Copy {
        let size = checked_size(dim, dim)?;
        let data = (0..size).map(|x| {
            if x % dim == x / dim { N::one() } else { N::zero() }
        }).collect();
        Ok(DenseMat {
            data,
            rows: dim,
            cols: dim,
            elem: PhantomData,
        })
    }

    /// Evaluate an expression into a new matrix.
    ///
    /// This is the point where lazy expressions are computed: the matrix is
    /// sized after `expr`, then each of its elements is evaluated exactly
    /// once, in row-major order.
    pub fn from_expr<E>(expr: E) -> MatOwned<N>
    where E: MatExpr<Elem = N> {
        Self::eval_with(&expr, |x| x)
    }

    /// Evaluate an expression into a matrix of another element type.
    ///
    /// Elements are converted with `as` semantics, so floating point values
    /// stored into an integer matrix are truncated.
    pub fn from_expr_as<E>(expr: E) -> MatOwned<N>
    where E: MatExpr,
          E::Elem: AsPrimitive<N>,
          N: Copy + 'static {
        Self::eval_with(&expr, |x| x.as_())
    }

    fn eval_with<E, F>(expr: &E, convert: F) -> MatOwned<N>
    where E: MatExpr,
          F: Fn(E::Elem) -> N {
        let (rows, cols) = (expr.rows(), expr.cols());
        trace!("materializing a {}x{} expression", rows, cols);
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(convert(expr.at(i, j)));
            }
        }
        DenseMat {
            data,
            rows,
            cols,
            elem: PhantomData,
        }
    }

    /// Evaluate the transpose of an expression into a new matrix
    pub(crate) fn transposed<E>(expr: &E) -> MatOwned<N>
    where E: MatExpr<Elem = N> {
        let (rows, cols) = (expr.cols(), expr.rows());
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(expr.at(j, i));
            }
        }
        DenseMat {
            data,
            rows,
            cols,
            elem: PhantomData,
        }
    }

    /// Replace this matrix by the evaluation of `expr`.
    ///
    /// Shape and data are both replaced.
    pub fn assign_expr<E>(&mut self, expr: E)
    where E: MatExpr<Elem = N> {
        *self = Self::from_expr(expr);
    }

    /// Replace this matrix by the evaluation of `expr`, converting its
    /// elements like `from_expr_as`.
    pub fn assign_expr_as<E>(&mut self, expr: E)
    where E: MatExpr,
          E::Elem: AsPrimitive<N>,
          N: Copy + 'static {
        *self = Self::from_expr_as(expr);
    }

    /// Deep copy the shape and the elements of another matrix
    pub fn assign<Storage>(&mut self, other: &DenseMat<N, Storage>)
    where N: Clone,
          Storage: Deref<Target=[N]> {
        self.data.clear();
        self.data.extend_from_slice(other.data());
        self.rows = other.rows;
        self.cols = other.cols;
    }

    /// Get the underlying data array as a vector
    pub fn into_data(self) -> Vec<N> {
        self.data
    }
}

impl<'a, N: 'a> DenseMat<N, &'a [N]> {
    /// Create a view of a matrix over borrowed row-major data
    pub fn new_borrowed(data: &'a [N], rows: usize,
                        cols: usize) -> Result<MatView<'a, N>, MatError> {
        let size = checked_size(rows, cols)?;
        if data.len() != size {
            return Err(MatError::SizeMismatch {
                expected: size,
                found: data.len(),
            });
        }
        Ok(DenseMat {
            data,
            rows,
            cols,
            elem: PhantomData,
        })
    }
}

impl<N, Storage> DenseMat<N, Storage>
where Storage: Deref<Target=[N]> {

    /// The number of rows of the matrix
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of cols of the matrix
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The number of elements of the matrix
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// The number of rows and cols of the matrix
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Access to the matrix's data, in row-major order
    pub fn data(&self) -> &[N] {
        &self.data[..]
    }

    /// Give the index into self.data() for accessing the element
    /// at row i and column j
    pub fn data_index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    fn checked_index(&self, i: usize, j: usize) -> Result<usize, MatError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatError::OutOfBoundsIndex {
                index: [i, j],
                shape: self.shape(),
            });
        }
        Ok(self.data_index(i, j))
    }

    /// Get the element at row i and column j
    pub fn get(&self, i: usize, j: usize) -> Result<&N, MatError> {
        let index = self.checked_index(i, j)?;
        Ok(&self.data[index])
    }

    /// Get a view into this matrix
    pub fn borrowed(&self) -> MatView<N> {
        DenseMat {
            data: &self.data[..],
            rows: self.rows,
            cols: self.cols,
            elem: PhantomData,
        }
    }

    /// Get a single row view into the specified row
    pub fn row(&self, i: usize) -> Result<MatView<N>, MatError> {
        if i >= self.rows {
            return Err(MatError::OutOfBoundsIndex {
                index: [i, 0],
                shape: self.shape(),
            });
        }
        let start = self.data_index(i, 0);
        Ok(DenseMat {
            data: &self.data[start..start + self.cols],
            rows: 1,
            cols: self.cols,
            elem: PhantomData,
        })
    }

    /// Reinterpret the data with a new shape.
    ///
    /// The element count must be left unchanged, the row-major sequence of
    /// elements is preserved. An empty row, built from an empty list, can
    /// only keep its `1 x 0` shape.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), MatError> {
        let valid = if self.size() == 0 {
            rows == 1 && cols == 0
        } else {
            rows.checked_mul(cols) == Some(self.size())
        };
        if !valid {
            return Err(MatError::BadReshape {
                size: self.size(),
                rows,
                cols,
            });
        }
        debug!("reshaping {}x{} matrix into {}x{}",
               self.rows, self.cols, rows, cols);
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Get the transpose of this matrix as a new matrix
    pub fn transpose(&self) -> MatOwned<N>
    where N: Copy {
        MatOwned::transposed(self)
    }
}

impl<N, Storage> DenseMat<N, Storage>
where Storage: DerefMut<Target=[N]> {
    /// Mutable access to the matrix's data, in row-major order
    pub fn data_mut(&mut self) -> &mut [N] {
        &mut self.data[..]
    }

    /// Get a mutable reference to the element at row i and column j
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut N, MatError> {
        let index = self.checked_index(i, j)?;
        Ok(&mut self.data[index])
    }

    /// Get a mutable view into this matrix
    pub fn borrowed_mut(&mut self) -> MatViewMut<N> {
        DenseMat {
            data: &mut self.data[..],
            rows: self.rows,
            cols: self.cols,
            elem: PhantomData,
        }
    }

    /// Overwrite all elements with `values`, in row-major order.
    ///
    /// The shape is kept, so `values` must hold exactly `self.size()`
    /// elements.
    pub fn assign_slice(&mut self, values: &[N]) -> Result<(), MatError>
    where N: Clone {
        if values.len() != self.size() {
            return Err(MatError::SizeMismatch {
                expected: self.size(),
                found: values.len(),
            });
        }
        self.data_mut().clone_from_slice(values);
        Ok(())
    }
}

impl<N> From<Vec<N>> for MatOwned<N> {
    /// Build a single row matrix holding `data`
    fn from(data: Vec<N>) -> MatOwned<N> {
        let cols = data.len();
        DenseMat {
            data,
            rows: 1,
            cols,
            elem: PhantomData,
        }
    }
}

impl<N, Storage> Index<(usize, usize)> for DenseMat<N, Storage>
where Storage: Deref<Target=[N]> {
    type Output = N;

    fn index(&self, (i, j): (usize, usize)) -> &N {
        match self.get(i, j) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<N, Storage> IndexMut<(usize, usize)> for DenseMat<N, Storage>
where Storage: DerefMut<Target=[N]> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut N {
        match self.get_mut(i, j) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<N, Storage> MatExpr for DenseMat<N, Storage>
where N: Copy,
      Storage: Deref<Target=[N]> {
    type Elem = N;

    fn at(&self, i: usize, j: usize) -> N {
        self[(i, j)]
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn size(&self) -> usize {
        self.rows * self.cols
    }
}

impl<N, Storage> fmt::Display for DenseMat<N, Storage>
where N: fmt::Display,
      Storage: Deref<Target=[N]> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.rows {
            let start = self.data_index(i, 0);
            for elem in &self.data[start..start + self.cols] {
                write!(f, "{} ", elem)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
