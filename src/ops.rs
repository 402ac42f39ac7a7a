//! Lazy expression nodes and the operators building them.
//!
//! | expression | node          | element `(i, j)`               |
//! |------------|---------------|--------------------------------|
//! | `a + b`    | `Sum`         | `a(i, j) + b(i, j)`            |
//! | `a - b`    | `Difference`  | `a(i, j) - b(i, j)`            |
//! | `a & b`    | `ElemProduct` | `a(i, j) * b(i, j)`            |
//! | `a * s`    | `Scale`       | `a(i, j) * s`                  |
//! | `a + s`    | `Shift`       | `a(i, j) + s`                  |
//! | `a * b`    | `MatProduct`  | `sum over k of a(i, k) * b(k, j)` |
//!
//! `*` between two expressions is the matrix product, the element-wise
//! product is spelled `&`. Scalar operators accept the scalar on either
//! side and build the same node.
//!
//! Operands are taken by value: matrices enter an expression by reference
//! (`&a`), nested nodes are moved into their parent. Shapes are checked when
//! a node is built; the operators panic on mismatched shapes while the
//! `try_new` constructors report them as a `MatError`.
//!
//! Operators are implemented for `&DenseMat`, `&Vector` and owned nodes
//! only. A node kept in a variable is consumed by the next operator
//! (`s + &m`); `&s + &m` does not compile. Nodes of element-wise and scalar
//! kinds are `Copy` when their operands are, so `s` can still be reused.
//! The node constructors (`Sum::new(&s, &m)`) accept any `MatExpr`,
//! references to nodes included.

use std::ops::{Add, BitAnd, Mul, Sub};

use log::trace;
use num::traits::Num;

use crate::errors::MatError;
use crate::expr::{check_same_shape, MatExpr};
use crate::mat::{DenseMat, MatOwned};
use crate::vector::Vector;

macro_rules! elementwise_node {
    ($(#[$attr:meta])* $name:ident, $op:tt) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<L, R> {
            lhs: L,
            rhs: R,
        }

        impl<L, R> $name<L, R>
        where L: MatExpr,
              R: MatExpr<Elem = L::Elem>,
              L::Elem: Num {
            /// Build the node, provided both operands have the same shape
            pub fn try_new(lhs: L, rhs: R) -> Result<Self, MatError> {
                check_same_shape(&lhs, &rhs)?;
                Ok($name { lhs, rhs })
            }

            /// Build the node.
            ///
            /// # Panics
            ///
            /// Panics if the operands do not have the same shape.
            pub fn new(lhs: L, rhs: R) -> Self {
                Self::try_new(lhs, rhs).unwrap_or_else(|err| panic!("{}", err))
            }
        }

        impl<L, R> MatExpr for $name<L, R>
        where L: MatExpr,
              R: MatExpr<Elem = L::Elem>,
              L::Elem: Num {
            type Elem = L::Elem;

            fn at(&self, i: usize, j: usize) -> L::Elem {
                self.lhs.at(i, j) $op self.rhs.at(i, j)
            }

            fn rows(&self) -> usize {
                self.lhs.rows()
            }

            fn cols(&self) -> usize {
                self.lhs.cols()
            }

            fn size(&self) -> usize {
                self.lhs.size()
            }
        }
    }
}

elementwise_node!(
    /// Element-wise sum of two expressions of the same shape
    Sum, +);
elementwise_node!(
    /// Element-wise difference of two expressions of the same shape
    Difference, -);
elementwise_node!(
    /// Element-wise (Hadamard) product of two expressions of the same shape
    ElemProduct, *);

/// An expression multiplied by a scalar
#[derive(Clone, Copy, Debug)]
pub struct Scale<E, N> {
    expr: E,
    scalar: N,
}

impl<E, N> Scale<E, N>
where E: MatExpr<Elem = N>,
      N: Num + Copy {
    pub fn new(expr: E, scalar: N) -> Self {
        Scale { expr, scalar }
    }
}

impl<E, N> MatExpr for Scale<E, N>
where E: MatExpr<Elem = N>,
      N: Num + Copy {
    type Elem = N;

    fn at(&self, i: usize, j: usize) -> N {
        self.expr.at(i, j) * self.scalar
    }

    fn rows(&self) -> usize {
        self.expr.rows()
    }

    fn cols(&self) -> usize {
        self.expr.cols()
    }

    fn size(&self) -> usize {
        self.expr.size()
    }
}

/// An expression with a scalar added to each of its elements
#[derive(Clone, Copy, Debug)]
pub struct Shift<E, N> {
    expr: E,
    scalar: N,
}

impl<E, N> Shift<E, N>
where E: MatExpr<Elem = N>,
      N: Num + Copy {
    pub fn new(expr: E, scalar: N) -> Self {
        Shift { expr, scalar }
    }
}

impl<E, N> MatExpr for Shift<E, N>
where E: MatExpr<Elem = N>,
      N: Num + Copy {
    type Elem = N;

    fn at(&self, i: usize, j: usize) -> N {
        self.expr.at(i, j) + self.scalar
    }

    fn rows(&self) -> usize {
        self.expr.rows()
    }

    fn cols(&self) -> usize {
        self.expr.cols()
    }

    fn size(&self) -> usize {
        self.expr.size()
    }
}

/// Matrix product of two expressions.
///
/// This is the only node owning storage: when it is built, the right
/// operand is evaluated and transposed into a matrix held by the node, for
/// as long as the node lives. Each element of the product is then the dot
/// product of a row of the left operand with a contiguous row of that
/// transposed copy. The right operand is not borrowed past construction.
#[derive(Clone, Debug)]
pub struct MatProduct<L, N> {
    lhs: L,
    rhs_t: MatOwned<N>,
}

impl<L, N> MatProduct<L, N>
where L: MatExpr<Elem = N>,
      N: Num + Copy {
    /// Build the node, provided `lhs.cols() == rhs.rows()`
    pub fn try_new<R>(lhs: L, rhs: R) -> Result<Self, MatError>
    where R: MatExpr<Elem = N> {
        if lhs.cols() != rhs.rows() {
            return Err(MatError::IncompatibleInnerDims {
                lhs: lhs.shape(),
                rhs: rhs.shape(),
            });
        }
        trace!("transposing the {}x{} right operand of a matrix product",
               rhs.rows(), rhs.cols());
        let rhs_t = MatOwned::transposed(&rhs);
        Ok(MatProduct { lhs, rhs_t })
    }

    /// Build the node.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions of the operands differ.
    pub fn new<R>(lhs: L, rhs: R) -> Self
    where R: MatExpr<Elem = N> {
        Self::try_new(lhs, rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<L, N> MatExpr for MatProduct<L, N>
where L: MatExpr<Elem = N>,
      N: Num + Copy {
    type Elem = N;

    fn at(&self, i: usize, j: usize) -> N {
        let inner = self.rhs_t.cols();
        let start = self.rhs_t.data_index(j, 0);
        self.rhs_t.data()[start..start + inner]
            .iter()
            .enumerate()
            .fold(N::zero(), |sum, (k, &rhs)| sum + self.lhs.at(i, k) * rhs)
    }

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn cols(&self) -> usize {
        self.rhs_t.rows()
    }
}

macro_rules! scalar_op {
    ([$($gen:tt)*] $ty:ty, $scalar:ty) => {
        impl<$($gen)*> Mul<$scalar> for $ty
        where $ty: MatExpr<Elem = $scalar> {
            type Output = Scale<$ty, $scalar>;

            fn mul(self, scalar: $scalar) -> Self::Output {
                Scale::new(self, scalar)
            }
        }

        impl<$($gen)*> Mul<$ty> for $scalar
        where $ty: MatExpr<Elem = $scalar> {
            type Output = Scale<$ty, $scalar>;

            fn mul(self, expr: $ty) -> Self::Output {
                Scale::new(expr, self)
            }
        }

        impl<$($gen)*> Add<$scalar> for $ty
        where $ty: MatExpr<Elem = $scalar> {
            type Output = Shift<$ty, $scalar>;

            fn add(self, scalar: $scalar) -> Self::Output {
                Shift::new(self, scalar)
            }
        }

        impl<$($gen)*> Add<$ty> for $scalar
        where $ty: MatExpr<Elem = $scalar> {
            type Output = Shift<$ty, $scalar>;

            fn add(self, expr: $ty) -> Self::Output {
                Shift::new(expr, self)
            }
        }
    }
}

macro_rules! scalar_ops {
    ($gen:tt $ty:ty) => {
        scalar_op!($gen $ty, i8);
        scalar_op!($gen $ty, i16);
        scalar_op!($gen $ty, i32);
        scalar_op!($gen $ty, i64);
        scalar_op!($gen $ty, i128);
        scalar_op!($gen $ty, isize);
        scalar_op!($gen $ty, u8);
        scalar_op!($gen $ty, u16);
        scalar_op!($gen $ty, u32);
        scalar_op!($gen $ty, u64);
        scalar_op!($gen $ty, u128);
        scalar_op!($gen $ty, usize);
        scalar_op!($gen $ty, f32);
        scalar_op!($gen $ty, f64);
    }
}

macro_rules! expr_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*, Rhs> Add<Rhs> for $ty
        where $ty: MatExpr,
              Rhs: MatExpr<Elem = <$ty as MatExpr>::Elem>,
              <$ty as MatExpr>::Elem: Num {
            type Output = Sum<$ty, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                Sum::new(self, rhs)
            }
        }

        impl<$($gen)*, Rhs> Sub<Rhs> for $ty
        where $ty: MatExpr,
              Rhs: MatExpr<Elem = <$ty as MatExpr>::Elem>,
              <$ty as MatExpr>::Elem: Num {
            type Output = Difference<$ty, Rhs>;

            fn sub(self, rhs: Rhs) -> Self::Output {
                Difference::new(self, rhs)
            }
        }

        impl<$($gen)*, Rhs> BitAnd<Rhs> for $ty
        where $ty: MatExpr,
              Rhs: MatExpr<Elem = <$ty as MatExpr>::Elem>,
              <$ty as MatExpr>::Elem: Num {
            type Output = ElemProduct<$ty, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                ElemProduct::new(self, rhs)
            }
        }

        impl<$($gen)*, Rhs> Mul<Rhs> for $ty
        where $ty: MatExpr,
              Rhs: MatExpr<Elem = <$ty as MatExpr>::Elem>,
              <$ty as MatExpr>::Elem: Num {
            type Output = MatProduct<$ty, <$ty as MatExpr>::Elem>;

            fn mul(self, rhs: Rhs) -> Self::Output {
                MatProduct::new(self, rhs)
            }
        }

        scalar_ops!([$($gen)*] $ty);
    }
}

expr_ops!(['a, N, Storage] &'a DenseMat<N, Storage>);
expr_ops!(['a, N] &'a Vector<N>);
expr_ops!([L, R] Sum<L, R>);
expr_ops!([L, R] Difference<L, R>);
expr_ops!([L, R] ElemProduct<L, R>);
expr_ops!([E, M] Scale<E, M>);
expr_ops!([E, M] Shift<E, M>);
expr_ops!([L, M] MatProduct<L, M>);
