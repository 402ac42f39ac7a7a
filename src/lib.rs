/*!

This crate contains dense matrices whose arithmetic is lazily evaluated.

Matrices are stored as a contiguous row-major data array. Combining them
with operators builds an expression tree instead of computing a result,
and the tree is evaluated into a new matrix in a single pass, without any
intermediate matrix being allocated:

```
use lazy_mats::{MatExpr, MatOwned};

let a = MatOwned::new_owned(vec![1., 2., 3., 4.], 2, 2).unwrap();
let b = MatOwned::from_elem(2, 2, 1.).unwrap();
let c = MatOwned::from_expr(&a + &b - 2.0_f64 * &a);
assert_eq!(c.data(), &[0., -1., -2., -3.]);

// `*` between matrices is the matrix product, `&` the element-wise one
let prod = (&a * &a).eval();
assert_eq!(prod.data(), &[7., 10., 15., 22.]);
let hadamard = (&a & &a).eval();
assert_eq!(hadamard.data(), &[1., 4., 9., 16.]);
```
*/

pub mod errors;
pub mod expr;
pub mod mat;
pub mod ops;
pub mod vector;


pub use errors::MatError;
pub use expr::MatExpr;
pub use mat::{DenseMat, MatOwned, MatView, MatViewMut};
pub use ops::{Difference, ElemProduct, MatProduct, Scale, Shift, Sum};
pub use vector::Vector;
