extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::{Determinant, SVD};
use crate::error::*;

///Computes the squared Euclidean norm of a vector
pub fn sq_norm(v : ArrayView1<f64>) -> f64 {
    v.dot(&v)
}

pub fn norm(v : ArrayView1<f64>) -> f64 {
    sq_norm(v).sqrt()
}

///Computes the coefficient `(v . u) / ||u||^2` of the projection of `v` onto `u`.
///Returns `None` if `u` has zero (or non-finite) norm, since the projection is undefined.
pub fn projection_coefficient(v : ArrayView1<f64>, u : ArrayView1<f64>) -> Option<f64> {
    let denominator = sq_norm(u);
    if (denominator == 0.0 || !denominator.is_finite()) {
        return None;
    }
    Some(v.dot(&u) / denominator)
}

///Computes the determinant of a square matrix through its LU factorization.
///If LAPACK refuses to factorize a matrix that is rank-deficient anyway
///(an exactly zero pivot), the determinant is zero.
pub fn determinant(mat : ArrayView2<f64>) -> Result<f64> {
    match mat.det() {
        Ok(det) => Ok(det),
        Err(e) => {
            let n = mat.shape()[0];
            if (mat.shape()[1] == n && numerical_rank(mat)? < n) {
                debug!("LU factorization failed on a singular matrix ({}), using det = 0", e);
                Ok(0.0)
            } else {
                Err(BasisError::from(e))
            }
        }
    }
}

///Computes the numerical rank of a matrix from its singular values,
///counting those strictly above `sigma_max * max(rows, cols) * eps`.
pub fn numerical_rank(mat : ArrayView2<f64>) -> Result<usize> {
    let (_, sigma, _) = mat.svd(false, false)?;
    let mut max_singular_value = 0.0f64;
    for i in 0..sigma.shape()[0] {
        max_singular_value = max_singular_value.max(sigma[[i,]]);
    }
    let (rows, cols) = mat.dim();
    let thresh = max_singular_value * (rows.max(cols) as f64) * std::f64::EPSILON;

    let mut rank = 0;
    for i in 0..sigma.shape()[0] {
        if (sigma[[i,]] > thresh) {
            rank += 1;
        }
    }
    Ok(rank)
}
