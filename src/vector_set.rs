extern crate ndarray;

use ndarray::*;
use crate::error::*;

///An ordered, non-empty set of real vectors sharing one dimension,
///stored row-major as an `n x d` matrix (rows are vectors).
///
///Construction is the only place shape is checked. Once built, a [`VectorSet`]
///is never mutated; every later stage works on its own copy.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorSet {
    vectors : Array2<f64>
}

impl VectorSet {
    ///Builds a [`VectorSet`] from nested rows, as decoded from a request body.
    pub fn from_rows(rows : Vec<Vec<f64>>) -> Result<VectorSet> {
        let n = rows.len();
        if (n == 0) {
            return Err(BasisError::InputShape("matrix has no vectors".to_string()));
        }
        let d = rows[0].len();
        if (d == 0) {
            return Err(BasisError::InputShape("vectors have zero dimension".to_string()));
        }

        let mut flat = Vec::<f64>::with_capacity(n * d);
        for (i, row) in rows.into_iter().enumerate() {
            if (row.len() != d) {
                return Err(BasisError::InputShape(format!(
                    "row {} has {} entries, expected {}", i, row.len(), d)));
            }
            flat.extend(row);
        }

        let vectors = Array2::from_shape_vec((n, d), flat)
                      .map_err(|e| BasisError::InputShape(e.to_string()))?;
        VectorSet::from_array(vectors)
    }

    pub fn from_array(vectors : Array2<f64>) -> Result<VectorSet> {
        let (n, d) = vectors.dim();
        if (n == 0 || d == 0) {
            return Err(BasisError::InputShape(format!("matrix shape {}x{} is empty", n, d)));
        }
        for ((i, j), value) in vectors.indexed_iter() {
            if (!value.is_finite()) {
                return Err(BasisError::InputShape(format!(
                    "entry ({}, {}) is not a finite number", i, j)));
            }
        }
        Ok(VectorSet { vectors })
    }

    pub fn num_vectors(&self) -> usize {
        self.vectors.shape()[0]
    }

    pub fn dimension(&self) -> usize {
        self.vectors.shape()[1]
    }

    pub fn view(&self) -> ArrayView2<f64> {
        self.vectors.view()
    }

    ///Returns a fresh working copy of the backing matrix.
    pub fn to_matrix(&self) -> Array2<f64> {
        self.vectors.to_owned()
    }
}
