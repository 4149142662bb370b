extern crate ndarray;

use ndarray::*;
use std::ops::DivAssign;
use crate::error::*;
use crate::linalg_utils::*;

///Scales every row of `orthogonal` to unit Euclidean length.
pub fn normalize_rows(orthogonal : ArrayView2<f64>) -> Result<Array2<f64>> {
    let mut result = orthogonal.to_owned();
    for (i, mut row) in result.outer_iter_mut().enumerate() {
        let row_norm = norm(row.view());
        if (row_norm == 0.0 || !row_norm.is_finite()) {
            error!("Cannot normalize row {} with norm {}", i, row_norm);
            return Err(BasisError::InternalArithmetic { stage : Stage::Normalizer, index : i });
        }
        row.div_assign(row_norm);
    }
    Ok(result)
}
