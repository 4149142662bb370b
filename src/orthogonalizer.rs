extern crate ndarray;

use ndarray::*;
use std::ops::SubAssign;
use crate::error::*;
use crate::linalg_utils::*;

///Classical Gram-Schmidt: `u_0 = v_0`, and each later `u_i` is `v_i` minus its
///projections onto every earlier `u_j`, with coefficients taken against the
///original `v_i`. Rows are processed strictly in input order, so permuting the
///input changes the result.
///
///The input must already be known to be independent. A zero-norm `u_j` here means
///the independence test and the arithmetic disagree, and is reported as
///[`BasisError::InternalArithmetic`].
pub fn orthogonalize(vectors : ArrayView2<f64>) -> Result<Array2<f64>> {
    let n = vectors.shape()[0];
    let mut result = vectors.to_owned();

    for i in 1..n {
        let v = vectors.row(i);
        let projection_sum = sum_projections(v, result.slice(s![0..i, ..]))?;
        result.row_mut(i).sub_assign(&projection_sum);
    }

    for i in 0..n {
        if (!result.row(i).iter().all(|x| x.is_finite())) {
            error!("Orthogonalized vector {} is not finite", i);
            return Err(BasisError::InternalArithmetic { stage : Stage::Orthogonalizer, index : i });
        }
    }
    Ok(result)
}

//Sum of the projections of v onto each row of basis
fn sum_projections(v : ArrayView1<f64>, basis : ArrayView2<f64>) -> Result<Array1<f64>> {
    let mut result = Array::zeros((v.shape()[0],));
    for (j, u) in basis.outer_iter().enumerate() {
        let coefficient = match projection_coefficient(v, u) {
            Some(coefficient) => coefficient,
            None => {
                error!("Gram-Schmidt hit a zero-norm vector at row {} after independence was confirmed", j);
                return Err(BasisError::InternalArithmetic { stage : Stage::Orthogonalizer, index : j });
            }
        };
        result.scaled_add(coefficient, &u);
    }
    Ok(result)
}
