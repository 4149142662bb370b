extern crate ndarray;

use ndarray::*;
use crate::error::*;
use crate::linalg_utils::*;

///How a square matrix's determinant is compared against zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeterminantPolicy {
    ///Truncate the determinant toward zero before testing it. Any matrix with
    ///`|det| < 1` is reported as dependent, even when it is not singular.
    ///This is a known precision trade-off, and it is the default.
    TruncateToInteger,
    ///Report dependence only when the computed determinant is exactly zero.
    Exact
}

impl Default for DeterminantPolicy {
    fn default() -> Self {
        DeterminantPolicy::TruncateToInteger
    }
}

impl DeterminantPolicy {
    pub fn is_zero(&self, det : f64) -> bool {
        match self {
            DeterminantPolicy::TruncateToInteger => det.trunc() == 0.0,
            DeterminantPolicy::Exact => det == 0.0
        }
    }

    pub fn parse(name : &str) -> Option<DeterminantPolicy> {
        match name.trim().to_lowercase().as_str() {
            "truncate" | "truncate_to_integer" => Some(DeterminantPolicy::TruncateToInteger),
            "exact" => Some(DeterminantPolicy::Exact),
            _ => None
        }
    }
}

///Decides whether the rows of an `n x d` matrix are linearly independent,
///choosing the test by shape:
///
/// * `d < n`: always dependent
/// * `d == n`: determinant zero-test under the configured [`DeterminantPolicy`]
/// * `d > n`: numerical rank must equal `n`
#[derive(Clone, Copy, Debug, Default)]
pub struct IndependenceChecker {
    pub policy : DeterminantPolicy
}

impl IndependenceChecker {
    pub fn new(policy : DeterminantPolicy) -> IndependenceChecker {
        IndependenceChecker {
            policy
        }
    }

    pub fn is_independent(&self, vectors : ArrayView2<f64>) -> Result<bool> {
        let (n, d) = vectors.dim();
        if (d < n) {
            debug!("{} vectors in {} dimensions are necessarily dependent", n, d);
            Ok(false)
        } else if (d == n) {
            let det = determinant(vectors)?;
            debug!("Square {}x{} matrix has determinant {}", n, d, det);
            Ok(!self.policy.is_zero(det))
        } else {
            let rank = numerical_rank(vectors)?;
            debug!("Wide {}x{} matrix has rank {}", n, d, rank);
            Ok(rank >= n)
        }
    }
}
