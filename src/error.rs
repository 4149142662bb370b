use ndarray_linalg::error::LinalgError;
use thiserror::Error;

///Which numeric stage observed a degenerate vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Orthogonalizer,
    Normalizer
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f : &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stage::Orthogonalizer => write!(f, "orthogonalizer"),
            Stage::Normalizer => write!(f, "normalizer")
        }
    }
}

///Everything that can go wrong between receiving a matrix and producing a basis.
///
///Note that a dependent vector set is *not* an error; see [`crate::basis_result::BasisResult`].
#[derive(Debug, Error)]
pub enum BasisError {
    ///Ragged, empty, or non-finite input. The caller's fault.
    #[error("invalid input matrix: {0}")]
    InputShape(String),

    ///A zero-norm (or non-finite) vector turned up after independence was already
    ///confirmed, meaning the independence test and the arithmetic disagree.
    #[error("internal arithmetic inconsistency: degenerate vector {index} in {stage}")]
    InternalArithmetic { stage : Stage, index : usize },

    #[error("linear algebra backend failure: {0}")]
    Linalg(#[from] LinalgError)
}

impl BasisError {
    ///True for failures caused by the request rather than by the engine.
    pub fn is_caller_error(&self) -> bool {
        match self {
            BasisError::InputShape(_) => true,
            _ => false
        }
    }
}

pub type Result<T> = std::result::Result<T, BasisError>;
