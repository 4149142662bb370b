extern crate ndarray;

use ndarray::*;

///Display strings for a basis, `n` rows of `d` entries, matching the input shape.
pub type DisplayMatrix = Vec<Vec<String>>;

///The numeric outcome of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum BasisResult {
    ///The vectors are linearly dependent, so no basis was computed.
    Dependent,
    ///Unit-length, mutually orthogonal rows, in the same order as the input.
    OrthonormalBasis(Array2<f64>)
}

impl BasisResult {
    pub fn is_dependent(&self) -> bool {
        match self {
            BasisResult::Dependent => true,
            BasisResult::OrthonormalBasis(_) => false
        }
    }

    pub fn basis(&self) -> Option<&Array2<f64>> {
        match self {
            BasisResult::Dependent => None,
            BasisResult::OrthonormalBasis(basis) => Some(basis)
        }
    }
}

///The displayable outcome of a request, after formatting.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayResult {
    Dependent,
    Basis(DisplayMatrix)
}
