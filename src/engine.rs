use crate::error::*;
use crate::vector_set::*;
use crate::independence_checker::*;
use crate::orthogonalizer::*;
use crate::normalizer::*;
use crate::formatter::*;
use crate::basis_result::*;

///Ties the numeric stages together: independence test, then (only if independent)
///Gram-Schmidt, normalization, and formatting.
///
///Holds no per-request state, so one engine can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct GramSchmidtEngine<F : Formatter> {
    pub checker : IndependenceChecker,
    pub formatter : F
}

impl<F : Formatter> GramSchmidtEngine<F> {
    pub fn new(checker : IndependenceChecker, formatter : F) -> GramSchmidtEngine<F> {
        GramSchmidtEngine {
            checker,
            formatter
        }
    }

    ///Computes the orthonormal basis for `vectors`, or reports that they are dependent.
    pub fn orthonormal_basis(&self, vectors : &VectorSet) -> Result<BasisResult> {
        if (!self.checker.is_independent(vectors.view())?) {
            return Ok(BasisResult::Dependent);
        }
        let orthogonal = orthogonalize(vectors.view())?;
        let orthonormal = normalize_rows(orthogonal.view())?;
        Ok(BasisResult::OrthonormalBasis(orthonormal))
    }

    pub fn compute(&self, vectors : &VectorSet) -> Result<DisplayResult> {
        match self.orthonormal_basis(vectors)? {
            BasisResult::Dependent => {
                info!("{}x{} input is linearly dependent", vectors.num_vectors(), vectors.dimension());
                Ok(DisplayResult::Dependent)
            },
            BasisResult::OrthonormalBasis(basis) => {
                info!("Computed {}x{} orthonormal basis", vectors.num_vectors(), vectors.dimension());
                Ok(DisplayResult::Basis(self.formatter.format_matrix(&basis)))
            }
        }
    }
}
