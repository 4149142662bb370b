extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use crate::params::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use crate::linalg_utils::*;

pub fn assert_eps_equals_to_within(one : f64, two : f64, epsilon : f64) {
    let diff = (one - two).abs();
    if (diff > epsilon) {
        panic!("{} and {} differ by {}, more than {}", one, two, diff, epsilon);
    }
}

pub fn assert_eps_equals(one : f64, two : f64) {
    assert_eps_equals_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, epsilon : f64) {
    assert_eq!(one.shape(), two.shape());
    let diff = one - two;
    let frob_norm = diff.iter().map(|x| x * x).sum::<f64>().sqrt();
    if (frob_norm > epsilon) {
        panic!("Matrices differ by {} in Frobenius norm:\n{}\n{}", frob_norm, one, two);
    }
}

pub fn assert_equal_matrices(one : &Array2<f64>, two : &Array2<f64>) {
    assert_equal_matrices_to_within(one, two, DEFAULT_TEST_THRESH);
}

///Checks that the rows of `basis` are unit length and pairwise orthogonal.
pub fn assert_orthonormal(basis : &Array2<f64>) {
    let n = basis.shape()[0];
    for i in 0..n {
        assert_eps_equals(norm(basis.row(i)), 1.0);
        for j in 0..i {
            assert_eps_equals(basis.row(i).dot(&basis.row(j)), 0.0);
        }
    }
}

pub fn random_matrix(t : usize, s : usize) -> Array2<f64> {
    Array::random((t, s), StandardNormal)
}

pub fn random_vector(t : usize) -> Array1<f64> {
    Array::random((t,), StandardNormal)
}
