//! Orthonormal bases for finite sets of real vectors.
//!
//! A submitted set of vectors (the rows of a matrix) is first tested for linear
//! independence by [`crate::independence_checker::IndependenceChecker`]. Independent sets are
//! run through classical Gram-Schmidt ([`crate::orthogonalizer`]), scaled to unit length
//! ([`crate::normalizer`]), and rendered for display by a [`crate::formatter::Formatter`].
//! Dependent sets stop after the first step.
//!
//! [`crate::engine::GramSchmidtEngine`] ties the stages together, and [`crate::service`]
//! exposes it over HTTP.

#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod params;
pub mod error;
pub mod vector_set;
pub mod linalg_utils;
pub mod independence_checker;
pub mod orthogonalizer;
pub mod normalizer;
pub mod rationalize;
pub mod formatter;
pub mod basis_result;
pub mod engine;
pub mod config;
pub mod service;
pub mod test_utils;
