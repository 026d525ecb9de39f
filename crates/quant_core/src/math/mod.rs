//! Mathematical building blocks: root finders and quadrature rules.

pub mod quadrature;
pub mod solvers;
