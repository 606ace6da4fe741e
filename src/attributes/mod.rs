//! Structural predicates over CNF instances.
//!
//! Most of these are one-sided triviality criteria: a negative answer
//! certifies that the formula is trivially satisfiable (or polynomially
//! decidable), while a positive answer only says it *may* be a hard kernel.
//! The kernelizer combines them into a [`KernelVerdict`].
//!
//! [`KernelVerdict`]: crate::kernel::KernelVerdict

mod autark;
mod biathlet;
mod lll;
mod pure_literal;
mod renamable_horn;
mod tovey;
mod two_sat;

pub use autark::is_autark;
pub use biathlet::is_biathlet_satisfied;
pub use lll::is_lll_satisfied;
pub use pure_literal::pure_literal;
pub use renamable_horn::is_renamable_horn;
pub use tovey::is_tovey_satisfied;
pub use two_sat::is_two_sat;

pub use crate::instance::is_one_connected_component;
