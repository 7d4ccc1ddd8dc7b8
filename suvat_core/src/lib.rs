//! # suvat_core - Constant-Acceleration Kinematics Solver
//!
//! `suvat_core` solves the equations of uniformly accelerated motion: given
//! any three of displacement (s), initial velocity (u), final velocity (v),
//! acceleration (a) and time (t), it computes the remaining two.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; the "which quantities are known" marker is
//!   a value passed per call, so concurrent calls need no locking
//! - **Classified Errors**: Contradictory input (`InvalidInput`) is kept apart
//!   from consistent-but-degenerate input (`Unsolvable`)
//! - **JSON-First**: Inputs, solutions, errors and settings are serializable
//! - **Auditable**: Each solution lists the formula steps that produced it
//!
//! ## Quick Start
//!
//! ```rust
//! use suvat_core::solver::solve_at;
//!
//! let (a, t) = solve_at(100.0, 0.0, 20.0).unwrap();
//! assert!((a - 2.0).abs() < 1e-9);
//! assert!((t - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`solver`] - The ten solving operations and the generic dispatcher
//! - [`validation`] - Consistency checks before and after solving
//! - [`equations`] - The five identities and their registry
//! - [`quantity`] - Quantities, known sets, combinations
//! - [`motion`] - Five-value motion records and generic input
//! - [`settings`] - Numeric tolerances
//! - [`errors`] - Structured error types

pub mod equations;
pub mod errors;
pub mod motion;
pub mod quantity;
pub mod settings;
pub mod solver;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use errors::{SuvatError, SuvatResult};
pub use motion::{Motion, MotionInput};
pub use quantity::{Combination, KnownSet, Quantity};
pub use settings::SolverSettings;
pub use solver::{solve, Solution, Solver};
