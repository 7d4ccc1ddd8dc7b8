//! # Kinematics Equations
//!
//! The identities of uniformly accelerated motion, kept in one place so the
//! solver, the validator's post-check and the generated reference all agree.
//!
//! ## Modules
//!
//! - [`identities`] - The five identities as pure functions, plus residual checks
//! - [`registry`] - Equation metadata and usage tracking

pub mod identities;
pub mod registry;

pub use identities::{
    average_velocity_displacement,
    displacement_from_final,
    displacement_from_initial,
    final_velocity,
    identity_checks,
    velocity_squared,
    IdentityCheck,
};

pub use registry::{
    Equation,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
