//! # Equation Registry
//!
//! Registry of the kinematics identities the solver rearranges. Each identity
//! carries metadata for documentation, and solver steps record which identity
//! they used so a result can be audited.
//!
//! ## Usage
//!
//! ```rust
//! use suvat_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::VelocityTime, "a = (v - u) / t");
//!
//! let meta = Equation::VelocityTime.metadata();
//! assert_eq!(meta.formula_plain, "v = u + a*t");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    /// SI units, for documentation only
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

const S: Variable = Variable::new("s", "Displacement", "m");
const U: Variable = Variable::new("u", "Initial velocity", "m/s");
const V: Variable = Variable::new("v", "Final velocity", "m/s");
const A: Variable = Variable::new("a", "Acceleration", "m/s^2");
const T: Variable = Variable::new("t", "Time", "s");

// ============================================================================
// Equation Metadata
// ============================================================================

/// Metadata for one identity.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the identity relates
    pub description: &'static str,
    /// The identity in plain text
    pub formula_plain: &'static str,
    /// Rearranged forms the solver uses
    pub rearrangements: Vec<&'static str>,
    /// Variables appearing in the identity
    pub variables: Vec<Variable>,
    /// Function in `equations/identities.rs` evaluating the identity
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// The five constant-acceleration identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// v = u + at
    VelocityTime,
    /// s = (u + v)t/2
    AverageVelocity,
    /// v^2 = u^2 + 2as
    VelocitySquared,
    /// s = ut + at^2/2
    DisplacementFromInitial,
    /// s = vt - at^2/2
    DisplacementFromFinal,
}

impl Equation {
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::VelocityTime => EquationMetadata {
                name: "Velocity-Time Relation",
                description: "Final velocity after accelerating uniformly for time t",
                formula_plain: "v = u + a*t",
                rearrangements: vec!["a = (v - u) / t", "t = (v - u) / a", "u = v - a*t"],
                variables: vec![U, V, A, T],
                source_function: "final_velocity",
            },
            Equation::AverageVelocity => EquationMetadata {
                name: "Average Velocity Displacement",
                description: "Displacement equals the mean of initial and final velocity times time",
                formula_plain: "s = (u + v)*t / 2",
                rearrangements: vec!["t = 2s / (u + v)", "v = 2s/t - u", "u = 2s/t - v"],
                variables: vec![S, U, V, T],
                source_function: "average_velocity_displacement",
            },
            Equation::VelocitySquared => EquationMetadata {
                name: "Time-Independent Velocity Relation",
                description: "Relates velocities and displacement without reference to time",
                formula_plain: "v^2 = u^2 + 2*a*s",
                rearrangements: vec![
                    "a = (v^2 - u^2) / 2s",
                    "s = (v^2 - u^2) / 2a",
                    "v = ±sqrt(|u^2 + 2as|)",
                    "u = ±sqrt(|v^2 - 2as|)",
                ],
                variables: vec![S, U, V, A],
                source_function: "velocity_squared",
            },
            Equation::DisplacementFromInitial => EquationMetadata {
                name: "Displacement from Initial Velocity",
                description: "Displacement in terms of initial velocity, acceleration and time",
                formula_plain: "s = u*t + a*t^2 / 2",
                rearrangements: vec!["u = (s - a*t^2/2) / t"],
                variables: vec![S, U, A, T],
                source_function: "displacement_from_initial",
            },
            Equation::DisplacementFromFinal => EquationMetadata {
                name: "Displacement from Final Velocity",
                description: "Displacement in terms of final velocity, acceleration and time",
                formula_plain: "s = v*t - a*t^2 / 2",
                rearrangements: vec![],
                variables: vec![S, V, A, T],
                source_function: "displacement_from_final",
            },
        }
    }
}

/// All registered equations, in documentation order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::VelocityTime,
    Equation::AverageVelocity,
    Equation::VelocitySquared,
    Equation::DisplacementFromInitial,
    Equation::DisplacementFromFinal,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a solving step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// The rearranged form actually evaluated (e.g. "t = 2s / (u + v)")
    pub step: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, step: impl Into<String>) -> Self {
        Self {
            equation,
            step: step.into(),
        }
    }
}

/// Collector for equation usage during one solving call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, step: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, step));
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = std::collections::HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    pub fn into_usages(self) -> Vec<EquationUsage> {
        self.usages
    }
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the equations reference as markdown.
///
/// ```rust
/// use suvat_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("SUVAT Equations Reference"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(
        r#"# SUVAT Equations Reference

> Generated from the equation registry. Print with: `suvat equations`

The solver rearranges these identities of motion under constant acceleration.
Every solved result satisfies all five simultaneously.

## Sign Conventions

| Quantity | Convention |
|----------|------------|
| s, u, v, a | Signed along a single axis |
| t | Non-negative |

---

"#,
    );

    for equation in ALL_EQUATIONS {
        let meta = equation.metadata();

        output.push_str(&format!("## {}\n\n", meta.name));
        output.push_str(&format!("{}\n\n", meta.description));
        output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

        if !meta.rearrangements.is_empty() {
            output.push_str("**Rearrangements used by the solver:**\n");
            for form in &meta.rearrangements {
                output.push_str(&format!("- `{}`\n", form));
            }
            output.push('\n');
        }

        output.push_str("| Symbol | Description | Units |\n");
        output.push_str("|--------|-------------|-------|\n");
        for var in &meta.variables {
            output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
        }
        output.push('\n');

        output.push_str(&format!(
            "**Source:** [`{}`](identities.rs)\n\n---\n\n",
            meta.source_function
        ));
    }

    output.push_str(&format!("**Total Equations:** {}\n", ALL_EQUATIONS.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 5);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(meta.variables.len() == 4, "Equation {:?} should relate four quantities", eq);
            assert!(!meta.source_function.is_empty());
        }
    }

    #[test]
    fn test_each_equation_omits_one_quantity() {
        let mut omitted: Vec<&str> = ALL_EQUATIONS
            .iter()
            .map(|eq| {
                let symbols: Vec<&str> = eq.metadata().variables.iter().map(|v| v.symbol).collect();
                ["s", "u", "v", "a", "t"]
                    .into_iter()
                    .find(|s| !symbols.contains(s))
                    .unwrap()
            })
            .collect();
        omitted.sort();
        assert_eq!(omitted, vec!["a", "s", "t", "u", "v"]);
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::AverageVelocity, "t = 2s / (u + v)");
        tracker.record(Equation::VelocityTime, "a = (v - u) / t");
        tracker.record(Equation::AverageVelocity, "s = (u + v)*t / 2");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::AverageVelocity, Equation::VelocityTime]
        );
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# SUVAT Equations Reference"));
        assert!(markdown.contains("Generated from the equation registry"));
        assert!(markdown.contains("## Sign Conventions"));
        assert!(markdown.contains("## Velocity-Time Relation"));
        assert!(markdown.contains("`v^2 = u^2 + 2*a*s`"));
        assert!(markdown.contains("`t = 2s / (u + v)`"));
        assert!(markdown.contains("**Total Equations:** 5"));
    }
}
