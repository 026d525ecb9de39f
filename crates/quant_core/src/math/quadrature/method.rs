//! Quadrature rule selection.

use super::rules;
use crate::types::MethodParseError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Selects one of the one-dimensional quadrature rules.
///
/// Library code passes this enum, so an unknown method is unrepresentable
/// once past a parse boundary. Text boundaries (CLI flags, configuration
/// files) obtain a value through [`FromStr`].
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::QuadratureMethod;
///
/// let method: QuadratureMethod = "simpson".parse().unwrap();
/// let integral = method.integrate(|x: f64| x * x * x, 0.0, 1.0, 2);
/// assert!((integral - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum QuadratureMethod {
    /// Composite trapezoidal rule, `O(h²)`.
    Trapezoid,
    /// Composite Simpson's rule, `O(h⁴)` for even interval counts.
    Simpson,
}

impl QuadratureMethod {
    /// Every selectable method, in parse-name order.
    pub const ALL: [QuadratureMethod; 2] = [QuadratureMethod::Trapezoid, QuadratureMethod::Simpson];

    /// Approximate `∫ₐᵇ f(x) dx` with the selected rule.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn integrate<T, F>(&self, f: F, a: T, b: T, n: usize) -> T
    where
        T: Float,
        F: Fn(T) -> T,
    {
        match self {
            QuadratureMethod::Trapezoid => rules::trapezoid(f, a, b, n),
            QuadratureMethod::Simpson => rules::simpson(f, a, b, n),
        }
    }

    /// The canonical lowercase name, as accepted by [`FromStr`].
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            QuadratureMethod::Trapezoid => "trapezoid",
            QuadratureMethod::Simpson => "simpson",
        }
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuadratureMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trapezoid" | "trapezoidal" => Ok(QuadratureMethod::Trapezoid),
            "simpson" | "simpsons" => Ok(QuadratureMethod::Simpson),
            _ => Err(MethodParseError::UnknownMethod {
                name: s.to_string(),
                expected: "trapezoid, simpson",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(
            "trapezoid".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Trapezoid
        );
        assert_eq!(
            "simpson".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Simpson
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Simpson".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Simpson
        );
        assert_eq!(
            "TRAPEZOIDAL".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Trapezoid
        );
    }

    #[test]
    fn test_parse_unknown_name_reports_choices() {
        let err = "gauss".parse::<QuadratureMethod>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gauss"));
        assert!(msg.contains("trapezoid, simpson"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for method in QuadratureMethod::ALL {
            let parsed: QuadratureMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_integrate_dispatches_to_both_rules() {
        let t = QuadratureMethod::Trapezoid.integrate(|x: f64| x, 0.0, 1.0, 10);
        let s = QuadratureMethod::Simpson.integrate(|x: f64| x, 0.0, 1.0, 10);
        assert!((t - 0.5).abs() < 1e-12);
        assert!((s - 0.5).abs() < 1e-12);
    }
}
