//! Payoff direction definitions.
//!
//! This module provides the call/put tag and its mapping to the signed
//! multiplier used inside the pricing formulas.

use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Direction of an option payoff.
///
/// The public API always works with this two-variant tag. Internally the
/// pricing formulas collapse it to a signed multiplier via [`sign`], so the
/// call and put branches share one algebraic form:
///
/// ```text
/// price = φ · (S·e^(−qT)·Φ(φ·d1) − K·e^(−rT)·Φ(φ·d2)),   φ = ±1
/// ```
///
/// [`sign`]: OptionKind::sign
///
/// # Examples
/// ```
/// use quant_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.sign::<f64>(), 1.0);
/// assert_eq!(OptionKind::Put.sign::<f64>(), -1.0);
/// assert_eq!("put".parse::<OptionKind>().unwrap(), OptionKind::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// The signed multiplier `φ`: `+1` for a call, `−1` for a put.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            OptionKind::Call => T::one(),
            OptionKind::Put => -T::one(),
        }
    }

    /// Returns whether this is the call direction.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// The canonical lowercase name, as accepted by [`FromStr`].
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = quant_core::types::MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(quant_core::types::MethodParseError::UnknownMethod {
                name: s.to_string(),
                expected: "call, put",
            }),
        }
    }
}
