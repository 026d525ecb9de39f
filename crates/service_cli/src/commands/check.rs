//! Check command implementation.
//!
//! Runs a self-validation battery over the numerical kernels: the normal
//! distribution approximations, quadrature convergence, and the 2D rule.
//! Exits non-zero when any check fails so the battery can gate deployments.

use std::f64::consts::PI;

use quant_core::math::quadrature::{
    convergence_iterations, trapezoid_2d, truncation_error, QuadratureMethod,
};
use quant_models::analytical::distributions::{norm_cdf, norm_pdf};
use tracing::info;

use crate::{CliError, Result};

/// Reference values for the standard normal CDF, Φ(z), at half-unit steps.
///
/// Tabulated to five decimal places; the Abramowitz and Stegun erf
/// approximation is accurate to 1.5e-7, so a 1e-4 tolerance leaves margin.
const NORMAL_TABLE: [(f64, f64); 7] = [
    (0.0, 0.5),
    (0.5, 0.69146),
    (1.0, 0.84134),
    (1.5, 0.93319),
    (2.0, 0.97725),
    (2.5, 0.99379),
    (3.0, 0.99865),
];

/// Execute the check command.
pub fn run() -> Result<()> {
    info!("Running validation battery");

    let mut results: Vec<(String, bool)> = Vec::new();

    // Normal CDF against the tabulated values, both tails.
    for (z, expected) in NORMAL_TABLE {
        let upper = (norm_cdf(z) - expected).abs() < 1e-4;
        let lower = (norm_cdf(-z) - (1.0 - expected)).abs() < 1e-4;
        results.push((format!("normal cdf at ±{:.1}", z), upper && lower));
    }

    // Density peak: φ(0) = 1/√(2π).
    let pdf_peak = (norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-12;
    results.push(("normal pdf peak".to_string(), pdf_peak));

    // Simpson convergence on ∫₀¹ 4/(1+x²) dx = π.
    let report = convergence_iterations(
        QuadratureMethod::Simpson,
        |x: f64| 4.0 / (1.0 + x * x),
        0.0,
        1.0,
        1e-8,
        12,
    );
    let quarter_circle = report.converged && (report.value - PI).abs() < 1e-8;
    results.push(("simpson convergence to pi".to_string(), quarter_circle));

    let error = truncation_error(
        QuadratureMethod::Simpson,
        |x: f64| 4.0 / (1.0 + x * x),
        0.0,
        1.0,
        100,
        PI,
    );
    results.push(("simpson truncation error".to_string(), error < 1e-8));

    // 2D rule: exact for constants and for bilinear integrands.
    let unit = trapezoid_2d(|_: f64, _: f64| 1.0, 0.0, 1.0, 4, 0.0, 1.0, 4);
    results.push(("2d constant integrand".to_string(), (unit - 1.0).abs() < 1e-12));

    let bilinear = trapezoid_2d(|x: f64, y: f64| x * y, 0.0, 2.0, 3, 0.0, 3.0, 5);
    results.push(("2d bilinear integrand".to_string(), (bilinear - 9.0).abs() < 1e-12));

    let mut passed = 0;
    let mut failed = 0;
    for (name, ok) in &results {
        if *ok {
            println!("  [PASS] {}", name);
            passed += 1;
        } else {
            println!("  [FAIL] {}", name);
            failed += 1;
        }
    }
    println!();
    println!("{} passed, {} failed", passed, failed);

    if failed > 0 {
        return Err(CliError::ValidationFailed(format!(
            "{} of {} validation checks failed",
            failed,
            passed + failed
        )));
    }

    info!("Validation battery complete");
    Ok(())
}
