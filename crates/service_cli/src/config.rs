//! CLI configuration file loading
//!
//! The configuration file (`quantara.toml` by default) is optional: when it
//! does not exist, every setting falls back to the library defaults. A
//! `[solver]` section overrides the implied-volatility defaults and a
//! `[greeks]` section the finite-difference step. Command-line flags
//! override both.
//!
//! ```toml
//! [solver]
//! tolerance = 1e-6
//! bracket = [1e-4, 3.0]
//! newton_seed = 0.2
//! secant_seeds = [2.0, 3.0]
//! bisection_max_iterations = 1000
//! open_max_iterations = 100
//!
//! [greeks]
//! step = 1e-4
//! ```

use serde::Deserialize;

use quant_models::greeks::DEFAULT_FD_STEP;
use quant_models::implied::ImpliedVolConfig;

use crate::Result;

/// Parsed contents of the configuration file
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CliConfig {
    /// `[solver]` section
    #[serde(default)]
    pub solver: SolverSection,

    /// `[greeks]` section
    #[serde(default)]
    pub greeks: GreeksSection,
}

/// Overrides for the implied-volatility solvers
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SolverSection {
    /// Price-residual tolerance
    pub tolerance: Option<f64>,

    /// Bisection bracket `[low, high]`
    pub bracket: Option<(f64, f64)>,

    /// Newton-Raphson seed volatility
    pub newton_seed: Option<f64>,

    /// Secant seed pair `[older, newer]`
    pub secant_seeds: Option<(f64, f64)>,

    /// Iteration cap for bisection
    pub bisection_max_iterations: Option<usize>,

    /// Iteration cap for the open methods
    pub open_max_iterations: Option<usize>,
}

/// Overrides for the finite-difference Greeks
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GreeksSection {
    /// Perturbation step
    pub step: Option<f64>,
}

impl CliConfig {
    /// Loads the configuration file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Solver settings with the file's overrides applied over the defaults.
    pub fn solver_config(&self) -> ImpliedVolConfig<f64> {
        let mut config = ImpliedVolConfig::default();
        if let Some(tolerance) = self.solver.tolerance {
            config = config.with_tolerance(tolerance);
        }
        if let Some((low, high)) = self.solver.bracket {
            config = config.with_bracket(low, high);
        }
        if let Some(seed) = self.solver.newton_seed {
            config = config.with_newton_seed(seed);
        }
        if let Some((older, newer)) = self.solver.secant_seeds {
            config = config.with_secant_seeds(older, newer);
        }
        let bisection = self
            .solver
            .bisection_max_iterations
            .unwrap_or(config.bisection_max_iterations);
        let open = self
            .solver
            .open_max_iterations
            .unwrap_or(config.open_max_iterations);
        config.with_iteration_caps(bisection, open)
    }

    /// Finite-difference step: command-line flag first, then the file, then
    /// the library default.
    pub fn fd_step(&self, flag: Option<f64>) -> f64 {
        flag.or(self.greeks.step).unwrap_or(DEFAULT_FD_STEP)
    }
}
