//! Composite quadrature rules.

use num_traits::Float;

/// Approximate `∫ₐᵇ f(x) dx` with the composite trapezoidal rule.
///
/// Partitions `[a, b]` into `n` equal subintervals of width `h = (b−a)/n` and
/// sums `h·(0.5·f(a) + f(x₁) + … + f(x_{n−1}) + 0.5·f(b))`. Exact for linear
/// integrands; error decays as `O(h²)` for twice-differentiable ones.
///
/// # Arguments
///
/// * `f` - Integrand
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of subintervals
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::trapezoid;
///
/// // ∫₀¹ x dx = 0.5, exact for a linear integrand
/// let integral = trapezoid(|x: f64| x, 0.0, 1.0, 4);
/// assert!((integral - 0.5).abs() < 1e-12);
/// ```
pub fn trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    assert!(n > 0, "n must be at least 1");

    let h = (b - a) / T::from(n).unwrap();
    let half = T::from(0.5).unwrap();

    let mut sum = half * (f(a) + f(b));
    for i in 1..n {
        let x = a + T::from(i).unwrap() * h;
        sum = sum + f(x);
    }
    h * sum
}

/// Approximate `∫ₐᵇ f(x) dx` with the composite Simpson's rule.
///
/// Same partition as [`trapezoid`]; interior points are weighted `4` at odd
/// indices and `2` at even indices, endpoints `1`, and the sum is scaled by
/// `h/3`. Exact for cubics when `n` is even.
///
/// The classical error bound assumes an even `n`. An odd `n` is accepted but
/// the final subinterval is then mis-weighted and the result degrades to
/// roughly first-order accuracy.
///
/// # Arguments
///
/// * `f` - Integrand
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of subintervals, even for full accuracy
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::simpson;
///
/// // ∫₀¹ x³ dx = 0.25, exact for a cubic with even n
/// let integral = simpson(|x: f64| x * x * x, 0.0, 1.0, 2);
/// assert!((integral - 0.25).abs() < 1e-12);
/// ```
pub fn simpson<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    assert!(n > 0, "n must be at least 1");

    let h = (b - a) / T::from(n).unwrap();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + T::from(i).unwrap() * h;
        let weight = if i % 2 == 1 { four } else { two };
        sum = sum + weight * f(x);
    }
    sum * h / three
}

/// Approximate `∫ₐᵇ∫꜀ᵈ f(x,y) dy dx` over a rectangle with a per-cell
/// 9-point stencil.
///
/// The rectangle `[a,b] × [c,d]` is gridded into `nx × ny` cells of size
/// `dx × dy`. Within each cell the integrand is sampled at the four corners
/// (weight `1`), the four edge midpoints (weight `2`) and the centre
/// (weight `4`), and the weighted sum is scaled by `(dx·dy)/16`. This is the
/// tensor product of the once-refined trapezoidal rule in each direction, so
/// it is exact for bilinear integrands on any grid.
///
/// # Arguments
///
/// * `f` - Bivariate integrand
/// * `a` - Lower `x` bound
/// * `b` - Upper `x` bound
/// * `nx` - Number of cells along `x`
/// * `c` - Lower `y` bound
/// * `d` - Upper `y` bound
/// * `ny` - Number of cells along `y`
///
/// # Panics
///
/// Panics if `nx` or `ny` is zero.
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::trapezoid_2d;
///
/// // ∫₀¹∫₀³ x·y dy dx = 2.25, exact for a bilinear integrand
/// let integral = trapezoid_2d(|x: f64, y: f64| x * y, 0.0, 1.0, 1, 0.0, 3.0, 1);
/// assert!((integral - 2.25).abs() < 1e-12);
/// ```
pub fn trapezoid_2d<T, F>(f: F, a: T, b: T, nx: usize, c: T, d: T, ny: usize) -> T
where
    T: Float,
    F: Fn(T, T) -> T,
{
    assert!(nx > 0, "nx must be at least 1");
    assert!(ny > 0, "ny must be at least 1");

    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let sixteen = T::from(16.0).unwrap();

    let dx = (b - a) / T::from(nx).unwrap();
    let dy = (d - c) / T::from(ny).unwrap();
    let cell_scale = dx * dy / sixteen;

    let mut total = T::zero();
    for i in 0..nx {
        let x0 = a + T::from(i).unwrap() * dx;
        let x1 = x0 + dx;
        let xm = x0 + dx / two;

        for j in 0..ny {
            let y0 = c + T::from(j).unwrap() * dy;
            let y1 = y0 + dy;
            let ym = y0 + dy / two;

            let corners = f(x0, y0) + f(x1, y0) + f(x0, y1) + f(x1, y1);
            let edges = f(xm, y0) + f(xm, y1) + f(x0, ym) + f(x1, ym);
            let centre = f(xm, ym);

            total = total + cell_scale * (corners + two * edges + four * centre);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Trapezoidal Rule Tests
    // ========================================

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let integral = trapezoid(|x: f64| 2.0 * x + 1.0, 0.0, 1.0, 3);
        assert_relative_eq!(integral, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_quadratic() {
        // ∫₀¹ x² dx = 1/3, O(h²) error
        let integral = trapezoid(|x: f64| x * x, 0.0, 1.0, 100);
        assert_relative_eq!(integral, 1.0 / 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_trapezoid_sine_half_period() {
        // ∫₀^π sin x dx = 2
        let integral = trapezoid(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1000);
        assert_relative_eq!(integral, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_trapezoid_reversed_bounds_negates() {
        let forward = trapezoid(|x: f64| x * x, 0.0, 1.0, 100);
        let backward = trapezoid(|x: f64| x * x, 1.0, 0.0, 100);
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "n must be at least 1")]
    fn test_trapezoid_zero_intervals_panics() {
        trapezoid(|x: f64| x, 0.0, 1.0, 0);
    }

    // ========================================
    // Simpson's Rule Tests
    // ========================================

    #[test]
    fn test_simpson_exact_for_cubic() {
        let integral = simpson(|x: f64| x * x * x, 0.0, 1.0, 2);
        assert_relative_eq!(integral, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sine_half_period() {
        // ∫₀^π sin x dx = 2, O(h⁴) error
        let integral = simpson(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100);
        assert_relative_eq!(integral, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_simpson_beats_trapezoid_on_smooth_integrand() {
        let exact = 1.0 - (-1.0_f64).exp();
        let t = trapezoid(|x: f64| (-x).exp(), 0.0, 1.0, 50);
        let s = simpson(|x: f64| (-x).exp(), 0.0, 1.0, 50);
        assert!((s - exact).abs() < (t - exact).abs());
    }

    #[test]
    fn test_simpson_odd_n_is_degraded_but_finite() {
        // Odd n mis-weights the last subinterval; the result is usable only
        // as a rough value.
        let integral = simpson(|x: f64| x * x, 0.0, 1.0, 3);
        assert!(integral.is_finite());
        assert!((integral - 1.0 / 3.0).abs() < 0.1);
    }

    #[test]
    #[should_panic(expected = "n must be at least 1")]
    fn test_simpson_zero_intervals_panics() {
        simpson(|x: f64| x, 0.0, 1.0, 0);
    }

    // ========================================
    // Two-Dimensional Rule Tests
    // ========================================

    #[test]
    fn test_trapezoid_2d_exact_for_bilinear() {
        // Single cell already integrates x·y exactly.
        let integral = trapezoid_2d(|x: f64, y: f64| x * y, 0.0, 1.0, 1, 0.0, 3.0, 1);
        assert_relative_eq!(integral, 2.25, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_2d_bilinear_any_grid() {
        let integral = trapezoid_2d(|x: f64, y: f64| x * y, 0.0, 1.0, 7, 0.0, 3.0, 5);
        assert_relative_eq!(integral, 2.25, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_2d_exponential() {
        // ∫₀¹∫₀³ e^(x+y) dy dx = (e−1)(e³−1)
        let exact = (1.0_f64.exp() - 1.0) * (3.0_f64.exp() - 1.0);
        let integral = trapezoid_2d(|x: f64, y: f64| (x + y).exp(), 0.0, 1.0, 50, 0.0, 3.0, 50);
        assert_relative_eq!(integral, exact, epsilon = 1e-2);
    }

    #[test]
    fn test_trapezoid_2d_refinement_tightens() {
        let exact = (1.0_f64.exp() - 1.0) * (3.0_f64.exp() - 1.0);
        let coarse = trapezoid_2d(|x: f64, y: f64| (x + y).exp(), 0.0, 1.0, 5, 0.0, 3.0, 5);
        let fine = trapezoid_2d(|x: f64, y: f64| (x + y).exp(), 0.0, 1.0, 40, 0.0, 3.0, 40);
        assert!((fine - exact).abs() < (coarse - exact).abs());
    }

    #[test]
    #[should_panic(expected = "nx must be at least 1")]
    fn test_trapezoid_2d_zero_x_cells_panics() {
        trapezoid_2d(|x: f64, y: f64| x + y, 0.0, 1.0, 0, 0.0, 1.0, 1);
    }

    #[test]
    #[should_panic(expected = "ny must be at least 1")]
    fn test_trapezoid_2d_zero_y_cells_panics() {
        trapezoid_2d(|x: f64, y: f64| x + y, 0.0, 1.0, 1, 0.0, 1.0, 0);
    }

    // ========================================
    // Precision Tests
    // ========================================

    #[test]
    fn test_rules_with_f32() {
        let t: f32 = trapezoid(|x: f32| x * x, 0.0, 1.0, 64);
        let s: f32 = simpson(|x: f32| x * x, 0.0, 1.0, 64);
        assert!((t - 1.0 / 3.0).abs() < 1e-3);
        assert!((s - 1.0 / 3.0).abs() < 1e-4);
    }
}
