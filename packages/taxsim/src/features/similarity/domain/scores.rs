//! Score formulas
//!
//! Each function turns the quantities measured on the best common ancestor into a
//! similarity. Inputs are plain numbers so the formulas can be checked without a graph.

use crate::shared::models::Cost;

/// Clamp a score into `[0, 1]`; NaN collapses to 0
pub fn clamp_unit(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// `d_tax`: `1 - path_cost / root_sum`
///
/// `path_cost` is `δ(c, x) + δ(c, y)` through the best common ancestor, `root_sum`
/// is `ρ(x) + ρ(y)`. Two terms both at the root are identical: a zero `root_sum`
/// scores 1.
pub fn taxonomic(path_cost: Cost, root_sum: Cost) -> f64 {
    if root_sum == 0 {
        return 1.0;
    }
    clamp_unit(1.0 - path_cost as f64 / root_sum as f64)
}

/// `d^str_tax`: `1 - depth_gap / (2 * max_depth)`
///
/// `depth_gap` is `(D(x) - D(c)) + (D(y) - D(c))`. A taxonomy whose annotated terms all
/// sit at the root (`max_depth == 0`) scores 1.
pub fn structural(depth_gap: u64, max_depth: u32) -> f64 {
    if max_depth == 0 {
        return 1.0;
    }
    clamp_unit(1.0 - depth_gap as f64 / (2.0 * f64::from(max_depth)))
}

/// `d_ps`: `weight / (weight + path_cost)`, with `0 / 0` read as 1
pub fn proportional(weight: Cost, path_cost: Cost) -> f64 {
    let denominator = weight.saturating_add(path_cost);
    if denominator == 0 {
        return 1.0;
    }
    clamp_unit(weight as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.25), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.4), 0.4);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn test_taxonomic() {
        assert_eq!(taxonomic(0, 0), 1.0);
        assert_eq!(taxonomic(2, 2), 0.0);
        assert!((taxonomic(1, 3) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(taxonomic(5, 2), 0.0);
    }

    #[test]
    fn test_structural() {
        assert_eq!(structural(0, 0), 1.0);
        assert_eq!(structural(2, 2), 0.5);
        assert_eq!(structural(1, 2), 0.75);
        assert_eq!(structural(4, 2), 0.0);
    }

    #[test]
    fn test_proportional() {
        assert_eq!(proportional(0, 0), 1.0);
        assert_eq!(proportional(0, 2), 0.0);
        assert_eq!(proportional(1, 1), 0.5);
        assert_eq!(proportional(3, 0), 1.0);
    }
}
