//! Per-objective quantities shared by both stages of the route choice model.

use crate::{
    num::{ratio, Dispersion},
    Denominator, Result, RouteTables,
};

/// Dispersion `theta_m` of the normalized path costs around their mean under `objective`:
///
/// `theta_m = (1 / N[m]) * Σ_{j < N[m]} (x[j][m] - u[m])^2`
pub fn dispersion(tables: &RouteTables, objective: usize) -> Result<Dispersion> {
    let paths = tables.path_count(objective)?;
    let mean = tables.mean_cost(objective)?;
    let mut sum = 0.0;
    for path in 0..paths {
        sum += (tables.cost(path, objective)? - mean).powi(2);
    }
    let scale = ratio(1.0, paths as f64, Denominator::PathCount(objective))?;
    let theta = Dispersion::new(scale * sum).ok_or(crate::Error::NotANumber)?;
    tracing::trace!(objective, theta = theta.as_f64(), "dispersion");
    Ok(theta)
}

/// Share `alpha_i_m` of path `path`'s deviation under `objective`, relative to its deviation summed
/// over the first `objectives` routing objectives.
pub fn weight(
    tables: &RouteTables,
    path: usize,
    objective: usize,
    objectives: usize,
) -> Result<f64> {
    let deviation = tables.deviation(path, objective)?;
    let mut total = 0.0;
    for k in 0..objectives {
        total += tables.deviation(path, k)?;
    }
    ratio(deviation, total, Denominator::DeviationSum(path))
}

/// Scaled attraction `(alpha_i_m * exp(V[i]))^(1 / theta_m)` of `path` under `objective`.
pub fn attraction(
    tables: &RouteTables,
    path: usize,
    objective: usize,
    objectives: usize,
) -> Result<f64> {
    let alpha = weight(tables, path, objective, objectives)?;
    let exponent = dispersion(tables, objective)?.exponent(objective)?;
    Ok(scale(alpha, tables.utility(path)?, exponent))
}

/// Inclusive sum `S_m`: the scaled attraction of every path considered under `objective`. Both
/// stages divide by it (stage two directly, stage one raised to other objectives' exponents).
pub fn inclusive_sum(tables: &RouteTables, objective: usize, objectives: usize) -> Result<f64> {
    let paths = tables.path_count(objective)?;
    if paths == 0 {
        return Ok(0.0);
    }
    let exponent = dispersion(tables, objective)?.exponent(objective)?;
    let mut sum = 0.0;
    for path in 0..paths {
        let alpha = weight(tables, path, objective, objectives)?;
        sum += scale(alpha, tables.utility(path)?, exponent);
    }
    Ok(sum)
}

fn scale(alpha: f64, utility: f64, exponent: f64) -> f64 {
    (alpha * utility.exp()).powf(exponent)
}
