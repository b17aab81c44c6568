//! The two nested-logit stages: picking a routing objective, then a path under that objective.

use crate::{
    num::ratio,
    objective::{attraction, dispersion, inclusive_sum},
    Denominator, FirstObjective, Result, RouteTables,
};

/// Stage one: probability of choosing `objective` as the dominant routing objective.
///
/// The numerator is the inclusive sum `S_m` of `objective`. The denominator sums `S_m^(1/theta_k)`
/// over the objectives `k < m` preceding it, reusing `S_m` for every `k`. The result is not
/// normalized across objectives.
///
/// The denominator of the first objective is an empty sum. Under [`FirstObjective::Strict`] this
/// fails with [`Denominator::ObjectiveSum`]; under [`FirstObjective::Unit`] the first objective
/// is divided by its own numerator instead.
pub fn objective_probability(
    tables: &RouteTables,
    objective: usize,
    objectives: usize,
    first_objective: FirstObjective,
) -> Result<f64> {
    let numerator = inclusive_sum(tables, objective, objectives)?;
    let denominator = match (objective, first_objective) {
        (0, FirstObjective::Unit) => numerator,
        _ => {
            let mut denominator = 0.0;
            for k in 0..objective {
                let exponent = dispersion(tables, k)?.exponent(k)?;
                denominator += numerator.powf(exponent);
            }
            denominator
        }
    };
    ratio(numerator, denominator, Denominator::ObjectiveSum(objective))
}

/// Stage two: probability of choosing `path` given `objective`, a proper distribution over the
/// `N[m]` paths considered under that objective.
pub fn path_probability(
    tables: &RouteTables,
    objective: usize,
    objectives: usize,
    path: usize,
) -> Result<f64> {
    let numerator = attraction(tables, path, objective, objectives)?;
    let denominator = inclusive_sum(tables, objective, objectives)?;
    ratio(numerator, denominator, Denominator::PathSum(objective))
}
