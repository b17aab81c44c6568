//! Path/routing-objective Mixture Index (PMI): a two-stage nested-logit model of route choice.
//!
//! An agent first picks the routing objective (time, distance, cost, ...) it weights most
//! heavily, then picks a path under that objective. The PMI of path `i` marginalizes the second
//! stage over the first:
//!
//! `PMI_i = Σ_m P_m * P_i|m`
//!
//! All inputs are read from caller-supplied [`RouteTables`]; nothing is cached between calls.
//!
//! The stage-one denominator of the first objective is an empty sum, so with the default
//! [`FirstObjective::Strict`] every PMI evaluation fails with [`Error::DivisionByZero`]. This is
//! the formula as written and is kept as the default; [`FirstObjective::Unit`] opts into `P_0 = 1`.

mod error;
pub mod num;
pub mod objective;
pub mod stage;
mod tables;

use std::cmp::Reverse;

pub use arrayvec::ArrayVec;
use ordered_float::NotNan;
use rand::distributions::WeightedError;
use rand::seq::SliceRandom as _;

pub use crate::error::{Denominator, Error, Result, Table};
pub use crate::num::Dispersion;
pub use crate::tables::RouteTables;
use crate::stage::{objective_probability, path_probability};

/// How the stage-one probability of the first routing objective is evaluated. Its denominator
/// sums over the objectives preceding it, of which there are none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstObjective {
    /// Evaluate the empty denominator as written. `P_0` fails with
    /// [`Denominator::ObjectiveSum`], so every PMI computation over at least one objective fails.
    #[default]
    Strict,
    /// Divide the first objective's inclusive sum by itself, giving `P_0 = 1`.
    Unit,
}

/// Evaluation settings for [`path_pmi`] and [`pmi`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of routing objectives. Also the number of path indices a PMI vector is computed
    /// for.
    pub objectives: usize,
    pub first_objective: FirstObjective,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            objectives: 5,
            first_objective: FirstObjective::Strict,
        }
    }
}

/// PMI of a single path: its conditional probability under each routing objective, weighted by
/// the probability of that objective.
pub fn path_pmi(tables: &RouteTables, config: &Config, path: usize) -> Result<f64> {
    let mut pmi = 0.0;
    for objective in 0..config.objectives {
        let p_objective =
            objective_probability(tables, objective, config.objectives, config.first_objective)?;
        let p_path = path_probability(tables, objective, config.objectives, path)?;
        pmi += p_objective * p_path;
    }
    Ok(pmi)
}

/// PMI of paths `0..config.objectives`, in path order.
#[tracing::instrument(level = "debug", skip_all, fields(objectives = config.objectives))]
pub fn pmi(tables: &RouteTables, config: &Config) -> Result<Vec<f64>> {
    let values = (0..config.objectives)
        .map(|path| path_pmi(tables, config, path))
        .collect::<Result<Vec<f64>>>()?;
    tracing::debug!(?values, "path mixture index");
    Ok(values)
}

/// Same as [`pmi`] with `OBJECTIVES` routing objectives known at compile time.
pub fn pmi_array<const OBJECTIVES: usize>(
    tables: &RouteTables,
    first_objective: FirstObjective,
) -> Result<ArrayVec<f64, OBJECTIVES>> {
    let config = Config {
        objectives: OBJECTIVES,
        first_objective,
    };
    (0..OBJECTIVES)
        .map(|path| path_pmi(tables, &config, path))
        .collect()
}

/// Path indices ordered from highest to lowest PMI. Paths with equal PMI keep their index order.
pub fn rank(pmi: &[f64]) -> Result<Vec<usize>> {
    let keys = pmi
        .iter()
        .map(|&value| NotNan::new(value).map(Reverse).map_err(Error::from))
        .collect::<Result<Vec<Reverse<NotNan<f64>>>>>()?;
    let mut order: Vec<usize> = (0..pmi.len()).collect();
    let mut sort = permutation::sort_by_key(&keys, |key| *key);
    sort.apply_slice_in_place(&mut order);
    Ok(order)
}

/// Assign a path at random, picked with probability proportional to its PMI value. Infinite or
/// NaN values are rejected as [`WeightedError::InvalidWeight`].
pub fn select<Rng>(rng: &mut Rng, pmi: &[f64]) -> Result<usize>
where
    Rng: rand::Rng,
{
    if pmi.iter().any(|value| !value.is_finite()) {
        return Err(Error::Sampling(WeightedError::InvalidWeight));
    }
    let paths: Vec<usize> = (0..pmi.len()).collect();
    paths
        .choose_weighted(rng, |&path| pmi[path])
        .copied()
        .map_err(Error::Sampling)
}
