use crate::{Error, Result, Table};

/// The caller-supplied inputs of the route choice model. Paths are indexed by `i`/`j` and routing
/// objectives by `m`. Every lookup is bounds-checked and reports the missing entry instead of
/// panicking.
#[derive(Clone, Debug, Default)]
pub struct RouteTables {
    /// `C[i][m]`: deviation rate of path `i` from the minimum normalized cost under objective `m`.
    pub deviation: Vec<Vec<f64>>,
    /// `x[j][m]`: normalized travel cost of path `j` under objective `m`.
    pub cost: Vec<Vec<f64>>,
    /// `u[m]`: mean normalized travel cost under objective `m`.
    pub mean_cost: Vec<f64>,
    /// `N[m]`: number of paths considered under objective `m`.
    pub path_count: Vec<usize>,
    /// `V[i]`: deterministic utility of path `i`, shared across objectives.
    pub utility: Vec<f64>,
}

impl RouteTables {
    pub fn deviation(&self, path: usize, objective: usize) -> Result<f64> {
        cell(&self.deviation, Table::Deviation, path, objective)
    }

    pub fn cost(&self, path: usize, objective: usize) -> Result<f64> {
        cell(&self.cost, Table::Cost, path, objective)
    }

    pub fn mean_cost(&self, objective: usize) -> Result<f64> {
        entry(&self.mean_cost, Table::MeanCost, objective)
    }

    pub fn path_count(&self, objective: usize) -> Result<usize> {
        entry(&self.path_count, Table::PathCount, objective)
    }

    pub fn utility(&self, path: usize) -> Result<f64> {
        entry(&self.utility, Table::Utility, path)
    }
}

fn entry<T: Copy>(values: &[T], table: Table, index: usize) -> Result<T> {
    values
        .get(index)
        .copied()
        .ok_or(Error::IndexOutOfRange { table, index })
}

fn cell(rows: &[Vec<f64>], table: Table, row: usize, column: usize) -> Result<f64> {
    let row = rows
        .get(row)
        .ok_or(Error::IndexOutOfRange { table, index: row })?;
    entry(row, table, column)
}
