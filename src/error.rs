use ordered_float::FloatIsNan;
use rand::distributions::WeightedError;

/// Errors raised while evaluating the route choice model. None of them are recovered from inside
/// this crate; they reach the caller of the top-level entry point unmodified.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A denominator evaluated to exactly zero.
    #[error("division by zero: {0} is zero")]
    DivisionByZero(Denominator),
    /// A table has no entry for the requested index. For two-dimensional tables `index` is the
    /// row or column that was missing.
    #[error("{table} table has no entry at index {index}")]
    IndexOutOfRange { table: Table, index: usize },
    /// A value that must be ordered (a dispersion or a PMI value) was NaN.
    #[error("value is NaN")]
    NotANumber,
    /// PMI values could not be used as sampling weights.
    #[error("cannot sample a path: {0}")]
    Sampling(WeightedError),
}

impl From<FloatIsNan> for Error {
    fn from(_: FloatIsNan) -> Self {
        Self::NotANumber
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Identifies which denominator of the model was zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denominator {
    /// `N[m]` in the dispersion of objective `m`.
    PathCount(usize),
    /// `Σ_k C[i][k]` in the weight of path `i`.
    DeviationSum(usize),
    /// `theta_m` used as the exponent `1 / theta_m`.
    Dispersion(usize),
    /// The stage-one denominator of objective `m`.
    ObjectiveSum(usize),
    /// The stage-two denominator (inclusive sum) of objective `m`.
    PathSum(usize),
}

impl std::fmt::Display for Denominator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PathCount(m) => write!(f, "path count of objective {m}"),
            Self::DeviationSum(i) => write!(f, "deviation sum of path {i}"),
            Self::Dispersion(m) => write!(f, "dispersion of objective {m}"),
            Self::ObjectiveSum(m) => write!(f, "stage-one denominator of objective {m}"),
            Self::PathSum(m) => write!(f, "stage-two denominator of objective {m}"),
        }
    }
}

/// The caller-supplied tables, named for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Deviation,
    Cost,
    MeanCost,
    PathCount,
    Utility,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Deviation => "deviation",
            Self::Cost => "cost",
            Self::MeanCost => "mean cost",
            Self::PathCount => "path count",
            Self::Utility => "utility",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::{Denominator, Error, Table};

    #[test]
    fn messages_name_the_failing_quantity() {
        let err = Error::DivisionByZero(Denominator::ObjectiveSum(0));
        assert_eq!(
            err.to_string(),
            "division by zero: stage-one denominator of objective 0 is zero"
        );
        let err = Error::IndexOutOfRange {
            table: Table::MeanCost,
            index: 7,
        };
        assert_eq!(err.to_string(), "mean cost table has no entry at index 7");
    }
}
