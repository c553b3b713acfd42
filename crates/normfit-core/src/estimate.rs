// =============================================================================
// Gaussian Maximum-Likelihood Estimation
// =============================================================================
//
// Fitting a normal distribution by maximum likelihood has a closed form,
// so there is no iteration here. Per variable (column) v:
//
//     mean[v]     = Σ_o x[o][v] / n_obs
//     variance[v] = Σ_o (x[o][v] - mean[v])² / n_obs
//
// THE VARIANCE DIVISOR
// --------------------
// The divisor is n_obs, not n_obs - 1. That is the estimator that
// maximizes the Gaussian likelihood (the population form). It is biased
// low for small samples; callers who want the unbiased sample variance
// are outside the scope of this routine.
//
// Both reductions are vectorized over observations with ndarray axis
// sums; a single observation yields variance exactly 0 with no special
// casing.
//
// =============================================================================

use std::fmt;

use ndarray::{Array1, Array2, Axis};
use statrs::distribution::Normal;

use crate::dataset::{Dataset, Label};
use crate::error::{NormFitError, Result};

/// Row labels of the result table, in fixed order.
pub const ROW_LABELS: [&str; 2] = ["Mean", "Variance"];

// =============================================================================
// Result Structure
// =============================================================================

/// Per-variable Gaussian parameter estimates.
///
/// A labeled two-row table: row "Mean" holds the estimated means, row
/// "Variance" the estimated (biased) variances, with one column per input
/// variable. Columns keep the input's labels and order.
#[derive(Debug, Clone, PartialEq)]
pub struct MleParams {
    /// One label per variable, in input order.
    pub labels: Vec<Label>,
    /// Estimated mean per variable.
    pub mean: Array1<f64>,
    /// Estimated variance per variable (divisor n_obs).
    pub variance: Array1<f64>,
}

impl MleParams {
    /// Number of variables (columns).
    pub fn n_vars(&self) -> usize {
        self.labels.len()
    }

    /// Position of a label among the columns, if present.
    pub fn index_of(&self, label: &Label) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Estimated mean of the variable with this label.
    pub fn mean_of(&self, label: impl Into<Label>) -> Option<f64> {
        let label = label.into();
        self.index_of(&label).map(|v| self.mean[v])
    }

    /// Estimated variance of the variable with this label.
    pub fn variance_of(&self, label: impl Into<Label>) -> Option<f64> {
        let label = label.into();
        self.index_of(&label).map(|v| self.variance[v])
    }

    /// Estimated standard deviation per variable, the square root of the
    /// variance row.
    pub fn std_dev(&self) -> Array1<f64> {
        self.variance.mapv(f64::sqrt)
    }

    /// The table as a `(2, n_var)` matrix: row 0 means, row 1 variances.
    pub fn to_array(&self) -> Array2<f64> {
        let mut out = Array2::zeros((2, self.n_vars()));
        out.row_mut(0).assign(&self.mean);
        out.row_mut(1).assign(&self.variance);
        out
    }

    /// The fitted distribution for variable `v`.
    ///
    /// Fails with [`NormFitError::InvalidValue`] when `v` is out of range
    /// or the variable's scale is degenerate (zero or non-finite standard
    /// deviation), since no valid normal distribution exists there.
    pub fn normal(&self, v: usize) -> Result<Normal> {
        if v >= self.n_vars() {
            return Err(NormFitError::InvalidValue(format!(
                "variable index {} out of range for {} variables",
                v,
                self.n_vars()
            )));
        }
        let mean = self.mean[v];
        let std_dev = self.variance[v].sqrt();
        Normal::new(mean, std_dev).map_err(|_| {
            NormFitError::InvalidValue(format!(
                "no valid normal distribution for variable {} (mean {}, std dev {})",
                self.labels[v], mean, std_dev
            ))
        })
    }
}

impl fmt::Display for MleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .map(|label| label.to_string().len())
            .max()
            .unwrap_or(0)
            .max(12);
        write!(f, "{:<10}", "")?;
        for label in &self.labels {
            write!(f, " {:>width$}", label.to_string(), width = width)?;
        }
        writeln!(f)?;
        for (row_label, row) in ROW_LABELS.iter().zip([&self.mean, &self.variance]) {
            write!(f, "{:<10}", row_label)?;
            for value in row.iter() {
                write!(f, " {:>width$.6}", value, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Main Estimation Function
// =============================================================================

/// Estimate mean and variance per variable by maximum likelihood.
///
/// Accepts any of the shapes covered by [`Dataset`] (a plain matrix, a
/// labeled table, a single series, or a variable-major list of sequences),
/// normalizes it to observation-major layout, and computes the Gaussian
/// MLE column by column.
///
/// # Arguments
/// * `data` - Input observations; anything convertible into a [`Dataset`]
///
/// # Returns
/// * `Ok(MleParams)` - Two-row labeled result ("Mean", "Variance")
/// * `Err(NormFitError)` - Empty or non-rectangular input
///
/// # Example
/// ```
/// use normfit_core::{fit_normal, Table};
///
/// let table = Table::from_columns(vec![
///     ("length", vec![1.0, 2.0, 3.0, 4.0]),
///     ("width", vec![5.0, 6.0, 7.0, 8.0]),
/// ])?;
/// let params = fit_normal(table)?;
///
/// assert_eq!(params.mean_of("length"), Some(2.5));
/// assert_eq!(params.variance_of("width"), Some(1.25));
/// # Ok::<(), normfit_core::NormFitError>(())
/// ```
pub fn fit_normal(data: impl Into<Dataset>) -> Result<MleParams> {
    let (matrix, labels) = data.into().normalize()?;

    let n_obs = matrix.nrows();
    if n_obs == 0 {
        return Err(NormFitError::EmptyInput(
            "data has no observations".to_string(),
        ));
    }
    if matrix.ncols() == 0 {
        return Err(NormFitError::EmptyInput("data has no variables".to_string()));
    }

    let n = n_obs as f64;
    let mean = matrix.sum_axis(Axis(0)) / n;

    // Broadcast the mean row across observations, square, reduce
    let deviations = &matrix - &mean;
    let variance = deviations.mapv(|d| d * d).sum_axis(Axis(0)) / n;

    Ok(MleParams {
        labels,
        mean,
        variance,
    })
}

// =============================================================================
// Tests
// =============================================================================
