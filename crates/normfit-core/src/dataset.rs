//! Input containers and their normalization to an observation-major matrix.
//!
//! Every accepted shape resolves to the same canonical layout before any
//! statistics run: an `(n_obs, n_var)` matrix of `f64` plus one label per
//! variable. The resolution happens exactly once, at the boundary, through
//! the [`Dataset`] sum type; the calculation downstream is monomorphic.

use std::fmt;

use ndarray::{Array1, Array2, Axis};

use crate::error::{NormFitError, Result};

/// Identifier for one variable (one output column).
///
/// Labels default to positional indices; labeled tables and named series
/// override them with their own names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Index(usize),
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Index(i) => write!(f, "{}", i),
            Label::Name(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Label {
    fn from(index: usize) -> Self {
        Label::Index(index)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

/// Positional labels `0..n`, the default for unlabeled input.
pub(crate) fn positional_labels(n: usize) -> Vec<Label> {
    (0..n).map(Label::Index).collect()
}

/// An ordered set of labeled columns over observation-major data.
///
/// Rows are observations, columns are variables. Column labels carry
/// through to the estimation result unchanged and in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    labels: Vec<Label>,
    data: Array2<f64>,
}

impl Table {
    /// Build a table from an observation-major matrix and one label per column.
    pub fn new(labels: Vec<Label>, data: Array2<f64>) -> Result<Self> {
        if labels.len() != data.ncols() {
            return Err(NormFitError::DimensionMismatch(format!(
                "{} labels for {} columns",
                labels.len(),
                data.ncols()
            )));
        }
        Ok(Self { labels, data })
    }

    /// Build a table from `(label, observations)` pairs, one pair per variable.
    ///
    /// All columns must have the same length.
    pub fn from_columns<L: Into<Label>>(columns: Vec<(L, Vec<f64>)>) -> Result<Self> {
        let mut labels = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (label, column) in columns {
            labels.push(label.into());
            values.push(column);
        }
        let data = columns_to_matrix(&values)?;
        Ok(Self { labels, data })
    }

    /// Column labels, in stored order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The underlying observation-major matrix.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }
}

/// One of the accepted input shapes.
///
/// The four variants cover the containers the estimator accepts. Each
/// carries its own rule for producing the canonical observation-major
/// matrix and label sequence; see [`Dataset::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// Observation-major numeric matrix; variables are labeled positionally.
    Matrix(Array2<f64>),
    /// Labeled table; its column labels carry through to the result.
    Table(Table),
    /// A single variable's observations, optionally named.
    Series {
        name: Option<String>,
        values: Array1<f64>,
    },
    /// Variable-major list of sequences (outer index = variable,
    /// inner index = observation).
    Columns(Vec<Vec<f64>>),
}

impl Dataset {
    /// An unnamed single-variable dataset, labeled `0`.
    pub fn series(values: impl Into<Array1<f64>>) -> Self {
        Dataset::Series {
            name: None,
            values: values.into(),
        }
    }

    /// A named single-variable dataset; the name becomes the column label.
    pub fn named_series(name: impl Into<String>, values: impl Into<Array1<f64>>) -> Self {
        Dataset::Series {
            name: Some(name.into()),
            values: values.into(),
        }
    }

    /// Resolve this input to the canonical `(n_obs, n_var)` layout.
    ///
    /// Returns the observation-major matrix together with one label per
    /// column:
    ///
    /// - `Matrix` needs no conversion and keeps positional labels.
    /// - `Table` keeps its own labels and data as stored.
    /// - `Series` becomes a one-column matrix, labeled by its name when it
    ///   has one and `0` otherwise.
    /// - `Columns` is transposed from variable-major to observation-major
    ///   and labeled positionally. Sequences of unequal length are a
    ///   [`NormFitError::RaggedInput`] failure.
    pub fn normalize(self) -> Result<(Array2<f64>, Vec<Label>)> {
        match self {
            Dataset::Matrix(data) => {
                let labels = positional_labels(data.ncols());
                Ok((data, labels))
            }
            Dataset::Table(table) => Ok((table.data, table.labels)),
            Dataset::Series { name, values } => {
                let label = match name {
                    Some(name) => Label::Name(name),
                    None => Label::Index(0),
                };
                // (n_obs,) -> (n_obs, 1)
                let data = values.insert_axis(Axis(1));
                Ok((data, vec![label]))
            }
            Dataset::Columns(columns) => {
                let labels = positional_labels(columns.len());
                let data = columns_to_matrix(&columns)?;
                Ok((data, labels))
            }
        }
    }
}

impl From<Array2<f64>> for Dataset {
    fn from(data: Array2<f64>) -> Self {
        Dataset::Matrix(data)
    }
}

impl From<Table> for Dataset {
    fn from(table: Table) -> Self {
        Dataset::Table(table)
    }
}

impl From<Array1<f64>> for Dataset {
    fn from(values: Array1<f64>) -> Self {
        Dataset::series(values)
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Dataset::series(values)
    }
}

impl From<Vec<Vec<f64>>> for Dataset {
    fn from(columns: Vec<Vec<f64>>) -> Self {
        Dataset::Columns(columns)
    }
}

/// Transpose variable-major columns into an observation-major matrix.
fn columns_to_matrix(columns: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n_var = columns.len();
    if n_var == 0 {
        return Err(NormFitError::EmptyInput("no variables".to_string()));
    }

    let n_obs = columns[0].len();
    for (j, column) in columns.iter().enumerate() {
        if column.len() != n_obs {
            return Err(NormFitError::RaggedInput(format!(
                "variable {} has {} observations but variable 0 has {}",
                j,
                column.len(),
                n_obs
            )));
        }
    }

    let mut matrix = Array2::zeros((n_obs, n_var));
    for (j, column) in columns.iter().enumerate() {
        for (i, value) in column.iter().enumerate() {
            matrix[[i, j]] = *value;
        }
    }
    Ok(matrix)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_label_display() {
        assert_eq!(Label::from(3).to_string(), "3");
        assert_eq!(Label::from("height").to_string(), "height");
    }

    #[test]
    fn test_matrix_keeps_positional_labels() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let (matrix, labels) = Dataset::from(data.clone()).normalize().unwrap();
        assert_eq!(matrix, data);
        assert_eq!(labels, vec![Label::Index(0), Label::Index(1)]);
    }

    #[test]
    fn test_table_keeps_own_labels_in_order() {
        let table = Table::from_columns(vec![
            ("length", vec![1.0, 2.0, 3.0, 4.0]),
            ("width", vec![5.0, 6.0, 7.0, 8.0]),
        ])
        .unwrap();
        let (matrix, labels) = Dataset::from(table).normalize().unwrap();
        assert_eq!(labels, vec![Label::from("length"), Label::from("width")]);
        // from_columns transposes to observation-major
        assert_eq!(matrix, array![[1.0, 5.0], [2.0, 6.0], [3.0, 7.0], [4.0, 8.0]]);
    }

    #[test]
    fn test_table_numeric_labels() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let table = Table::new(vec![Label::from(10), Label::from(20)], data).unwrap();
        let (_, labels) = Dataset::from(table).normalize().unwrap();
        assert_eq!(labels, vec![Label::Index(10), Label::Index(20)]);
    }

    #[test]
    fn test_table_label_count_mismatch() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let result = Table::new(vec![Label::from("only")], data);
        assert!(matches!(
            result.unwrap_err(),
            NormFitError::DimensionMismatch(_)
        ));
    }

    #[test]
    fn test_named_series_is_one_labeled_column() {
        let (matrix, labels) = Dataset::named_series("height", vec![1.7, 1.8, 1.6])
            .normalize()
            .unwrap();
        assert_eq!(matrix.dim(), (3, 1));
        assert_eq!(labels, vec![Label::from("height")]);
    }

    #[test]
    fn test_unnamed_series_labeled_zero() {
        let (matrix, labels) = Dataset::from(vec![1.0, 2.0, 3.0]).normalize().unwrap();
        assert_eq!(matrix.dim(), (3, 1));
        assert_eq!(labels, vec![Label::Index(0)]);
        assert_eq!(matrix[[2, 0]], 3.0);
    }

    #[test]
    fn test_columns_transposed_to_observation_major() {
        let columns = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let (matrix, labels) = Dataset::from(columns).normalize().unwrap();
        assert_eq!(labels, vec![Label::Index(0), Label::Index(1)]);
        assert_eq!(matrix, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn test_ragged_columns_error() {
        let columns = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        let result = Dataset::from(columns).normalize();
        assert!(matches!(result.unwrap_err(), NormFitError::RaggedInput(_)));
    }

    #[test]
    fn test_ragged_table_columns_error() {
        let result = Table::from_columns(vec![
            ("a", vec![1.0, 2.0]),
            ("b", vec![1.0, 2.0, 3.0]),
        ]);
        assert!(matches!(result.unwrap_err(), NormFitError::RaggedInput(_)));
    }

    #[test]
    fn test_empty_columns_error() {
        let columns: Vec<Vec<f64>> = Vec::new();
        let result = Dataset::from(columns).normalize();
        assert!(matches!(result.unwrap_err(), NormFitError::EmptyInput(_)));
    }
}
