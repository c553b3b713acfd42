// =============================================================================
// NormFit Core Library
// =============================================================================
//
// This is the entry point for the Gaussian maximum-likelihood estimation
// library. Given observations of one or more variables, it estimates each
// variable's mean and variance under a normality assumption and returns
// them as a labeled two-row table.
//
// STRUCTURE:
// ----------
// The library is organized into modules, each handling a specific concern:
//
//   - dataset:  Accepted input shapes (matrix, labeled table, series,
//               variable-major columns) and their normalization to one
//               canonical observation-major layout
//   - estimate: The estimator itself and its result type
//   - error:    Error types used throughout the library
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
//   1. Add it to the appropriate module (or create a new one)
//   2. Write tests in that module (see existing tests for examples)
//   3. Re-export public items here so users can access them easily
//
// =============================================================================

// Declare our modules - each is in its own file
pub mod dataset;
pub mod error;
pub mod estimate;

// Re-export commonly used items at the top level for convenience
// Users can write `use normfit_core::fit_normal` instead of
// `use normfit_core::estimate::fit_normal`
pub use dataset::{Dataset, Label, Table};
pub use error::{NormFitError, Result};
pub use estimate::{fit_normal, MleParams, ROW_LABELS};
