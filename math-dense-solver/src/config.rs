//! JSON configuration for linear systems

use crate::determinant::DeterminantMethod;
use crate::dispatch::{SolveMethod, SolverConfig, SymmetryCheck};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error types for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid system: {0}")]
    Invalid(String),
}

/// A linear system `Ax = b` loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSystemConfig {
    /// Optional label used in reports
    #[serde(default)]
    pub name: Option<String>,
    /// Coefficient matrix, row by row
    pub matrix: Vec<Vec<f64>>,
    /// Right-hand side
    pub rhs: Vec<f64>,
    /// Solver settings
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Solver settings section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Relative tolerance for the symmetry test (exact comparison when absent)
    #[serde(default)]
    pub symmetry_tolerance: Option<f64>,
    /// Determinant algorithm for the positive-definiteness probe
    #[serde(default)]
    pub determinant: DeterminantMethod,
    /// Force a factorization instead of probing
    #[serde(default)]
    pub method: Option<SolveMethod>,
}

impl SolverSettings {
    /// Convert to a dispatcher configuration
    pub fn to_solver_config(&self) -> Result<SolverConfig<f64>, ConfigError> {
        let symmetry = match self.symmetry_tolerance {
            None => SymmetryCheck::Exact,
            Some(tol) if tol.is_finite() && tol >= 0.0 => SymmetryCheck::Tolerance(tol),
            Some(tol) => {
                return Err(ConfigError::Invalid(format!(
                    "symmetry_tolerance must be a non-negative finite number, got {}",
                    tol
                )));
            }
        };
        Ok(SolverConfig {
            symmetry,
            determinant: self.determinant,
            force_method: self.method,
        })
    }
}

impl LinearSystemConfig {
    /// Create a system with default solver settings
    pub fn new(name: &str, matrix: Vec<Vec<f64>>, rhs: Vec<f64>) -> Self {
        Self {
            name: Some(name.to_string()),
            matrix,
            rhs,
            solver: SolverSettings::default(),
        }
    }

    /// Load a system from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a system from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the system to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Label for reports
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed system")
    }

    /// Build `(A, b)`. Rows must all have the same length as the matrix has rows.
    pub fn to_system(&self) -> Result<(Array2<f64>, Array1<f64>), ConfigError> {
        let n = self.matrix.len();
        if n == 0 {
            return Err(ConfigError::Invalid("matrix has no rows".to_string()));
        }
        if let Some((i, row)) = self.matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(ConfigError::Invalid(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        if self.rhs.len() != n {
            return Err(ConfigError::Invalid(format!(
                "rhs has {} entries, expected {}",
                self.rhs.len(),
                n
            )));
        }

        let flat: Vec<f64> = self.matrix.iter().flatten().copied().collect();
        let a = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok((a, Array1::from_vec(self.rhs.clone())))
    }

    /// The two reference systems, both symmetric positive definite
    pub fn scenarios() -> Vec<Self> {
        vec![
            Self::new(
                "equation set 1",
                vec![
                    vec![1.0, -1.0, 3.0, 2.0],
                    vec![-1.0, 5.0, -5.0, -2.0],
                    vec![3.0, -5.0, 19.0, 3.0],
                    vec![2.0, -2.0, 3.0, 21.0],
                ],
                vec![15.0, -35.0, 94.0, 1.0],
            ),
            Self::new(
                "equation set 2",
                vec![
                    vec![4.0, 2.0, 4.0, 0.0],
                    vec![2.0, 2.0, 3.0, 2.0],
                    vec![4.0, 3.0, 6.0, 3.0],
                    vec![0.0, 2.0, 3.0, 9.0],
                ],
                vec![20.0, 36.0, 60.0, 122.0],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let json = r#"{ "matrix": [[2.0, 1.0], [1.0, 2.0]], "rhs": [3.0, 3.0] }"#;
        let config = LinearSystemConfig::from_json_str(json).unwrap();

        assert_eq!(config.label(), "unnamed system");
        assert_eq!(config.solver.determinant, DeterminantMethod::Auto);
        assert!(config.solver.method.is_none());

        let (a, b) = config.to_system().unwrap();
        assert_eq!(a.dim(), (2, 2));
        assert_eq!(a[[1, 0]], 1.0);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_parse_solver_settings() {
        let json = r#"{
            "name": "forced",
            "matrix": [[1.0]],
            "rhs": [1.0],
            "solver": { "symmetry_tolerance": 1e-9, "determinant": "lu", "method": "doolittle" }
        }"#;
        let config = LinearSystemConfig::from_json_str(json).unwrap();
        let solver = config.solver.to_solver_config().unwrap();

        assert_eq!(solver.symmetry, SymmetryCheck::Tolerance(1e-9));
        assert_eq!(solver.determinant, DeterminantMethod::LuProduct);
        assert_eq!(solver.force_method, Some(SolveMethod::Doolittle));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let config = LinearSystemConfig::new(
            "ragged",
            vec![vec![1.0, 2.0], vec![3.0]],
            vec![1.0, 2.0],
        );
        assert!(matches!(config.to_system(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rhs_length_rejected() {
        let config = LinearSystemConfig::new("short rhs", vec![vec![1.0]], vec![1.0, 2.0]);
        assert!(matches!(config.to_system(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let settings = SolverSettings {
            symmetry_tolerance: Some(-1.0),
            ..SolverSettings::default()
        };
        assert!(settings.to_solver_config().is_err());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            LinearSystemConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join("math_audio_dense_solver_config_test.json");
        let original = &LinearSystemConfig::scenarios()[0];
        original.to_file(&path).unwrap();

        let loaded = LinearSystemConfig::from_file(&path).unwrap();
        assert_eq!(loaded.label(), "equation set 1");
        assert_eq!(loaded.matrix, original.matrix);
        let _ = std::fs::remove_file(&path);
    }
}
