//! CIE color-matching-function table loading and interpolation.
//!
//! The reference table is a whitespace-delimited text file with rows
//! `λ(nm) x̄ ȳ z̄`, wavelengths strictly increasing. It is loaded once at
//! startup and never mutated, so a `CmfTable` can be shared by reference
//! across any number of readers.

use std::path::Path;

use glam::DVec3;

use crate::spectral::spline::CubicSpline;

/// Errors from loading or parsing the reference table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read color-matching table: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("table needs at least 2 rows, got {0}")]
    NotEnoughRows(usize),
    #[error("wavelengths must be strictly increasing (line {0})")]
    NonIncreasingWavelength(usize),
}

/// The parsed CIE color-matching-function table. Immutable after load.
#[derive(Debug, Clone)]
pub struct CmfTable {
    wavelengths: Vec<f64>,
    /// Per-row (x̄, ȳ, z̄) values.
    values: Vec<DVec3>,
}

impl CmfTable {
    /// Load and parse the table from disk. A missing file is fatal — the
    /// pipeline cannot run without color-matching functions.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let text = std::fs::read_to_string(path)?;
        let table = Self::parse(&text)?;
        let (lo, hi) = table.wavelength_range();
        tracing::info!(
            "loaded CMF table from {}: {} rows, {lo:.0}–{hi:.0} nm",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Parse the table from text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut wavelengths = Vec::new();
        let mut values = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lineno = index + 1;

            let mut fields = line.split_whitespace().map(|f| {
                f.parse::<f64>().map_err(|e| TableError::Parse {
                    line: lineno,
                    reason: format!("bad number {f:?}: {e}"),
                })
            });
            let mut next = |name: &str| -> Result<f64, TableError> {
                fields.next().transpose()?.ok_or_else(|| TableError::Parse {
                    line: lineno,
                    reason: format!("missing {name} column"),
                })
            };

            let wavelength = next("wavelength")?;
            let row = DVec3::new(next("x̄")?, next("ȳ")?, next("z̄")?);

            if let Some(&prev) = wavelengths.last()
                && wavelength <= prev
            {
                return Err(TableError::NonIncreasingWavelength(lineno));
            }
            wavelengths.push(wavelength);
            values.push(row);
        }

        if wavelengths.len() < 2 {
            return Err(TableError::NotEnoughRows(wavelengths.len()));
        }
        Ok(Self {
            wavelengths,
            values,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Whether the table holds no rows (a parsed table never is).
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// The wavelength grid, strictly increasing, in nm.
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// The per-row (x̄, ȳ, z̄) values.
    pub fn values(&self) -> &[DVec3] {
        &self.values
    }

    /// The wavelength support `(min, max)` in nm.
    pub fn wavelength_range(&self) -> (f64, f64) {
        (self.wavelengths[0], self.wavelengths[self.wavelengths.len() - 1])
    }

    /// Global `(min, max)` over all three channels.
    ///
    /// Defines the amplitude range the normalized editor space maps onto,
    /// so spectrum and CMFs share a magnitude scale during integration.
    pub fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in &self.values {
            lo = lo.min(v.min_element());
            hi = hi.max(v.max_element());
        }
        (lo, hi)
    }

    /// Build cubic interpolants for the three channels.
    ///
    /// Cheap for typical table sizes (a few hundred rows); callers that
    /// re-evaluate per frame may cache the result.
    pub fn interpolants(&self) -> CmfInterpolants {
        let channel = |pick: fn(&DVec3) -> f64| {
            CubicSpline::new_unchecked(
                self.wavelengths.clone(),
                self.values.iter().map(pick).collect(),
            )
        };
        CmfInterpolants {
            x_bar: channel(|v| v.x),
            y_bar: channel(|v| v.y),
            z_bar: channel(|v| v.z),
        }
    }
}

/// Continuous interpolants x̄(λ), ȳ(λ), z̄(λ), each 0 outside support.
#[derive(Debug, Clone)]
pub struct CmfInterpolants {
    pub x_bar: CubicSpline,
    pub y_bar: CubicSpline,
    pub z_bar: CubicSpline,
}
