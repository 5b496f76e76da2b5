//! Measured quantities and the columns that group them.

use serde::{Deserialize, Serialize};

use crate::error::SitabError;
use crate::Result;

/// A nominal value paired with its (non-negative) uncertainty.
///
/// Both parts are finite and the uncertainty is never negative; the only way
/// to build one is through [`Measurement::new`] (or [`Measurement::exact`]),
/// which checks this once so formatting never has to.
///
/// Serialized as a `[nominal, uncertainty]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Measurement {
    nominal: f64,
    uncertainty: f64,
}

impl Measurement {
    /// Create a measurement, rejecting non-finite values and negative uncertainties.
    ///
    /// ```rust
    /// use sitablib::Measurement;
    ///
    /// let m = Measurement::new(2.2, 0.02023).unwrap();
    /// assert_eq!(m.nominal(), 2.2);
    /// assert!(Measurement::new(1.0, -0.1).is_err());
    /// assert!(Measurement::new(f64::NAN, 0.1).is_err());
    /// ```
    pub fn new(nominal: f64, uncertainty: f64) -> Result<Self> {
        let reason = if !nominal.is_finite() {
            Some("nominal value is not finite")
        } else if !uncertainty.is_finite() {
            Some("uncertainty is not finite")
        } else if uncertainty < 0.0 {
            Some("uncertainty is negative")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SitabError::InvalidMeasurement {
                nominal,
                uncertainty,
                reason,
            }),
            // -0.0 would otherwise slip through as "has an uncertainty"
            None => Ok(Self {
                nominal,
                uncertainty: uncertainty.abs(),
            }),
        }
    }

    /// A value with no uncertainty.
    pub fn exact(nominal: f64) -> Result<Self> {
        Self::new(nominal, 0.0)
    }

    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Whether the uncertainty is strictly positive.
    pub fn has_uncertainty(&self) -> bool {
        self.uncertainty > 0.0
    }
}

impl TryFrom<(f64, f64)> for Measurement {
    type Error = SitabError;

    fn try_from((nominal, uncertainty): (f64, f64)) -> Result<Self> {
        Self::new(nominal, uncertainty)
    }
}

impl From<Measurement> for (f64, f64) {
    fn from(m: Measurement) -> Self {
        (m.nominal, m.uncertainty)
    }
}

/// An ordered run of measurements sharing one display precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Values, top to bottom
    pub values: Vec<Measurement>,
    /// Digits after the decimal point for both nominal and uncertainty
    pub precision: usize,
}

impl Column {
    pub fn new(values: Vec<Measurement>, precision: usize) -> Self {
        Self { values, precision }
    }

    /// Build a column from raw `(nominal, uncertainty)` pairs.
    ///
    /// Fails on the first pair [`Measurement::new`] rejects.
    pub fn from_pairs<I>(pairs: I, precision: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let values = pairs
            .into_iter()
            .map(Measurement::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(values, precision))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
