//! Anomaly signature extraction.

use helios_calendar::HourStamp;
use helios_climatology::DiurnalProfile;
use helios_detect::Interval;
use helios_series::HourlySeries;
use tracing::debug;

use crate::error::EditError;

/// The hour-by-hour deviation of an observed heatwave interval from the
/// diurnal median profile.
///
/// Deviations are anchored at elapsed-hour offset 0 = hour 0 of the source
/// interval's first day, and are guaranteed finite: extraction and
/// reconstruction both fail on any undefined value instead of carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalySignature {
    source: Interval,
    deviations: Vec<f64>,
}

impl AnomalySignature {
    /// Extracts the signature of `interval` from an observed hourly series.
    ///
    /// For every hour inside the interval, deviation = observed value minus
    /// the diurnal profile value at that hour's (day-of-year, hour) key.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IntervalOutsideSeries`] if the series does not
    /// cover every hour of the interval,
    /// [`EditError::Profile`] if the diurnal profile has no entry for one
    /// of the interval's hours, or
    /// [`EditError::UndefinedSignature`] if an observation is non-finite.
    pub fn extract(
        hourly: &HourlySeries,
        interval: Interval,
        diurnal: &DiurnalProfile,
    ) -> Result<Self, EditError> {
        let first = HourStamp::start_of_day(interval.start());
        let n_hours = interval.hours() as usize;
        let first_idx = hourly
            .index_of(first)
            .filter(|&i| i + n_hours <= hourly.len())
            .ok_or(EditError::IntervalOutsideSeries { interval })?;

        let mut deviations = Vec::with_capacity(n_hours);
        for offset in 0..n_hours {
            let stamp = first.plus_hours(offset as i64);
            let observed = hourly.values()[first_idx + offset];
            let typical = diurnal.get(stamp.date().doy(), stamp.hour())?;
            let deviation = observed - typical;
            if !deviation.is_finite() {
                return Err(EditError::UndefinedSignature { offset });
            }
            deviations.push(deviation);
        }

        debug!(%interval, n_hours, "anomaly signature extracted");
        Ok(Self {
            source: interval,
            deviations,
        })
    }

    /// Rebuilds a signature from stored deviations, e.g. read back from
    /// disk.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SignatureLengthMismatch`] if the deviation
    /// count does not equal the source interval's hour count, or
    /// [`EditError::UndefinedSignature`] if any deviation is non-finite.
    pub fn from_deviations(source: Interval, deviations: Vec<f64>) -> Result<Self, EditError> {
        let expected = source.hours() as usize;
        if deviations.len() != expected {
            return Err(EditError::SignatureLengthMismatch {
                expected,
                got: deviations.len(),
            });
        }
        if let Some(offset) = deviations.iter().position(|v| !v.is_finite()) {
            return Err(EditError::UndefinedSignature { offset });
        }
        Ok(Self { source, deviations })
    }

    /// Returns the interval the signature was extracted from.
    pub fn source(&self) -> Interval {
        self.source
    }

    /// Returns the deviations, one per elapsed hour from the source start.
    pub fn deviations(&self) -> &[f64] {
        &self.deviations
    }

    /// Returns the number of hours covered.
    pub fn len(&self) -> usize {
        self.deviations.len()
    }

    /// Returns `true` if the signature is empty (never, by construction).
    pub fn is_empty(&self) -> bool {
        self.deviations.is_empty()
    }
}
