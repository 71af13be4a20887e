//! Synthetic event injection: overlay a scaled anomaly signature.

use helios_calendar::HourStamp;
use helios_detect::Interval;
use helios_series::HourlySeries;
use tracing::{debug, instrument};

use crate::error::EditError;
use crate::signature::AnomalySignature;

/// Overlays `signature` onto `target` in place, scaled by `magnitude`.
///
/// The signature's deviation sequence is tiled end-to-end until it covers
/// the target's hour count, truncated to exactly that count, multiplied by
/// `magnitude`, and added elementwise to the baseline values inside the
/// target window. The series length and timestamp grid are unchanged;
/// only values inside the target interval move. With `magnitude` 0 the
/// series is returned as-is.
///
/// # Errors
///
/// Returns [`EditError::InvalidMagnitude`] if `magnitude` is not finite,
/// or [`EditError::IntervalOutsideSeries`] if the series does not cover
/// every hour of the target window. The series is not modified when an
/// error is returned.
///
/// A signature is finite by construction
/// ([`AnomalySignature::extract`] and
/// [`AnomalySignature::from_deviations`] both reject undefined values),
/// so no undefined deviation can reach the overlay.
#[instrument(skip(hourly, signature))]
pub fn inject_signature(
    hourly: &mut HourlySeries,
    target: Interval,
    signature: &AnomalySignature,
    magnitude: f64,
) -> Result<(), EditError> {
    if !magnitude.is_finite() {
        return Err(EditError::InvalidMagnitude { magnitude });
    }

    let first = HourStamp::start_of_day(target.start());
    let n_hours = target.hours() as usize;
    let first_idx = hourly
        .index_of(first)
        .filter(|&i| i + n_hours <= hourly.len())
        .ok_or(EditError::IntervalOutsideSeries { interval: target })?;

    let deviations = signature.deviations();
    let values = hourly.values_mut();
    for offset in 0..n_hours {
        values[first_idx + offset] += magnitude * deviations[offset % deviations.len()];
    }

    debug!(
        %target,
        source = %signature.source(),
        magnitude,
        n_hours,
        "signature injected"
    );
    Ok(())
}
