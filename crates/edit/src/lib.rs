//! # helios-edit
//!
//! Series editors for the Helios heatwave pipeline:
//!
//! - [`AnomalySignature`] — the transferable hour-by-hour "shape" of an
//!   observed heatwave, extracted against the diurnal median profile.
//! - [`remove_events`] — overwrite event hours with a climatologically
//!   typical replacement, chosen per variable through [`Replacement`].
//! - [`inject_signature`] — overlay a scaled, tiled signature onto a
//!   heatwave-free baseline window.
//!
//! All editors modify the series in place and leave it untouched when
//! they fail, so a pipeline halt never ships a half-edited dataset.

mod error;
mod inject;
mod remove;
mod signature;

pub use error::EditError;
pub use inject::inject_signature;
pub use remove::{Replacement, remove_events};
pub use signature::AnomalySignature;
