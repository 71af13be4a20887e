//! # helios-io
//!
//! Persistence for the Helios pipeline: Parquet codecs for hourly and
//! daily series and anomaly signatures, plus JSON event lists. Bridges
//! on-disk files into the in-memory series and signature types.

mod batches;
mod dates;
mod error;
mod events_json;
mod series_parquet;
mod signature_parquet;

pub use dates::parse_date;
pub use error::IoError;
pub use events_json::{EventRecord, read_events, write_events};
pub use series_parquet::{SeriesMeta, read_daily, read_hourly, write_daily, write_hourly};
pub use signature_parquet::{read_signature, write_signature};
