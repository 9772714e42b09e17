pub mod confidence;
pub mod derive;
pub mod geo;
pub mod location;
pub mod stats;
pub mod status;

pub use confidence::{derive_confidence, Confidence};
pub use derive::derive_status;
pub use location::{Location, LocationWithReports, Report};
pub use status::Status;
