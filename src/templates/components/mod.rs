pub mod card;
pub mod error;
pub mod locations;
pub mod status;

pub use card::card;
pub use error::error_page;
pub use locations::location_table;
pub use status::{confidence_badge, format_time, status_badge};
