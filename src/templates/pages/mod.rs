pub mod forms;
pub mod group;
pub mod home;
pub mod machine;
pub mod stats;

pub use forms::{add_machine_page, contact_page, thanks_page};
pub use group::{city_page, retailer_page};
pub use home::home_page;
pub use machine::machine_page;
pub use stats::stats_page;
