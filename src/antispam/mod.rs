pub mod rate_limit;
pub mod sanitize;

pub use rate_limit::{RateDecision, RateLimiter};
pub use sanitize::NoteSanitizer;
