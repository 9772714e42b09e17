pub mod ids;
pub mod ip;

pub use ids::generate_id_default;
pub use ip::{client_ip, ip_hash, PeerAddr};
