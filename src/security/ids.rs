// src/security/ids.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const DEFAULT_ID_BYTES: usize = 12;

/// Generate an opaque row id using the OS RNG.
pub fn generate_id_default() -> String {
    let mut rng = OsRng;
    generate_id(&mut rng, DEFAULT_ID_BYTES)
}

/// Generate a URL-safe id from random bytes.
/// - Base64 URL-safe, no padding, so ids drop straight into paths.
/// - 12 bytes -> 16 chars.
pub fn generate_id<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}
