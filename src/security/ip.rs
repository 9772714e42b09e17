// src/security/ip.rs
use astra::Request;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::net::SocketAddr;

type HmacSha256 = Hmac<Sha256>;

/// TCP peer address, stored as a request extension by the server loop.
#[derive(Debug, Clone, Copy)]
pub struct PeerAddr(pub SocketAddr);

/// Keyed hash of a client IP (hex HMAC-SHA256). The raw IP is never stored.
pub fn ip_hash(ip: &str, secret: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(ip.as_bytes());
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Best-effort client IP: first X-Forwarded-For hop, then X-Real-IP, then the
/// socket peer.
pub fn client_ip(req: &Request) -> String {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(first) = header("x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return first.to_string();
    }

    if let Some(real) = header("x-real-ip") {
        return real.to_string();
    }

    req.extensions()
        .get::<PeerAddr>()
        .map(|p| p.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
