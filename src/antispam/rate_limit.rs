// src/antispam/rate_limit.rs
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Windows are pruned once the map grows past this many keys.
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after_secs: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// Fixed-window counter per key (usually an IP hash).
///
/// Lives in `AppState` and is shared by all workers.
#[derive(Debug)]
pub struct RateLimiter {
    window: TimeDelta,
    max_hits: u32,
    hits: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(window_secs: u64, max_hits: u32) -> Self {
        let window = i64::try_from(window_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or_else(|| TimeDelta::days(1));
        Self {
            window,
            max_hits,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Record a hit for `key` at `now` and say whether it may proceed.
    pub fn check(&self, key: &str, now: DateTime<Utc>) -> RateDecision {
        let mut hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);

        if hits.len() > PRUNE_THRESHOLD {
            hits.retain(|_, w| now <= w.reset_at);
        }

        match hits.get_mut(key) {
            Some(w) if now <= w.reset_at => {
                if w.count >= self.max_hits {
                    return RateDecision::Limited {
                        retry_after_secs: ceil_secs(w.reset_at - now),
                    };
                }
                w.count += 1;
                RateDecision::Allowed
            }
            _ => {
                hits.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                RateDecision::Allowed
            }
        }
    }
}

fn ceil_secs(d: TimeDelta) -> u64 {
    let ms = d.num_milliseconds().max(0);
    u64::try_from((ms + 999) / 1_000).unwrap_or(0)
}
