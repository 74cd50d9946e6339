// NGFW Simulator - Session Ports
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Injected capabilities keeping the session controller deterministic
//! under test. Production wiring supplies the real clock and RNG.

use chrono::{DateTime, Local};
use rand::Rng;

/// Wall-clock source for log timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The system clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Source of simulated session volume for allowed traffic.
pub trait ByteSource {
    fn traffic_bytes(&mut self) -> u64;
}

/// Random byte counts in the range the monitor view shows for a short
/// session.
#[derive(Debug, Default)]
pub struct RandomBytes;

impl ByteSource for RandomBytes {
    fn traffic_bytes(&mut self) -> u64 {
        rand::thread_rng().gen_range(500..5500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_stay_in_range() {
        let mut source = RandomBytes;
        for _ in 0..100 {
            let bytes = source.traffic_bytes();
            assert!((500..5500).contains(&bytes));
        }
    }
}
