use std::io::BufRead;

use serde::Serialize;

const KIB_PER_MIB: u64 = 1024;

/// Memory totals from `/proc/meminfo`, in kB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub total_kb: u64,
    pub available_kb: u64,
}

impl MemorySnapshot {
    pub fn used_kb(&self) -> u64 {
        self.total_kb.saturating_sub(self.available_kb)
    }

    pub fn used_mb(&self) -> u64 {
        self.used_kb() / KIB_PER_MIB
    }

    pub fn total_mb(&self) -> u64 {
        self.total_kb / KIB_PER_MIB
    }

    /// Used share of total memory in `[0, 1]`.
    pub fn used_ratio(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        (self.used_kb() as f64 / self.total_kb as f64).clamp(0.0, 1.0)
    }
}

/// Scans `key: value kB` lines until both `MemTotal:` and `MemAvailable:` are
/// found. Returns `None` if the input ends before both were seen.
pub fn parse_meminfo(reader: impl BufRead) -> Option<MemorySnapshot> {
    let mut total = None;
    let mut available = None;

    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let mut parts = line.split_whitespace();
        let (Some(label), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        match label {
            "MemTotal:" => total = value.parse().ok(),
            "MemAvailable:" => available = value.parse().ok(),
            _ => continue,
        }
        if total.is_some() && available.is_some() {
            break;
        }
    }

    Some(MemorySnapshot {
        total_kb: total?,
        available_kb: available?,
    })
}
