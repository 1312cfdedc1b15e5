use serde::Serialize;

use super::cpu::CpuUsage;
use super::memory::MemorySnapshot;
use super::process::ProcessInfo;

/// Output of one sampling pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub cpu_usage: CpuUsage,
    pub memory: MemorySnapshot,
    /// Discovery order, not sorted.
    pub processes: Vec<ProcessInfo>,
}

impl Snapshot {
    /// CPU usage in percent, or `-1.0` when unavailable.
    pub fn cpu_usage_percent(&self) -> f32 {
        self.cpu_usage.as_percent()
    }
}
