use std::io;
use std::path::PathBuf;

use super::cpu::RawCpuCounters;
use super::memory::MemorySnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: &'static str },
}

/// Raw counter reads from the host. Implementations keep no derived state.
pub trait MetricSource {
    fn read_cpu_counters(&self) -> Result<RawCpuCounters, SourceError>;
    fn read_memory(&self) -> Result<MemorySnapshot, SourceError>;
}
