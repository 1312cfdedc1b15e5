use super::cpu::{CpuUsage, CpuUsageEstimator};
use super::memory::MemorySnapshot;
use super::process::{DEFAULT_PROCESS_LIMIT, ProcessEnumerator};
use super::procfs::ProcFs;
use super::snapshot::Snapshot;
use super::source::MetricSource;

/// Runs one sampling pass per tick and keeps the only state that survives
/// between ticks: the CPU estimator and the last good memory reading.
pub struct SampleLoop<S = ProcFs> {
    source: S,
    estimator: CpuUsageEstimator,
    last_memory: MemorySnapshot,
    process_limit: usize,
}

impl Default for SampleLoop<ProcFs> {
    fn default() -> Self {
        Self::new(ProcFs::default())
    }
}

impl<S> SampleLoop<S>
where
    S: MetricSource + ProcessEnumerator,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            estimator: CpuUsageEstimator::new(),
            last_memory: MemorySnapshot::default(),
            process_limit: DEFAULT_PROCESS_LIMIT,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn estimator(&self) -> &CpuUsageEstimator {
        &self.estimator
    }

    pub fn tick(&mut self) -> Snapshot {
        let _span = tracing::debug_span!("sampler.tick").entered();

        let cpu_usage = self.sample_cpu();
        let memory = self.sample_memory();
        let processes = self.source.list_processes(self.process_limit);

        Snapshot {
            cpu_usage,
            memory,
            processes,
        }
    }

    fn sample_cpu(&mut self) -> CpuUsage {
        let counters = match self.source.read_cpu_counters() {
            Ok(counters) => counters,
            Err(err) => {
                tracing::debug!(%err, "cpu counters unavailable, skipping tick");
                return CpuUsage::Unavailable;
            }
        };

        // The first estimate is measured against zero and covers the whole
        // uptime, so it is recorded but not shown.
        let primed = self.estimator.is_primed();
        let usage = self.estimator.estimate(counters);
        if !primed {
            tracing::debug!(?usage, "discarding first cpu sample");
            return CpuUsage::Unavailable;
        }
        if usage.is_none() {
            tracing::debug!("no cpu time elapsed since previous sample");
        }
        usage.into()
    }

    fn sample_memory(&mut self) -> MemorySnapshot {
        match self.source.read_memory() {
            Ok(memory) => {
                self.last_memory = memory;
                memory
            }
            Err(err) => {
                tracing::debug!(%err, "memory info unavailable, keeping previous reading");
                self.last_memory
            }
        }
    }
}
