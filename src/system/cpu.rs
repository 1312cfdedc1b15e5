use serde::Serialize;

/// Aggregate CPU time counters from the `cpu` line of `/proc/stat`, in jiffies
/// since boot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawCpuCounters {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

impl RawCpuCounters {
    pub fn total(&self) -> u64 {
        self.user
            .saturating_add(self.nice)
            .saturating_add(self.system)
            .saturating_add(self.idle)
    }
}

/// Totals remembered from the previous [`CpuUsageEstimator::estimate`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuEstimatorState {
    pub prev_total: u64,
    pub prev_idle: u64,
    pub samples: u64,
}

/// Usage figure handed to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "percent", rename_all = "snake_case")]
pub enum CpuUsage {
    Percent(f32),
    #[default]
    Unavailable,
}

impl CpuUsage {
    /// Value shown when no usage figure exists for a tick.
    pub const UNAVAILABLE_SENTINEL: f32 = -1.0;

    pub fn as_percent(self) -> f32 {
        match self {
            CpuUsage::Percent(p) => p,
            CpuUsage::Unavailable => Self::UNAVAILABLE_SENTINEL,
        }
    }
}

impl From<Option<f32>> for CpuUsage {
    fn from(value: Option<f32>) -> Self {
        value.map_or(CpuUsage::Unavailable, CpuUsage::Percent)
    }
}

#[derive(Debug, Default)]
pub struct CpuUsageEstimator {
    state: CpuEstimatorState,
}

impl CpuUsageEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CpuEstimatorState {
        self.state
    }

    /// Whether a previous sample exists. Until then `estimate` measures against
    /// zero, i.e. the average since boot.
    pub fn is_primed(&self) -> bool {
        self.state.samples > 0
    }

    /// Non-idle share of the time elapsed since the previous call, in percent.
    ///
    /// Returns `None` when no time elapsed between the two samples, or when the
    /// counters went backwards. The state is replaced either way.
    pub fn estimate(&mut self, current: RawCpuCounters) -> Option<f32> {
        let total = current.total();
        let idle = current.idle;

        let CpuEstimatorState {
            prev_total,
            prev_idle,
            samples,
        } = self.state;
        self.state = CpuEstimatorState {
            prev_total: total,
            prev_idle: idle,
            samples: samples.saturating_add(1),
        };

        let delta_total = total.checked_sub(prev_total)?;
        let delta_idle = idle.checked_sub(prev_idle)?;
        if delta_total == 0 {
            return None;
        }

        let busy = 1.0 - delta_idle as f64 / delta_total as f64;
        Some((busy * 100.0).clamp(0.0, 100.0) as f32)
    }
}
