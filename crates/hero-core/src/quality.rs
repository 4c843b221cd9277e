//! Device-capability classification.
//!
//! Signals are read once at startup and the resulting tier is fixed for the
//! session; nothing downstream re-derives capability on its own.

use crate::constants::FALLBACK_CPU_CORES;

/// Discrete quality tier driving every resource-scaling decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityTier {
    High,
    Medium,
    Low,
}

/// Raw client capability signals, as sampled by the host frontend.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceProfile {
    /// Logical core count; `None` when the signal is unavailable.
    pub cpu_cores: Option<u32>,
    pub is_mobile: bool,
    pub is_tablet: bool,
}

impl QualityTier {
    /// Classify a device. Evaluated in order: a high core count wins,
    /// handhelds never classify above Low, and a missing core count is
    /// treated as [`FALLBACK_CPU_CORES`].
    pub fn classify(profile: &DeviceProfile) -> Self {
        let cores = profile.cpu_cores.unwrap_or(FALLBACK_CPU_CORES);
        if cores >= 8 {
            QualityTier::High
        } else if cores >= 4 && !profile.is_mobile && !profile.is_tablet {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }
}
