//! Process memory diagnostics.
//!
//! Samples resident and virtual memory around each demo run so regressions
//! in the paint path show up in the harness log. Only implemented where the
//! kernel exposes `/proc/self/status`; elsewhere sampling reports nothing
//! and the harness runs without diagnostics.

/// One point-in-time memory reading, in KiB.
#[derive(Debug, Clone, Copy)]
pub struct MemorySample {
    pub rss_kib: i64,
    pub vm_kib: i64,
}

impl MemorySample {
    /// Per-field difference of two samples (`after - before`).
    pub fn delta(before: MemorySample, after: MemorySample) -> MemorySample {
        MemorySample {
            rss_kib: after.rss_kib - before.rss_kib,
            vm_kib: after.vm_kib - before.vm_kib,
        }
    }
}

/// Sample the current process, if the platform supports it.
pub fn sample() -> Option<MemorySample> {
    imp::sample()
}

#[cfg(target_os = "linux")]
mod imp {
    use super::MemorySample;

    pub fn sample() -> Option<MemorySample> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        let rss_kib = field_kib(&status, "VmRSS:")?;
        let vm_kib = field_kib(&status, "VmSize:")?;
        Some(MemorySample { rss_kib, vm_kib })
    }

    /// Extract a `Vm*: <n> kB` field value.
    fn field_kib(status: &str, field: &str) -> Option<i64> {
        status
            .lines()
            .find(|line| line.starts_with(field))?
            .split_whitespace()
            .nth(1)?
            .parse()
            .ok()
    }
}

#[cfg(not(target_os = "linux"))]
mod imp {
    use super::MemorySample;

    pub fn sample() -> Option<MemorySample> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn sample_reads_positive_values() {
        let sample = sample().expect("procfs should be readable");
        assert!(sample.rss_kib > 0);
        assert!(sample.vm_kib >= sample.rss_kib);
    }

    #[test]
    fn delta_subtracts_fields() {
        let before = MemorySample {
            rss_kib: 100,
            vm_kib: 1000,
        };
        let after = MemorySample {
            rss_kib: 150,
            vm_kib: 990,
        };
        let delta = MemorySample::delta(before, after);
        assert_eq!(delta.rss_kib, 50);
        assert_eq!(delta.vm_kib, -10);
    }
}
