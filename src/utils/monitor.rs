#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// Samples this process's memory use at stage boundaries. CLI-only; the
/// Lambda build compiles to a no-op.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    start_time: Instant,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            system: Mutex::new(System::new_all()),
            pid: sysinfo::get_current_pid().ok(),
            start_time: Instant::now(),
            enabled,
        }
    }

    fn memory_mb(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_all();
        Some(system.process(pid)?.memory() / 1024 / 1024)
    }

    pub fn log_stats(&self, phase: &str) {
        if !self.enabled {
            return;
        }
        if let Some(memory_mb) = self.memory_mb() {
            tracing::info!(
                "📊 {} - Memory: {}MB, Elapsed: {:?}",
                phase,
                memory_mb,
                self.start_time.elapsed()
            );
        }
    }

    pub fn log_final_stats(&self) {
        if !self.enabled {
            return;
        }
        tracing::info!("📊 Run finished in {:?}", self.start_time.elapsed());
    }
}

#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}
}
