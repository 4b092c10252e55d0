//! Read-only view of a session, with a plain-text HUD rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use vellum_core::{GAUGE_MAX, ResourceState, UsageMetrics};

use crate::GatePhase;

const BAR_WIDTH: u32 = 20;

/// Copy of a session's gauges, counters and phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SessionSnapshot {
    resources: ResourceState,
    metrics: UsageMetrics,
    phase: GatePhase,
}

impl SessionSnapshot {
    pub(crate) fn new(resources: ResourceState, metrics: UsageMetrics, phase: GatePhase) -> Self {
        Self {
            resources,
            metrics,
            phase,
        }
    }

    /// Whether an invocation was in flight when the snapshot was taken.
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}

fn bar(value: u32) -> String {
    let filled = (value.min(GAUGE_MAX) * BAR_WIDTH / GAUGE_MAX) as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH as usize - filled)
    )
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.resources;
        let m = &self.metrics;
        writeln!(f, "HP     {} {:>3}", bar(*r.health()), r.health())?;
        writeln!(f, "MANA   {} {:>3}", bar(*r.mana()), r.mana())?;
        writeln!(f, "STRESS {} {:>3}", bar(*r.stress()), r.stress())?;
        writeln!(f, "LVL {}  XP {}  [{}]", r.level(), r.xp(), self.phase)?;
        let calls = m
            .provider_calls()
            .iter()
            .map(|(name, count)| format!("{}={}", name, count))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "Calls  {}", calls)?;
        write!(
            f,
            "Runs {}  ~Tokens {}  Last {:.2}s",
            m.total_runs(),
            m.tokens_used(),
            m.last_run_duration_secs()
        )
    }
}
