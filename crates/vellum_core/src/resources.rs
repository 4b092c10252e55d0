//! Gamified resource gauges.

use serde::{Deserialize, Serialize};

/// Upper bound of the clamped gauges (health, mana, stress).
pub const GAUGE_MAX: u32 = 100;

/// Session gauges mutated by the action gate after each invocation.
///
/// Health, mana and stress live in `[0, 100]`. XP only grows and the level
/// is always derived from it as `xp / 100 + 1`.
///
/// # Examples
///
/// ```
/// use vellum_core::ResourceState;
///
/// let mut state = ResourceState::default();
/// state.set_xp(90);
/// state.reward(5, 15, 2);
///
/// assert_eq!(*state.mana(), 95);
/// assert_eq!(*state.xp(), 105);
/// assert_eq!(*state.level(), 2);
/// assert_eq!(*state.stress(), 2);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(from = "RawResourceState")]
pub struct ResourceState {
    health: u32,
    mana: u32,
    xp: u32,
    level: u32,
    stress: u32,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            health: GAUGE_MAX,
            mana: GAUGE_MAX,
            xp: 0,
            level: 1,
            stress: 0,
        }
    }
}

/// Serialized gauges, accepted as-is and normalized through [`ResourceState::new`].
///
/// A stored `level` is ignored and re-derived from `xp`.
#[derive(Deserialize)]
#[serde(default)]
struct RawResourceState {
    health: u32,
    mana: u32,
    xp: u32,
    stress: u32,
}

impl Default for RawResourceState {
    fn default() -> Self {
        let state = ResourceState::default();
        Self {
            health: state.health,
            mana: state.mana,
            xp: state.xp,
            stress: state.stress,
        }
    }
}

impl From<RawResourceState> for ResourceState {
    fn from(raw: RawResourceState) -> Self {
        Self::new(raw.health, raw.mana, raw.xp, raw.stress)
    }
}

impl ResourceState {
    /// Builds a state from raw gauge values, clamping and deriving the level.
    pub fn new(health: u32, mana: u32, xp: u32, stress: u32) -> Self {
        Self {
            health: health.min(GAUGE_MAX),
            mana: mana.min(GAUGE_MAX),
            xp,
            level: Self::level_for(xp),
            stress: stress.min(GAUGE_MAX),
        }
    }

    /// Level reached with the given experience.
    pub fn level_for(xp: u32) -> u32 {
        xp / 100 + 1
    }

    /// Whether at least `required` mana is available.
    pub fn has_mana(&self, required: u32) -> bool {
        self.mana >= required
    }

    /// Sets mana, clamped to the gauge range.
    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana.min(GAUGE_MAX);
    }

    /// Sets experience and re-derives the level.
    pub fn set_xp(&mut self, xp: u32) {
        self.xp = xp;
        self.level = Self::level_for(xp);
    }

    /// Sets stress, clamped to the gauge range.
    pub fn set_stress(&mut self, stress: u32) {
        self.stress = stress.min(GAUGE_MAX);
    }

    /// Deducts mana, stopping at zero.
    pub fn charge(&mut self, cost: u32) {
        self.mana = self.mana.saturating_sub(cost);
    }

    /// Applies the outcome of a successful invocation.
    pub fn reward(&mut self, cost: u32, xp_reward: u32, stress_increment: u32) {
        self.charge(cost);
        self.set_xp(self.xp.saturating_add(xp_reward));
        self.set_stress(self.stress.saturating_add(stress_increment));
    }
}
