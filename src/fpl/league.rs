//! Navigation inside a classic league: bounds-checked access to its active phases.

use serde_json::Value;

use crate::{
    error::{FplError, Result},
    fpl::types::{ActivePhase, ClassicLeague},
};


/// Bounds-check `index` against `items` and borrow the element.
pub(crate) fn select<'a, T>(what: &'static str, items: &'a [T], index: usize) -> Result<&'a T> {
    items.get(index).ok_or(FplError::IndexOutOfRange {
        what,
        index,
        len: items.len(),
    })
}

impl ClassicLeague {
    /// Build a league from one raw element of `leagues.classic`.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn number_of_active_phases(&self) -> usize {
        self.active_phases.len()
    }

    pub fn active_phases(&self) -> &[ActivePhase] {
        &self.active_phases
    }

    /// The active phase at position `n`, valid for `0 <= n < number_of_active_phases()`.
    pub fn active_phase(&self, n: usize) -> Result<&ActivePhase> {
        select("active phase", &self.active_phases, n)
    }
}
