//! Resource ledger: create/release accounting for everything the build
//! allocates.
//!
//! The renderer-facing invariant of the whole engine is that every
//! texture, geometry, and material created while building a session is
//! released exactly once at teardown. The ledger is the wrapped allocator
//! that proves it: builders create ids through it, dispose releases them,
//! and the report at the end must balance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Handle to one renderer-side allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(u32);

impl ResourceId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Texture,
    Geometry,
    Material,
}

/// Outcome of a teardown. `leaked` and `double_released` are both zero
/// for a correct session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisposeReport {
    pub created: u32,
    pub released: u32,
    pub leaked: u32,
    pub double_released: u32,
}

impl DisposeReport {
    pub fn balanced(&self) -> bool {
        self.leaked == 0 && self.double_released == 0 && self.created == self.released
    }
}

impl std::fmt::Display for DisposeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} created, {} released, {} leaked, {} double-released",
            self.created, self.released, self.leaked, self.double_released
        )
    }
}

/// Tracks live allocations for one session.
#[derive(Debug, Default)]
pub struct ResourceLedger {
    next: u32,
    live: BTreeMap<ResourceId, ResourceKind>,
    created: u32,
    released: u32,
    double_released: u32,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, kind: ResourceKind) -> ResourceId {
        let id = ResourceId(self.next);
        self.next += 1;
        self.created += 1;
        self.live.insert(id, kind);
        id
    }

    /// Release one id; false (and counted) when it was not live.
    pub fn release(&mut self, id: ResourceId) -> bool {
        if self.live.remove(&id).is_some() {
            self.released += 1;
            true
        } else {
            self.double_released += 1;
            false
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn created_count(&self) -> u32 {
        self.created
    }

    /// Ids still live, oldest first. Teardown walks this to release
    /// whatever entity accounting missed (shared textures).
    pub fn live_ids(&self) -> Vec<ResourceId> {
        self.live.keys().copied().collect()
    }

    pub fn report(&self) -> DisposeReport {
        DisposeReport {
            created: self.created,
            released: self.released,
            leaked: self.live.len() as u32,
            double_released: self.double_released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_release_balances() {
        let mut ledger = ResourceLedger::new();
        let a = ledger.create(ResourceKind::Texture);
        let b = ledger.create(ResourceKind::Geometry);
        let c = ledger.create(ResourceKind::Material);
        assert_eq!(ledger.live_count(), 3);
        assert!(ledger.release(a));
        assert!(ledger.release(b));
        assert!(ledger.release(c));
        let report = ledger.report();
        assert!(report.balanced(), "unbalanced: {report}");
    }

    #[test]
    fn test_leak_is_reported() {
        let mut ledger = ResourceLedger::new();
        let _held = ledger.create(ResourceKind::Texture);
        let released = ledger.create(ResourceKind::Texture);
        ledger.release(released);
        let report = ledger.report();
        assert_eq!(report.leaked, 1);
        assert!(!report.balanced());
    }

    #[test]
    fn test_double_release_is_reported() {
        let mut ledger = ResourceLedger::new();
        let id = ledger.create(ResourceKind::Material);
        assert!(ledger.release(id));
        assert!(!ledger.release(id));
        let report = ledger.report();
        assert_eq!(report.double_released, 1);
        assert!(!report.balanced());
    }

    #[test]
    fn test_live_ids_in_creation_order() {
        let mut ledger = ResourceLedger::new();
        let a = ledger.create(ResourceKind::Texture);
        let b = ledger.create(ResourceKind::Texture);
        assert_eq!(ledger.live_ids(), vec![a, b]);
    }
}
