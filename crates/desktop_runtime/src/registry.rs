//! Shared window registry: the canonical list of open windows.
//!
//! The registry is owned by the desktop provider and reached only through
//! the reducer; components read snapshot copies of its records.

use crate::model::{Point, Size, WindowId, WindowRecord, Z_INDEX_FLOOR};

/// Partial geometry update applied by [`WindowRegistry::update`]. Fields
/// left as `None` keep the record's current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowPatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub z_index: Option<i32>,
}

impl WindowPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn geometry(position: Point, size: Size) -> Self {
        Self {
            position: Some(position),
            size: Some(size),
            z_index: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowRegistry {
    records: Vec<WindowRecord>,
}

impl WindowRegistry {
    /// Records in insertion order.
    pub fn list(&self) -> &[WindowRecord] {
        &self.records
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a record, keeping at most one record per id. Returns `false`
    /// without touching the registry when the id is already present.
    pub fn insert(&mut self, record: WindowRecord) -> bool {
        if self.contains(record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Removes the record with the matching id; `false` if absent.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Applies a partial field update to the matching record; no-op if
    /// absent.
    pub fn update(&mut self, id: WindowId, patch: WindowPatch) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return false;
        };
        if let Some(position) = patch.position {
            record.position = position;
        }
        if let Some(size) = patch.size {
            record.size = size;
        }
        if let Some(z_index) = patch.z_index {
            record.z_index = z_index;
        }
        true
    }

    /// Current top of the stack, never below the z floor.
    pub fn max_z_index(&self) -> i32 {
        self.records
            .iter()
            .map(|record| record.z_index)
            .max()
            .unwrap_or(Z_INDEX_FLOOR)
            .max(Z_INDEX_FLOOR)
    }

    /// Raises the matching record strictly above every other record and
    /// returns its new z-index; `None` if the id is absent.
    pub fn bring_to_front(&mut self, id: WindowId) -> Option<i32> {
        if !self.contains(id) {
            return None;
        }
        let raised = self.max_z_index() + 1;
        self.update(id, WindowPatch {
            z_index: Some(raised),
            ..WindowPatch::default()
        });
        Some(raised)
    }
}
