//! The user's declared waste stock.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use serde::{Deserialize, Serialize};

/// Millisecond-timestamp-derived identifier, bumped past the previous id when
/// two adds land on the same millisecond.
pub type MaterialId = u64;

/// One inventory line the user declared as available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub materials: Vec<Material>,
    last_id: MaterialId,
}

impl InventoryState {
    /// Append a material with a freshly minted id.
    ///
    /// Returns `None` without mutating anything when the name is blank or the
    /// quantity is not a positive number.
    pub fn add(&mut self, name: &str, quantity: f64, unit: &str, now_ms: u64) -> Option<MaterialId> {
        let name = name.trim();
        if name.is_empty() || !quantity.is_finite() || quantity <= 0.0 {
            return None;
        }

        let id = mint_id(now_ms, self.last_id);
        self.last_id = id;
        self.materials.push(Material {
            id,
            name: name.to_owned(),
            quantity,
            unit: unit.trim().to_owned(),
        });
        Some(id)
    }

    pub fn remove(&mut self, id: MaterialId) {
        self.materials.retain(|m| m.id != id);
    }

    pub fn clear(&mut self) {
        self.materials.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Ids come from the creation timestamp, but two adds inside the same
/// millisecond must not collide: take whichever is larger, the clock or the
/// previous id plus one.
fn mint_id(now_ms: u64, last_id: MaterialId) -> MaterialId {
    now_ms.max(last_id + 1)
}
