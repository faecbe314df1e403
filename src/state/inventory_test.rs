use super::*;

#[test]
fn add_appends_with_trimmed_fields() {
    let mut inv = InventoryState::default();
    let id = inv.add("  Plastic bottles ", 3.0, " pcs ", 1_000);
    assert!(id.is_some());
    assert_eq!(inv.materials.len(), 1);
    assert_eq!(inv.materials[0].name, "Plastic bottles");
    assert_eq!(inv.materials[0].unit, "pcs");
}

#[test]
fn blank_name_is_rejected() {
    let mut inv = InventoryState::default();
    assert!(inv.add("   ", 1.0, "pcs", 1_000).is_none());
    assert!(inv.is_empty());
}

#[test]
fn non_positive_or_nan_quantity_is_rejected() {
    let mut inv = InventoryState::default();
    assert!(inv.add("Cans", 0.0, "pcs", 1_000).is_none());
    assert!(inv.add("Cans", -2.0, "pcs", 1_000).is_none());
    assert!(inv.add("Cans", f64::NAN, "pcs", 1_000).is_none());
    assert!(inv.is_empty());
}

#[test]
fn rapid_successive_adds_never_collide() {
    let mut inv = InventoryState::default();
    // Same millisecond for every add — the pathological case for
    // timestamp-derived ids.
    for _ in 0..50 {
        inv.add("Copper wire", 1.0, "m", 42_000);
    }
    assert_eq!(inv.materials.len(), 50);

    let mut ids: Vec<MaterialId> = inv.materials.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50, "duplicate ids after rapid adds");
}

#[test]
fn ids_track_the_clock_when_it_advances() {
    let mut inv = InventoryState::default();
    let first = inv.add("Glass", 1.0, "pcs", 1_000).unwrap();
    let second = inv.add("Glass", 1.0, "pcs", 5_000).unwrap();
    assert_eq!(first, 1_000);
    assert_eq!(second, 5_000);
}

#[test]
fn remove_filters_by_id_only() {
    let mut inv = InventoryState::default();
    let a = inv.add("Tires", 2.0, "pcs", 1_000).unwrap();
    let b = inv.add("Pallets", 4.0, "pcs", 2_000).unwrap();

    inv.remove(a);
    assert_eq!(inv.materials.len(), 1);
    assert_eq!(inv.materials[0].id, b);

    // Removing an unknown id is harmless.
    inv.remove(999_999);
    assert_eq!(inv.materials.len(), 1);
}
