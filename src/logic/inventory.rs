use serde::{Deserialize, Serialize};

use crate::models::{count_occupied, BaseShelvingUnit};

/// Where a netcupped plant sits inside a shelving unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantLocation {
    pub shelf: usize,
    pub row: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfSummary {
    pub shelf: usize,
    pub tray_volume: f64,
    pub rows: usize,
    pub plants: usize,
}

/// Every position holding a plant called `name` (case-insensitive), ordered
/// by shelf, then row, then slot.
pub fn locate(unit: &BaseShelvingUnit, name: &str) -> Vec<PlantLocation> {
    let wanted = name.to_lowercase();
    let mut found = Vec::new();
    for (s, shelf) in unit.shelves().iter().enumerate() {
        let Some(layout) = &shelf.tray.layout else {
            continue;
        };
        for (r, row) in layout.matrix.iter().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                if let Some(cup) = slot {
                    if cup.plant.name.to_lowercase() == wanted {
                        found.push(PlantLocation {
                            shelf: s,
                            row: r,
                            slot: c,
                        });
                    }
                }
            }
        }
    }
    found
}

/// Occupied netcups across every tray that has a layout.
pub fn count_plants(unit: &BaseShelvingUnit) -> usize {
    unit.shelves()
        .iter()
        .filter_map(|s| s.tray.layout.as_ref())
        .map(|l| count_occupied(&l.matrix))
        .sum()
}

pub fn summarize(unit: &BaseShelvingUnit) -> Vec<ShelfSummary> {
    unit.shelves()
        .iter()
        .enumerate()
        .map(|(i, shelf)| {
            let (rows, plants) = shelf
                .tray
                .layout
                .as_ref()
                .map(|l| (l.matrix.len(), count_occupied(&l.matrix)))
                .unwrap_or((0, 0));
            ShelfSummary {
                shelf: i,
                tray_volume: shelf.tray.volume(),
                rows,
                plants,
            }
        })
        .collect()
}
