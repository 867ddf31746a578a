use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::models::{Plant, PlantEvent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub at: DateTime<Utc>,
    pub event: PlantEvent,
}

/// Timestamped record of plant events, mirrored to the `log` facade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowJournal {
    entries: Vec<JournalEntry>,
}

impl GrowJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: PlantEvent) {
        self.record_at(event, Utc::now());
    }

    pub fn record_at(&mut self, event: PlantEvent, at: DateTime<Utc>) {
        info!("{}", event.describe());
        self.entries.push(JournalEntry { at, event });
    }

    /// Records whatever the plant currently reports about itself.
    pub fn observe(&mut self, plant: &Plant) {
        for event in plant.status_events() {
            self.record(event);
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn entries_for<'a>(&'a self, plant: &'a str) -> impl Iterator<Item = &'a JournalEntry> {
        self.entries
            .iter()
            .filter(move |e| e.event.plant_name() == plant)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_keeps_order_and_timestamp() {
        let mut journal = GrowJournal::new();
        let at = Utc.with_ymd_and_hms(2019, 1, 15, 8, 0, 0).unwrap();
        journal.record_at(
            PlantEvent::RootsShowing {
                plant: "basil".into(),
            },
            at,
        );
        journal.record(PlantEvent::DistanceAdjusted {
            plant: "mint".into(),
            from: 6.0,
            to: 4.0,
        });
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.entries()[0].at, at);
        assert_eq!(journal.entries()[1].event.plant_name(), "mint");
    }

    #[test]
    fn test_observe_plant_with_roots_showing() {
        let mut journal = GrowJournal::new();
        journal.observe(&Plant::new("kale", 5.0).with_roots_showing());
        journal.observe(&Plant::new("chard", 5.0));
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries_for("kale").count(), 1);
        assert_eq!(journal.entries_for("chard").count(), 0);
    }
}
