use log::{debug, warn};
use shared::Family;

use super::schema::{parse_family, ParsedFamily};
use super::traits::{FamilyStorage, RecordSlot};

/// Family storage over a raw record slot.
///
/// Every slot or parse failure is absorbed here: reads degrade to `None`,
/// writes and clears degrade to a logged no-op.
#[derive(Debug, Clone)]
pub struct RecordAdapter<S: RecordSlot> {
    slot: S,
}

impl<S: RecordSlot> RecordAdapter<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }
}

impl<S: RecordSlot> FamilyStorage for RecordAdapter<S> {
    fn load(&self) -> Option<Family> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored family record");
                return None;
            }
            Err(e) => {
                warn!("Failed to read stored family record: {:#}", e);
                return None;
            }
        };

        match parse_family(&raw) {
            ParsedFamily::Valid(family) => {
                debug!("Loaded family record with {} members", family.members.len());
                Some(family)
            }
            ParsedFamily::Rejected(reason) => {
                warn!("Ignoring stored family record: {}", reason);
                None
            }
        }
    }

    fn save(&self, family: &Family) {
        let contents = match serde_json::to_string(family) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to serialize family record: {}", e);
                return;
            }
        };

        if let Err(e) = self.slot.write(&contents) {
            warn!("Failed to save family record: {:#}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = self.slot.remove() {
            warn!("Failed to clear family record: {:#}", e);
        }
    }
}
