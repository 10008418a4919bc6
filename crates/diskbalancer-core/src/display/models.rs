//! Display implementations for domain models.

use std::fmt;

use super::size::ByteSize;
use crate::models::{NodePlan, Step, StorageType};

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tab-separated line: source, destination, size, storage type.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\t{}\t{}\t{}",
            self.source_volume.path,
            self.destination_volume.path,
            ByteSize(self.bytes_to_move),
            self.storage_type()
        )
    }
}

impl fmt::Display for NodePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.volume_set_plans {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
