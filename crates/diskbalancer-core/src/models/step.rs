//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{DiskVolume, StorageType};

/// One directive to move data from a source volume to a destination volume.
///
/// `bandwidth` and `max_disk_errors` use zero for "let the executor pick its
/// default".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Step {
    /// Volume data is read from
    pub source_volume: DiskVolume,

    /// Volume data is written to
    pub destination_volume: DiskVolume,

    /// Ideal used ratio of the volume set this step balances towards
    #[serde(default)]
    pub ideal_storage: f64,

    /// Number of bytes to move
    pub bytes_to_move: u64,

    /// Identifier of the volume set both volumes belong to
    #[serde(default)]
    pub volume_set_id: String,

    /// Disk errors tolerated before the move is abandoned (0 = default)
    #[serde(default)]
    pub max_disk_errors: u64,

    /// Tolerated deviation from the ideal, in percent
    #[serde(default)]
    pub tolerance_percent: u64,

    /// Copy bandwidth cap in MB/s (0 = default)
    #[serde(default)]
    pub bandwidth: u64,
}

impl Step {
    /// Storage type of the destination volume.
    pub fn storage_type(&self) -> StorageType {
        self.destination_volume.storage_type
    }
}
