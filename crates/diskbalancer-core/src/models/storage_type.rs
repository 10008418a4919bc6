//! Storage media classification for disk volumes.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the storage media a volume lives on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    /// Memory-backed transient storage
    RamDisk,

    /// Solid state drive
    Ssd,

    /// Spinning disk
    #[default]
    Disk,

    /// Dense, slow archival storage
    Archive,

    /// Storage provided by an external system
    Provided,

    /// Non-volatile DIMM
    Nvdimm,
}

impl StorageType {
    /// Canonical upper-case name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::RamDisk => "RAM_DISK",
            StorageType::Ssd => "SSD",
            StorageType::Disk => "DISK",
            StorageType::Archive => "ARCHIVE",
            StorageType::Provided => "PROVIDED",
            StorageType::Nvdimm => "NVDIMM",
        }
    }
}
