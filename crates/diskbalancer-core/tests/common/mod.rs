use std::path::{Path, PathBuf};

use diskbalancer_core::{ClusterSnapshot, DataNode, DiskVolume, StorageType};
use tempfile::TempDir;

/// Two-node cluster where node-7 has one full and one empty disk.
pub fn sample_cluster() -> ClusterSnapshot {
    let disk = |uuid: &str, path: &str, used: u64| DiskVolume {
        uuid: uuid.to_string(),
        path: path.to_string(),
        storage_type: StorageType::Disk,
        capacity: 1 << 40,
        used,
        ..Default::default()
    };
    ClusterSnapshot::new(vec![
        DataNode {
            uuid: "3f1c-node-7".to_string(),
            ip_address: "10.0.0.7".to_string(),
            hostname: "node-7".to_string(),
            data_port: 9866,
            volumes: vec![disk("v0", "/data/disk0", 1 << 40), disk("v1", "/data/disk1", 0)],
        },
        DataNode {
            uuid: "9a2b-node-8".to_string(),
            ip_address: "10.0.0.8".to_string(),
            hostname: "node-8".to_string(),
            data_port: 9866,
            volumes: vec![disk("v2", "/data/disk0", 1 << 39)],
        },
    ])
}

/// Writes the sample cluster to a temporary directory.
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let cluster_path = temp_dir.path().join("cluster.json");
    std::fs::write(&cluster_path, sample_cluster().to_json().unwrap())
        .expect("Failed to write cluster");
    (temp_dir, cluster_path)
}

/// Plan JSON a fake external planner prints for node-7.
pub const NODE_7_PLAN: &str = r#"[{"node_name":"node-7","node_uuid":"3f1c-node-7","port":9866,"timestamp":1700000000000,"volume_set_plans":[{"source_volume":{"uuid":"v0","path":"/data/disk0","storage_type":"DISK"},"destination_volume":{"uuid":"v1","path":"/data/disk1","storage_type":"DISK"},"bytes_to_move":549755813888,"volume_set_id":"DISK","max_disk_errors":5,"tolerance_percent":10,"bandwidth":10}]}]"#;

/// Shell script acting as an external planner that prints `output`.
pub fn write_planner_script(dir: &Path, output: &str) -> PathBuf {
    let plan_path = dir.join("planner-output.json");
    std::fs::write(&plan_path, output).expect("Failed to write planner output");
    let script = dir.join("planner.sh");
    std::fs::write(
        &script,
        format!("#!/bin/sh\ncat > /dev/null\ncat '{}'\n", plan_path.display()),
    )
    .expect("Failed to write planner script");
    script
}
