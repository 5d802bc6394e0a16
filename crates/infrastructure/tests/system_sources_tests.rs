use ferrous_lan_application::ports::{LeaseSource, NeighborDiagnostic};
use ferrous_lan_application::services::SnapshotStore;
use ferrous_lan_application::use_cases::{RefreshOutcome, RefreshSnapshotUseCase};
use ferrous_lan_domain::{HardwareAddress, NeighborFormat};
use ferrous_lan_infrastructure::system::{LeaseFileReader, NeighborCommandRunner};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

const LEASES: &str = r#"# dhcpd.leases
lease 192.168.1.10 {
  starts 4 2024/01/04 08:00:00;
  ends never;
  binding state active;
  hardware ethernet 00:11:22:33:44:55;
  client-hostname "nas";
}
"#;

fn lease_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

fn printf_runner(output: &str) -> NeighborCommandRunner {
    NeighborCommandRunner::new(
        "sh",
        vec!["-c".to_string(), format!("printf '%s' '{}'", output)],
    )
}

#[tokio::test]
async fn test_refresh_with_file_and_command_sources() {
    let file = lease_file(LEASES);
    let leases = Arc::new(LeaseFileReader::new(file.path()));
    let neighbors = Arc::new(printf_runner(
        "2001:db8::10 dev eth0 lladdr 00:11:22:33:44:55 REACHABLE\nfe80::1 dev eth0 lladdr de:ad:be:ef:00:01 router STALE\n",
    ));
    let store = Arc::new(SnapshotStore::new());

    let refresh = RefreshSnapshotUseCase::new(leases, neighbors, NeighborFormat::IpNeigh, store.clone())
        .with_neighbor_timeout(Duration::from_secs(5));
    let outcome = refresh.execute().await.unwrap();

    assert!(matches!(outcome, RefreshOutcome::Published { hosts: 2, .. }));

    let snapshot = store.current().ready().unwrap();
    let nas = snapshot
        .get(&HardwareAddress::parse("00:11:22:33:44:55").unwrap())
        .unwrap();
    let lease = nas.dhcp_lease.as_ref().unwrap();
    assert_eq!(lease.hostname.as_deref(), Some("nas"));
    assert!(lease.expires_at.is_none());
    assert_eq!(nas.ndp_entries[0].ip_address, "2001:db8::10");

    let router = snapshot
        .get(&HardwareAddress::parse("de:ad:be:ef:00:01").unwrap())
        .unwrap();
    assert_eq!(router.ndp_entries[0].ip_address, "fe80::1%eth0");
}

#[tokio::test]
async fn test_lease_file_changes_are_picked_up_on_next_read() {
    let mut file = lease_file("");
    let reader = LeaseFileReader::new(file.path());

    assert_eq!(reader.read_lease_source().await.unwrap(), "");

    file.write_all(LEASES.as_bytes()).unwrap();
    file.flush().unwrap();

    assert_eq!(reader.read_lease_source().await.unwrap(), LEASES);
}

#[tokio::test]
async fn test_timed_out_command_does_not_block_refresh() {
    let file = lease_file(LEASES);
    let store = Arc::new(SnapshotStore::new());
    let refresh = RefreshSnapshotUseCase::new(
        Arc::new(LeaseFileReader::new(file.path())),
        Arc::new(NeighborCommandRunner::new(
            "sh",
            vec!["-c".to_string(), "sleep 10".to_string()],
        )),
        NeighborFormat::Ndp,
        store.clone(),
    )
    .with_neighbor_timeout(Duration::from_millis(100));

    let outcome = tokio::time::timeout(Duration::from_secs(3), refresh.execute())
        .await
        .expect("refresh must finish after the command timeout")
        .unwrap();

    match outcome {
        RefreshOutcome::Published { freshness, .. } => {
            assert!(freshness.leases_fresh);
            assert!(!freshness.neighbors_fresh);
        }
        RefreshOutcome::Skipped => panic!("lease file was readable"),
    }
}

#[tokio::test]
async fn test_runner_reports_exit_status() {
    let runner = NeighborCommandRunner::new("sh", vec!["-c".to_string(), "exit 1".to_string()]);

    let err = runner
        .run_neighbor_diagnostic(Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(err.is_source_failure());
}

#[cfg(unix)]
#[tokio::test]
async fn test_lease_fifo_without_writer_does_not_block_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let fifo = dir.path().join("dhcpd.leases");
    let status = std::process::Command::new("mkfifo")
        .arg(&fifo)
        .status()
        .unwrap();
    assert!(status.success());

    let store = Arc::new(SnapshotStore::new());
    let refresh = RefreshSnapshotUseCase::new(
        Arc::new(LeaseFileReader::new(&fifo)),
        Arc::new(printf_runner(
            "2001:db8::10 dev eth0 lladdr 00:11:22:33:44:55 REACHABLE\n",
        )),
        NeighborFormat::IpNeigh,
        store.clone(),
    )
    .with_lease_timeout(Duration::from_millis(200))
    .with_neighbor_timeout(Duration::from_secs(5));

    let outcome = tokio::time::timeout(Duration::from_secs(3), refresh.execute())
        .await
        .expect("refresh must finish after the lease read timeout")
        .unwrap();

    match outcome {
        RefreshOutcome::Published { freshness, hosts, .. } => {
            assert_eq!(hosts, 1);
            assert!(!freshness.leases_fresh);
            assert!(freshness.neighbors_fresh);
        }
        RefreshOutcome::Skipped => panic!("neighbor command succeeded"),
    }
    assert!(store.current().ready().is_some());

    // Release the blocked reader so the runtime can shut down.
    drop(std::fs::OpenOptions::new().write(true).open(&fifo).unwrap());
}
