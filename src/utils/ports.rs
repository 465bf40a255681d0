// file: src/utils/ports.rs
// version: 1.0.0
// guid: 47fb3a80-2de7-4f98-c7a1-f813deb4f062

//! Best-effort TCP port management
//!
//! The server workflow frees its configured port before starting: listening
//! PIDs are looked up with `lsof` and sent SIGTERM with `kill`. There is no
//! locking or readiness handshake; failures are logged and ignored.

use crate::Result;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Parse `lsof -ti` output into PIDs, one per line
pub fn parse_lsof_pids(output: &str) -> Vec<u32> {
    output
        .lines()
        .filter_map(|line| line.trim().parse::<u32>().ok())
        .collect()
}

/// Find PIDs listening on the given TCP port.
///
/// `lsof` exits nonzero when nothing matches; that is an empty result here,
/// not an error.
pub async fn listening_pids(port: u16) -> Result<Vec<u32>> {
    let output = Command::new("lsof")
        .args(["-ti", &format!(":{}", port)])
        .output()
        .await
        .map_err(|e| {
            crate::error::DevflowError::system(format!("Failed to run lsof: {}", e))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_lsof_pids(&stdout))
}

/// Terminate any process listening on the given port, best-effort
pub async fn free_port(port: u16) {
    let pids = match listening_pids(port).await {
        Ok(pids) => pids,
        Err(e) => {
            warn!("Port {} lookup failed: {}", port, e);
            return;
        }
    };

    if pids.is_empty() {
        debug!("Port {} is already free", port);
        return;
    }

    for pid in pids {
        info!("Stopping process {} listening on port {}", pid, port);
        let result = Command::new("kill").arg(pid.to_string()).status().await;
        match result {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("kill {} exited with {:?}", pid, status.code()),
            Err(e) => warn!("Failed to run kill for {}: {}", pid, e),
        }
    }
}
