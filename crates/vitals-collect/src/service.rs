//! systemd unit status via `systemctl show`

use serde::{Deserialize, Serialize};
use tokio::process::Command;

/// Properties requested from systemctl.
const PROPERTIES: &str = "LoadState,ActiveState,SubState,Description,MainPID";

/// Status of one systemd unit.
///
/// `available` is false when systemctl could not be queried; the error is
/// carried inline so one broken unit never fails a whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_pid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Append `.service` when no unit suffix is present.
pub fn normalize_unit_name(name: &str) -> String {
    if name.ends_with(".service") {
        name.to_string()
    } else {
        format!("{}.service", name)
    }
}

/// Parse `systemctl show` key=value output into a status.
pub fn parse_show_output(name: &str, output: &str) -> ServiceStatus {
    let mut status = ServiceStatus {
        name: name.to_string(),
        available: true,
        ..Default::default()
    };

    for line in output.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "LoadState" => status.load_state = Some(value),
            "ActiveState" => status.active_state = Some(value),
            "SubState" => status.sub_state = Some(value),
            "Description" => status.description = Some(value),
            "MainPID" => status.main_pid = Some(value),
            _ => {}
        }
    }

    status
}

/// Query one systemd unit.
pub async fn query_service(name: &str) -> ServiceStatus {
    let unit = normalize_unit_name(name);
    let property_arg = format!("--property={}", PROPERTIES);

    let output = Command::new("systemctl")
        .args(["show", unit.as_str(), property_arg.as_str(), "--no-pager"])
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            parse_show_output(name, &String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => ServiceStatus {
            name: name.to_string(),
            available: false,
            error: Some(format!(
                "systemctl exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )),
            ..Default::default()
        },
        Err(e) => ServiceStatus {
            name: name.to_string(),
            available: false,
            error: Some(format!("failed to run systemctl: {}", e)),
            ..Default::default()
        },
    }
}
