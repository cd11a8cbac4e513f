use super::*;
use crate::mcp::params::{
    ConnectionsParams, CpuMetricsParams, DiskIoParams, DiskMetricsParams, ProcessListParams,
    ServiceStatusParams, ThermalStatusParams,
};
use vitals_config::Config;

/// Test fixture with access to private methods
struct TestFixture {
    server: VitalsServer,
    state: Arc<ApiState>,
}

impl TestFixture {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(mut config: Config) -> Self {
        config.validate().expect("test config is valid");
        let state = Arc::new(ApiState::new(config));
        let server = VitalsServer::new(Arc::clone(&state));
        Self { server, state }
    }
}

fn assert_success(result: &CallToolResult) {
    assert!(
        result.is_error.is_none() || !result.is_error.unwrap(),
        "tool result is an error"
    );
}

// ------------------------------------------------------------------------
// Tool Routing / Handler Tests
// ------------------------------------------------------------------------

#[tokio::test]
async fn test_get_system_info() {
    let fixture = TestFixture::new();
    let result = fixture.server.get_system_info().await.unwrap();
    assert_success(&result);
}

#[tokio::test]
async fn test_get_cpu_metrics_with_unit_override() {
    let fixture = TestFixture::new();
    let result = fixture
        .server
        .get_cpu_metrics(Parameters(CpuMetricsParams {
            temp_unit: Some("fahrenheit".to_string()),
        }))
        .await
        .unwrap();
    assert_success(&result);
}

#[tokio::test]
async fn test_get_memory_metrics() {
    let fixture = TestFixture::new();
    let result = fixture.server.get_memory_metrics().await.unwrap();
    assert_success(&result);
}

#[tokio::test]
async fn test_get_system_health() {
    let fixture = TestFixture::new();
    // Root disk may not resolve in exotic sandboxes; accept a clean MCP
    // error there, but never a panic.
    match fixture.server.get_system_health().await {
        Ok(result) => assert_success(&result),
        Err(e) => assert!(e.message.contains("root disk")),
    }
}

#[tokio::test]
async fn test_get_service_status_missing_services_is_invalid_params() {
    let fixture = TestFixture::new();
    let err = fixture
        .server
        .get_service_status(Parameters(ServiceStatusParams {
            services: "  , ,".to_string(),
        }))
        .await
        .unwrap_err();
    assert!(err.message.contains("services parameter is required"));
}

// ------------------------------------------------------------------------
// Impl-level Tests (JSON shape)
// ------------------------------------------------------------------------

#[tokio::test]
async fn test_system_info_json_keys() {
    let result = tools::system_info_impl().await.unwrap();
    let json = result.build_json();
    for key in ["hostname", "os", "platform", "uptime_seconds", "boot_time"] {
        assert!(json.get(key).is_some(), "missing key: {}", key);
    }
}

#[tokio::test]
async fn test_cpu_metrics_json_keys_and_unit() {
    let fixture = TestFixture::new();
    let result = tools::cpu_metrics_impl(
        &fixture.state,
        CpuMetricsParams {
            temp_unit: Some("kelvin".to_string()),
        },
    )
    .await
    .unwrap();

    let json = result.build_json();
    for key in ["usage_percent", "per_cpu_percent", "core_count", "load_average"] {
        assert!(json.get(key).is_some(), "missing key: {}", key);
    }
    assert_eq!(json["temperature_unit"], "kelvin");
    assert_eq!(
        json["core_count"].as_u64().unwrap() as usize,
        json["per_cpu_percent"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn test_cpu_metrics_invalid_unit_falls_back_to_config() {
    let fixture = TestFixture::new();
    let result = tools::cpu_metrics_impl(
        &fixture.state,
        CpuMetricsParams {
            temp_unit: Some("rankine".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(result.build_json()["temperature_unit"], "celsius");
}

#[tokio::test]
async fn test_memory_metrics_json_shape() {
    let result = tools::memory_metrics_impl().await.unwrap();
    let json = result.build_json();
    assert!(json["ram"]["total_bytes"].as_u64().unwrap() > 0);
    assert!(json["ram"]["total_human"].is_string());
    assert!(json["swap"]["usage_percent"].is_number());
}

#[tokio::test]
async fn test_disk_metrics_human_readable_toggle() {
    let fixture = TestFixture::new();

    let with_human = tools::disk_metrics_impl(
        &fixture.state,
        DiskMetricsParams {
            mount_points: None,
            human_readable: None,
        },
    )
    .await
    .unwrap();
    for disk in with_human.build_json()["disks"].as_array().unwrap() {
        assert!(disk.get("total_human").is_some());
    }

    let without_human = tools::disk_metrics_impl(
        &fixture.state,
        DiskMetricsParams {
            mount_points: None,
            human_readable: Some(false),
        },
    )
    .await
    .unwrap();
    for disk in without_human.build_json()["disks"].as_array().unwrap() {
        assert!(disk.get("total_human").is_none());
        assert!(disk.get("total_bytes").is_some());
    }
}

#[tokio::test]
async fn test_disk_io_nonexistent_device_filter_is_empty() {
    let result = tools::disk_io_impl(DiskIoParams {
        devices: Some("nonexistent_device".to_string()),
    })
    .await;

    // /proc/diskstats may be absent off Linux; when present the filter
    // must produce an empty device list.
    if let Ok(result) = result {
        let json = result.build_json();
        assert_eq!(json["total"], 0);
        assert!(json["devices"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_process_list_clamps_limit() {
    let fixture = TestFixture::new();
    let result = tools::process_list_impl(
        &fixture.state,
        ProcessListParams {
            limit: Some(1000),
            sort_by: Some("pid".to_string()),
        },
    )
    .await
    .unwrap();

    let json = result.build_json();
    assert!(json["shown"].as_u64().unwrap() <= 50);
    assert_eq!(json["sort_by"], "pid");

    // PID sort is ascending
    let pids: Vec<u64> = json["processes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pid"].as_u64().unwrap())
        .collect();
    let mut sorted = pids.clone();
    sorted.sort_unstable();
    assert_eq!(pids, sorted);
}

#[tokio::test]
async fn test_thermal_status_respects_gpu_switch() {
    let mut config = Config::default();
    config.metrics.enable_gpu = false;
    let fixture = TestFixture::with_config(config);

    let result = tools::thermal_status_impl(
        &fixture.state,
        ThermalStatusParams { temp_unit: None },
    )
    .await
    .unwrap();

    let json = result.build_json();
    assert_eq!(json["gpu_temperature"]["available"], false);
    assert_eq!(json["throttling"]["available"], false);
    assert_eq!(json["platform"], "generic_linux");
    assert_eq!(json["cpu_temperature"]["unit"], "celsius");
}

#[tokio::test]
async fn test_connections_kind_fallback_and_filter() {
    let result = tools::connections_impl(ConnectionsParams {
        kind: Some("sctp".to_string()),
        status: Some("listen".to_string()),
    })
    .await
    .unwrap();

    let json = result.build_json();
    // Unknown kind falls back to all; status filter is upper-cased
    assert_eq!(json["kind"], "all");
    assert_eq!(json["status_filter"], "LISTEN");
    for conn in json["connections"].as_array().unwrap() {
        assert_eq!(conn["status"], "LISTEN");
    }
}

#[tokio::test]
async fn test_health_verdict_matches_sample() {
    if let Ok(result) = tools::system_health_impl().await {
        let json = result.build_json();
        let status = json["status"].as_str().unwrap();
        assert!(["healthy", "warning", "critical"].contains(&status));
        for key in ["cpu", "memory", "disk", "uptime", "hostname", "warnings"] {
            assert!(json.get(key).is_some(), "missing key: {}", key);
        }
        assert_eq!(json["disk"]["mount_point"], "/");
    }
}
