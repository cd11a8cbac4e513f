//! Configuration defaults and filesystem constants

/// Default config filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "vitals.toml";

/// Default log level when neither RUST_LOG nor config specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Thermal zone paths probed for the CPU temperature, in order.
pub const THERMAL_ZONE_PATHS: &[&str] = &[
    "/sys/class/thermal/thermal_zone0/temp",
    "/sys/class/thermal/thermal_zone1/temp",
];

/// Filesystem types excluded when listing all mount points.
pub const PSEUDO_FSTYPES: &[&str] = &["tmpfs", "devtmpfs", "squashfs", "overlay", "proc", "sysfs"];
