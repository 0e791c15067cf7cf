//! Host platform description for callers orienting themselves at startup.

use std::env;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub os: String,
    pub family: String,
    pub arch: String,
    pub hostname: Option<String>,
    pub working_directory: Option<String>,
}

/// Describe the current host. Fields the host cannot report are `None`.
pub fn detect() -> HostInfo {
    HostInfo {
        os: env::consts::OS.to_string(),
        family: env::consts::FAMILY.to_string(),
        arch: env::consts::ARCH.to_string(),
        hostname: hostname::get()
            .ok()
            .map(|name| name.to_string_lossy().into_owned()),
        working_directory: env::current_dir()
            .ok()
            .map(|dir| dir.display().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_reports_compile_time_platform() {
        let info = detect();
        assert_eq!(info.os, env::consts::OS);
        assert_eq!(info.arch, env::consts::ARCH);
        assert!(!info.family.is_empty());
    }
}
