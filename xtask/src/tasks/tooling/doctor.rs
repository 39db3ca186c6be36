use anyhow::{bail, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::path::Path;

use crate::flags::Layout;
use crate::sdk::{VulkanSdk, SDK_ENV_VAR, SDK_INCLUDE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warn,
    Fail,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Fail => "[FAIL]",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub status: Status,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub layout: Layout,
    pub checks: Vec<Check>,
}

impl Report {
    pub fn ok(&self) -> bool {
        self.checks.iter().all(|c| c.status != Status::Fail)
    }

    fn push(&mut self, name: impl Into<String>, status: Status, detail: impl Into<String>) {
        self.checks.push(Check {
            name: name.into(),
            status,
            detail: detail.into(),
        });
    }
}

/// Host facts the report is built from, gathered once so the checks stay pure.
pub struct Probe {
    pub sdk_value: Option<OsString>,
    pub clangd_found: bool,
    pub os: &'static str,
}

impl Probe {
    pub fn from_host() -> Self {
        Self {
            sdk_value: std::env::var_os(SDK_ENV_VAR),
            clangd_found: which::which("clangd").is_ok(),
            os: std::env::consts::OS,
        }
    }
}

pub fn run(root: &Path, layout: Layout, json: bool) -> Result<()> {
    let report = collect(root, layout, Probe::from_host());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for check in &report.checks {
            eprintln!("{} {}: {}", check.status.tag(), check.name, check.detail);
        }
    }

    if !report.ok() {
        bail!("doctor checks failed");
    }
    Ok(())
}

pub fn collect(root: &Path, layout: Layout, probe: Probe) -> Report {
    let mut report = Report {
        layout,
        checks: Vec::new(),
    };

    match VulkanSdk::from_value(probe.sdk_value) {
        Ok(sdk) => {
            report.push(SDK_ENV_VAR, Status::Ok, sdk.root());
            check_sdk_headers(&mut report, &sdk);
        }
        Err(err) => {
            report.push(SDK_ENV_VAR, Status::Fail, err.to_string());
        }
    }

    for include in layout.includes() {
        let dir = root.join(include);
        if dir.is_dir() {
            report.push(*include, Status::Ok, dir.display().to_string());
        } else {
            report.push(
                *include,
                Status::Warn,
                format!("missing include directory: {}", dir.display()),
            );
        }
    }

    if probe.clangd_found {
        report.push("clangd", Status::Ok, "found in PATH");
    } else {
        report.push("clangd", Status::Warn, "missing `clangd` in PATH");
    }

    if probe.os == "windows" {
        report.push("host", Status::Ok, probe.os);
    } else {
        report.push(
            "host",
            Status::Warn,
            format!("mini only builds on Windows (host: {})", probe.os),
        );
    }

    report
}

fn check_sdk_headers(report: &mut Report, sdk: &VulkanSdk) {
    let include = sdk.include_dir();
    if include.is_dir() {
        report.push("sdk headers", Status::Ok, include.display().to_string());
        return;
    }

    // Linux SDK tarballs ship `include`; the flags still reference `Include`.
    let lower = Path::new(sdk.root()).join(SDK_INCLUDE_DIR.to_lowercase());
    if lower.is_dir() {
        report.push(
            "sdk headers",
            Status::Warn,
            format!(
                "found {} but flags reference {SDK_INCLUDE_DIR}",
                lower.display()
            ),
        );
    } else {
        report.push(
            "sdk headers",
            Status::Fail,
            format!("missing SDK headers: {}", include.display()),
        );
    }
}
