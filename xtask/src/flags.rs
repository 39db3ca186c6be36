//! `compile_flags.txt` generation.
//!
//! The file is read by clangd, never by this tool. It is rewritten in full on
//! every run.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::sdk::VulkanSdk;

/// Name of the generated file, relative to the repo root.
pub const FLAGS_FILE: &str = "compile_flags.txt";

/// Language standard flag, always the last line.
pub const CXX_STANDARD_FLAG: &str = "-std=c++17";

/// Fixed include directory lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Vendored dependencies under `extra/` (imgui, glfw, volk, glm).
    #[default]
    #[value(name = "mini")]
    Mini,
    /// Older tree with imgui and glfw under `deps/`.
    #[value(name = "deps")]
    Deps,
}

impl Layout {
    pub fn id(self) -> &'static str {
        match self {
            Self::Mini => "mini",
            Self::Deps => "deps",
        }
    }

    /// Include directories, in emission order.
    pub fn includes(self) -> &'static [&'static str] {
        match self {
            Self::Mini => &[
                "mini",
                "extra/imgui",
                "extra/glfw/include",
                "extra/adapter",
                "extra/volk",
                "extra/glm",
            ],
            Self::Deps => &[
                "mini",
                "deps/imgui/imgui",
                "deps/glfw/include",
                "extra/adapter",
            ],
        }
    }
}

/// Contents of `compile_flags.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileFlags {
    /// Repo-relative include directories.
    pub includes: Vec<String>,
    /// SDK header directory, already escaped.
    pub sdk_include: String,
    pub standard: String,
}

impl CompileFlags {
    pub fn new(layout: Layout, sdk: &VulkanSdk) -> Self {
        Self {
            includes: layout.includes().iter().map(ToString::to_string).collect(),
            sdk_include: sdk.include_flag_path(),
            standard: CXX_STANDARD_FLAG.to_string(),
        }
    }

    /// One `-I` line per include, the SDK include, then the standard flag
    /// with no trailing newline.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for include in &self.includes {
            out.push_str("-I");
            out.push_str(include);
            out.push('\n');
        }
        out.push_str("-I");
        out.push_str(&self.sdk_include);
        out.push('\n');
        out.push_str(&self.standard);
        out
    }

    /// Write `compile_flags.txt` into `dir`, replacing any previous file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(FLAGS_FILE);
        std::fs::write(&path, self.content())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote compile flags");
        Ok(path)
    }
}

/// Generate `compile_flags.txt` for `layout` into `dir`.
pub fn generate(layout: Layout, sdk: &VulkanSdk, dir: &Path) -> Result<PathBuf> {
    CompileFlags::new(layout, sdk).write_to(dir)
}
