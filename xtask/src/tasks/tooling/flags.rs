use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::flags::{Layout, FLAGS_FILE};
use crate::sdk::{VulkanSdk, SDK_ENV_VAR};

/// Unconditionally regenerate `compile_flags.txt` under `root`.
pub fn run(root: &Path, layout: Layout) -> Result<()> {
    run_with(root, layout, std::env::var_os(SDK_ENV_VAR)).map(|_| ())
}

/// [`run`] against an explicit `VULKAN_SDK` value.
pub fn run_with(root: &Path, layout: Layout, sdk_value: Option<OsString>) -> Result<PathBuf> {
    // Fail before touching the file when the SDK is absent.
    let sdk = VulkanSdk::from_value(sdk_value)?;
    tracing::info!(sdk = sdk.root(), layout = layout.id(), "generating compile flags");

    eprintln!("Generating {FLAGS_FILE}...");
    let path = crate::flags::generate(layout, &sdk, root)?;
    eprintln!("[OK] {}", path.display());
    Ok(path)
}
