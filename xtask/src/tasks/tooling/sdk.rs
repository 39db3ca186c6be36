use anyhow::Result;

use crate::sdk::{self, VulkanSdk, SDK_ENV_VAR};

pub fn check() -> Result<()> {
    if !sdk::is_installed() {
        eprintln!("[FAIL] {SDK_ENV_VAR} is not set");
        return Err(sdk::SdkError::Missing.into());
    }
    let sdk = VulkanSdk::locate()?;
    eprintln!("[OK] {SDK_ENV_VAR}={}", sdk.root());
    Ok(())
}

pub fn install() -> Result<()> {
    sdk::install()?;
    eprintln!("[OK] Vulkan SDK already present, nothing to install");
    Ok(())
}
