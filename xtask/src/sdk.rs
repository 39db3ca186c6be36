//! Vulkan SDK lookup.
//!
//! The SDK is located through `VULKAN_SDK` only. There is no download or
//! install logic: when the variable is absent the developer has to install
//! the SDK by hand.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the SDK root.
pub const SDK_ENV_VAR: &str = "VULKAN_SDK";

/// Directory under the SDK root that holds the Vulkan headers.
pub const SDK_INCLUDE_DIR: &str = "Include";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// `VULKAN_SDK` is not set.
    #[error("VULKAN_SDK is not set: the Vulkan SDK must be installed manually (there is no download logic)")]
    Missing,

    /// `VULKAN_SDK` is set but cannot be written into a text file.
    #[error("VULKAN_SDK is not valid UTF-8: {0:?}")]
    NotUnicode(OsString),
}

/// A located Vulkan SDK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VulkanSdk {
    root: String,
}

impl VulkanSdk {
    /// Locate the SDK from the process environment.
    pub fn locate() -> Result<Self, SdkError> {
        Self::from_value(env::var_os(SDK_ENV_VAR))
    }

    /// Locate the SDK from an explicit `VULKAN_SDK` value.
    ///
    /// An empty value counts as set.
    pub fn from_value(value: Option<OsString>) -> Result<Self, SdkError> {
        let value = value.ok_or(SdkError::Missing)?;
        let root = value.into_string().map_err(SdkError::NotUnicode)?;
        Ok(Self { root })
    }

    /// The SDK root exactly as found in the environment.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Header directory on disk.
    pub fn include_dir(&self) -> PathBuf {
        PathBuf::from(&self.root).join(SDK_INCLUDE_DIR)
    }

    /// Header directory as written into `compile_flags.txt`.
    pub fn include_flag_path(&self) -> String {
        format!("{}/{SDK_INCLUDE_DIR}", escape_backslashes(&self.root))
    }
}

/// Whether `VULKAN_SDK` is present in the process environment.
pub fn is_installed() -> bool {
    env::var_os(SDK_ENV_VAR).is_some()
}

/// Acquire the SDK.
///
/// Acquisition is not implemented, so this only succeeds when the SDK is
/// already present.
pub fn install() -> Result<(), SdkError> {
    install_with(env::var_os(SDK_ENV_VAR).as_deref())
}

/// [`install`] against an explicit `VULKAN_SDK` value.
pub fn install_with(value: Option<&OsStr>) -> Result<(), SdkError> {
    if value.is_some() {
        return Ok(());
    }
    tracing::debug!("no SDK acquisition available, {SDK_ENV_VAR} unset");
    Err(SdkError::Missing)
}

/// Check for the SDK, fall back to [`install`], then locate it.
pub fn ensure_installed() -> Result<VulkanSdk, SdkError> {
    ensure_installed_with(env::var_os(SDK_ENV_VAR))
}

/// [`ensure_installed`] against an explicit `VULKAN_SDK` value.
pub fn ensure_installed_with(value: Option<OsString>) -> Result<VulkanSdk, SdkError> {
    install_with(value.as_deref())?;
    VulkanSdk::from_value(value)
}

/// Double every backslash so a Windows path survives as a literal in the
/// flags file. Paths without backslashes are returned unchanged.
pub fn escape_backslashes(path: &str) -> String {
    path.replace('\\', "\\\\")
}
