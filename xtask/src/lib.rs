//! # mini xtask
//!
//! Developer setup for the `mini` renderer.
//!
//! ## Usage
//!
//! ```bash
//! cargo xtask setup          # Regenerate compile_flags.txt when stale
//! cargo xtask flags          # Regenerate compile_flags.txt now
//! cargo xtask sdk check      # Is VULKAN_SDK set?
//! cargo xtask doctor         # SDK, include dirs, clangd
//! ```
//!
//! The Vulkan SDK is never downloaded; it has to be installed by hand and
//! exported as `VULKAN_SDK`.

pub mod app;
pub mod cli;
pub mod flags;
pub mod sdk;
pub mod tasks;
pub mod util;
