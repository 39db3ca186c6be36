//! First-time and incremental developer setup.
//!
//! Regenerates `compile_flags.txt` only when it is missing or older than the
//! trigger file. The include lists are compiled into this binary, so the
//! default trigger is the running executable.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::flags::{self, Layout, FLAGS_FILE};

pub struct SetupOptions {
    pub root: PathBuf,
    pub layout: Layout,
    pub force: bool,
    /// File whose modification invalidates the flags file.
    pub trigger: Option<PathBuf>,
    /// `VULKAN_SDK` as read from the environment.
    pub sdk_value: Option<OsString>,
}

pub fn run(opts: SetupOptions) -> Result<()> {
    warn_if_unsupported_host();

    let flags_file = opts.root.join(FLAGS_FILE);
    let trigger = match opts.trigger {
        Some(trigger) => trigger,
        None => std::env::current_exe().context("Failed to resolve the xtask executable")?,
    };

    if !opts.force && !needs_regeneration(&flags_file, &trigger)? {
        eprintln!("[OK] {} is up to date", flags_file.display());
        return Ok(());
    }

    eprintln!("--[REGENERATING COMPILE_FLAGS]--");
    let sdk = crate::sdk::ensure_installed_with(opts.sdk_value)?;

    eprintln!("Generating {FLAGS_FILE}...");
    let path = flags::generate(opts.layout, &sdk, &opts.root)?;
    eprintln!("[OK] {} ({} layout)", path.display(), opts.layout.id());
    Ok(())
}

/// True when `flags_file` is missing or `trigger` was modified after it.
pub fn needs_regeneration(flags_file: &Path, trigger: &Path) -> Result<bool> {
    if !flags_file.exists() {
        tracing::info!(path = %flags_file.display(), "flags file missing");
        return Ok(true);
    }

    let generated = modified(flags_file)?;
    let changed = modified(trigger)?;
    tracing::debug!(?generated, ?changed, "comparing modification times");
    Ok(changed > generated)
}

fn modified(path: &Path) -> Result<SystemTime> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("Failed to read modification time of {}", path.display()))
}

fn warn_if_unsupported_host() {
    if !cfg!(windows) {
        eprintln!(
            "[WARN] mini only builds on Windows; generating flags on {} anyway",
            std::env::consts::OS
        );
    }
}
