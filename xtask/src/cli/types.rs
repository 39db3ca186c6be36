use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::flags::Layout;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "mini developer setup (Vulkan SDK lookup, compile_flags.txt for clangd)")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Regenerate compile_flags.txt if it is missing or older than this tool.
    Setup {
        #[arg(long, value_enum, default_value_t = Layout::Mini)]
        layout: Layout,

        /// Regenerate even when compile_flags.txt looks up to date.
        #[arg(long)]
        force: bool,

        /// Repository root (defaults to the workspace containing xtask).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Write compile_flags.txt unconditionally.
    Flags {
        #[arg(long, value_enum, default_value_t = Layout::Mini)]
        layout: Layout,

        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Vulkan SDK presence.
    Sdk {
        #[command(subcommand)]
        cmd: SdkCmd,
    },

    /// Check that the SDK, include directories and clangd are where the flags expect.
    Doctor {
        #[arg(long, value_enum, default_value_t = Layout::Mini)]
        layout: Layout,

        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Print the report as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SdkCmd {
    /// Fail unless VULKAN_SDK is set.
    Check,

    /// Install the SDK (not automated: fails unless it is already present).
    Install,
}
