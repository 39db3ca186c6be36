use anyhow::Result;

use crate::cli::{Cli, Cmd, SdkCmd};
use crate::sdk::SDK_ENV_VAR;
use crate::util::repo::resolve_root;

pub fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Cmd::Setup {
            layout,
            force,
            root,
        } => crate::tasks::tooling::setup::run(crate::tasks::tooling::setup::SetupOptions {
            root: resolve_root(root)?,
            layout,
            force,
            trigger: None,
            sdk_value: std::env::var_os(SDK_ENV_VAR),
        }),
        Cmd::Flags { layout, root } => {
            crate::tasks::tooling::flags::run(&resolve_root(root)?, layout)
        }
        Cmd::Sdk { cmd } => match cmd {
            SdkCmd::Check => crate::tasks::tooling::sdk::check(),
            SdkCmd::Install => crate::tasks::tooling::sdk::install(),
        },
        Cmd::Doctor { layout, root, json } => {
            crate::tasks::tooling::doctor::run(&resolve_root(root)?, layout, json)
        }
    }
}
