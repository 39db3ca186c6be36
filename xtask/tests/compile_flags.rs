use clap::Parser;
use mini_xtask::cli::{Cli, Cmd, SdkCmd};
use mini_xtask::flags::{self, Layout, FLAGS_FILE};
use mini_xtask::sdk::{SdkError, VulkanSdk};
use mini_xtask::tasks::tooling::flags as flags_task;
use mini_xtask::tasks::tooling::setup::{self, SetupOptions};
use tempfile::TempDir;

#[test]
fn sdk_line_uses_doubled_backslashes() {
    let tmp = TempDir::new().unwrap();
    let sdk = VulkanSdk::from_value(Some(r"C:\VulkanSDK\1.3.275.0".into())).unwrap();

    let path = flags::generate(Layout::Mini, &sdk, tmp.path()).unwrap();
    let content = std::fs::read_to_string(path).unwrap();

    assert!(content.lines().any(|l| l == r"-IC:\\VulkanSDK\\1.3.275.0/Include"));
}

#[test]
fn missing_sdk_keeps_previous_flags_file() {
    let tmp = TempDir::new().unwrap();
    let flags_file = tmp.path().join(FLAGS_FILE);
    std::fs::write(&flags_file, "old").unwrap();

    let err = flags_task::run_with(tmp.path(), Layout::Mini, None).unwrap_err();
    assert_eq!(err.downcast_ref::<SdkError>(), Some(&SdkError::Missing));

    let err = setup::run(SetupOptions {
        root: tmp.path().to_path_buf(),
        layout: Layout::Mini,
        force: true,
        trigger: None,
        sdk_value: None,
    })
    .unwrap_err();
    assert_eq!(err.downcast_ref::<SdkError>(), Some(&SdkError::Missing));

    assert_eq!(std::fs::read(&flags_file).unwrap(), b"old");
}

#[test]
fn output_is_deterministic_across_dirs() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let sdk = VulkanSdk::from_value(Some("/opt/VulkanSDK".into())).unwrap();

    let first = std::fs::read(flags::generate(Layout::Deps, &sdk, a.path()).unwrap()).unwrap();
    let second = std::fs::read(flags::generate(Layout::Deps, &sdk, b.path()).unwrap()).unwrap();

    assert_eq!(first, second);
    assert!(first.ends_with(b"-std=c++17"));
}

#[test]
fn cli_defaults_to_mini_layout() {
    let cli = Cli::try_parse_from(["xtask", "setup"]).unwrap();
    match cli.cmd {
        Cmd::Setup {
            layout,
            force,
            root,
        } => {
            assert_eq!(layout, Layout::Mini);
            assert!(!force);
            assert!(root.is_none());
        }
        _ => panic!("expected setup"),
    }
}

#[test]
fn cli_parses_flags_options() {
    let cli = Cli::try_parse_from([
        "xtask", "-vv", "flags", "--layout", "deps", "--root", "/src/mini",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.cmd {
        Cmd::Flags { layout, root } => {
            assert_eq!(layout, Layout::Deps);
            assert_eq!(root.unwrap().to_str(), Some("/src/mini"));
        }
        _ => panic!("expected flags"),
    }
}

#[test]
fn cli_parses_sdk_subcommands() {
    let cli = Cli::try_parse_from(["xtask", "sdk", "install"]).unwrap();
    assert!(matches!(cli.cmd, Cmd::Sdk { cmd: SdkCmd::Install }));
    assert!(Cli::try_parse_from(["xtask", "sdk", "download"]).is_err());
}

#[test]
fn cli_rejects_unknown_layout() {
    assert!(Cli::try_parse_from(["xtask", "doctor", "--layout", "cmake"]).is_err());
}
