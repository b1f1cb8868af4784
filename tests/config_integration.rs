//! Integration tests for declaratively configured interfaces

use std::fs;
use std::path::Path;
use std::sync::Arc;

use insta::assert_snapshot;
use interfaces::config::{init_config_dir, load_settings, settings_path};
use interfaces::{Error, InterfaceArgument, InterfaceRegistry, ViewState};
use interfaces_core::testing::MemoryHost;
use tempfile::TempDir;

/// Helper to write a config file into a project directory
fn write_config(path: &Path, content: &str) {
    let config_path = settings_path(path);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(config_path, content).unwrap();
}

#[test]
fn test_default_config_opens_example() {
    let temp = TempDir::new().unwrap();
    init_config_dir(temp.path()).unwrap();

    let registry = InterfaceRegistry::from_settings(&load_settings(temp.path())).unwrap();
    let host = MemoryHost::new();
    let viewer = Arc::new(host.viewer("alex"));

    let view = registry
        .open("example", viewer, InterfaceArgument::empty(), &host)
        .unwrap();

    assert_eq!(view.state(), ViewState::Open);
    assert_eq!(view.container().title(), "Example");
    assert_snapshot!(view.container().render(), @r"
    GGGGGGGGG
    G...N...G
    GGGGGGGGG
    ");
}

#[test]
fn test_transforms_apply_in_file_order() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[[interfaces]]
name = "layers"
rows = 2
title = "Layers"

[[interfaces.transforms]]
kind = "fill"
item = { material = "white_wool" }

[[interfaces.transforms]]
kind = "column"
x = 0
item = { material = "red_wool" }

[[interfaces.transforms]]
kind = "row"
y = 1
item = { material = "blue_wool" }

[[interfaces.transforms]]
kind = "set"
x = 8
y = 1
item = { material = "air" }
"#,
    );

    let registry = InterfaceRegistry::from_settings(&load_settings(temp.path())).unwrap();
    let host = MemoryHost::new();
    let viewer = Arc::new(host.viewer("alex"));
    let view = registry
        .open("layers", viewer, InterfaceArgument::empty(), &host)
        .unwrap();

    assert_snapshot!(view.container().render(), @r"
    RWWWWWWWW
    BBBBBBBB.
    ");
}

#[test]
fn test_out_of_bounds_config_fails_at_open() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[[interfaces]]
name = "short"
rows = 1

[[interfaces.transforms]]
kind = "set"
x = 0
y = 1
item = { material = "stone" }
"#,
    );

    let registry = InterfaceRegistry::from_settings(&load_settings(temp.path())).unwrap();
    let host = MemoryHost::new();
    let viewer = Arc::new(host.viewer("alex"));

    let err = registry
        .open("short", viewer, InterfaceArgument::empty(), &host)
        .unwrap_err();

    assert!(matches!(err, Error::Transformation { index: 0, .. }));
    assert!(err.is_programming_error());
    assert_eq!(host.created_count(), 0);
}

#[test]
fn test_unknown_name_from_config() {
    let temp = TempDir::new().unwrap();
    let registry = InterfaceRegistry::from_settings(&load_settings(temp.path())).unwrap();
    let host = MemoryHost::new();
    let viewer = Arc::new(host.viewer("alex"));

    let err = registry
        .open("nowhere", viewer, InterfaceArgument::empty(), &host)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownInterface { .. }));
}
