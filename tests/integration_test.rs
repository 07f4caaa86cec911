//! Integration tests for azure-d2-diagram
//!
//! These tests verify the workflow from a collected inventory to the
//! emitted D2 files.

use azure_d2_diagram::{generate_diagram_files, ResourceInventory};
use std::fs;
use tempfile::tempdir;

fn read_test_inventory() -> ResourceInventory {
    let json = fs::read_to_string("src/tests/test_data/inventory_small.json")
        .expect("Failed to read inventory fixture");
    serde_json::from_str(&json).expect("Failed to parse inventory fixture")
}

#[test]
fn test_one_file_per_group_plus_index() {
    let inventory = read_test_inventory();
    assert_eq!(inventory.group_count(), 3);
    assert_eq!(inventory.resource_count(), 4);

    let dir = tempdir().expect("Failed to create temp dir");
    generate_diagram_files(&inventory, dir.path()).expect("Failed to generate files");

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .expect("Failed to read output dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["main.d2", "rg-app.d2", "rg-empty.d2", "rg-net.d2"]
    );
}

#[test]
fn test_index_references_groups_in_inventory_order() {
    let inventory = read_test_inventory();
    let dir = tempdir().expect("Failed to create temp dir");
    generate_diagram_files(&inventory, dir.path()).expect("Failed to generate files");

    let index = fs::read_to_string(dir.path().join("main.d2")).expect("Failed to read index");
    assert_eq!(
        index,
        "import \"./rg-app.d2\"\nimport \"./rg-net.d2\"\nimport \"./rg-empty.d2\"\n\n# Resource Group Connections\n"
    );
}

#[test]
fn test_group_files_carry_shapes_and_leaf_types() {
    let inventory = read_test_inventory();
    let dir = tempdir().expect("Failed to create temp dir");
    generate_diagram_files(&inventory, dir.path()).expect("Failed to generate files");

    let app = fs::read_to_string(dir.path().join("rg-app.d2")).expect("Failed to read rg-app.d2");
    assert!(app.starts_with("rg-app: {\n"));
    assert!(app.contains("  vm-app-01: {\n    shape: rectangle\n    label: vm-app-01\n    type: virtualMachines\n  }\n"));
    assert!(app.contains("  stapp01: {\n    shape: cylinder\n    label: stapp01\n    type: storageAccounts\n  }\n"));
    // Unrecognized leaf type gets the default shape.
    assert!(app.contains("  app-frontend: {\n    shape: rectangle\n    label: app-frontend\n    type: sites\n  }\n"));

    let net = fs::read_to_string(dir.path().join("rg-net.d2")).expect("Failed to read rg-net.d2");
    assert!(net.contains("    shape: cloud\n"));

    let empty =
        fs::read_to_string(dir.path().join("rg-empty.d2")).expect("Failed to read rg-empty.d2");
    assert_eq!(empty, "rg-empty: {\n}\n");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let inventory = read_test_inventory();
    let dir = tempdir().expect("Failed to create temp dir");

    generate_diagram_files(&inventory, dir.path()).expect("Failed to generate files");
    let before: Vec<(String, Vec<u8>)> = {
        let mut files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        files.sort();
        files
            .into_iter()
            .map(|p| (p.display().to_string(), fs::read(&p).unwrap()))
            .collect()
    };

    generate_diagram_files(&inventory, dir.path()).expect("Failed to generate files");
    for (path, bytes) in before {
        assert_eq!(
            fs::read(&path).unwrap(),
            bytes,
            "{path} changed between identical runs"
        );
    }
}

#[test]
fn test_output_dir_is_created_when_absent() {
    let inventory = read_test_inventory();
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("out").join("d2");

    generate_diagram_files(&inventory, &nested).expect("Failed to generate files");
    assert!(nested.join("main.d2").exists());
}
