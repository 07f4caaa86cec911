//! D2 diagram-description file generation.
//!
//! One `<rg_name>.d2` per resource group plus one `main.d2` importing them
//! all. Rendering is pure string construction; names are written verbatim,
//! escaping for D2-unsafe characters is out of scope.

use crate::config;
use crate::error::PipelineError;
use crate::models::{ResourceGroup, ResourceInventory, Shape};
use std::fs;
use std::path::Path;

/// Write one diagram file per resource group plus the `main` index file.
///
/// The output directory is created if absent; pre-existing files with the
/// same names are overwritten without warning. Already-written files stay
/// on disk when a later write fails.
pub fn generate_diagram_files(
    inventory: &ResourceInventory,
    out_dir: &Path,
) -> Result<(), PipelineError> {
    log::info!(
        "#Start generate_diagram_files() groups={} dir={}",
        inventory.group_count(),
        out_dir.display(),
    );

    fs::create_dir_all(out_dir).map_err(|source| PipelineError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    for group in &inventory.groups {
        let path = out_dir.join(format!("{}.{}", group.name, config::FILE_EXT));
        write_file(&path, &render_group_file(group))?;
    }

    let index_path = out_dir.join(format!("main.{}", config::FILE_EXT));
    write_file(&index_path, &render_index_file(inventory))?;

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), PipelineError> {
    log::debug!("writing {}", path.display());
    fs::write(path, contents).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the diagram file for one resource group: a container block named
/// after the group, one child block per resource in inventory order.
pub fn render_group_file(group: &ResourceGroup) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}: {{\n", group.name));
    for resource in &group.resources {
        let leaf_type = resource.leaf_type();
        out.push_str(&format!("  {}: {{\n", resource.name));
        out.push_str(&format!("    shape: {}\n", Shape::for_leaf_type(leaf_type)));
        out.push_str(&format!("    label: {}\n", resource.name));
        out.push_str(&format!("    type: {}\n", leaf_type));
        out.push_str("  }\n");
    }
    out.push_str("}\n");
    out
}

/// Render the index file: one import line per resource group in inventory
/// order, then a placeholder section for manually-authored connections
/// between groups (never computed by this tool).
pub fn render_index_file(inventory: &ResourceInventory) -> String {
    let mut out = String::new();
    for group in &inventory.groups {
        out.push_str(&format!(
            "import \"./{}.{}\"\n",
            group.name,
            config::FILE_EXT
        ));
    }
    out.push_str("\n# Resource Group Connections\n");
    out
}
