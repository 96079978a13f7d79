use std::fs;
use std::path::Path;

use crate::io::workspace::WorkspaceError;
use crate::model::config::WorkspaceConfig;
use crate::model::user::User;

/// Read the workspace config, returning both the parsed config and the
/// raw toml_edit document for round-trip-safe editing.
pub fn read_config(
    slate_dir: &Path,
) -> Result<(WorkspaceConfig, toml_edit::DocumentMut), WorkspaceError> {
    let config_path = slate_dir.join("slate.toml");
    let config_text = fs::read_to_string(&config_path).map_err(|e| WorkspaceError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: WorkspaceConfig = toml::from_str(&config_text)?;
    let doc: toml_edit::DocumentMut = config_text.parse()?;
    Ok((config, doc))
}

/// Write the config document back to disk, preserving formatting
pub fn write_config(slate_dir: &Path, doc: &toml_edit::DocumentMut) -> Result<(), WorkspaceError> {
    let config_path = slate_dir.join("slate.toml");
    fs::write(&config_path, doc.to_string()).map_err(|e| WorkspaceError::ReadError {
        path: config_path,
        source: e,
    })?;
    Ok(())
}

/// Append a [[users]] table to the config document
pub fn add_user_to_config(doc: &mut toml_edit::DocumentMut, user: &User) {
    if !doc.contains_key("users") {
        doc["users"] = toml_edit::Item::ArrayOfTables(toml_edit::ArrayOfTables::new());
    }

    if let Some(users) = doc["users"].as_array_of_tables_mut() {
        let mut table = toml_edit::Table::new();
        table["name"] = toml_edit::value(&user.name);
        table["email"] = toml_edit::value(&user.email);
        table["password"] = toml_edit::value(&user.password);
        users.push(table);
    }
}
