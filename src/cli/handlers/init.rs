use std::fs;

use crate::cli::commands::InitArgs;

const SLATE_TOML_TEMPLATE: &str = r##"[workspace]
name = "{name}"

# How far ahead the Later bucket reaches, in days.
[settings]
horizon_days = 365

# --- Users ---
# Sign-in is mocked against this list. Add users here or with: sl signup

[[users]]
name = "Demo"
email = "demo@slate.local"
password = "demo"
"##;

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = std::env::current_dir()?;
    let slate_dir = root.join("slate");

    if slate_dir.join("slate.toml").exists() && !args.force {
        return Err("slate/ already exists here (use --force to reinitialize)".into());
    }

    let name = match args.name {
        Some(name) => name,
        None => root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "slate".to_string()),
    };

    fs::create_dir_all(slate_dir.join("data"))?;
    fs::write(
        slate_dir.join("slate.toml"),
        SLATE_TOML_TEMPLATE.replace("{name}", &name),
    )?;

    println!("initialized slate workspace '{}' in {}", name, slate_dir.display());
    Ok(())
}
