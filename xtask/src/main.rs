//! Developer tasks: config schema output and fixture validation.
//!
//! The library crates never touch the filesystem; anything that reads repo files lives here.

use anyhow::{Context, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Repository root: the workspace directory holding `xtask/`.
fn repo_root() -> PathBuf {
    let xtask_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    xtask_dir.parent().unwrap_or(xtask_dir).to_path_buf()
}

/// Config schema as pretty JSON with a trailing newline.
fn config_schema_json() -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(&tagguard_settings::config_schema())
        .context("config schema should serialize")?;
    json.push('\n');
    Ok(json)
}

/// Validate every fixture `tagguard.toml` against the generated config schema
/// and check that it resolves.
fn validate_fixtures() -> anyhow::Result<()> {
    let schema = serde_json::to_value(tagguard_settings::config_schema())
        .context("Failed to serialize config schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let dir = repo_root().join("tests").join("fixtures");
    let mut checked = 0;
    let mut errors = Vec::new();

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for case in entries {
        let path = case.join("tagguard.toml");
        if !path.exists() {
            continue;
        }
        checked += 1;

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: toml::Value = match toml::from_str(&text) {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!("{}: {}", path.display(), e));
                continue;
            }
        };
        let instance = serde_json::to_value(&value)?;
        for err in validator.iter_errors(&instance) {
            errors.push(format!("{}: {}", path.display(), err));
        }

        let resolved = tagguard_settings::parse_config_toml(&text).and_then(|cfg| {
            tagguard_settings::resolve_config(cfg, tagguard_settings::Overrides::default())
        });
        if let Err(e) = resolved {
            errors.push(format!("{}: {:#}", path.display(), e));
        }
    }

    if errors.is_empty() {
        println!("✓ {checked} fixture config(s) valid");
        return Ok(());
    }

    for e in &errors {
        eprintln!("  ✗ {e}");
    }
    bail!("{} fixture config error(s)", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help               Show this message");
    eprintln!("  print-schema       Print the tagguard.toml JSON schema to stdout");
    eprintln!("  validate-fixtures  Validate tests/fixtures/*/tagguard.toml against the config schema");
    eprintln!("  print-schema-ids   Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "print-schema" => {
            print!("{}", config_schema_json()?);
            Ok(())
        }
        "validate-fixtures" => validate_fixtures(),
        "print-schema-ids" => {
            println!("{}", tagguard_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
