use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use folio_core::store;
use folio_core::types::EntityKind;
use std::path::Path;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum EntrySubcommand {
    /// Add a record from a JSON payload (inline, or @file to read from disk)
    Add { kind: EntityKind, payload: String },
    /// List records of a kind (active only by default)
    List {
        kind: EntityKind,
        /// Include inactive records
        #[arg(long)]
        all: bool,
    },
    /// Replace a record from a JSON payload
    Update {
        kind: EntityKind,
        id: Uuid,
        payload: String,
    },
    /// Make a record visible on the site
    Activate { kind: EntityKind, id: Uuid },
    /// Hide a record without deleting it
    Deactivate { kind: EntityKind, id: Uuid },
    /// Set a record's manual position
    Move {
        kind: EntityKind,
        id: Uuid,
        /// New display_order value
        #[arg(long, value_name = "N")]
        to: i64,
    },
    /// Delete a record
    Remove { kind: EntityKind, id: Uuid },
}

pub fn run(root: &Path, subcmd: EntrySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        EntrySubcommand::Add { kind, payload } => add(root, kind, &payload, json),
        EntrySubcommand::List { kind, all } => list(root, kind, all, json),
        EntrySubcommand::Update { kind, id, payload } => update(root, kind, id, &payload, json),
        EntrySubcommand::Activate { kind, id } => set_active(root, kind, id, true, json),
        EntrySubcommand::Deactivate { kind, id } => set_active(root, kind, id, false, json),
        EntrySubcommand::Move { kind, id, to } => move_entry(root, kind, id, to, json),
        EntrySubcommand::Remove { kind, id } => remove(root, kind, id, json),
    }
}

/// Inline JSON, or `@path` to read the payload from a file.
fn parse_payload(raw: &str) -> anyhow::Result<serde_json::Value> {
    let text = if let Some(path) = raw.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("failed to read payload '{path}'"))?
    } else {
        raw.to_string()
    };
    serde_json::from_str(&text).context("payload is not valid JSON")
}

fn add(root: &Path, kind: EntityKind, payload: &str, json: bool) -> anyhow::Result<()> {
    let value = parse_payload(payload)?;
    let created = store::insert_json(root, kind, value)
        .with_context(|| format!("failed to add {kind} entry"))?;
    if json {
        print_json(&created)
    } else {
        println!(
            "added {kind} entry {}",
            created["id"].as_str().unwrap_or("?")
        );
        Ok(())
    }
}

fn list(root: &Path, kind: EntityKind, all: bool, json: bool) -> anyhow::Result<()> {
    let records = if all {
        store::list_all_json(root, kind)?
    } else {
        store::fetch_active_json(root, kind)?
    };
    if json {
        return print_json(&records);
    }

    let rows: Vec<Vec<String>> = records
        .as_array()
        .map(|arr| arr.iter().map(row_for).collect())
        .unwrap_or_default();
    print_table(&["ID", "ENTRY", "ACTIVE", "ORDER"], &rows);
    Ok(())
}

/// One table row from an arbitrary entity value; the label column picks the
/// first human-facing field the kind carries.
fn row_for(value: &serde_json::Value) -> Vec<String> {
    let label = ["title", "name", "platform", "role", "degree"]
        .iter()
        .find_map(|k| value[*k].as_str())
        .unwrap_or("?");
    let active = value["is_active"].as_bool().unwrap_or(true);
    let order = value["display_order"]
        .as_i64()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    vec![
        value["id"].as_str().unwrap_or("?").to_string(),
        label.to_string(),
        active.to_string(),
        order,
    ]
}

fn update(root: &Path, kind: EntityKind, id: Uuid, payload: &str, json: bool) -> anyhow::Result<()> {
    let value = parse_payload(payload)?;
    let updated = store::update_json(root, kind, id, value)
        .with_context(|| format!("failed to update {kind} entry '{id}'"))?;
    if json {
        print_json(&updated)
    } else {
        println!("updated {kind} entry {id}");
        Ok(())
    }
}

fn set_active(root: &Path, kind: EntityKind, id: Uuid, active: bool, json: bool) -> anyhow::Result<()> {
    let updated = store::set_active_json(root, kind, id, active)?;
    if json {
        print_json(&updated)
    } else {
        println!(
            "{} {kind} entry {id}",
            if active { "activated" } else { "deactivated" }
        );
        Ok(())
    }
}

fn move_entry(root: &Path, kind: EntityKind, id: Uuid, to: i64, json: bool) -> anyhow::Result<()> {
    let updated = store::set_order_json(root, kind, id, to)?;
    if json {
        print_json(&updated)
    } else {
        println!("moved {kind} entry {id} to position {to}");
        Ok(())
    }
}

fn remove(root: &Path, kind: EntityKind, id: Uuid, json: bool) -> anyhow::Result<()> {
    store::delete_json(root, kind, id)?;
    if json {
        print_json(&serde_json::json!({ "deleted": id }))
    } else {
        println!("removed {kind} entry {id}");
        Ok(())
    }
}
