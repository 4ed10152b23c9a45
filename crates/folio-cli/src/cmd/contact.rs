use crate::output::{print_json, print_table};
use clap::Subcommand;
use folio_core::contact;
use std::path::Path;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ContactSubcommand {
    /// List received messages, newest first
    List,
    /// Delete a message from the inbox
    Remove { id: Uuid },
}

pub fn run(root: &Path, subcmd: ContactSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ContactSubcommand::List => list(root, json),
        ContactSubcommand::Remove { id } => remove(root, id, json),
    }
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let messages = contact::list(root)?;
    if json {
        return print_json(&messages);
    }

    let rows: Vec<Vec<String>> = messages
        .iter()
        .map(|m| {
            vec![
                m.id.map(|u| u.to_string()).unwrap_or_else(|| "?".into()),
                m.received_at.format("%Y-%m-%d %H:%M").to_string(),
                m.name.clone(),
                m.email.clone(),
                preview(&m.message),
            ]
        })
        .collect();
    print_table(&["ID", "RECEIVED", "NAME", "EMAIL", "MESSAGE"], &rows);
    Ok(())
}

fn preview(message: &str) -> String {
    let flat = message.replace('\n', " ");
    if flat.chars().count() > 48 {
        let cut: String = flat.chars().take(47).collect();
        format!("{cut}…")
    } else {
        flat
    }
}

fn remove(root: &Path, id: Uuid, json: bool) -> anyhow::Result<()> {
    contact::delete(root, id)?;
    if json {
        print_json(&serde_json::json!({ "deleted": id }))
    } else {
        println!("removed message {id}");
        Ok(())
    }
}
