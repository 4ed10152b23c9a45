pub mod config;
pub mod contact;
pub mod entry;
pub mod profile;
pub mod show;

use crate::output::print_json;
use folio_core::config::SiteConfig;
use std::path::Path;

pub fn init(root: &Path, owner: &str, json: bool) -> anyhow::Result<()> {
    let config = SiteConfig::init_at(root, owner)?;
    if json {
        print_json(&config)
    } else {
        println!("initialized folio workspace at {}", root.display());
        Ok(())
    }
}
