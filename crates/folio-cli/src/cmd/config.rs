use crate::output::print_json;
use clap::Subcommand;
use folio_core::config::SiteConfig;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the site configuration (admin token redacted)
    Show,
    /// Set the admin token; pass no value to clear it
    SetToken { token: Option<String> },
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::SetToken { token } => set_token(root, token),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut config = SiteConfig::load(root)?;
    // Never print the secret, in either output mode.
    if config.admin_token.is_some() {
        config.admin_token = Some("<set>".to_string());
    }

    if json {
        return print_json(&config);
    }
    println!("site_title:    {}", config.site_title);
    println!("owner:         {}", config.owner);
    println!("tagline:       {}", config.tagline);
    println!("contact_email: {}", config.contact_email);
    println!("max_upload_mb: {}", config.max_upload_mb);
    println!(
        "admin_token:   {}",
        config.admin_token.as_deref().unwrap_or("<unset>")
    );
    Ok(())
}

fn set_token(root: &Path, token: Option<String>) -> anyhow::Result<()> {
    let mut config = SiteConfig::load(root)?;
    let cleared = token.is_none();
    config.admin_token = token;
    config.save(root)?;
    if cleared {
        println!("admin token cleared — admin surface is open");
    } else {
        println!("admin token set");
    }
    Ok(())
}
