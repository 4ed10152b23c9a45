use crate::output::print_json;
use anyhow::bail;
use clap::Subcommand;
use folio_core::profile::Profile;
use std::path::Path;

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show the stored profile
    Show,
    /// Create or update the profile; omitted fields keep their value
    Set {
        /// Owner's display name (required the first time)
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
        #[arg(long)]
        resume_url: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: ProfileSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProfileSubcommand::Show => show(root, json),
        ProfileSubcommand::Set {
            name,
            title,
            bio,
            avatar_url,
            resume_url,
        } => set(root, name, title, bio, avatar_url, resume_url, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let profile = Profile::load(root)?;
    if json {
        return print_json(&profile);
    }
    match profile {
        Some(p) => {
            println!("{}", p.full_name);
            if !p.title.is_empty() {
                println!("{}", p.title);
            }
            if !p.bio.is_empty() {
                println!("\n{}", p.bio);
            }
        }
        None => println!("no profile set — run 'folio profile set --name ...'"),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn set(
    root: &Path,
    name: Option<String>,
    title: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    resume_url: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut profile = match Profile::load(root)? {
        Some(existing) => existing,
        None => match &name {
            Some(n) => Profile::new(n.clone()),
            None => bail!("--name is required when no profile exists yet"),
        },
    };

    if let Some(name) = name {
        profile.full_name = name;
    }
    if let Some(title) = title {
        profile.title = title;
    }
    if let Some(bio) = bio {
        profile.bio = bio;
    }
    if let Some(url) = avatar_url {
        profile.avatar_url = Some(url);
    }
    if let Some(url) = resume_url {
        profile.resume_url = Some(url);
    }

    let stored = Profile::set(root, profile)?;
    if json {
        print_json(&stored)
    } else {
        println!("profile updated for {}", stored.full_name);
        Ok(())
    }
}
