use crate::output::{print_json, print_table};
use folio_core::config::SiteConfig;
use folio_core::view::LandingView;
use std::path::Path;

/// Summarize what the landing page would render right now.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = SiteConfig::load(root)?;
    let view = LandingView::assemble(root, &config);

    if json {
        return print_json(&view);
    }

    println!("{}", view.site_title);
    match &view.profile {
        Some(p) => println!("profile: {} — {}", p.full_name, p.title),
        None => println!("profile: (not set)"),
    }
    println!();

    let skill_count: usize = view.skills.iter().map(|g| g.skills.len()).sum();
    let rows = vec![
        vec!["projects".to_string(), view.projects.len().to_string()],
        vec![
            "skills".to_string(),
            format!("{} in {} groups", skill_count, view.skills.len()),
        ],
        vec![
            "certifications".to_string(),
            view.certifications.len().to_string(),
        ],
        vec![
            "social links".to_string(),
            view.social_links.len().to_string(),
        ],
    ];
    print_table(&["SECTION", "VISIBLE"], &rows);
    Ok(())
}
