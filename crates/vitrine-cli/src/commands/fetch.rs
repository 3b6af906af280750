use anyhow::Result;

use vitrine_core::content::{ContentClient, ContentProvider};
use vitrine_core::AppConfig;

use crate::FetchSection;

pub async fn run(config: &AppConfig, section: FetchSection, json: bool) -> Result<()> {
    let client = ContentClient::new(&config.api)?;

    match section {
        FetchSection::Team => {
            let members = client.team().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&members)?);
                return Ok(());
            }

            if members.is_empty() {
                println!("No team members published.");
                return Ok(());
            }

            println!("Team members ({}):\n", members.len());
            for member in &members {
                println!("  {} - {}", member.name, member.role);
                if let Some(bio) = &member.bio {
                    println!("    {}", bio);
                }
                if let Some(github) = &member.social.github {
                    println!("    GitHub: {}", github);
                }
                println!();
            }
        }
        FetchSection::Projects => {
            let projects = client.projects().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
                return Ok(());
            }

            if projects.is_empty() {
                println!("No projects published.");
                return Ok(());
            }

            println!("Projects ({}):\n", projects.len());
            for project in &projects {
                let category = project.category.as_deref().unwrap_or("(uncategorized)");
                println!("  {} [{}]", project.title, category);
                println!("    {}", project.description_preview(100));
                if let Some(url) = &project.live_url {
                    println!("    Live: {}", url);
                }
                if let Some(created) = project.created_at {
                    println!("    Since: {}", created.format("%Y-%m-%d"));
                }
                println!();
            }
        }
    }

    Ok(())
}
