use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One slide of the hero banner.
///
/// The hero deck is editorial copy bundled with the application; it is
/// not served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
}

impl HeroSlide {
    /// The bundled hero deck.
    pub fn deck() -> Vec<HeroSlide> {
        vec![
            HeroSlide {
                title: "Innovative Software, Engineered to Last".to_string(),
                subtitle: "We turn ambitious ideas into dependable digital products".to_string(),
                description: "From first sketch to production, we build applications \
                              that grow with your business and hold up under real load."
                    .to_string(),
                cta: "Start your project".to_string(),
            },
            HeroSlide {
                title: "Applied AI & Machine Learning".to_string(),
                subtitle: "Intelligent features backed by production-grade pipelines".to_string(),
                description: "We put machine learning to work where it pays off: \
                              smarter search, automation and insight built into the \
                              products you already run."
                    .to_string(),
                cta: "Explore AI solutions".to_string(),
            },
            HeroSlide {
                title: "Cloud Infrastructure at Scale".to_string(),
                subtitle: "Resilient, elastic and secure by construction".to_string(),
                description: "We design cloud platforms that scale with demand and \
                              keep running when things go wrong, without surprise \
                              bills at the end of the month."
                    .to_string(),
                cta: "See our cloud services".to_string(),
            },
        ]
    }
}

/// Social profile links attached to a team member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// A studio team member as returned by `/api/team-members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

/// A portfolio project as returned by `/api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Get a preview of the description (first N characters)
    pub fn description_preview(&self, max_len: usize) -> String {
        let text = self.description.as_str();

        if max_len == 0 {
            return String::new();
        }

        if text.len() <= max_len {
            text.to_string()
        } else {
            let mut end = 0;
            for (idx, ch) in text.char_indices() {
                let next = idx + ch.len_utf8();
                if next > max_len {
                    break;
                }
                end = next;
            }
            format!("{}...", &text[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_member_decodes_with_missing_optionals() {
        let json = r#"{
            "id": "tm-01",
            "name": "Lina Haddad",
            "role": "Lead Engineer"
        }"#;
        let member: TeamMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.name, "Lina Haddad");
        assert!(member.bio.is_none());
        assert!(member.social.github.is_none());
    }

    #[test]
    fn test_project_decodes_full_payload() {
        let json = r#"{
            "id": "pr-07",
            "title": "Freight Exchange",
            "description": "Realtime marketplace for regional logistics.",
            "category": "Web Platform",
            "live_url": "https://freight.example.com",
            "created_at": "2024-11-02T09:30:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.category.as_deref(), Some("Web Platform"));
        assert!(project.repo_url.is_none());
        assert_eq!(project.created_at.unwrap().format("%Y-%m-%d").to_string(), "2024-11-02");
    }

    #[test]
    fn test_description_preview_respects_char_boundaries() {
        let project = Project {
            id: "p".to_string(),
            title: "t".to_string(),
            description: "Vélo électrique for urban fleets".to_string(),
            category: None,
            image_url: None,
            live_url: None,
            repo_url: None,
            created_at: None,
        };
        let preview = project.description_preview(5);
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= 8);
    }

    #[test]
    fn test_hero_deck_is_nonempty() {
        assert!(!HeroSlide::deck().is_empty());
    }
}
