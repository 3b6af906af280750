//! Typed content layer for the showcase sections: REST payload models
//! and the async providers that resolve them before a section mounts.

pub mod models;
pub mod provider;

pub use models::{HeroSlide, Project, SocialLinks, TeamMember};
pub use provider::{sample_projects, sample_team, ContentClient, ContentProvider, SampleContent};
