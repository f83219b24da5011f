//! Content record types

use folio_core::FolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of timeline entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Education,
    Award,
    Certification,
    Experience,
}

impl AchievementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementKind::Education => "education",
            AchievementKind::Award => "award",
            AchievementKind::Certification => "certification",
            AchievementKind::Experience => "experience",
        }
    }

    /// Icon name shown on the timeline dot
    pub fn icon(self) -> &'static str {
        match self {
            AchievementKind::Education => "book-open",
            AchievementKind::Award | AchievementKind::Certification => "award",
            AchievementKind::Experience => "briefcase",
        }
    }
}

/// One entry on the achievements timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub date: String,
    pub title: String,
    pub description: String,
    pub kind: AchievementKind,
}

/// Category tag used by the project filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Other => "other",
        }
    }

    /// Button label in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Other => "Other",
        }
    }
}

/// Active project filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Every filter, in filter-bar order
    pub fn all() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(ProjectFilter::Only))
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectFilter::All => f.write_str("all"),
            ProjectFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ProjectFilter::All),
            "web" => Ok(ProjectFilter::Only(ProjectCategory::Web)),
            "mobile" => Ok(ProjectFilter::Only(ProjectCategory::Mobile)),
            "other" => Ok(ProjectFilter::Only(ProjectCategory::Other)),
            other => Err(FolioError::invalid("project filter", other)),
        }
    }
}

/// A project card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    pub category: ProjectCategory,
}

/// A project referenced from a skill
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillProject {
    pub name: String,
    pub link: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub projects: Vec<SkillProject>,
}

/// One skills panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    /// Rows shown in the panel: one per linked project
    pub fn row_count(&self) -> usize {
        self.skills
            .iter()
            .map(|skill| skill.projects.len().max(1))
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    pub fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
        }
    }

    /// Section id the link points at (`#about` -> `about`)
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub caption: String,
    pub url: String,
}

/// The site owner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub headline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}
