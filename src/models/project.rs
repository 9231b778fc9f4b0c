//! Portfolio project and workbench models.

use serde::Serialize;

/// Lifecycle state of a portfolio project.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Shipped,
    InProgress,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Shipped,
        ProjectStatus::InProgress,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Shipped => "shipped",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// An open source project listed on the projects page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: ProjectStatus,
    pub year: String,
    pub stars: u32,
    pub forks: u32,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub featured: bool,
    pub highlight: bool,
}

/// A repository currently on the workbench.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WipItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Completion estimate, 0-100
    pub progress: u8,
    pub last_updated: String,
    pub url: String,
    pub branch: String,
    pub commits: u32,
}

/// Kind of entry in the workbench activity feed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Commit,
    Branch,
}

/// One line of the workbench activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub project: String,
    pub message: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_names() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::from_str("all"), None);
        assert_eq!(
            serde_json::to_value(ProjectStatus::InProgress).unwrap(),
            "in-progress"
        );
    }
}
