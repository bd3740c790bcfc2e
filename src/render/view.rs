//! Pure view model
//!
//! Everything here maps data to a replacement view; nothing touches the
//! terminal or the network.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::api::Project;
use crate::nav::{NavEntry, Page, Tab, nav_entries};

pub(crate) const NO_DESCRIPTION: &str = "No description";
pub(crate) const MAIL_NOT_CONFIGURED: &str = "Not configured";

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Containers a project list can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum Container {
    #[serde(rename = "recent-projects")]
    RecentProjects,
    #[serde(rename = "project-list")]
    ProjectList,
}

impl Container {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Container::RecentProjects => "Recent projects",
            Container::ProjectList => "All projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct EmptyState {
    pub(crate) title: &'static str,
    pub(crate) message: &'static str,
    pub(crate) action_label: &'static str,
    pub(crate) action_tab: Tab,
}

const EMPTY_STATE: EmptyState = EmptyState {
    title: "No projects found",
    message: "Create your first project to get started.",
    action_label: "Create project",
    action_tab: Tab::Create,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProjectCard {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) mail_username: String,
    pub(crate) api_key: String,
    pub(crate) created_at: Option<String>,
    /// Command that copies `api_key` to the clipboard
    pub(crate) copy_command: String,
    pub(crate) details_command: String,
}

impl ProjectCard {
    pub(crate) fn from_project(project: &Project) -> Self {
        ProjectCard {
            id: project.id,
            name: project.name.clone(),
            description: non_empty_or(project.description.as_deref(), NO_DESCRIPTION),
            mail_username: non_empty_or(project.mail_username.as_deref(), MAIL_NOT_CONFIGURED),
            api_key: project.api_key.clone(),
            created_at: project.created_at.as_deref().map(format_created_at),
            copy_command: format!("projdash copy {}", project.id),
            details_command: format!("projdash details {}", project.id),
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Server timestamps come without an offset; anything unparseable is shown as-is
fn format_created_at(raw: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(CREATED_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(CREATED_FORMAT).to_string();
    }
    raw.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContainerContent {
    Empty(EmptyState),
    Cards { cards: Vec<ProjectCard> },
}

/// Full replacement content of one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ContainerView {
    pub(crate) container: Container,
    pub(crate) content: ContainerContent,
}

impl ContainerView {
    #[cfg(test)]
    pub(crate) fn card_count(&self) -> usize {
        match &self.content {
            ContainerContent::Empty(_) => 0,
            ContainerContent::Cards { cards } => cards.len(),
        }
    }
}

/// Render `projects` into `container`, one card per project in input order
pub(crate) fn render_projects(projects: &[Project], container: Container) -> ContainerView {
    let content = if projects.is_empty() {
        ContainerContent::Empty(EMPTY_STATE)
    } else {
        ContainerContent::Cards {
            cards: projects.iter().map(ProjectCard::from_project).collect(),
        }
    };
    ContainerView { container, content }
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct StatsView {
    #[serde(rename = "total-projects")]
    pub(crate) total_projects: usize,
    // The API does not report email counters yet.
    #[serde(rename = "verified-emails")]
    pub(crate) verified_emails: u64,
    #[serde(rename = "sent-emails")]
    pub(crate) sent_emails: u64,
}

impl StatsView {
    pub(crate) fn from_projects(projects: &[Project]) -> Self {
        StatsView {
            total_projects: projects.len(),
            verified_emails: 0,
            sent_emails: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FormField {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) flag: &'static str,
    pub(crate) required: bool,
}

pub(crate) const CREATE_FORM: [FormField; 4] = [
    FormField {
        id: "project-name",
        label: "Project name",
        flag: "--name",
        required: true,
    },
    FormField {
        id: "project-description",
        label: "Description",
        flag: "--description",
        required: false,
    },
    FormField {
        id: "mail-username",
        label: "Mail username",
        flag: "--mail-username",
        required: false,
    },
    FormField {
        id: "mail-password",
        label: "Mail password",
        flag: "--mail-password",
        required: false,
    },
];

/// Content of the visible panel. `None` means that data never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub(crate) enum Panel {
    Dashboard {
        stats: Option<StatsView>,
        recent: Option<ContainerView>,
    },
    Projects {
        list: Option<ContainerView>,
    },
    Create {
        fields: Vec<FormField>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Screen {
    pub(crate) nav: Vec<NavEntry>,
    pub(crate) panel_id: String,
    pub(crate) panel: Panel,
}

impl Screen {
    pub(crate) fn new(active: Tab, panel: Panel) -> Self {
        Screen {
            nav: nav_entries(active),
            panel_id: active.panel_id(),
            panel,
        }
    }
}

/// Page the client ends up on when a command renders no screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct PageView {
    pub(crate) page: Page,
    pub(crate) signed_in: bool,
}

impl PageView {
    pub(crate) const SIGNED_OUT: PageView = PageView {
        page: Page::Login,
        signed_in: false,
    };
}
