use clap::ValueEnum;
use serde::Serialize;

/// View tabs of the dashboard page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Tab {
    /// Overview with stats and the most recent projects (default)
    #[default]
    Dashboard,
    /// Every project
    Projects,
    /// New-project form
    Create,
}

impl Tab {
    pub(crate) const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Projects, Tab::Create];

    /// Stable id used in storage and navigation
    pub(crate) fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Projects => "projects",
            Tab::Create => "create",
        }
    }

    /// Id of the content panel this tab shows
    pub(crate) fn panel_id(self) -> String {
        format!("{}-tab", self.id())
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Projects => "Projects",
            Tab::Create => "New Project",
        }
    }

    pub(crate) fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// One entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct NavEntry {
    pub(crate) tab: Tab,
    pub(crate) active: bool,
}

/// Navigation entries with exactly the given tab marked active
pub(crate) fn nav_entries(active: Tab) -> Vec<NavEntry> {
    Tab::ALL
        .into_iter()
        .map(|tab| NavEntry {
            tab,
            active: tab == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(Tab::from_id("settings"), None);
        assert_eq!(Tab::from_id("Projects"), None);
        assert_eq!(Tab::from_id(""), None);
    }

    #[test]
    fn panel_id_follows_tab_id() {
        assert_eq!(Tab::Projects.panel_id(), "projects-tab");
        assert_eq!(Tab::Create.panel_id(), "create-tab");
    }

    #[test]
    fn exactly_one_entry_active() {
        for tab in Tab::ALL {
            let entries = nav_entries(tab);
            assert_eq!(entries.len(), Tab::ALL.len());
            let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].tab, tab);
        }
    }
}
