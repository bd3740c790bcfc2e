//! Session & view controller
//!
//! Owns the session store, the last fetched project list and the alert
//! container. Every API failure becomes an alert and leaves the previously
//! rendered views untouched.

use tracing::{debug, warn};

use crate::alert::{self, AlertKind, Alerts};
use crate::api::{NewProject, Project, ProjectApi, ProjectForm};
use crate::clipboard::Clipboard;
use crate::consts::RECENT_LIMIT;
use crate::error::AppError;
use crate::nav::{GuardOutcome, Page, Tab, guard};
use crate::render::{
    CREATE_FORM, Container, ContainerView, Panel, ProjectCard, Screen, StatsView, render_projects,
};
use crate::session::SessionStore;

pub(crate) struct Controller<'a> {
    api: &'a dyn ProjectApi,
    clipboard: &'a mut dyn Clipboard,
    session: SessionStore,
    alerts: Alerts,
    /// Last fetched projects, replaced wholesale on each fetch
    projects: Vec<Project>,
    active: Tab,
    stats: Option<StatsView>,
    recent: Option<ContainerView>,
    list: Option<ContainerView>,
    form: ProjectForm,
}

impl<'a> Controller<'a> {
    pub(crate) fn new(
        api: &'a dyn ProjectApi,
        clipboard: &'a mut dyn Clipboard,
        session: SessionStore,
    ) -> Self {
        let active = session.restored_tab();
        Self {
            api,
            clipboard,
            session,
            alerts: Alerts::default(),
            projects: Vec::new(),
            active,
            stats: None,
            recent: None,
            list: None,
            form: ProjectForm::default(),
        }
    }

    /// Auth guard for `page` against the current session
    pub(crate) fn check_access(&self, page: Page) -> GuardOutcome {
        let outcome = guard(page, &self.session);
        debug!(?page, ?outcome, "auth guard");
        outcome
    }

    /// Run the auth guard for `page`; on `Proceed` for the dashboard,
    /// restore the persisted tab and load its data.
    pub(crate) fn boot(&mut self, page: Page) -> Result<GuardOutcome, AppError> {
        let outcome = self.check_access(page);
        if outcome == GuardOutcome::Proceed && page == Page::Dashboard {
            let tab = self.session.restored_tab();
            self.switch_tab(tab)?;
        }
        Ok(outcome)
    }

    /// Activate `tab`, persist it, and load whatever data it shows
    pub(crate) fn switch_tab(&mut self, tab: Tab) -> Result<(), AppError> {
        self.active = tab;
        self.session.set_active_tab(tab)?;
        match tab {
            Tab::Projects => {
                self.load_projects(false);
            }
            Tab::Dashboard => self.load_dashboard_data(),
            Tab::Create => {}
        }
        Ok(())
    }

    fn load_dashboard_data(&mut self) {
        self.load_projects(true);
        self.load_stats();
    }

    fn token(&self) -> String {
        self.session.token().unwrap_or_default()
    }

    /// Fetch all projects; render the first few into the recent container
    /// or all of them into the project list. Returns whether the fetch worked.
    pub(crate) fn load_projects(&mut self, only_recent: bool) -> bool {
        match self.api.list_projects(&self.token()) {
            Ok(projects) => {
                self.projects = projects;
                if only_recent {
                    let shown = self.projects.len().min(RECENT_LIMIT);
                    self.recent = Some(render_projects(
                        &self.projects[..shown],
                        Container::RecentProjects,
                    ));
                } else {
                    self.list = Some(render_projects(&self.projects, Container::ProjectList));
                }
                true
            }
            Err(e) => {
                warn!("Failed to load projects: {e}");
                self.alerts.push(AlertKind::Danger, alert::PROJECTS_LOAD_FAILED);
                false
            }
        }
    }

    pub(crate) fn load_stats(&mut self) -> bool {
        match self.api.list_projects(&self.token()) {
            Ok(projects) => {
                self.stats = Some(StatsView::from_projects(&projects));
                true
            }
            Err(e) => {
                warn!("Failed to load statistics: {e}");
                self.alerts.push(AlertKind::Danger, alert::STATS_LOAD_FAILED);
                false
            }
        }
    }

    /// Exchange credentials for a token; on success store it and open the dashboard
    pub(crate) fn login(&mut self, email: &str, password: &str) -> Result<bool, AppError> {
        match self.api.login(email, password) {
            Ok(token) => {
                self.session.set_token(&token)?;
                self.boot(Page::Dashboard)?;
                Ok(true)
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.alerts.push(AlertKind::Danger, alert::LOGIN_FAILED);
                Ok(false)
            }
        }
    }

    /// Client-local sign-out; the next page is always the login page
    pub(crate) fn logout(&mut self) -> Result<Page, AppError> {
        self.session.clear()?;
        self.projects.clear();
        Ok(Page::Login)
    }

    /// Validate and submit the new-project form. Invalid input never
    /// reaches the server.
    pub(crate) fn create_project(&mut self, form: ProjectForm) -> Result<bool, AppError> {
        self.form = form;
        let payload = match NewProject::try_from(&self.form) {
            Ok(payload) => payload,
            Err(e) => {
                self.alerts.push(AlertKind::Warning, e.to_string());
                return Ok(false);
            }
        };

        match self.api.create_project(&self.token(), &payload) {
            Ok(project) => {
                debug!(id = project.id, "project created");
                self.alerts.push(AlertKind::Success, alert::PROJECT_CREATED);
                self.form = ProjectForm::default();
                self.switch_tab(Tab::Projects)?;
                Ok(true)
            }
            Err(e) => {
                warn!("Failed to create project: {e}");
                self.alerts.push(AlertKind::Danger, alert::PROJECT_CREATE_FAILED);
                Ok(false)
            }
        }
    }

    fn find_project(&mut self, id: i64) -> Result<Option<&Project>, AppError> {
        if !self.load_projects(false) {
            return Ok(None);
        }
        self.projects
            .iter()
            .find(|p| p.id == id)
            .map(Some)
            .ok_or(AppError::ProjectNotFound { id })
    }

    /// Copy a project's API key. Clipboard failures are only logged.
    pub(crate) fn copy_api_key(&mut self, id: i64) -> Result<bool, AppError> {
        let Some(api_key) = self.find_project(id)?.map(|p| p.api_key.clone()) else {
            return Ok(false);
        };
        match self.clipboard.copy_text(&api_key) {
            Ok(()) => self.alerts.push(AlertKind::Success, alert::API_KEY_COPIED),
            Err(e) => warn!("Failed to copy API key: {e}"),
        }
        Ok(true)
    }

    pub(crate) fn project_details(&mut self, id: i64) -> Result<Option<ProjectCard>, AppError> {
        Ok(self.find_project(id)?.map(ProjectCard::from_project))
    }

    #[cfg(test)]
    pub(crate) fn active_tab(&self) -> Tab {
        self.active
    }

    /// The visible panel for the active tab
    pub(crate) fn screen(&self) -> Screen {
        let panel = match self.active {
            Tab::Dashboard => Panel::Dashboard {
                stats: self.stats,
                recent: self.recent.clone(),
            },
            Tab::Projects => Panel::Projects {
                list: self.list.clone(),
            },
            Tab::Create => Panel::Create {
                fields: CREATE_FORM.to_vec(),
            },
        };
        Screen::new(self.active, panel)
    }

    pub(crate) fn recent_view(&self) -> Option<&ContainerView> {
        self.recent.as_ref()
    }

    pub(crate) fn list_view(&self) -> Option<&ContainerView> {
        self.list.as_ref()
    }

    pub(crate) fn stats(&self) -> Option<StatsView> {
        self.stats
    }

    pub(crate) fn alerts(&mut self) -> &mut Alerts {
        &mut self.alerts
    }

    #[cfg(test)]
    fn form(&self) -> &ProjectForm {
        &self.form
    }

    #[cfg(test)]
    fn session(&self) -> &SessionStore {
        &self.session
    }
}
