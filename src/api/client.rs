use std::time::Duration;

use tracing::debug;

use crate::error::{ApiError, AppError};

use super::ProjectApi;
use super::types::{
    CreatedProject, LoginRequest, LoginResponse, NewProject, Project, ProjectList,
};

const LOGIN_PATH: &str = "/api/admin-login";
const PROJECTS_PATH: &str = "/api/projects";

/// Blocking HTTP client for the project API
pub(crate) struct HttpApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpApi {
    pub(crate) fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, AppError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::InvalidApiUrl {
                input: base_url.to_string(),
            });
        }

        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: trimmed.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

impl ProjectApi for HttpApi {
    fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = self.url(LOGIN_PATH);
        debug!(%url, "POST admin login");
        let mut response = self
            .agent
            .post(&url)
            .send_json(LoginRequest { email, password })?;
        let body: LoginResponse = response.body_mut().read_json()?;
        Ok(body.access_token)
    }

    fn list_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        let url = self.url(PROJECTS_PATH);
        debug!(%url, "GET projects");
        let mut response = self
            .agent
            .get(&url)
            .header("Authorization", bearer(token))
            .call()?;
        let body: ProjectList = response.body_mut().read_json()?;
        debug!(count = body.projects.len(), "projects received");
        Ok(body.projects)
    }

    fn create_project(&self, token: &str, project: &NewProject) -> Result<Project, ApiError> {
        let url = self.url(PROJECTS_PATH);
        debug!(%url, name = %project.name, with_mail = project.mail.is_some(), "POST project");
        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", bearer(token))
            .send_json(project)?;
        let body: CreatedProject = response.body_mut().read_json()?;
        Ok(body.into_project())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_url() {
        assert!(matches!(
            HttpApi::new("localhost:5000", None),
            Err(AppError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpApi::new("http://localhost:5000/", None).unwrap();
        assert_eq!(api.url(PROJECTS_PATH), "http://localhost:5000/api/projects");
    }
}
