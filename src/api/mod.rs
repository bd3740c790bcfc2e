//! Remote project API
//!
//! Every operation is one request/response round trip. Any transport
//! error, non-success status or undecodable body is an `ApiError`.

mod client;
mod types;

pub(crate) use client::HttpApi;
pub(crate) use types::{NewProject, Project, ProjectForm};

use crate::error::ApiError;

/// Operations the dashboard needs from the server
pub(crate) trait ProjectApi {
    /// Exchange admin credentials for a bearer token
    fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    /// All projects, in server order
    fn list_projects(&self, token: &str) -> Result<Vec<Project>, ApiError>;

    fn create_project(&self, token: &str, project: &NewProject) -> Result<Project, ApiError>;
}
