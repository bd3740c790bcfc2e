use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A project as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Project {
    pub(crate) id: i64,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) mail_username: Option<String>,
    pub(crate) api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub(crate) access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectList {
    pub(crate) projects: Vec<Project>,
}

/// Body of a create-project response; some servers wrap the project
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreatedProject {
    Wrapped { project: Project },
    Bare(Project),
}

impl CreatedProject {
    pub(crate) fn into_project(self) -> Project {
        match self {
            CreatedProject::Wrapped { project } | CreatedProject::Bare(project) => project,
        }
    }
}

/// Raw contents of the new-project form
#[derive(Debug, Clone, Default)]
pub(crate) struct ProjectForm {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) mail_username: String,
    pub(crate) mail_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MailCredentials {
    pub(crate) mail_username: String,
    pub(crate) mail_password: String,
}

/// Validated create-project payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct NewProject {
    pub(crate) name: String,
    pub(crate) description: String,
    #[serde(flatten)]
    pub(crate) mail: Option<MailCredentials>,
}

impl TryFrom<&ProjectForm> for NewProject {
    type Error = ValidationError;

    /// Mail credentials travel only as a pair: both empty sends neither,
    /// exactly one filled is rejected.
    fn try_from(form: &ProjectForm) -> Result<Self, Self::Error> {
        if form.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        let mail = match (form.mail_username.is_empty(), form.mail_password.is_empty()) {
            (true, true) => None,
            (false, false) => Some(MailCredentials {
                mail_username: form.mail_username.clone(),
                mail_password: form.mail_password.clone(),
            }),
            _ => return Err(ValidationError::PartialMailCredentials),
        };

        Ok(NewProject {
            name: form.name.clone(),
            description: form.description.clone(),
            mail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(user: &str, pass: &str) -> ProjectForm {
        ProjectForm {
            name: "Shop".to_string(),
            description: "storefront".to_string(),
            mail_username: user.to_string(),
            mail_password: pass.to_string(),
        }
    }

    #[test]
    fn both_mail_fields_empty_omits_mail() {
        let payload = NewProject::try_from(&form("", "")).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Shop", "description": "storefront"})
        );
    }

    #[test]
    fn both_mail_fields_filled_sends_both() {
        let payload = NewProject::try_from(&form("bot@shop.io", "app pass")).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["mail_username"], "bot@shop.io");
        assert_eq!(json["mail_password"], "app pass");
    }

    #[test]
    fn only_username_is_rejected() {
        assert_eq!(
            NewProject::try_from(&form("bot@shop.io", "")),
            Err(ValidationError::PartialMailCredentials)
        );
    }

    #[test]
    fn only_password_is_rejected() {
        assert_eq!(
            NewProject::try_from(&form("", "secret")),
            Err(ValidationError::PartialMailCredentials)
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut f = form("", "");
        f.name = "   ".to_string();
        assert_eq!(NewProject::try_from(&f), Err(ValidationError::MissingName));
    }

    #[test]
    fn name_is_sent_as_typed() {
        let mut f = form("", "");
        f.name = "  Shop ".to_string();
        let payload = NewProject::try_from(&f).unwrap();
        assert_eq!(payload.name, "  Shop ");
    }

    #[test]
    fn project_optional_fields_default_to_none() {
        let p: Project =
            serde_json::from_str(r#"{"id":1,"name":"A","api_key":"k1"}"#).unwrap();
        assert_eq!(p.description, None);
        assert_eq!(p.mail_username, None);
        assert_eq!(p.created_at, None);
    }

    #[test]
    fn created_project_accepts_both_shapes() {
        let wrapped: CreatedProject = serde_json::from_str(
            r#"{"message":"ok","project":{"id":2,"name":"B","api_key":"k2","description":null}}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_project().id, 2);

        let bare: CreatedProject =
            serde_json::from_str(r#"{"id":3,"name":"C","api_key":"k3"}"#).unwrap();
        assert_eq!(bare.into_project().name, "C");
    }
}
