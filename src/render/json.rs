use serde::Serialize;

use crate::alert::Alert;

/// Pretty JSON for `--json` output, alerts included alongside the view
pub(crate) fn view_json<T: Serialize>(view: &T, alerts: &[Alert]) -> String {
    let output = serde_json::json!({
        "view": view,
        "alerts": alerts,
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Project;
    use crate::nav::Tab;
    use crate::render::view::{Container, Panel, Screen, render_projects};

    #[test]
    fn screen_json_uses_container_ids() {
        let projects = vec![Project {
            id: 4,
            name: "Mailer".to_string(),
            description: None,
            mail_username: None,
            api_key: "abc".to_string(),
            created_at: None,
        }];
        let screen = Screen::new(
            Tab::Projects,
            Panel::Projects {
                list: Some(render_projects(&projects, Container::ProjectList)),
            },
        );

        let value: serde_json::Value = serde_json::from_str(&view_json(&screen, &[])).unwrap();
        let view = &value["view"];
        assert_eq!(view["panel_id"], "projects-tab");
        assert_eq!(view["panel"]["tab"], "projects");
        assert_eq!(view["panel"]["list"]["container"], "project-list");
        assert_eq!(view["panel"]["list"]["content"]["type"], "cards");
        assert_eq!(view["panel"]["list"]["content"]["cards"][0]["api_key"], "abc");
        assert_eq!(view["nav"][1]["active"], true);
        assert!(value["alerts"].as_array().unwrap().is_empty());
    }
}
