use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::alert::{Alert, AlertKind};

use super::view::{
    ContainerContent, ContainerView, EmptyState, FormField, Panel, ProjectCard, Screen, StatsView,
};

/// Terminal styling switches
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalOptions {
    pub(crate) use_color: bool,
}

fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

fn label_cell(text: &str, use_color: bool) -> Cell {
    styled_cell(text, use_color.then_some(Color::DarkGrey), false)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Navigation bar, active tab highlighted
fn nav_line(screen: &Screen, options: TerminalOptions) -> String {
    screen
        .nav
        .iter()
        .map(|entry| {
            let title = entry.tab.title();
            match (entry.active, options.use_color) {
                (true, true) => format!("\x1b[1;36m[{title}]\x1b[0m"),
                (true, false) => format!("[{title}]"),
                (false, _) => format!(" {title} "),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn stats_table(stats: &StatsView, options: TerminalOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Projects", options.use_color),
        header_cell("Verified emails", options.use_color),
        header_cell("Sent emails", options.use_color),
    ]);
    table.add_row(vec![
        Cell::new(stats.total_projects),
        Cell::new(stats.verified_emails),
        Cell::new(stats.sent_emails),
    ]);
    table
}

/// One project card as a two-column table
fn card_table(card: &ProjectCard, options: TerminalOptions) -> Table {
    let use_color = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(&format!("#{}", card.id), use_color),
        header_cell(&card.name, use_color),
    ]);
    table.add_row(vec![
        label_cell("Description", use_color),
        Cell::new(&card.description),
    ]);
    table.add_row(vec![
        label_cell("Email", use_color),
        Cell::new(&card.mail_username),
    ]);
    table.add_row(vec![
        label_cell("API key", use_color),
        styled_cell(&card.api_key, use_color.then_some(Color::Green), true),
    ]);
    if let Some(created) = &card.created_at {
        table.add_row(vec![label_cell("Created", use_color), Cell::new(created)]);
    }
    table.add_row(vec![
        label_cell("Actions", use_color),
        Cell::new(format!("{}  |  {}", card.copy_command, card.details_command)),
    ]);
    table
}

fn empty_state_text(state: &EmptyState) -> String {
    format!(
        "  {}\n  {}\n  {}: projdash tab {}",
        state.title,
        state.message,
        state.action_label,
        state.action_tab.id()
    )
}

fn container_text(view: &ContainerView, options: TerminalOptions) -> String {
    let mut out = format!("{}\n", view.container.title());
    match &view.content {
        ContainerContent::Empty(state) => {
            out.push_str(&empty_state_text(state));
            out.push('\n');
        }
        ContainerContent::Cards { cards } => {
            for card in cards {
                out.push_str(&card_table(card, options).to_string());
                out.push('\n');
            }
        }
    }
    out
}

fn form_table(fields: &[FormField], options: TerminalOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Field", options.use_color),
        header_cell("Option", options.use_color),
        header_cell("Required", options.use_color),
    ]);
    for field in fields {
        table.add_row(vec![
            Cell::new(field.label),
            Cell::new(field.flag),
            Cell::new(if field.required { "yes" } else { "no" }),
        ]);
    }
    table
}

/// Whole screen as terminal text
fn screen_text(screen: &Screen, options: TerminalOptions) -> String {
    let mut out = format!("{}\n\n", nav_line(screen, options));
    match &screen.panel {
        Panel::Dashboard { stats, recent } => {
            if let Some(stats) = stats {
                out.push_str(&stats_table(stats, options).to_string());
                out.push_str("\n\n");
            }
            if let Some(recent) = recent {
                out.push_str(&container_text(recent, options));
            }
        }
        Panel::Projects { list } => {
            if let Some(list) = list {
                out.push_str(&container_text(list, options));
            }
        }
        Panel::Create { fields } => {
            out.push_str(&form_table(fields, options).to_string());
            out.push_str("\n\nMail credentials are optional but must be given together.\n");
            out.push_str("Submit with: projdash create --name <NAME> [OPTIONS]\n");
        }
    }
    out
}

pub(crate) fn print_screen(screen: &Screen, options: TerminalOptions) {
    print!("{}", screen_text(screen, options));
}

pub(crate) fn print_container(view: &ContainerView, options: TerminalOptions) {
    print!("{}", container_text(view, options));
}

pub(crate) fn print_stats(stats: &StatsView, options: TerminalOptions) {
    println!("{}", stats_table(stats, options));
}

pub(crate) fn print_card(card: &ProjectCard, options: TerminalOptions) {
    println!("{}", card_table(card, options));
}

/// Alerts go to stderr so stdout stays parseable
pub(crate) fn print_alerts(alerts: &[Alert], options: TerminalOptions) {
    for alert in alerts {
        let (icon, color) = match alert.kind {
            AlertKind::Success => ("✔", "32"),
            AlertKind::Danger => ("✖", "31"),
            AlertKind::Warning => ("!", "33"),
        };
        if options.use_color {
            eprintln!("\x1b[{color}m{icon} {}\x1b[0m", alert.message);
        } else {
            eprintln!("{icon} {}", alert.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Project;
    use crate::nav::Tab;
    use crate::render::view::{CREATE_FORM, Container, render_projects};

    const PLAIN: TerminalOptions = TerminalOptions { use_color: false };

    fn project(id: i64) -> Project {
        Project {
            id,
            name: format!("proj-{id}"),
            description: None,
            mail_username: None,
            api_key: format!("KEY{id}"),
            created_at: Some("2026-01-02T03:04:05".to_string()),
        }
    }

    #[test]
    fn nav_brackets_active_tab() {
        let screen = Screen::new(Tab::Projects, Panel::Projects { list: None });
        let text = screen_text(&screen, PLAIN);
        assert!(text.starts_with(" Dashboard   [Projects]   New Project "));
    }

    #[test]
    fn project_list_shows_cards_and_fallbacks() {
        let list = render_projects(&[project(1), project(2)], Container::ProjectList);
        let screen = Screen::new(Tab::Projects, Panel::Projects { list: Some(list) });
        let text = screen_text(&screen, PLAIN);
        assert!(text.contains("All projects"));
        assert!(text.contains("KEY1"));
        assert!(text.contains("KEY2"));
        assert!(text.contains("No description"));
        assert!(text.contains("Not configured"));
        assert!(text.contains("projdash copy 2"));
        assert!(text.contains("2026-01-02 03:04"));
    }

    #[test]
    fn empty_list_shows_create_shortcut() {
        let list = render_projects(&[], Container::RecentProjects);
        let screen = Screen::new(
            Tab::Dashboard,
            Panel::Dashboard {
                stats: None,
                recent: Some(list),
            },
        );
        let text = screen_text(&screen, PLAIN);
        assert!(text.contains("No projects found"));
        assert!(text.contains("projdash tab create"));
    }

    #[test]
    fn create_panel_lists_form_options() {
        let screen = Screen::new(
            Tab::Create,
            Panel::Create {
                fields: CREATE_FORM.to_vec(),
            },
        );
        let text = screen_text(&screen, PLAIN);
        assert!(text.contains("--mail-password"));
        assert!(text.contains("projdash create --name"));
    }
}
