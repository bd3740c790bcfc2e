mod json;
mod terminal;
mod view;

pub(crate) use json::view_json;
pub(crate) use terminal::{
    TerminalOptions, print_alerts, print_card, print_container, print_screen, print_stats,
};
#[cfg(test)]
pub(crate) use view::ContainerContent;
pub(crate) use view::{
    CREATE_FORM, Container, ContainerView, PageView, Panel, ProjectCard, Screen, StatsView,
    render_projects,
};
