use std::io::{BufRead, Write};
use std::time::Instant;

use serde::Serialize;

use crate::api::ProjectForm;
use crate::cli::{Cli, Commands};
use crate::controller::Controller;
use crate::error::AppError;
use crate::nav::{GuardOutcome, Page};
use crate::render::{
    PageView, TerminalOptions, print_alerts, print_card, print_container, print_screen,
    print_stats, view_json,
};

/// Fallback source for the login password when `--password` is not given
const PASSWORD_ENV: &str = "PROJDASH_PASSWORD";

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) terminal: TerminalOptions,
}

/// Print a view (JSON or terminal) followed by the alerts raised while building it
fn emit<T: Serialize>(
    ctl: &mut Controller<'_>,
    ctx: &CommandContext<'_>,
    view: Option<&T>,
    print_terminal: impl FnOnce(&T, TerminalOptions),
) {
    let alerts = ctl.alerts().visible(Instant::now());
    if ctx.cli.json {
        println!("{}", view_json(&view, alerts));
        return;
    }
    if let Some(view) = view {
        print_terminal(view, ctx.terminal);
    }
    print_alerts(alerts, ctx.terminal);
}

fn emit_screen(ctl: &mut Controller<'_>, ctx: &CommandContext<'_>) {
    let screen = ctl.screen();
    emit(ctl, ctx, Some(&screen), print_screen);
}

fn emit_alerts(ctl: &mut Controller<'_>, ctx: &CommandContext<'_>) {
    emit::<()>(ctl, ctx, None, |_, _| {});
}

fn sign_in_hint(_: &PageView, _: TerminalOptions) {
    eprintln!("Not signed in. Run `projdash login --email <EMAIL>` first.");
}

fn signed_out_notice(_: &PageView, _: TerminalOptions) {
    println!("Signed out.");
}

fn resolve_password(arg: Option<String>) -> Result<String, AppError> {
    if let Some(password) = arg {
        return Ok(password);
    }
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(password);
    }
    eprint!("Password: ");
    std::io::stderr().flush().map_err(AppError::PasswordInput)?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(AppError::PasswordInput)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn handle_login(
    ctl: &mut Controller<'_>,
    ctx: &CommandContext<'_>,
    email: &str,
    password: Option<String>,
) -> Result<bool, AppError> {
    if ctl.check_access(Page::Login) == GuardOutcome::Redirect(Page::Dashboard) {
        if !ctx.cli.json {
            eprintln!("Already signed in; showing the dashboard.");
        }
        ctl.boot(Page::Dashboard)?;
        emit_screen(ctl, ctx);
        return Ok(true);
    }

    let password = resolve_password(password)?;
    let ok = ctl.login(email, &password)?;
    if ok {
        emit_screen(ctl, ctx);
    } else {
        emit_alerts(ctl, ctx);
    }
    Ok(ok)
}

/// Commands that run on the protected dashboard page
fn handle_dashboard_command(
    command: Commands,
    ctl: &mut Controller<'_>,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    if ctl.check_access(Page::Dashboard) == GuardOutcome::Redirect(Page::Login) {
        emit(ctl, ctx, Some(&PageView::SIGNED_OUT), sign_in_hint);
        return Ok(false);
    }

    match command {
        Commands::Show => {
            ctl.boot(Page::Dashboard)?;
            emit_screen(ctl, ctx);
            Ok(!ctl.alerts().has_danger())
        }
        Commands::Tab { tab } => {
            ctl.switch_tab(tab)?;
            emit_screen(ctl, ctx);
            Ok(!ctl.alerts().has_danger())
        }
        Commands::Projects { recent } => {
            let ok = ctl.load_projects(recent);
            let view = if recent {
                ctl.recent_view()
            } else {
                ctl.list_view()
            }
            .cloned();
            emit(ctl, ctx, view.as_ref(), print_container);
            Ok(ok)
        }
        Commands::Stats => {
            let ok = ctl.load_stats();
            let stats = ctl.stats();
            emit(ctl, ctx, stats.as_ref(), print_stats);
            Ok(ok)
        }
        Commands::Create(args) => {
            let ok = ctl.create_project(ProjectForm::from(args))?;
            if ok {
                emit_screen(ctl, ctx);
            } else {
                emit_alerts(ctl, ctx);
            }
            Ok(ok)
        }
        Commands::Copy { id } => {
            let ok = ctl.copy_api_key(id)?;
            emit_alerts(ctl, ctx);
            Ok(ok)
        }
        Commands::Details { id } => {
            let card = ctl.project_details(id)?;
            let ok = card.is_some();
            emit(ctl, ctx, card.as_ref(), print_card);
            Ok(ok)
        }
        Commands::Login { .. } | Commands::Logout => unreachable!(),
    }
}

/// Handle one command against the controller. `Ok(false)` means the command
/// ran but its main operation failed (alerts explain why).
pub(crate) fn handle_command(
    command: Commands,
    ctl: &mut Controller<'_>,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    match command {
        Commands::Logout => {
            let view = PageView {
                page: ctl.logout()?,
                signed_in: false,
            };
            emit(ctl, ctx, Some(&view), signed_out_notice);
            Ok(true)
        }
        Commands::Login { email, password } => handle_login(ctl, ctx, &email, password),
        other => handle_dashboard_command(other, ctl, ctx),
    }
}
