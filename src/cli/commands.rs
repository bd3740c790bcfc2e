//! CLI subcommand definitions

use clap::{Args, Subcommand};

use crate::api::ProjectForm;
use crate::nav::Tab;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the last active tab (default)
    Show,
    /// Sign in with administrator credentials
    Login {
        /// Administrator email
        #[arg(short, long)]
        email: String,
        /// Administrator password (falls back to PROJDASH_PASSWORD, then stdin)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored token
    Logout,
    /// Switch to a tab and show it
    Tab {
        #[arg(value_enum)]
        tab: Tab,
    },
    /// List projects
    Projects {
        /// Only the most recent few, as on the dashboard
        #[arg(short, long)]
        recent: bool,
    },
    /// Show dashboard statistics
    Stats,
    /// Create a project
    Create(CreateArgs),
    /// Copy a project's API key to the clipboard
    Copy {
        /// Project id
        id: i64,
    },
    /// Show one project
    Details {
        /// Project id
        id: i64,
    },
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Project name
    #[arg(long)]
    pub(crate) name: String,

    /// Project description
    #[arg(long, default_value = "")]
    pub(crate) description: String,

    /// Outgoing mail username (requires --mail-password)
    #[arg(long, default_value = "")]
    pub(crate) mail_username: String,

    /// Outgoing mail password (requires --mail-username)
    #[arg(long, default_value = "")]
    pub(crate) mail_password: String,
}

impl From<CreateArgs> for ProjectForm {
    fn from(args: CreateArgs) -> Self {
        ProjectForm {
            name: args.name,
            description: args.description,
            mail_username: args.mail_username,
            mail_password: args.mail_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn tab_argument_is_validated() {
        assert!(Cli::try_parse_from(["projdash", "tab", "projects"]).is_ok());
        assert!(Cli::try_parse_from(["projdash", "tab", "settings"]).is_err());
    }

    #[test]
    fn create_args_default_to_empty() {
        let cli = Cli::try_parse_from(["projdash", "create", "--name", "Shop"]).unwrap();
        let Some(Commands::Create(args)) = cli.command else {
            panic!("expected create");
        };
        let form = ProjectForm::from(args);
        assert_eq!(form.name, "Shop");
        assert!(form.mail_username.is_empty());
        assert!(form.mail_password.is_empty());
    }
}
