use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// StudieHub command-line client
#[derive(Debug, Parser)]
#[command(
    name = "studiehub",
    version,
    about = "Browse courses, track progress and manage the StudieHub catalog"
)]
pub struct Cli {
    /// Backend base URL (overrides STUDIEHUB_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session file (overrides STUDIEHUB_SESSION)
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Debug logging unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with password and emailed code
    Login {
        #[arg(long)]
        email: Option<String>,

        /// Password-only sign-in, skipping the emailed code
        #[arg(long, conflicts_with = "google_token")]
        no_otp: bool,

        /// Exchange a Google ID token instead of using a password
        #[arg(long)]
        google_token: Option<String>,
    },
    /// Create an account
    Register,
    /// Reset a forgotten password
    ForgotPassword {
        #[arg(long)]
        email: Option<String>,
    },
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List courses
    Catalog(CatalogArgs),
    /// Search the catalog interactively
    Browse,
    /// Show a course with its videos and your progress
    Course { id: String },
    Enroll { course_id: String },
    /// Mark a video of a course as completed
    Complete {
        course_id: String,

        /// Video number as listed by `course` (defaults to the first)
        #[arg(long)]
        video: Option<usize>,
    },
    /// Your enrollments and progress
    Dashboard {
        /// Only recently accessed courses
        #[arg(long, conflicts_with = "completed")]
        recent: bool,

        /// Only completed courses
        #[arg(long)]
        completed: bool,
    },
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommand>,
    },
    /// Administration (requires the ADMIN role)
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Category id
    #[arg(long)]
    pub category: Option<String>,

    /// BEGINNER, INTERMEDIATE or ADVANCED
    #[arg(long)]
    pub difficulty: Option<String>,

    #[arg(long)]
    pub search: Option<String>,

    /// latest, oldest, title-asc or title-desc
    #[arg(long, default_value = "latest")]
    pub sort: String,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        mobile: Option<String>,
    },
    /// Change your password
    Password,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Platform statistics
    Stats,
    Course {
        #[command(subcommand)]
        command: AdminCourseCommand,
    },
    Video {
        #[command(subcommand)]
        command: AdminVideoCommand,
    },
    Category {
        #[command(subcommand)]
        command: AdminCategoryCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCourseCommand {
    Create,
    /// Edit a course, prompting with the current values
    Update { id: String },
    Delete {
        id: String,

        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminVideoCommand {
    List { course_id: String },
    Add { course_id: String },
    Edit { course_id: String, video_id: String },
    Delete {
        course_id: String,
        video_id: String,

        #[arg(long)]
        yes: bool,
    },
    /// Move a video from one list position to another (1-based)
    Move {
        course_id: String,
        from: usize,
        to: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCategoryCommand {
    /// All categories, including inactive ones
    List,
    Create {
        name: String,

        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Soft delete
    Delete { id: String },
    /// Delete permanently
    Purge {
        id: String,

        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "studiehub",
            "catalog",
            "--difficulty",
            "BEGINNER",
            "--base-url",
            "http://api.test",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
        match cli.command {
            Command::Catalog(args) => {
                assert_eq!(args.difficulty.as_deref(), Some("BEGINNER"));
                assert_eq!(args.sort, "latest");
                assert_eq!(args.page, 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_nested_admin_commands() {
        let cli = Cli::try_parse_from(["studiehub", "admin", "video", "move", "c1", "3", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Admin {
                command: AdminCommand::Video {
                    command: AdminVideoCommand::Move { from: 3, to: 1, .. }
                }
            }
        ));
    }

    #[test]
    fn dashboard_filters_conflict() {
        assert!(Cli::try_parse_from(["studiehub", "dashboard", "--recent", "--completed"]).is_err());
    }
}
