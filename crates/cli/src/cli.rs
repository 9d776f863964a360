//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blackboard Learn REST client
#[derive(Debug, Parser)]
#[command(name = "bblearn", version, about)]
pub struct Cli {
    /// Config file (TOML or JSON); defaults to environment, then ./bblearn.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bearer access token for read operations
    #[arg(long, global = true, env = "BLACKBOARD_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print raw JSON instead of a text report
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the browser URL that starts the OAuth2 authorization-code flow
    AuthorizeUrl {
        #[arg(long)]
        redirect_uri: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        scope: Option<String>,
    },
    /// Exchange an authorization code for tokens
    Exchange {
        #[arg(long)]
        code: String,
        #[arg(long)]
        redirect_uri: String,
    },
    /// Exchange a refresh token for new tokens
    Refresh {
        #[arg(long)]
        refresh_token: String,
    },
    /// Show who the access token belongs to
    Whoami,
    /// List enrolled courses
    Courses,
    /// Show one course
    Course { course_id: String },
    /// Show your grades in a course
    Grades { course_id: String },
    /// List course announcements
    Announcements { course_id: String },
    /// List course content items
    Content { course_id: String },
    /// List course members
    Roster { course_id: String },
    /// List gradable (non-calculated) columns
    Assignments { course_id: String },
    /// Dump the raw gradebook columns payload
    Gradebook { course_id: String },
}

impl Command {
    /// Stable identifier used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AuthorizeUrl { .. } => "authorize-url",
            Self::Exchange { .. } => "exchange",
            Self::Refresh { .. } => "refresh",
            Self::Whoami => "whoami",
            Self::Courses => "courses",
            Self::Course { .. } => "course",
            Self::Grades { .. } => "grades",
            Self::Announcements { .. } => "announcements",
            Self::Content { .. } => "content",
            Self::Roster { .. } => "roster",
            Self::Assignments { .. } => "assignments",
            Self::Gradebook { .. } => "gradebook",
        }
    }
}
