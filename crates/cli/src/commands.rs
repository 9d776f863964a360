//! Command execution
//!
//! Each subcommand maps onto one client operation. Text reports come from
//! [`bblearn_core::ReportService`]; everything else is printed as JSON.

use std::time::Instant;

use bblearn_domain::constants::ENV_ACCESS_TOKEN;
use bblearn_domain::{LearnError, Result};
use serde::Serialize;
use tracing::debug;

use crate::cli::Command;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Run `command` and return what should be printed on stdout.
pub async fn execute(
    ctx: &AppContext,
    command: &Command,
    token: Option<&str>,
    json: bool,
) -> Result<String> {
    let start = Instant::now();
    let result = dispatch(ctx, command, token, json).await;

    log_command_execution(command.name(), start.elapsed(), result.as_ref().err());
    result
}

async fn dispatch(
    ctx: &AppContext,
    command: &Command,
    token: Option<&str>,
    json: bool,
) -> Result<String> {
    let client = &ctx.client;

    match command {
        Command::AuthorizeUrl { redirect_uri, state, scope } => {
            client.authorization_url(redirect_uri, state.as_deref(), scope.as_deref())
        }
        Command::Exchange { code, redirect_uri } => {
            to_json(&client.exchange_code_for_token(code, redirect_uri).await?)
        }
        Command::Refresh { refresh_token } => {
            to_json(&client.refresh_access_token(refresh_token).await?)
        }
        Command::Whoami => {
            let token = require_token(token)?;
            if json {
                to_json(&client.verify_token(token).await?)
            } else {
                ctx.reports.identity_report(token).await
            }
        }
        Command::Courses => {
            let token = require_token(token)?;
            if json {
                to_json(&client.get_courses(token).await?)
            } else {
                ctx.reports.courses_report(token).await
            }
        }
        Command::Course { course_id } => {
            to_json(&client.get_course_details(course_id, require_token(token)?).await?)
        }
        Command::Grades { course_id } => {
            let token = require_token(token)?;
            if json {
                to_json(&client.get_my_grades(course_id, token).await?)
            } else {
                ctx.reports.grades_report(course_id, token).await
            }
        }
        Command::Announcements { course_id } => {
            let token = require_token(token)?;
            if json {
                to_json(&client.get_course_announcements(course_id, token).await?)
            } else {
                ctx.reports.announcements_report(course_id, token).await
            }
        }
        Command::Content { course_id } => {
            to_json(&client.get_course_content(course_id, require_token(token)?).await?)
        }
        Command::Roster { course_id } => {
            to_json(&client.get_course_roster(course_id, require_token(token)?).await?)
        }
        Command::Assignments { course_id } => {
            to_json(&client.get_assignments(course_id, require_token(token)?).await?)
        }
        Command::Gradebook { course_id } => {
            to_json(&client.get_gradebook_overview(course_id, require_token(token)?).await?)
        }
    }
}

fn require_token(token: Option<&str>) -> Result<&str> {
    token.filter(|t| !t.is_empty()).ok_or_else(|| {
        LearnError::Config(format!(
            "an access token is required; pass --token or set {ENV_ACCESS_TOKEN}"
        ))
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    debug!("rendering JSON output");
    serde_json::to_string_pretty(value)
        .map_err(|e| LearnError::Output(format!("cannot render JSON output: {e}")))
}
