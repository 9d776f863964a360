//! Report formatting
//!
//! Missing or null fields fall back to fixed placeholders (`Unknown`, `N/A`,
//! `Untitled`) so a partially populated upstream record still renders.

use std::fmt::Write as _;

use bblearn_domain::constants::{ANNOUNCEMENT_PREVIEW_CHARS, TOKEN_PREVIEW_CHARS};
use bblearn_domain::{GradeEntry, UserIdentity};
use serde_json::Value;

/// Render the course list.
pub fn courses(courses: &[Value]) -> String {
    let mut out = String::from("📚 **Your Courses**\n\n");
    if courses.is_empty() {
        out.push_str("No courses found.");
        return out;
    }

    for course in courses {
        let name = field_or(course, "name", "Unknown");
        let course_id = field_or(course, "courseId", "N/A");
        let _ = writeln!(out, "• {name} ({course_id})");
    }
    out
}

/// Render the merged grades of one course.
pub fn grades(course_id: &str, grades: &[GradeEntry]) -> String {
    let mut out = format!("📊 **Grades for {course_id}**\n\n");
    if grades.is_empty() {
        out.push_str("No grades found.");
        return out;
    }

    for grade in grades {
        let name = display_or(grade.name.as_ref(), "Unknown");
        let score = display_or(grade.score.as_ref(), "N/A");
        let _ = writeln!(out, "• {name}: {score}");
    }
    out
}

/// Render course announcements with a truncated body preview.
pub fn announcements(course_id: &str, announcements: &[Value]) -> String {
    let mut out = format!("📢 **Announcements for {course_id}**\n\n");
    if announcements.is_empty() {
        out.push_str("No announcements.");
        return out;
    }

    for announcement in announcements {
        let title = field_or(announcement, "title", "Untitled");
        let body = field_or(announcement, "body", "");
        let preview: String = body.chars().take(ANNOUNCEMENT_PREVIEW_CHARS).collect();
        let _ = write!(out, "• **{title}**\n  {preview}...\n\n");
    }
    out
}

/// Render the identity behind a token. Only a short prefix of the token is
/// shown.
pub fn identity(identity: &UserIdentity, access_token: &str) -> String {
    let preview: String = access_token.chars().take(TOKEN_PREVIEW_CHARS).collect();
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    format!(
        "🔍 **Identity**\n\n\
         User ID: {}\n\
         Name: {}\n\
         User name: {}\n\
         Email: {}\n\n\
         Token preview: {preview}...\n",
        identity.id.as_deref().unwrap_or("unknown"),
        or_na(&identity.display_name),
        or_na(&identity.user_name),
        or_na(&identity.email),
    )
}

/// Strings print bare, other JSON values in their JSON form.
fn display_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn field_or<'a>(record: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or(fallback)
}
