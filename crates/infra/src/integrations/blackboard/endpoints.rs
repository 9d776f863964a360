//! Blackboard Learn REST path templates (relative to the instance base URL)

/// OAuth2 token endpoint, used for both code and refresh grants
pub const TOKEN: &str = "/learn/api/public/v1/oauth2/token";
/// Browser entry point of the authorization-code flow
pub const AUTHORIZATION_CODE: &str = "/learn/api/public/v1/oauth2/authorizationcode";
/// Profile of the token owner
pub const CURRENT_USER: &str = "/learn/api/public/v1/users/me";
/// Course memberships of the token owner
pub const CURRENT_USER_COURSES: &str = "/learn/api/public/v1/users/me/courses";

/// Single course by id
pub fn course(course_id: &str) -> String {
    format!("/learn/api/public/v1/courses/{course_id}")
}

/// Gradebook columns (v2 API)
pub fn gradebook_columns(course_id: &str) -> String {
    format!("/learn/api/public/v2/courses/{course_id}/gradebook/columns")
}

/// Grades of the token owner in a course (v2 API)
pub fn my_grades(course_id: &str) -> String {
    format!("/learn/api/public/v2/courses/{course_id}/gradebook/users/me")
}

pub fn announcements(course_id: &str) -> String {
    format!("/learn/api/public/v1/courses/{course_id}/announcements")
}

pub fn contents(course_id: &str) -> String {
    format!("/learn/api/public/v1/courses/{course_id}/contents")
}

/// Course memberships
pub fn course_users(course_id: &str) -> String {
    format!("/learn/api/public/v1/courses/{course_id}/users")
}
