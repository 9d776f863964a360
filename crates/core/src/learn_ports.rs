//! Port interface for the learning-management API
//!
//! This trait defines the boundary between report logic and the HTTP
//! implementation of the Blackboard Learn REST API.

use async_trait::async_trait;
use bblearn_domain::{GradeEntry, Result, TokenPayload, UserIdentity};
use serde_json::Value;

/// Read-only access to Blackboard Learn plus the OAuth token endpoints.
///
/// Collection methods return the upstream `results` list unwrapped.
#[async_trait]
pub trait LearnApi: Send + Sync {
    /// Trade an authorization code for a token payload
    async fn exchange_code_for_token(&self, code: &str, redirect_uri: &str) -> Result<TokenPayload>;

    /// Obtain a fresh token payload from a refresh token
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPayload>;

    /// Current-user profile
    async fn get_user_info(&self, access_token: &str) -> Result<Value>;

    /// Identity of the user owning `access_token`
    async fn verify_token(&self, access_token: &str) -> Result<UserIdentity>;

    /// Courses the current user is enrolled in
    async fn get_courses(&self, access_token: &str) -> Result<Vec<Value>>;

    async fn get_course_details(&self, course_id: &str, access_token: &str) -> Result<Value>;

    /// One merged record per gradebook column, in column order
    async fn get_my_grades(&self, course_id: &str, access_token: &str) -> Result<Vec<GradeEntry>>;

    async fn get_course_announcements(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Vec<Value>>;

    async fn get_course_content(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>>;

    async fn get_course_roster(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>>;

    /// Gradebook columns excluding calculated ones
    async fn get_assignments(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>>;

    /// Raw gradebook columns payload
    async fn get_gradebook_overview(&self, course_id: &str, access_token: &str) -> Result<Value>;
}
