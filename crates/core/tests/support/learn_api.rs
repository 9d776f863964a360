use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bblearn_core::LearnApi;
use bblearn_domain::{
    filter_assignments, merge_grades, GradeEntry, LearnError, Result as DomainResult, TokenPayload,
    UserIdentity,
};
use serde_json::{json, Value};

/// In-memory mock for `LearnApi`.
///
/// Serves fixed data for a single course and records every access token it
/// receives. Setting `fail_with` makes every call return that error.
#[derive(Default, Clone)]
pub struct MockLearnApi {
    pub courses: Vec<Value>,
    pub columns: Vec<Value>,
    pub grades: Vec<Value>,
    pub announcements: Vec<Value>,
    pub profile: Value,
    pub fail_with: Option<LearnError>,
    pub seen_tokens: Arc<Mutex<Vec<String>>>,
}

impl MockLearnApi {
    /// Create a mock with empty data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose every call fails with `error`.
    pub fn failing(error: LearnError) -> Self {
        Self { fail_with: Some(error), ..Self::default() }
    }

    /// Access tokens received so far, in call order.
    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }

    fn record(&self, token: &str) -> DomainResult<()> {
        self.seen_tokens.lock().unwrap().push(token.to_string());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LearnApi for MockLearnApi {
    async fn exchange_code_for_token(
        &self,
        code: &str,
        _redirect_uri: &str,
    ) -> DomainResult<TokenPayload> {
        self.record(code)?;
        let mut payload = TokenPayload::new();
        payload.insert("access_token".into(), json!(format!("token-for-{code}")));
        Ok(payload)
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<TokenPayload> {
        self.record(refresh_token)?;
        let mut payload = TokenPayload::new();
        payload.insert("access_token".into(), json!("refreshed"));
        Ok(payload)
    }

    async fn get_user_info(&self, access_token: &str) -> DomainResult<Value> {
        self.record(access_token)?;
        Ok(self.profile.clone())
    }

    async fn verify_token(&self, access_token: &str) -> DomainResult<UserIdentity> {
        let profile = self.get_user_info(access_token).await?;
        Ok(UserIdentity::from_profile(&profile))
    }

    async fn get_courses(&self, access_token: &str) -> DomainResult<Vec<Value>> {
        self.record(access_token)?;
        Ok(self.courses.clone())
    }

    async fn get_course_details(&self, course_id: &str, access_token: &str) -> DomainResult<Value> {
        self.record(access_token)?;
        Ok(self
            .courses
            .iter()
            .find(|course| course.get("id").and_then(Value::as_str) == Some(course_id))
            .cloned()
            .unwrap_or(Value::Null))
    }

    async fn get_my_grades(
        &self,
        _course_id: &str,
        access_token: &str,
    ) -> DomainResult<Vec<GradeEntry>> {
        self.record(access_token)?;
        Ok(merge_grades(&self.columns, &self.grades))
    }

    async fn get_course_announcements(
        &self,
        _course_id: &str,
        access_token: &str,
    ) -> DomainResult<Vec<Value>> {
        self.record(access_token)?;
        Ok(self.announcements.clone())
    }

    async fn get_course_content(
        &self,
        _course_id: &str,
        access_token: &str,
    ) -> DomainResult<Vec<Value>> {
        self.record(access_token)?;
        Ok(Vec::new())
    }

    async fn get_course_roster(
        &self,
        _course_id: &str,
        access_token: &str,
    ) -> DomainResult<Vec<Value>> {
        self.record(access_token)?;
        Ok(Vec::new())
    }

    async fn get_assignments(
        &self,
        _course_id: &str,
        access_token: &str,
    ) -> DomainResult<Vec<Value>> {
        self.record(access_token)?;
        Ok(filter_assignments(self.columns.clone()))
    }

    async fn get_gradebook_overview(
        &self,
        _course_id: &str,
        access_token: &str,
    ) -> DomainResult<Value> {
        self.record(access_token)?;
        Ok(json!({ "results": self.columns }))
    }
}
