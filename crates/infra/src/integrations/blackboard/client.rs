//! Blackboard Learn REST client
//!
//! Each operation is one request/response cycle (two for
//! [`BlackboardClient::get_my_grades`]). Only a 200 response counts as
//! success; everything else becomes [`LearnError::Upstream`] with the exact
//! status and body.

use async_trait::async_trait;
use bblearn_core::LearnApi;
use bblearn_domain::{
    filter_assignments, merge_grades, unwrap_results, ClientConfig, GradeEntry, LearnError, Result,
    TokenPayload, UserIdentity,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::endpoints;
use crate::errors::transport_error;
use crate::http::HttpClient;

/// Client for one Blackboard Learn instance.
///
/// Holds only read-only configuration and a connection pool, so a single
/// instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct BlackboardClient {
    http: HttpClient,
    config: ClientConfig,
}

impl BlackboardClient {
    /// Create a client with the default 30 second request timeout
    ///
    /// # Errors
    ///
    /// Returns `LearnError::Config` if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_http_client(config, HttpClient::new()?))
    }

    /// Create a client on top of a preconfigured [`HttpClient`]
    pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Self {
        Self { http, config }
    }

    /// Connection settings this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the browser URL that starts the authorization-code flow
    ///
    /// No request is made; the user is sent to this URL and comes back to
    /// `redirect_uri` with a `code` for [`Self::exchange_code_for_token`].
    ///
    /// # Errors
    ///
    /// Returns `LearnError::Config` if the configured base URL is not a valid
    /// absolute URL
    pub fn authorization_url(
        &self,
        redirect_uri: &str,
        state: Option<&str>,
        scope: Option<&str>,
    ) -> Result<String> {
        let mut url = Url::parse(&self.url(endpoints::AUTHORIZATION_CODE))
            .map_err(|e| LearnError::Config(format!("invalid base URL: {e}")))?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", self.config.app_key())
                .append_pair("redirect_uri", redirect_uri);
            if let Some(state) = state {
                query.append_pair("state", state);
            }
            if let Some(scope) = scope {
                query.append_pair("scope", scope);
            }
        }

        Ok(url.into())
    }

    /// Exchange an authorization code for a token payload
    #[instrument(skip_all)]
    pub async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenPayload> {
        let payload = self
            .post_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .await?;

        info!(fields = payload.len(), "authorization code exchanged");
        Ok(payload)
    }

    /// Exchange a refresh token for a new token payload
    #[instrument(skip_all)]
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPayload> {
        let payload = self
            .post_token(&[("grant_type", "refresh_token"), ("refresh_token", refresh_token)])
            .await?;

        info!("access token refreshed");
        Ok(payload)
    }

    /// Current-user profile, as returned by upstream
    #[instrument(skip_all)]
    pub async fn get_user_info(&self, access_token: &str) -> Result<Value> {
        self.get_json(endpoints::CURRENT_USER, access_token).await
    }

    /// Resolve the identity behind `access_token` from the current-user profile
    #[instrument(skip_all)]
    pub async fn verify_token(&self, access_token: &str) -> Result<UserIdentity> {
        let profile = self.get_user_info(access_token).await?;
        let identity = UserIdentity::from_profile(&profile);

        info!(user_id = identity.id.as_deref().unwrap_or("unknown"), "token verified");
        Ok(identity)
    }

    /// Course memberships of the current user
    #[instrument(skip_all)]
    pub async fn get_courses(&self, access_token: &str) -> Result<Vec<Value>> {
        self.get_results(endpoints::CURRENT_USER_COURSES, access_token).await
    }

    /// One course object, unmodified
    #[instrument(skip(self, access_token))]
    pub async fn get_course_details(&self, course_id: &str, access_token: &str) -> Result<Value> {
        self.get_json(&endpoints::course(course_id), access_token).await
    }

    /// Merge the course's gradebook columns with the current user's grades
    ///
    /// Columns are fetched first; the grades request is only issued once they
    /// have arrived. A failure of either request fails the whole operation.
    #[instrument(skip(self, access_token))]
    pub async fn get_my_grades(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Vec<GradeEntry>> {
        let columns =
            self.get_results(&endpoints::gradebook_columns(course_id), access_token).await?;
        let grades = self.get_results(&endpoints::my_grades(course_id), access_token).await?;

        let merged = merge_grades(&columns, &grades);
        debug!(columns = columns.len(), grades = grades.len(), "merged gradebook");
        Ok(merged)
    }

    /// Announcements posted in a course
    #[instrument(skip(self, access_token))]
    pub async fn get_course_announcements(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Vec<Value>> {
        self.get_results(&endpoints::announcements(course_id), access_token).await
    }

    /// Top-level content items of a course
    #[instrument(skip(self, access_token))]
    pub async fn get_course_content(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Vec<Value>> {
        self.get_results(&endpoints::contents(course_id), access_token).await
    }

    /// Course memberships, one per enrolled user
    #[instrument(skip(self, access_token))]
    pub async fn get_course_roster(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Vec<Value>> {
        self.get_results(&endpoints::course_users(course_id), access_token).await
    }

    /// Gradebook columns without calculated ones
    #[instrument(skip(self, access_token))]
    pub async fn get_assignments(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>> {
        let columns =
            self.get_results(&endpoints::gradebook_columns(course_id), access_token).await?;
        Ok(filter_assignments(columns))
    }

    /// Gradebook columns payload exactly as upstream returned it
    #[instrument(skip(self, access_token))]
    pub async fn get_gradebook_overview(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Value> {
        self.get_json(&endpoints::gradebook_columns(course_id), access_token).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn get_json(&self, path: &str, access_token: &str) -> Result<Value> {
        let request = self.http.request(Method::GET, self.url(path)).bearer_auth(access_token);
        let response = self.http.send(request).await?;
        read_json(path, response).await
    }

    async fn get_results(&self, path: &str, access_token: &str) -> Result<Vec<Value>> {
        let body = self.get_json(path, access_token).await?;
        Ok(unwrap_results(body))
    }

    async fn post_token(&self, form: &[(&str, &str)]) -> Result<TokenPayload> {
        let request = self
            .http
            .request(Method::POST, self.url(endpoints::TOKEN))
            .basic_auth(self.config.app_key(), Some(self.config.app_secret()))
            .form(form);
        let response = self.http.send(request).await?;
        read_json(endpoints::TOKEN, response).await
    }
}

/// Check for a 200 status and parse the body.
async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if status != StatusCode::OK {
        warn!(path, status = status.as_u16(), "upstream request failed");
        return Err(LearnError::upstream(status.as_u16(), body));
    }

    serde_json::from_str(&body)
        .map_err(|e| LearnError::Decode(format!("{path} returned invalid JSON: {e}")))
}

#[async_trait]
impl LearnApi for BlackboardClient {
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenPayload> {
        self.exchange_code_for_token(code, redirect_uri).await
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPayload> {
        self.refresh_access_token(refresh_token).await
    }

    async fn get_user_info(&self, access_token: &str) -> Result<Value> {
        self.get_user_info(access_token).await
    }

    async fn verify_token(&self, access_token: &str) -> Result<UserIdentity> {
        self.verify_token(access_token).await
    }

    async fn get_courses(&self, access_token: &str) -> Result<Vec<Value>> {
        self.get_courses(access_token).await
    }

    async fn get_course_details(&self, course_id: &str, access_token: &str) -> Result<Value> {
        self.get_course_details(course_id, access_token).await
    }

    async fn get_my_grades(&self, course_id: &str, access_token: &str) -> Result<Vec<GradeEntry>> {
        self.get_my_grades(course_id, access_token).await
    }

    async fn get_course_announcements(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<Vec<Value>> {
        self.get_course_announcements(course_id, access_token).await
    }

    async fn get_course_content(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>> {
        self.get_course_content(course_id, access_token).await
    }

    async fn get_course_roster(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>> {
        self.get_course_roster(course_id, access_token).await
    }

    async fn get_assignments(&self, course_id: &str, access_token: &str) -> Result<Vec<Value>> {
        self.get_assignments(course_id, access_token).await
    }

    async fn get_gradebook_overview(&self, course_id: &str, access_token: &str) -> Result<Value> {
        self.get_gradebook_overview(course_id, access_token).await
    }
}
