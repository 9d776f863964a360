//! Report service - fetches through the port, renders with [`super::render`]

use std::sync::Arc;

use bblearn_domain::Result;
use tracing::{debug, instrument};

use super::render;
use crate::learn_ports::LearnApi;

/// Builds human-readable reports for the current user.
///
/// Errors from the underlying API are returned unchanged.
pub struct ReportService {
    api: Arc<dyn LearnApi>,
}

impl ReportService {
    /// Create a new report service over any [`LearnApi`] implementation
    pub fn new(api: Arc<dyn LearnApi>) -> Self {
        Self { api }
    }

    #[instrument(skip_all)]
    pub async fn courses_report(&self, access_token: &str) -> Result<String> {
        let courses = self.api.get_courses(access_token).await?;
        debug!(count = courses.len(), "rendering courses report");
        Ok(render::courses(&courses))
    }

    #[instrument(skip(self, access_token))]
    pub async fn grades_report(&self, course_id: &str, access_token: &str) -> Result<String> {
        let grades = self.api.get_my_grades(course_id, access_token).await?;
        debug!(count = grades.len(), "rendering grades report");
        Ok(render::grades(course_id, &grades))
    }

    #[instrument(skip(self, access_token))]
    pub async fn announcements_report(
        &self,
        course_id: &str,
        access_token: &str,
    ) -> Result<String> {
        let announcements = self.api.get_course_announcements(course_id, access_token).await?;
        debug!(count = announcements.len(), "rendering announcements report");
        Ok(render::announcements(course_id, &announcements))
    }

    /// Verify the token and describe who it belongs to
    #[instrument(skip_all)]
    pub async fn identity_report(&self, access_token: &str) -> Result<String> {
        let identity = self.api.verify_token(access_token).await?;
        Ok(render::identity(&identity, access_token))
    }
}
