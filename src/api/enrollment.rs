use async_trait::async_trait;

use super::HttpApiClient;
use crate::error::AppError;
use crate::models::{CreateEnrollmentRequest, Enrollment, ManageEnrollmentRequest};

#[async_trait]
pub trait EnrollmentApi: Send + Sync {
    /// Retrieves a student's enrollments. Non-admins may only pass their
    /// own id; the backend enforces this.
    async fn get_enrollments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Enrollment>, AppError>;

    /// Registers a student into a section. Caller must be the student or
    /// an admin.
    async fn create_enrollment(
        &self,
        student_id: i64,
        request: &CreateEnrollmentRequest,
    ) -> Result<Enrollment, AppError>;

    /// Sets grade and status on an enrollment. Caller must be an
    /// instructor or admin.
    async fn update_enrollment(
        &self,
        student_id: i64,
        course_section_id: i64,
        request: &ManageEnrollmentRequest,
    ) -> Result<Enrollment, AppError>;

    /// Drops an enrollment, identified by (studentId, courseSectionId).
    async fn delete_enrollment(
        &self,
        student_id: i64,
        course_section_id: i64,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl EnrollmentApi for HttpApiClient {
    async fn get_enrollments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Enrollment>, AppError> {
        let response = self
            .http()
            .get(self.url("/enrollments"))
            .query(&[("studentId", student_id)])
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn create_enrollment(
        &self,
        student_id: i64,
        request: &CreateEnrollmentRequest,
    ) -> Result<Enrollment, AppError> {
        let response = self
            .http()
            .post(self.url("/enrollments"))
            .query(&[("studentId", student_id)])
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn update_enrollment(
        &self,
        student_id: i64,
        course_section_id: i64,
        request: &ManageEnrollmentRequest,
    ) -> Result<Enrollment, AppError> {
        let response = self
            .http()
            .put(self.url("/enrollments"))
            .query(&[
                ("studentId", student_id),
                ("courseSectionId", course_section_id),
            ])
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn delete_enrollment(
        &self,
        student_id: i64,
        course_section_id: i64,
    ) -> Result<(), AppError> {
        let response = self
            .http()
            .delete(self.url("/enrollments"))
            .query(&[
                ("studentId", student_id),
                ("courseSectionId", course_section_id),
            ])
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_ok(response).await
    }
}
