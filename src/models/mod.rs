pub mod common;
pub mod course;
pub mod enrollment;
pub mod prerequisite;
pub mod section;
pub mod term;
pub mod user;

pub use common::{ErrorBody, PageResponse, Pageable, SortDirection};
pub use course::{Course, CourseAttributes, ManageCourseRequest};
pub use enrollment::{
    CreateEnrollmentRequest, Enrollment, EnrollmentStatus, InstructorEnrollment,
    ManageEnrollmentRequest,
};
pub use prerequisite::{ManagePrerequisiteRequest, Prerequisite};
pub use section::{CourseSection, InstructorCourseSection, ManageCourseSectionRequest};
pub use term::{ManageTermRequest, Term};
pub use user::{Role, SignupRequest, UpdateUserRequest, User};
