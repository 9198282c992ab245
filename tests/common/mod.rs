#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use rru_client::api::{AuthApi, CourseApi, EnrollmentApi, PrerequisiteApi, SectionApi, TermApi};
use rru_client::error::AppError;
use rru_client::models::*;

pub fn make_user(id: i64, username: &str, roles: &[Role]) -> User {
    User {
        id,
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        granted_authorities: roles.to_vec(),
        created_at: "2025-01-01T00:00:00".to_string(),
    }
}

pub fn make_term(registration_start: &str, registration_end: &str) -> Term {
    Term {
        id: 1,
        start_date: "2025-02-01".parse().unwrap(),
        end_date: "2025-06-01".parse().unwrap(),
        registration_start: registration_start.parse().unwrap(),
        registration_end: registration_end.parse().unwrap(),
        created_at: "2024-12-01T00:00:00".to_string(),
    }
}

pub fn make_section(id: i64, capacity: u32, enrolled_count: u32, term: Term) -> CourseSection {
    CourseSection {
        id,
        course: CourseAttributes {
            id: 10,
            department: "CS".to_string(),
            code: 101,
            title: "Intro to Programming".to_string(),
            description: "Variables, loops, functions.".to_string(),
            credits: 4,
        },
        term,
        instructor: make_user(50, "prof", &[Role::Instructor]),
        room: "H-204".to_string(),
        capacity,
        schedule: "MWF 10:00-11:00".to_string(),
        enrolled_count,
        created_at: "2025-01-01T00:00:00".to_string(),
    }
}

pub fn make_course(id: i64, department: &str, code: u32, title: &str) -> Course {
    Course {
        id,
        department: department.to_string(),
        code,
        title: title.to_string(),
        description: format!("{} description", title),
        credits: 3,
        prerequisites: Vec::new(),
        course_sections: Vec::new(),
        created_at: "2025-01-01T00:00:00".to_string(),
    }
}

pub fn make_enrollment(student: User, section: CourseSection) -> Enrollment {
    Enrollment {
        student,
        course_section: section,
        grade: 0.0,
        status: EnrollmentStatus::NotStarted,
        created_at: "2025-01-05T00:00:00".to_string(),
    }
}

pub fn make_instructor_enrollment(student: User, section_id: i64) -> InstructorEnrollment {
    InstructorEnrollment {
        student,
        course_section_id: section_id,
        grade: 0.0,
        status: EnrollmentStatus::NotStarted,
        created_at: "2025-01-05T00:00:00".to_string(),
    }
}

pub fn make_instructor_section(
    section: CourseSection,
    enrollments: Vec<InstructorEnrollment>,
) -> InstructorCourseSection {
    InstructorCourseSection {
        id: section.id,
        course: section.course,
        term: section.term,
        instructor: section.instructor,
        room: section.room,
        capacity: section.capacity,
        schedule: section.schedule,
        enrolled_count: enrollments.len() as u32,
        enrollments,
        created_at: section.created_at,
    }
}

fn page_of<T>(content: Vec<T>) -> PageResponse<T> {
    let total = content.len() as u64;
    PageResponse {
        content,
        page_number: 0,
        page_size: 100,
        total_elements: total,
        total_pages: 1,
    }
}

/// In-memory stand-in for the backend. Collections mutate the way the
/// real service would so invalidation-and-refetch can be observed;
/// counters record how often each list was actually fetched.
#[derive(Default)]
pub struct StubApi {
    pub auth_user: Mutex<Option<User>>,
    pub accepted_login: Mutex<Option<(String, String, User)>>,
    pub courses: Mutex<Vec<Course>>,
    pub sections: Mutex<Vec<CourseSection>>,
    pub assigned: Mutex<Vec<InstructorCourseSection>>,
    pub enrollments: Mutex<Vec<Enrollment>>,
    pub terms: Mutex<Vec<Term>>,
    pub users: Mutex<Vec<User>>,
    pub users_error: Mutex<Option<String>>,
    pub course_fetches: AtomicUsize,
    pub auth_fetches: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_user(self, user: User) -> Self {
        *self.auth_user.lock().unwrap() = Some(user);
        self
    }

    pub fn with_courses(self, courses: Vec<Course>) -> Self {
        *self.courses.lock().unwrap() = courses;
        self
    }
}

#[async_trait]
impl AuthApi for StubApi {
    async fn get_auth_user(&self) -> Option<User> {
        self.auth_fetches.fetch_add(1, Ordering::SeqCst);
        self.auth_user.lock().unwrap().clone()
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let accepted = self.accepted_login.lock().unwrap().clone();
        match accepted {
            Some((u, p, user)) if u == username && p == password => {
                *self.auth_user.lock().unwrap() = Some(user.clone());
                Ok(user)
            }
            _ => Err(AppError::Api("Incorrect Email or Password".to_string())),
        }
    }

    async fn logout(&self) -> Result<(), AppError> {
        *self.auth_user.lock().unwrap() = None;
        Ok(())
    }

    async fn signup(&self, request: &SignupRequest) -> Result<User, AppError> {
        let user = make_user(99, &request.username, &[Role::Student]);
        *self.auth_user.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn get_all_users(
        &self,
        page: u32,
        size: u32,
        _sort: SortDirection,
        _search: Option<&str>,
    ) -> Result<PageResponse<User>, AppError> {
        if let Some(message) = self.users_error.lock().unwrap().clone() {
            return Err(AppError::Api(message));
        }
        let users = self.users.lock().unwrap();
        let size = size.max(1);
        let content: Vec<User> = users
            .iter()
            .skip((page * size) as usize)
            .take(size as usize)
            .cloned()
            .collect();
        Ok(PageResponse {
            content,
            page_number: page,
            page_size: size,
            total_elements: users.len() as u64,
            total_pages: (users.len() as u32).div_ceil(size),
        })
    }

    async fn update_user_role(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::Api("User not found".to_string()))?;
        user.granted_authorities = vec![request.role];
        Ok(user.clone())
    }
}

#[async_trait]
impl CourseApi for StubApi {
    async fn get_all_courses(&self, _pageable: Pageable) -> Result<PageResponse<Course>, AppError> {
        self.course_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(page_of(self.courses.lock().unwrap().clone()))
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Course, AppError> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| AppError::Api("Course not found".to_string()))
    }

    async fn create_course(&self, request: &ManageCourseRequest) -> Result<Course, AppError> {
        let mut courses = self.courses.lock().unwrap();
        let id = courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let mut course = make_course(id, &request.department, request.code, &request.title);
        course.description = request.description.clone();
        course.credits = request.credits;
        courses.push(course.clone());
        Ok(course)
    }

    async fn update_course(
        &self,
        course_id: i64,
        request: &ManageCourseRequest,
    ) -> Result<Course, AppError> {
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| AppError::Api("Course not found".to_string()))?;
        course.department = request.department.clone();
        course.code = request.code;
        course.title = request.title.clone();
        course.description = request.description.clone();
        course.credits = request.credits;
        Ok(course.clone())
    }

    async fn delete_course(&self, course_id: i64) -> Result<(), AppError> {
        self.courses.lock().unwrap().retain(|c| c.id != course_id);
        Ok(())
    }
}

#[async_trait]
impl SectionApi for StubApi {
    async fn get_all_sections(
        &self,
        course_id: Option<i64>,
    ) -> Result<Vec<CourseSection>, AppError> {
        let sections = self.sections.lock().unwrap().clone();
        Ok(match course_id {
            Some(id) => sections.into_iter().filter(|s| s.course.id == id).collect(),
            None => sections,
        })
    }

    async fn get_section_by_id(&self, section_id: i64) -> Result<CourseSection, AppError> {
        self.sections
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == section_id)
            .cloned()
            .ok_or_else(|| AppError::Api("Section not found".to_string()))
    }

    async fn create_section(
        &self,
        _course_id: i64,
        _request: &ManageCourseSectionRequest,
    ) -> Result<CourseSection, AppError> {
        Err(AppError::Api("not supported by stub".to_string()))
    }

    async fn update_section(
        &self,
        _section_id: i64,
        _request: &ManageCourseSectionRequest,
    ) -> Result<CourseSection, AppError> {
        Err(AppError::Api("not supported by stub".to_string()))
    }

    async fn delete_section(&self, section_id: i64) -> Result<(), AppError> {
        self.sections.lock().unwrap().retain(|s| s.id != section_id);
        Ok(())
    }

    async fn get_assigned_sections(&self) -> Result<Vec<InstructorCourseSection>, AppError> {
        Ok(self.assigned.lock().unwrap().clone())
    }

    async fn get_assigned_section_by_id(
        &self,
        section_id: i64,
    ) -> Result<InstructorCourseSection, AppError> {
        self.assigned
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == section_id)
            .cloned()
            .ok_or_else(|| AppError::Api("Section not found".to_string()))
    }
}

#[async_trait]
impl EnrollmentApi for StubApi {
    async fn get_enrollments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Enrollment>, AppError> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.student.id == student_id)
            .cloned()
            .collect())
    }

    async fn create_enrollment(
        &self,
        student_id: i64,
        request: &CreateEnrollmentRequest,
    ) -> Result<Enrollment, AppError> {
        let section = self
            .get_section_by_id(request.course_section_id)
            .await?;
        let student = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == student_id)
            .cloned()
            .unwrap_or_else(|| make_user(student_id, "student", &[Role::Student]));
        let enrollment = make_enrollment(student, section);
        self.enrollments.lock().unwrap().push(enrollment.clone());
        Ok(enrollment)
    }

    async fn update_enrollment(
        &self,
        student_id: i64,
        course_section_id: i64,
        request: &ManageEnrollmentRequest,
    ) -> Result<Enrollment, AppError> {
        let mut enrollments = self.enrollments.lock().unwrap();
        let enrollment = enrollments
            .iter_mut()
            .find(|e| e.student.id == student_id && e.course_section.id == course_section_id)
            .ok_or_else(|| AppError::Api("Enrollment not found".to_string()))?;
        enrollment.grade = request.grade;
        enrollment.status = request.status;
        Ok(enrollment.clone())
    }

    async fn delete_enrollment(
        &self,
        student_id: i64,
        course_section_id: i64,
    ) -> Result<(), AppError> {
        self.enrollments
            .lock()
            .unwrap()
            .retain(|e| !(e.student.id == student_id && e.course_section.id == course_section_id));
        for section in self.assigned.lock().unwrap().iter_mut() {
            if section.id == course_section_id {
                section.enrollments.retain(|e| e.student.id != student_id);
                section.enrolled_count = section.enrollments.len() as u32;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PrerequisiteApi for StubApi {
    async fn get_prerequisites(&self, course_id: i64) -> Result<Vec<Prerequisite>, AppError> {
        Ok(self
            .get_course_by_id(course_id)
            .await
            .map(|c| c.prerequisites)
            .unwrap_or_default())
    }

    async fn create_prerequisite(
        &self,
        _course_id: i64,
        _request: &ManagePrerequisiteRequest,
    ) -> Result<Prerequisite, AppError> {
        Err(AppError::Api("not supported by stub".to_string()))
    }

    async fn update_prerequisite(
        &self,
        _course_id: i64,
        _prerequisite_id: i64,
        _request: &ManagePrerequisiteRequest,
    ) -> Result<Prerequisite, AppError> {
        Err(AppError::Api("not supported by stub".to_string()))
    }

    async fn delete_prerequisite(
        &self,
        _course_id: i64,
        _prerequisite_id: i64,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl TermApi for StubApi {
    async fn get_all_terms(&self) -> Result<Vec<Term>, AppError> {
        Ok(self.terms.lock().unwrap().clone())
    }

    async fn get_term_by_id(&self, term_id: i64) -> Result<Term, AppError> {
        self.terms
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == term_id)
            .cloned()
            .ok_or_else(|| AppError::Api("Term not found".to_string()))
    }

    async fn create_term(&self, request: &ManageTermRequest) -> Result<Term, AppError> {
        let mut terms = self.terms.lock().unwrap();
        let term = Term {
            id: terms.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            start_date: request.start_date,
            end_date: request.end_date,
            registration_start: request.registration_start,
            registration_end: request.registration_end,
            created_at: "2025-01-01T00:00:00".to_string(),
        };
        terms.push(term.clone());
        Ok(term)
    }

    async fn update_term(
        &self,
        term_id: i64,
        request: &ManageTermRequest,
    ) -> Result<Term, AppError> {
        let mut terms = self.terms.lock().unwrap();
        let term = terms
            .iter_mut()
            .find(|t| t.id == term_id)
            .ok_or_else(|| AppError::Api("Term not found".to_string()))?;
        term.start_date = request.start_date;
        term.end_date = request.end_date;
        term.registration_start = request.registration_start;
        term.registration_end = request.registration_end;
        Ok(term.clone())
    }

    async fn delete_term(&self, term_id: i64) -> Result<(), AppError> {
        self.terms.lock().unwrap().retain(|t| t.id != term_id);
        Ok(())
    }
}
