//! Wire types for the backend REST API.
//!
//! Field names and shapes match the backend exactly; these structs are the
//! only place the JSON contract lives.

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::status::ApplicationStatus;

/// `POST /auth/login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
    pub role: Role,
}

/// Fields shared by every signup variant.
#[derive(Debug, Clone, Serialize)]
pub struct SignupBase {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

/// `POST /auth/signup/employer` request body.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerSignup {
    #[serde(flatten)]
    pub base: SignupBase,
    pub company_name: String,
    pub contact_number: String,
}

/// `POST /auth/signup/institute` request body.
#[derive(Debug, Clone, Serialize)]
pub struct InstituteSignup {
    #[serde(flatten)]
    pub base: SignupBase,
    pub institute_name: String,
    pub aishe_code: String,
    pub contact_number: String,
}

/// A signup request, dispatched to the endpoint for its role variant.
#[derive(Debug, Clone)]
pub enum SignupRequest {
    Student(SignupBase),
    Employer(EmployerSignup),
    Institute(InstituteSignup),
}

impl SignupRequest {
    /// The endpoint path this variant posts to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SignupRequest::Student(_) => "/api/auth/signup",
            SignupRequest::Employer(_) => "/api/auth/signup/employer",
            SignupRequest::Institute(_) => "/api/auth/signup/institute",
        }
    }

    /// Serialize the variant's body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            SignupRequest::Student(b) => serde_json::to_string(b),
            SignupRequest::Employer(b) => serde_json::to_string(b),
            SignupRequest::Institute(b) => serde_json::to_string(b),
        }
    }
}

/// An internship posting, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub mode: String,
    pub duration_weeks: i64,
}

/// `POST /employers/internships` request body; the server assigns the ids.
#[derive(Debug, Clone, Serialize)]
pub struct NewInternship {
    pub title: String,
    pub description: String,
    pub location: String,
    pub mode: String,
    pub duration_weeks: i64,
}

/// A student's application to an internship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub student_id: i64,
    pub internship_id: i64,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

/// `PUT /employers/applications/{id}/status` request body.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let json = r#"{"access_token":"t1","token_type":"bearer","role":"employer"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "t1");
        assert_eq!(resp.role, Role::Employer);
    }

    #[test]
    fn test_student_signup_body() {
        let req = SignupRequest::Student(SignupBase {
            email: "a@b.com".to_string(),
            full_name: "A B".to_string(),
            password: "password123".to_string(),
            role: Role::Student,
        });
        assert_eq!(req.endpoint(), "/api/auth/signup");
        let body: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(body["role"], "student");
        assert_eq!(body["full_name"], "A B");
    }

    #[test]
    fn test_employer_signup_flattens_base() {
        let req = SignupRequest::Employer(EmployerSignup {
            base: SignupBase {
                email: "hr@acme.com".to_string(),
                full_name: "HR Lead".to_string(),
                password: "password123".to_string(),
                role: Role::Employer,
            },
            company_name: "Acme".to_string(),
            contact_number: "9876543210".to_string(),
        });
        assert_eq!(req.endpoint(), "/api/auth/signup/employer");
        let body: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(body["email"], "hr@acme.com");
        assert_eq!(body["company_name"], "Acme");
        assert_eq!(body["contact_number"], "9876543210");
    }

    #[test]
    fn test_institute_signup_endpoint() {
        let req = SignupRequest::Institute(InstituteSignup {
            base: SignupBase {
                email: "dean@uni.edu".to_string(),
                full_name: "Dean".to_string(),
                password: "password123".to_string(),
                role: Role::Institute,
            },
            institute_name: "Uni".to_string(),
            aishe_code: "U-0001".to_string(),
            contact_number: "9876543210".to_string(),
        });
        assert_eq!(req.endpoint(), "/api/auth/signup/institute");
        let body: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(body["aishe_code"], "U-0001");
    }

    #[test]
    fn test_application_status_parses() {
        let json = r#"{"id":1,"student_id":2,"internship_id":3,"status":"shortlisted","applied_at":"2025-06-01T10:00:00"}"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.status, ApplicationStatus::Shortlisted);
    }
}
