//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NewUser, User};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// `null` until the user is replaced for the first time
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Create / replace user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 256))]
    #[schema(min_length = 1, max_length = 256)]
    pub name: String,
    #[validate(email, length(max = 256))]
    #[schema(max_length = 256)]
    pub email: String,
}

impl From<UserRequest> for NewUser {
    fn from(r: UserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

/// List users query parameters
///
/// The upper bound of `limit` comes from configuration and is checked by
/// the handler.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// 1-based page index (default 1)
    #[validate(range(min = 1))]
    #[param(minimum = 1)]
    pub page: Option<u32>,
    /// Page size (default 1, at most 10)
    #[validate(range(min = 1))]
    #[param(minimum = 1, maximum = 10)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_validation() {
        let ok = UserRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        assert!(ok.validate().is_ok());

        let empty_name = UserRequest {
            name: String::new(),
            email: "ada@example.com".into(),
        };
        assert!(empty_name.validate().is_err());

        let bad_email = UserRequest {
            name: "Ada".into(),
            email: "not-an-email".into(),
        };
        assert!(bad_email.validate().is_err());

        let long_name = UserRequest {
            name: "x".repeat(257),
            email: "ada@example.com".into(),
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn response_serializes_null_updated_at() {
        let json = serde_json::to_value(UserResponse::from(User {
            id: "1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            created_at: Utc::now(),
            updated_at: None,
        }))
        .unwrap();

        assert!(json["updatedAt"].is_null());
        assert!(json["createdAt"].is_string());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn zero_page_is_rejected() {
        let params = ListUsersParams {
            page: Some(0),
            limit: None,
        };
        assert!(params.validate().is_err());
        assert!(ListUsersParams::default().validate().is_ok());
    }
}
