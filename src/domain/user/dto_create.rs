use serde::Serialize;

/// Fields a client supplies when creating or replacing a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
