use serde::Deserialize;

use crate::models::NewUser;

/// Raw `POST /user` body; either field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Returns the record to create, or `None` when a field is absent or empty.
    pub fn validate(self) -> Option<NewUser> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Some(NewUser { name, email })
            }
            _ => None,
        }
    }
}
