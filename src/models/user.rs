use serde::{Deserialize, Serialize};

/// The JSON input for `POST /user`
#[derive(Debug, Deserialize)]
pub(crate) struct NewUserInput {
    pub(crate) name: String,
    pub(crate) email: String,
}

/// A user as returned by the API
#[derive(Debug, Serialize)]
pub(crate) struct UserResponse {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) email: String,
}

impl From<entity::user::Model> for UserResponse {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
