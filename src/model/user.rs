use serde::{Deserialize, Serialize};

/// An account from the workspace config. Sign-in is mocked against this
/// list; passwords are stored in the clear on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}
