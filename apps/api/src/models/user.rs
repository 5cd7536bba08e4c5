use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The owner of the current session, as reported by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}
