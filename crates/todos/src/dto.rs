use super::Todo;
use serde::Deserialize;
use serde::Serialize;

/// Request body for create and update. Only name and completion are
/// client-settable; id and owner can never arrive from the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
    pub owner_id: Option<uuid::Uuid>,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            name: todo.name().to_string(),
            is_complete: todo.complete(),
            owner_id: todo.owner().map(|id| id.inner()),
        }
    }
}

/// Name policy: 1..=100 characters, whitespace alone does not count.
/// Returns one message per violated rule, empty when the name is
/// acceptable.
pub fn violations(name: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if name.trim().is_empty() {
        violations.push("name must not be empty");
    }
    if name.chars().count() > 100 {
        violations.push("name must be at most 100 characters");
    }
    violations
}
