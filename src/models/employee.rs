use serde::{Deserialize, Serialize};

/// Staff member processing rentals. Read-only from the console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}
