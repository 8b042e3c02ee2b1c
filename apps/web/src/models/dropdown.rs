use serde::{Deserialize, Serialize};

/// Generic `{id, label}` option for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub id: String,
    pub label: String,
}
