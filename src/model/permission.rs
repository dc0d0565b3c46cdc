use entity::role_permission::Area;
use serde::{Deserialize, Serialize};

/// Effective flags for one feature area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDto {
    pub area: Area,
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    /// Whether the row comes from a stored override rather than the role default.
    pub overridden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePermissionDto {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}
