//! Role permission matrix and the default flags per role.

use entity::{role_permission::Area, user::Role};
use sea_orm::{ActiveEnum, Iterable};

use crate::{
    model::permission::{PermissionDto, UpdatePermissionDto},
    server::model::auth::Action,
};

/// Effective flags of one role for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionFlags {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl PermissionFlags {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const ALL: Self = Self::new(true, true, true, true);

    pub const fn new(can_view: bool, can_create: bool, can_edit: bool, can_delete: bool) -> Self {
        Self {
            can_view,
            can_create,
            can_edit,
            can_delete,
        }
    }

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.can_view,
            Action::Create => self.can_create,
            Action::Edit => self.can_edit,
            Action::Delete => self.can_delete,
        }
    }

    pub fn from_entity(entity: &entity::role_permission::Model) -> Self {
        Self::new(
            entity.can_view,
            entity.can_create,
            entity.can_edit,
            entity.can_delete,
        )
    }

    pub fn from_dto(dto: UpdatePermissionDto) -> Self {
        Self::new(dto.can_view, dto.can_create, dto.can_edit, dto.can_delete)
    }
}

/// Built-in flags used when no override row exists.
///
/// Role names are matched against the stored role values (`ADMIN`, `MANAGER`,
/// `COACH`, `FRONT`); anything else gets no permissions.
pub fn default_flags(role: &str, area: Area) -> PermissionFlags {
    let Ok(role) = Role::try_from_value(&role.to_string()) else {
        return PermissionFlags::NONE;
    };

    match role {
        Role::Admin => PermissionFlags::ALL,
        Role::Manager => match area {
            Area::User | Area::Settings => PermissionFlags::new(true, true, false, false),
            _ => PermissionFlags::ALL,
        },
        Role::Coach => match area {
            Area::Attendance | Area::Training | Area::Booking => {
                PermissionFlags::new(true, true, true, false)
            }
            Area::Member
            | Area::Coach
            | Area::Facility
            | Area::MemberProduct
            | Area::Announcement => PermissionFlags::new(true, false, false, false),
            _ => PermissionFlags::NONE,
        },
        Role::Front => match area {
            Area::User | Area::Settings => PermissionFlags::NONE,
            Area::Member
            | Area::Booking
            | Area::Payment
            | Area::Attendance
            | Area::Message
            | Area::MemberProduct => PermissionFlags::new(true, true, true, false),
            _ => PermissionFlags::new(true, false, false, false),
        },
    }
}

/// One row of a role's matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaPermission {
    pub area: Area,
    pub flags: PermissionFlags,
    pub overridden: bool,
}

impl AreaPermission {
    pub fn into_dto(self) -> PermissionDto {
        PermissionDto {
            area: self.area,
            can_view: self.flags.can_view,
            can_create: self.flags.can_create,
            can_edit: self.flags.can_edit,
            can_delete: self.flags.can_delete,
            overridden: self.overridden,
        }
    }
}

/// Every area in declaration order.
pub fn all_areas() -> Vec<Area> {
    Area::iter().collect()
}
