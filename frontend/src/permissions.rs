//! Capability checks against the signed-in user's permission set.
//!
//! Every check takes the permission set explicitly. Callers obtain it from the
//! auth context; nothing here reads session state on its own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod capabilities {
    pub const PAGE_SALARY_MANAGEMENT: &str = "pages.salary_management";
    pub const PAGE_LEAVE_MANAGEMENT: &str = "pages.leave_management";

    pub const SALARY_COMPONENT_READ: &str = "payroll.salary_component.read";
    pub const SALARY_COMPONENT_CREATE: &str = "payroll.salary_component.create";
    pub const SALARY_COMPONENT_UPDATE: &str = "payroll.salary_component.update";
    pub const SALARY_COMPONENT_DELETE: &str = "payroll.salary_component.delete";

    pub const LEAVE_MANAGEMENT_READ_ALL: &str = "leave_management.read_all";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl PermissionSet {
    pub fn new<I, S>(is_master: bool, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_master,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn master() -> Self {
        Self {
            is_master: true,
            permissions: BTreeSet::new(),
        }
    }

    pub fn contains(&self, capability: &str) -> bool {
        self.permissions.contains(capability)
    }
}

/// Returns true when the set grants `capability`. A missing set denies.
pub fn allows(set: Option<&PermissionSet>, capability: &str) -> bool {
    match set {
        Some(set) => set.is_master || set.contains(capability),
        None => false,
    }
}

/// Every capability must be granted. Master passes regardless.
pub fn allows_all(set: Option<&PermissionSet>, required: &[&str]) -> bool {
    match set {
        Some(set) if set.is_master => true,
        Some(_) => required.iter().all(|capability| allows(set, capability)),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryComponentAccess {
    pub can_view_page: bool,
    pub can_read: bool,
    pub can_create: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl SalaryComponentAccess {
    pub fn evaluate(set: Option<&PermissionSet>) -> Self {
        use capabilities::*;
        Self {
            can_view_page: allows(set, PAGE_SALARY_MANAGEMENT),
            can_read: allows_all(set, &[PAGE_SALARY_MANAGEMENT, SALARY_COMPONENT_READ]),
            can_create: allows(set, SALARY_COMPONENT_CREATE),
            can_update: allows_all(
                set,
                &[
                    PAGE_SALARY_MANAGEMENT,
                    SALARY_COMPONENT_READ,
                    SALARY_COMPONENT_UPDATE,
                ],
            ),
            can_delete: allows(set, SALARY_COMPONENT_DELETE),
        }
    }

    pub fn has_row_actions(&self) -> bool {
        self.can_update || self.can_delete
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveManagementAccess {
    pub can_view_page: bool,
    pub can_view_data: bool,
}

impl LeaveManagementAccess {
    pub fn evaluate(set: Option<&PermissionSet>) -> Self {
        Self {
            can_view_page: allows(set, capabilities::PAGE_LEAVE_MANAGEMENT),
            can_view_data: allows(set, capabilities::LEAVE_MANAGEMENT_READ_ALL),
        }
    }
}
