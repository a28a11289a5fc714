//! Access policy: organizational area → visible dashboard sections.

use crate::models::unit::Unit;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Section {
    Main,
    Unit(Unit),
    Consolidated,
}

impl Section {
    /// Every section, in dashboard order.
    pub fn all() -> Vec<Section> {
        let mut sections = vec![Section::Main];
        sections.extend(Unit::ALL.iter().map(|u| Section::Unit(*u)));
        sections.push(Section::Consolidated);
        sections
    }

    pub fn for_unit(unit: Unit) -> Self {
        Section::Unit(unit)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Main => f.write_str("Main"),
            Section::Unit(u) => f.write_str(u.code()),
            Section::Consolidated => f.write_str("Consolidated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    pub fn can_write(&self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }
}

pub const ROLES: [&str; 3] = ["admin", "editor", "viewer"];

/// Areas that see every section.
const FULL_ACCESS: [Unit; 2] = [Unit::Vpe, Unit::Pre];

/// Sections visible to `area`, in dashboard order.
///
/// VPE and PRE see everything; VPD, VPO and VPF see their own section plus
/// the shared Main and Consolidated sections; anything else sees only the
/// shared ones.
pub fn visible_sections(area: &str) -> Vec<Section> {
    match Unit::from_code(area) {
        Some(unit) if FULL_ACCESS.contains(&unit) => Section::all(),
        Some(unit) => vec![Section::Main, Section::Unit(unit), Section::Consolidated],
        None => vec![Section::Main, Section::Consolidated],
    }
}

pub fn can_view(area: &str, section: Section) -> bool {
    visible_sections(area).contains(&section)
}

/// Write access: an admin/editor role on a visible unit section.
/// Main and Consolidated are computed views and never writable.
pub fn can_edit(role: &str, area: &str, section: Section) -> bool {
    matches!(section, Section::Unit(_))
        && Role::parse(role).is_some_and(|r| r.can_write())
        && can_view(area, section)
}
