//! Role enumerations and their precedence hierarchies
//!
//! Two independent, totally ordered role sets exist: the system-wide
//! [`GlobalRole`] and the per-contest [`ContestRole`]. Ranks are the
//! declaration order of the enum; the hierarchy tables are computed once
//! and are immutable for the life of the process. The type system keeps
//! the two hierarchies from ever being compared against each other.

use serde::{Deserialize, Serialize};

/// System-wide role, ordered by declaration: `User < Admin < SuperAdmin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GlobalRole {
    /// Regular platform user
    User,
    /// Platform administrator
    Admin,
    /// Unrestricted administrator; supersedes all contest scoping
    SuperAdmin,
}

/// Per-contest role, ordered by declaration:
/// `Participant < Reviewer < Manager < Admin`
///
/// Independent of [`GlobalRole`]; a contest `Admin` carries no weight
/// outside its contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContestRole {
    /// Solves problems in the contest
    Participant,
    /// Reviews clarifications and submissions
    Reviewer,
    /// Manages contest content and participants
    Manager,
    /// Full control over the contest
    Admin,
}

impl GlobalRole {
    /// All roles in ascending precedence order
    pub const ORDERED: [GlobalRole; 3] = [GlobalRole::User, GlobalRole::Admin, GlobalRole::SuperAdmin];

    /// Rank within the hierarchy; strictly increasing in declaration order
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this role meets or exceeds `required`
    pub const fn satisfies(self, required: GlobalRole) -> bool {
        self.rank() >= required.rank()
    }
}

impl ContestRole {
    /// All roles in ascending precedence order
    pub const ORDERED: [ContestRole; 4] = [
        ContestRole::Participant,
        ContestRole::Reviewer,
        ContestRole::Manager,
        ContestRole::Admin,
    ];

    /// Rank within the hierarchy; strictly increasing in declaration order
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this role meets or exceeds `required`
    pub const fn satisfies(self, required: ContestRole) -> bool {
        self.rank() >= required.rank()
    }
}

impl Default for ContestRole {
    /// The lowest rank - "any participant" is the default guard threshold
    fn default() -> Self {
        ContestRole::Participant
    }
}

/// Immutable precedence table over one role set
///
/// Built once at process start from the declared order; guards share the
/// static instances rather than rebuilding the table per evaluation.
#[derive(Debug)]
pub struct RoleHierarchy<R: Copy + Eq + 'static> {
    order: &'static [R],
}

/// Hierarchy over [`GlobalRole`]
pub static GLOBAL_HIERARCHY: RoleHierarchy<GlobalRole> = RoleHierarchy::new(&GlobalRole::ORDERED);

/// Hierarchy over [`ContestRole`]
pub static CONTEST_HIERARCHY: RoleHierarchy<ContestRole> = RoleHierarchy::new(&ContestRole::ORDERED);

impl<R: Copy + Eq + 'static> RoleHierarchy<R> {
    /// Build a hierarchy from roles listed in ascending precedence
    pub const fn new(order: &'static [R]) -> Self {
        Self { order }
    }

    /// Position of `role` in the declared order
    pub fn rank(&self, role: R) -> usize {
        // Every variant appears in the declared order by construction.
        self.order
            .iter()
            .position(|candidate| *candidate == role)
            .unwrap_or(0)
    }

    /// Whether `actual` meets or exceeds `required`
    pub fn satisfies(&self, actual: R, required: R) -> bool {
        self.rank(actual) >= self.rank(required)
    }

    /// The roles in ascending precedence order
    pub fn ordered(&self) -> &'static [R] {
        self.order
    }
}
