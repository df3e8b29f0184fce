//! # Data Models
//!
//! Row types for the `team` and `member` tables plus the joined
//! [`MemberTeamDto`] projection returned by searches.
//!
//! Each model exposes its own SQLx operations (`create`, `find_by_id`, ...)
//! taking a `&PgPool`, in the same shape the PostgreSQL store calls them.

pub mod member;
pub mod team;

pub use member::{Member, MemberChanges, MemberTeamDto, NewMember};
pub use team::{NewTeam, Team};
