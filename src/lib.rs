#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Member Search
//!
//! Dynamic search over members and their (optional) teams, with paged results.
//!
//! ## Overview
//!
//! A search takes a [`search::MemberSearchCondition`] whose fields are all
//! optional. Each present field becomes one predicate; absent or blank fields
//! contribute nothing, and the predicates are combined with AND. Results are
//! rows of the member/team outer join, so members without a team are kept
//! with NULL team columns.
//!
//! Paged searches come in two flavours:
//! - **simple**: content query and count query, always both
//! - **complex**: the count query is skipped when the first page is already
//!   shorter than the page size
//!
//! ## Module Organization
//!
//! - [`models`] - Member and team rows, the joined DTO
//! - [`search`] - Conditions, predicates, paging, and the search service
//! - [`repository`] - The [`repository::MemberStore`] seam with PostgreSQL and in-memory stores
//! - [`query_builder`] - SQL assembly with bound parameters
//! - [`web`] - Axum HTTP surface
//! - [`config`] - Layered configuration
//! - [`logging`] - Tracing setup
//! - [`seed`] - Sample data
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use member_search::models::{NewMember, NewTeam};
//! use member_search::repository::{InMemoryMemberStore, MemberStore};
//! use member_search::search::{MemberSearchCondition, MemberSearchService};
//!
//! # tokio_test::block_on(async {
//! let store = Arc::new(InMemoryMemberStore::new());
//! let team = store.save_team(NewTeam::new("teamB")).await?;
//! store.save_member(NewMember::with_team("member4", 40, team.team_id)).await?;
//!
//! let service = MemberSearchService::new(store);
//! let condition = MemberSearchCondition::new().team_name("teamB").age_goe(35);
//! let rows = service.search(&condition).await?;
//! assert_eq!(rows[0].username.as_deref(), Some("member4"));
//! # Ok::<(), member_search::error::MemberSearchError>(())
//! # }).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod search;
pub mod seed;
pub mod web;

pub use error::{MemberSearchError, Result};
pub use models::{Member, MemberTeamDto, Team};
pub use repository::{InMemoryMemberStore, MemberStore, PgMemberStore};
pub use search::{MemberSearchCondition, MemberSearchService, Page, PageRequest};
