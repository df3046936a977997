//! Screens hosted by the router, one per route

pub mod team;
pub mod teams;

pub use team::{TeamProps, TeamScreen};
pub use teams::{TeamsProps, TeamsScreen};
