//! Team Invitations Library
//!
//! Teams invite users; saving a valid invitation flags the invitee as
//! invited. This library provides the domain model, the use cases, the
//! repository adapters and the HTTP API.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
