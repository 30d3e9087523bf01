//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence concerns so route handlers can stay
//! focused on protocol translation. Each module covers one entity and its
//! store operations; none of them calls another — entities are related only
//! through shared id references.

pub mod booking;
pub mod provider;
pub mod user;
