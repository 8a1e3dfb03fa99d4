//! Grantdesk - grants-management core
//!
//! This library provides the authorization and validation core for a
//! multi-year federal grants tracker: a static role/permission model with
//! grant-scoped ownership checks, and declarative per-entity validation
//! producing field-keyed error reports. Persistence, transport, and UI
//! live in the calling layers.

pub mod authz;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod settings;
pub mod validation;
