//! Physics module
//!
//! The camera only needs two read-only scene queries: a line test and a
//! sphere sweep. This module defines that interface and ships a small
//! box-collider world implementing it.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**. Query distances are measured from the query origin.
//!
//! # Submodules
//!
//! - [`query`] - [`PhysicsWorld`] trait, hit records and surface tags
//! - [`collision`] - Axis-aligned boxes and slab ray tests
//! - [`scene`] - [`ColliderScene`], a brute-force reference world

pub mod collision;
pub mod query;
pub mod scene;

pub use collision::Aabb;
pub use query::{LineHit, PhysicsWorld, SurfaceTag, SweepHit};
pub use scene::{Collider, ColliderScene};
