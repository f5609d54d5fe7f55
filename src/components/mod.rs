//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities
//! in the demo world.
//!
//! Submodules overview:
//! - [`sprite`] – 2D sprite rendering component and its anchor descriptor
//! - [`squish`] – periodic squash-and-stretch animation state
//! - [`transform`] – translation, rotation and scale of an entity

pub mod sprite;
pub mod squish;
pub mod transform;
