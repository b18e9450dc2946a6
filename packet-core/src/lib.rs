//! Core of the packet traffic visualizer.
//!
//! Main components:
//! - [`entity`]: nodes, the packets they send, and their physics.
//! - [`compositor`]: scene ownership, frame pipeline and viewport.
//! - [`easing`]: the ease-out curve that drives packet motion.
//! - [`surface`]: the drawing interface and a recording backend.
//! - [`labels`]: label substitution collaborators.
//! - [`traffic`]: send events from a capture or replay source.
//! - [`config`]: simulation tunables.
//! - [`color`], [`types`]: shared value types.

pub mod color;
pub mod compositor;
pub mod config;
pub mod easing;
pub mod entity;
pub mod labels;
pub mod surface;
pub mod traffic;
pub mod types;

pub use color::Color;
pub use compositor::{Compositor, FrameStats};
pub use config::{ConfigError, SimConfig};
pub use entity::{Entity, Packet, PositionLookup};
pub use types::NodeId;
