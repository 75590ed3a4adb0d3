//! Small behaviour overrides installed through the hook registry.
//!
//! None of these cache anything: each is a single branch in front of the
//! host's own implementation.

#![warn(missing_docs)]

pub mod animation;
pub mod hopper;
pub mod light;

pub use animation::install_static_textures;
pub use hopper::{install_hopper_throttle, TransferCooldown};
pub use light::{install_redstone_light, suppresses_light, LightSource};
