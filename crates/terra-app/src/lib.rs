//! Terra application framework.
//!
//! Assembles the globe, camera pilot and overlays into a bevy_ecs world
//! driven one frame at a time.

pub mod app;
pub mod error;
pub mod fade_overlay;
pub mod frame_loop;
pub mod platform;
pub mod resources;
pub mod startup;
pub mod systems;

pub use app::{FrameReport, TerraApp};
pub use error::AppError;
pub use frame_loop::{FrameLoop, FrameTime};
pub use platform::{PlatformDirs, PlatformError};
pub use startup::{LoadedConfig, load_config};
