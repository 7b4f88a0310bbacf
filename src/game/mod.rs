// Game module - simulation context and the per-tick orchestration
//
// This module contains:
// - world.rs: GameWorld struct, the tick function and draw list
// - types.rs: Shared enums and helper structs (tick events, draw tags)
// - camera.rs: Horizontal follow camera

pub mod camera;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use camera::Camera;
pub use types::*;
pub use world::GameWorld;
