//! Tile platformer
//!
//! A side-scrolling platformer built around a small, headless simulation core:
//! a level parsed from a character grid, a player and patrolling enemies that
//! resolve AABB collisions against its tiles, and a tick function that handles
//! enemy contact and the goal. The SDL2 modules (`input_system`, `render`,
//! `text`) drive and draw that core in a window.

pub mod collision;
pub mod config;
pub mod enemy;
pub mod game;
pub mod input;
pub mod input_system;
pub mod level;
pub mod physics;
pub mod player;
pub mod render;
pub mod text;
pub mod tile;
