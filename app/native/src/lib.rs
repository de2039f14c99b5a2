//! Tilecast - responsive video tiling for multi-party broadcasts.
//!
//! Given a participant count and the size of the hosting container, the
//! layout engine picks a tiling mode and returns one rectangle per
//! participant. Around the engine sit roster ordering (host first, tile
//! limits), a reactive session that recomputes on resize, the configuration
//! file and the `tilecast` CLI.
//!
//! ```
//! use tilecast_lib::layout::{LayoutMode, compute_layout, select_mode};
//!
//! let mode = select_mode(4, true).unwrap();
//! assert_eq!(mode, LayoutMode::Grid2x2);
//!
//! let tiles = compute_layout(mode, 4, 800.0, 600.0, true).unwrap();
//! assert_eq!(tiles.len(), 4);
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod layout;
pub mod roster;
pub mod schema;
pub mod session;

// Command-line interface
pub mod cli;
