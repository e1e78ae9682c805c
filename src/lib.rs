// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-accelerated 3D Lissajous figure engine built on wgpu.
//!
//! Lissa animates parametric Lissajous curves in real time: a single
//! full-resolution figure or a 4x4 grid of miniature variations, with an
//! orbiting camera, eased viewpoint flights, and pointer hover detection.
//!
//! # Key entry points
//!
//! - [`engine::LissaEngine`] - the main rendering engine
//! - [`scene::SceneState`] - view modes, figure groups, and hover state
//! - [`options::Options`] - runtime configuration (camera, display, curve,
//!   keybindings)
//! - [`Viewer`] - a ready-made winit window around the engine
//!   (feature `viewer`)
//!
//! # Architecture
//!
//! The scene layer is GPU-free: curve sampling, view switching, and
//! ray-sphere picking all run on plain data, so the interactive contract is
//! testable headless. Hover results are published through a lock-free triple
//! buffer for consumers on other threads. The engine layers wgpu buffers,
//! the camera binding, and a three-pass draw (curve lines, reference grid,
//! additive glow points) on top.

pub mod camera;
pub mod curve;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod panel;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{EngineCommand, LissaEngine};
pub use error::LissaError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use scene::{HoverReader, ViewMode};
pub use settings::{Settings, SharedSettings};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
