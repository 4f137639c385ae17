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

//! Spherical orbit camera rig with gesture-driven controls.
//!
//! Orbita keeps a camera on a sphere around a focus point and steers it
//! with touch, mouse, and keyboard gestures: pinch or scroll to zoom,
//! drag to rotate, and drag along a focus-centered movement plane to pan.
//!
//! # Key entry points
//!
//! - [`controller::CameraController`] - the per-step orchestrator
//! - [`rig::CameraRig`] - the spherical-coordinate camera model
//! - [`input::InputSnapshot`] - platform-agnostic per-step input state
//! - [`options::Options`] - runtime configuration (geometry, speeds,
//!   per-device bindings)
//!
//! # Architecture
//!
//! Hosts fill an [`input::InputSnapshot`] from their window system (a
//! `winit` feature provides event conversions) and call
//! [`controller::CameraController::step`] once per simulation tick. The
//! controller eases toward any follow target, runs the device adapters
//! through a single-active-gesture state machine, and returns the camera
//! pose to render with.

pub mod controller;
pub mod error;
pub mod gesture;
pub mod input;
pub mod options;
pub mod rig;
