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
// Complexity limits
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

//! CPU-side scene builder for interactive 3D protein and small-molecule
//! views.
//!
//! Molscope turns structural records into render-ready data: triangle
//! meshes for cartoon ribbons and tubes, instanced spheres and cylinders for
//! atoms and bonds, plus lights and a camera. Vertex and instance structs
//! are `bytemuck::Pod`, so a host renderer can upload them as-is.
//!
//! # Key entry points
//!
//! - [`scene::ViewState`] - the viewer state (structure, toggles, camera)
//! - [`scene::build_protein_scene`] / [`scene::build_molecule_scene`] -
//!   one-shot scene assembly
//! - [`store::StructureStore`] - built-in sample proteins and simulated
//!   fetch
//! - [`builder::MoleculeBuilder`] - interactive small-molecule editing
//! - [`options::Options`] - runtime configuration (display, geometry,
//!   lighting, camera, store)
//!
//! # Pipeline
//!
//! A protein is split into secondary-structure segments
//! ([`secondary_structure`]), filtered by the display toggles ([`filter`]),
//! colored by the active scheme ([`color`]) and turned into primitives by
//! the [`geometry`] builders. [`info`] summarizes the loaded structure for
//! an info panel.

pub mod builder;
pub mod color;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod info;
pub mod options;
pub mod scene;
pub mod secondary_structure;
pub mod store;
pub mod structure;

pub use error::MolscopeError;
pub use options::Options;
pub use scene::{Scene, ViewState};
pub use structure::{Molecule, Protein};
