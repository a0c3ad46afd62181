//! Geometry of foldable, glueless papercraft boxes.
//!
//! Converts the inner dimensions of a box and the thickness of the paper into an unfolded
//! net (a closed cut path with locking tabs and corner gussets, plus dashed fold guides),
//! places it on a page and renders it as an SVG document.

/// Geometric primitives
pub mod geometry;

/// Entities modelling the box, the page and the unfolded net
pub mod entities;

/// Importing box descriptions into and exporting nets out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
