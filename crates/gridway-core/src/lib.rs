//! **gridway-core** — grid pathfinding engine (core types).
//!
//! This crate provides the foundational types used across the *gridway*
//! workspace: geometry primitives, the [`PathCell`] trait with its default
//! [`Cell`], and the owned 2D [`Grid`] container the search algorithms in
//! `gridway-paths` operate on.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, PathCell};
pub use geom::{Point, Range};
pub use grid::Grid;
