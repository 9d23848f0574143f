//! **navgrid-core** — geometry shared by the navgrid crates.
//!
//! Integer grid coordinates ([`Point`], [`Range`]) for node bookkeeping and
//! a world-space [`Vec3`] for positions handed to and from the game.

pub mod geom;
pub mod world;

pub use geom::{Point, Range, RangeIter};
pub use world::Vec3;
