//! `tombola`: uniform draw primitives.
//!
//! Small stateless helpers for randomized selection: picking a random index or
//! element from a slice, drawing a fixed number of distinct elements without
//! replacement, and dealing a random subset round-robin into groups (e.g.
//! picking raffle winners, splitting people into teams).
//!
//! Exposed modules:
//! - `draw`: random index/element picks + draw-without-replacement.
//! - `group`: round-robin dealing of a drawn subset into groups.

#![forbid(unsafe_code)]

pub mod draw;
pub mod group;

pub use draw::{
    draw, draw_with_rng, random_index, random_index_with_rng, random_value,
    random_value_with_rng, DrawError,
};
pub use group::{draw_into_groups, draw_into_groups_with_rng};
