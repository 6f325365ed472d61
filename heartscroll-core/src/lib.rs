//! Board-agnostic animation engine for the heartscroll LED matrix
//!
//! This crate contains all logic that does not depend on specific
//! hardware:
//!
//! - 8x8 bitmap storage and row/column-major conversion
//! - Glyph constants (letters, heart, blank)
//! - One-cell shifting with configurable carry handling
//! - Per-tick frame rolling (scroll-in of a glyph)
//! - Animation sequencer state machine
//! - Multiplexed paint pass with abort-and-restart contract

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bitmap;
pub mod drive;
pub mod glyph;
pub mod roll;
pub mod sequencer;
pub mod shift;
