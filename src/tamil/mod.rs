//! Tamil letters and their durations
//!
//! [`letters`] classifies clusters of Tamil script. [`kurukkam`] builds the
//! shortening rules on top of it and exposes [`kurukkam::nodi`].

pub mod kurukkam;
pub mod letters;

pub use kurukkam::{Nodi, nodi};
pub use letters::{MeiClass, cluster, clusters};
