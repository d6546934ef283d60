//! Pluckable-string physics for interactive toys.
//!
//! `twangy` simulates draggable strings that bend under pointer input and
//! spring back through a damped per-point oscillator, plus the transient
//! state around them: smooth curve serialization, spark bursts, and tone
//! cues fired on release.
//!
//! # Features
//!
//! - **Point chains**: Fixed-step damped oscillators with pinned endpoints
//! - **Drag kernel**: Quadratic falloff deflection around the pulled point
//! - **Curve paths**: Midpoint-quadratic SVG path serialization
//! - **Pluck sessions**: Single-drag state machine with mid-drag hand-off
//! - **Spark bursts**: Fixed-size particle bursts with linear decay
//! - **Tone cues**: Note table and envelope constants behind a sink trait
//! - **Observable**: React to plucks via the `PluckObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod chain;
pub mod curve;
pub mod pointer;
pub mod board;
pub mod effects;
pub mod tone;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::PluckPoint;
pub use chain::PluckChain;
pub use curve::path_data;
pub use pointer::Region;
pub use board::StringBoard;
pub use effects::{Spark, SparkField, BURST_COUNT, DECAY, GRAVITY};
pub use tone::{NoOpToneSink, ToneCue, ToneSink, NOTE_TABLE};
pub use observer::{NoOpPluckObserver, PluckObserver};
pub use config::Tuning;
pub use error::TwangError;
