//! Closed-form motion of a semi-infinite string.
//!
//! Solves
//!
//! ```text
//! u_tt = c² u_xx      x, t > 0
//! u(x, 0)   = 0       x > 0
//! u_t(x, 0) = g(x)    x > 0
//! u(0, t)   = 0       t > 0
//! ```
//!
//! for a piecewise-constant g by d'Alembert's formula on the odd extension of
//! g. Nothing is time-stepped; every sample is an exact evaluation.
//!
//! ```
//! use semi_infinite_string::{antiderivative, displacement};
//!
//! assert_eq!(antiderivative(0.0, 2.0).unwrap(), -0.25);
//! assert_eq!(displacement(0.0, 2.0, 0.5).unwrap(), 0.0);
//! assert!(displacement(-1.0, 2.0, 0.5).is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod frames;
pub mod grid;
pub mod profile;
pub mod render;
pub mod solution;

pub use config::Config;
pub use error::{Result, WaveError};
pub use frames::{sample_animation, sample_frame, Animation, Frame};
pub use grid::{linspace, TimeSchedule};
pub use profile::{Piece, VelocityProfile};
pub use solution::{
    antiderivative, displacement, left_wave, right_wave, Components, SemiInfiniteString,
};
