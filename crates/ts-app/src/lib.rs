//! Shared application layer for tanksim.
//!
//! This crate provides the control surface used by both the CLI and GUI
//! frontends: it owns the operator's parameter values, re-runs the sequence
//! engine on every change and hands the resulting series to a renderer.

pub mod controls;
pub mod error;
pub mod frame;
pub mod settings;
pub mod surface;

// Re-export key types for convenience
pub use controls::{
    ControlSettings, K_SLIDER, N_MAX_SLIDER, ParameterChange, SliderSpec, V0_SLIDER, W_SLIDER,
};
pub use error::{AppError, AppResult};
pub use frame::{HoverInfo, RenderFrame, Renderer, SeriesKind, format_volume};
pub use settings::load_settings;
pub use surface::ControlSurface;
