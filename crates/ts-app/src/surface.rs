//! Control surface: parameter state plus recompute-on-change.

use ts_engine::{EngineError, generate};

use crate::controls::{ControlSettings, ParameterChange};
use crate::error::AppResult;
use crate::frame::{RenderFrame, Renderer};

/// Owns the operator's parameter values and the last displayed frame.
///
/// Every change re-runs the engine with the complete settings. A rejected
/// change leaves both the settings and the displayed frame untouched.
#[derive(Debug, Default)]
pub struct ControlSurface {
    settings: ControlSettings,
    frame: Option<RenderFrame>,
    last_error: Option<EngineError>,
}

impl ControlSurface {
    pub fn new(settings: ControlSettings) -> Self {
        Self {
            settings,
            frame: None,
            last_error: None,
        }
    }

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    /// Last successfully computed frame.
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }

    /// Error of the most recent rejected update, cleared on success.
    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }

    pub fn evaporation_visible(&self) -> bool {
        self.settings.evaporation_visible()
    }

    /// Recompute with the current settings (initial draw).
    pub fn refresh<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> AppResult<()> {
        self.commit(self.settings, renderer)
    }

    /// Apply one operator edit and redraw.
    pub fn apply<R: Renderer + ?Sized>(
        &mut self,
        change: ParameterChange,
        renderer: &mut R,
    ) -> AppResult<()> {
        let candidate = self.settings.with_change(change);
        self.commit(candidate, renderer)
    }

    fn commit<R: Renderer + ?Sized>(
        &mut self,
        candidate: ControlSettings,
        renderer: &mut R,
    ) -> AppResult<()> {
        let params = candidate.to_params();
        match generate(candidate.variant, &params) {
            Ok(pair) => {
                tracing::debug!(
                    variant = %candidate.variant,
                    n_max = params.n_max,
                    "recomputed sequence"
                );
                let frame = RenderFrame::new(candidate.variant, &params, pair);
                renderer.render(&frame);
                self.settings = candidate;
                self.frame = Some(frame);
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "parameter update rejected");
                self.last_error = Some(err.clone());
                Err(err.into())
            }
        }
    }
}
