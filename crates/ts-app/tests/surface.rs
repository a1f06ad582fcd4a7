//! Integration tests for the control surface update cycle.

use ts_app::{
    AppError, ControlSettings, ControlSurface, ParameterChange, RenderFrame, Renderer, SeriesKind,
};
use ts_engine::{EngineError, Variant};

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}

#[test]
fn refresh_draws_default_sequence() {
    let mut surface = ControlSurface::default();
    let mut renderer = RecordingRenderer::default();

    surface.refresh(&mut renderer).unwrap();

    assert_eq!(renderer.frames.len(), 1);
    let frame = &renderer.frames[0];
    assert_eq!(frame.variant, Variant::DirtyWaterFirst);
    assert_eq!(frame.len(), 10);
    assert_eq!(frame.x_extent, (0.0, 10.0));
    assert_eq!(frame.dirty, vec![100.0; 10]);
    assert_eq!(frame.clean[9], 1000.0);
    assert_eq!(surface.frame(), Some(frame));
}

#[test]
fn each_change_recomputes_with_full_settings() {
    let mut surface = ControlSurface::default();
    let mut renderer = RecordingRenderer::default();

    surface
        .apply(ParameterChange::Evaporation(250.0), &mut renderer)
        .unwrap();
    surface
        .apply(
            ParameterChange::Variant(Variant::MixingWithEvaporation),
            &mut renderer,
        )
        .unwrap();
    surface.apply(ParameterChange::NMax(2), &mut renderer).unwrap();

    assert_eq!(renderer.frames.len(), 3);
    // W set while hidden still applies once the evaporation variant is chosen.
    let last = renderer.frames.last().unwrap();
    assert_eq!(last.variant, Variant::MixingWithEvaporation);
    assert_eq!(last.clean[0], 90.0);
    assert_eq!(last.days, vec![0, 1]);
    assert_eq!(last.x_extent, (0.0, 2.0));
}

#[test]
fn w_visibility_follows_variant() {
    let mut surface = ControlSurface::default();
    let mut renderer = RecordingRenderer::default();
    assert!(!surface.evaporation_visible());

    surface
        .apply(
            ParameterChange::Variant(Variant::MixingWithEvaporation),
            &mut renderer,
        )
        .unwrap();
    assert!(surface.evaporation_visible());

    surface
        .apply(ParameterChange::Variant(Variant::Mixing), &mut renderer)
        .unwrap();
    assert!(!surface.evaporation_visible());
}

#[test]
fn slider_values_are_clamped_before_recompute() {
    let mut surface = ControlSurface::default();
    let mut renderer = RecordingRenderer::default();

    surface.apply(ParameterChange::NMax(0), &mut renderer).unwrap();
    surface.apply(ParameterChange::K(25.0), &mut renderer).unwrap();

    assert_eq!(surface.settings().n_max, 1);
    assert_eq!(surface.settings().k, 10.0);
    let frame = renderer.frames.last().unwrap();
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.x_extent, (0.0, 1.0));
}

#[test]
fn zero_length_preset_is_rejected() {
    let settings = ControlSettings {
        n_max: 0,
        ..ControlSettings::default()
    };
    let mut surface = ControlSurface::new(settings);
    let mut renderer = RecordingRenderer::default();

    let err = surface.refresh(&mut renderer).unwrap_err();

    assert!(matches!(
        err,
        AppError::Engine(EngineError::InvalidLength { n_max: 0 })
    ));
    assert!(renderer.frames.is_empty());
    assert!(surface.frame().is_none());
    assert!(surface.last_error().is_some());
}

#[test]
fn zero_capacity_is_surfaced() {
    let mut surface = ControlSurface::default();
    let mut renderer = RecordingRenderer::default();
    surface.refresh(&mut renderer).unwrap();
    let before = surface.frame().cloned();

    let err = surface
        .apply(ParameterChange::Capacity(0.0), &mut renderer)
        .unwrap_err();
    assert!(err.to_string().contains("capacity"));
    assert_eq!(surface.settings().capacity, 2500.0);
    assert_eq!(surface.frame().cloned(), before);
    assert!(matches!(
        surface.last_error(),
        Some(EngineError::Domain { .. })
    ));

    surface.apply(ParameterChange::K(2.0), &mut renderer).unwrap();
    assert!(surface.last_error().is_none());
    assert_eq!(renderer.frames.len(), 2);
}

#[test]
fn hover_on_rendered_frame() {
    let settings = ControlSettings {
        variant: Variant::CleanWaterFirst,
        v0: 2500.0,
        n_max: 2,
        ..ControlSettings::default()
    };
    let mut surface = ControlSurface::new(settings);
    let mut renderer = RecordingRenderer::default();
    surface.refresh(&mut renderer).unwrap();

    let frame = surface.frame().unwrap();
    assert_eq!(frame.dirty, vec![2500.0, 0.0]);
    let info = frame.hover(1.0, 10.0, 0.05).unwrap();
    assert_eq!(info.series, SeriesKind::Dirty);
    assert_eq!(info.value, 0.0);
    assert_eq!(info.to_string(), "Day: 1\nVolume: 0.000\nSeries: Dirty water");
}
