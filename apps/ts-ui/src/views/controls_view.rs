use ts_app::{ControlSettings, K_SLIDER, N_MAX_SLIDER, ParameterChange, V0_SLIDER, W_SLIDER};
use ts_engine::Variant;

/// Variant selector and parameter sliders.
///
/// Edits a copy of the current settings and reports what changed; the
/// control surface decides whether the change is accepted.
pub struct ControlsView;

impl ControlsView {
    pub fn show(&mut self, ui: &mut egui::Ui, settings: &ControlSettings) -> Vec<ParameterChange> {
        let mut changes = Vec::new();
        let mut edit = *settings;

        ui.horizontal(|ui| {
            ui.label("Behavior:");
            egui::ComboBox::from_id_salt("variant_selector")
                .selected_text(edit.variant.label())
                .show_ui(ui, |ui| {
                    for variant in Variant::ALL {
                        ui.selectable_value(&mut edit.variant, variant, variant.label());
                    }
                });
            if edit.variant != settings.variant {
                changes.push(ParameterChange::Variant(edit.variant));
            }

            // W only exists for the evaporation variant.
            if edit.evaporation_visible() {
                let slider = egui::Slider::new(&mut edit.evaporation, W_SLIDER.range())
                    .step_by(W_SLIDER.step)
                    .text(W_SLIDER.label);
                if ui.add(slider).changed() {
                    changes.push(ParameterChange::Evaporation(edit.evaporation));
                }
            }
        });

        let v0 = egui::Slider::new(&mut edit.v0, V0_SLIDER.range())
            .step_by(V0_SLIDER.step)
            .text(V0_SLIDER.label);
        if ui.add(v0).changed() {
            changes.push(ParameterChange::V0(edit.v0));
        }

        let k = egui::Slider::new(&mut edit.k, K_SLIDER.range())
            .step_by(K_SLIDER.step)
            .text(K_SLIDER.label);
        if ui.add(k).changed() {
            changes.push(ParameterChange::K(edit.k));
        }

        let n_range = (N_MAX_SLIDER.min as usize)..=(N_MAX_SLIDER.max as usize);
        let n_max = egui::Slider::new(&mut edit.n_max, n_range)
            .step_by(N_MAX_SLIDER.step)
            .text(N_MAX_SLIDER.label);
        if ui.add(n_max).changed() {
            changes.push(ParameterChange::NMax(edit.n_max));
        }

        changes
    }
}
