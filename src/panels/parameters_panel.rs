use eframe::egui;

use crate::i18n::Translator;
use crate::parameters::{NUMPY_RAND_MAX, NUMPY_RAND_MIN, is_seed_invalid, validate_seed_weights};
use crate::selectors::Readiness;
use crate::state::GenerationState;

const INVALID_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 62, 62);

/// Prompt and seed controls
pub fn parameters_panel(ui: &mut egui::Ui, generation: &mut GenerationState, translator: &Translator) {
    let t = |key: &str| translator.t(key);

    ui.label(t("parameters:prompt"));
    ui.add(
        egui::TextEdit::multiline(&mut generation.prompt)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    ui.label(t("parameters:negativePrompts"));
    ui.add(
        egui::TextEdit::multiline(&mut generation.negative_prompt)
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );

    ui.separator();

    ui.horizontal(|ui| {
        ui.label(t("parameters:seed"));
        let mut seed = generation.seed;
        let invalid = is_seed_invalid(seed, generation.should_generate_variations);
        let field = ui.add_enabled(
            !generation.should_randomize_seed,
            egui::DragValue::new(&mut seed).range(NUMPY_RAND_MIN..=NUMPY_RAND_MAX),
        );
        if field.changed() {
            generation.set_seed(seed);
        }
        if invalid {
            ui.colored_label(INVALID_COLOR, "⚠");
        }
    });
    ui.checkbox(&mut generation.should_randomize_seed, t("parameters:randomizeSeed"));

    ui.separator();

    ui.checkbox(&mut generation.should_generate_variations, t("parameters:variations"));
    ui.add_enabled_ui(generation.should_generate_variations, |ui| {
        let mut amount = generation.variation_amount;
        let slider = egui::Slider::new(&mut amount, 0.0..=1.0).text(t("parameters:variationAmount"));
        if ui.add(slider).changed() {
            generation.set_variation_amount(amount);
        }

        ui.label(t("parameters:seedWeights"));
        let valid = validate_seed_weights(&generation.seed_weights);
        let mut edit = egui::TextEdit::singleline(&mut generation.seed_weights).hint_text("1234:0.5,5678:0.25");
        if !valid {
            edit = edit.text_color(INVALID_COLOR);
        }
        ui.add(edit);
    });
}

/// The generate button, enabled only when ready. Returns true when clicked.
pub fn invoke_button(ui: &mut egui::Ui, readiness: &Readiness, translator: &Translator) -> bool {
    let button = egui::Button::new(translator.t("parameters:invoke")).min_size(egui::vec2(120.0, 32.0));
    let reasons = readiness.reason_messages().join("\n");
    ui.add_enabled(readiness.is_ready, button)
        .on_disabled_hover_text(format!("{}:\n{}", translator.t("parameters:notReady"), reasons))
        .clicked()
}
