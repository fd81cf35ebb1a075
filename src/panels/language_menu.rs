use eframe::egui;

use crate::i18n::{LanguagePicker, Translator};

/// Language menu button. Returns the code the user picked, if any.
///
/// `stored` is the persisted language code and decides the marked entry.
pub fn language_menu(ui: &mut egui::Ui, translator: &Translator, stored: Option<&str>) -> Option<&'static str> {
    let mut chosen = None;
    ui.menu_button("🌐", |ui| {
        ui.label(translator.t("common:languagePickerLabel"));
        ui.separator();
        for option in LanguagePicker::options(translator, stored) {
            if ui.selectable_label(option.selected, option.label).clicked() {
                chosen = Some(option.code);
                ui.close_menu();
            }
        }
    })
    .response
    .on_hover_text(translator.t("common:languagePickerLabel"));
    chosen
}
