use eframe::egui;

use crate::color::{MAX_BRUSH_ALPHA, MIN_BRUSH_ALPHA, RgbaColor};
use crate::components::ToolButton;
use crate::i18n::Translator;
use crate::selectors::ToolOptionsView;
use crate::tool::{CanvasTool, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, ToolSelector};

/// Tool chooser: tool buttons, bounding box actions and brush options.
///
/// Reads from the memoized `view` and writes only through `selector`.
pub fn tools_panel(
    ui: &mut egui::Ui,
    view: &ToolOptionsView,
    translator: &Translator,
    selector: &mut ToolSelector<'_>,
) {
    let t = |key: &str| translator.t(key);
    let enabled = !view.is_staging;

    ui.heading(t("unifiedcanvas:brushOptions"));

    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal_wrapped(|ui| {
            for tool in CanvasTool::ALL {
                let button = ToolButton::new(tool, view.is_selected(tool), &t(tool.label_key()));
                if button.show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool);
                    selector.select_tool(tool);
                }
            }
        });

        ui.horizontal(|ui| {
            if ui
                .button(t("unifiedcanvas:fillBoundingBox"))
                .on_hover_text("Shift+F")
                .clicked()
            {
                selector.fill_canvas();
            }
            if ui
                .button(t("unifiedcanvas:eraseBoundingBox"))
                .on_hover_text("Del/Backspace")
                .clicked()
            {
                selector.erase_canvas_region();
            }
        });

        ui.separator();

        let mut size = view.brush_size as i64;
        let size_slider = egui::Slider::new(&mut size, MIN_BRUSH_SIZE as i64..=MAX_BRUSH_SIZE as i64)
            .text(t("unifiedcanvas:brushSize"));
        if ui.add(size_slider).changed() {
            selector.set_brush_size(size);
        }

        ui.horizontal(|ui| {
            let mut rgb = view.brush_color.rgb();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                let [r, g, b] = rgb;
                selector.set_brush_color(RgbaColor::new(r, g, b, view.brush_color.a));
            }

            let mut alpha = view.brush_color.a;
            let alpha_slider = egui::Slider::new(&mut alpha, MIN_BRUSH_ALPHA..=MAX_BRUSH_ALPHA)
                .text(t("unifiedcanvas:brushOpacity"));
            if ui.add(alpha_slider).changed() {
                selector.set_brush_color(view.brush_color.with_alpha(alpha));
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(selector.can_undo(), egui::Button::new(t("unifiedcanvas:undo")))
                .clicked()
            {
                selector.undo();
            }
            if ui
                .add_enabled(selector.can_redo(), egui::Button::new(t("unifiedcanvas:redo")))
                .clicked()
            {
                selector.redo();
            }
        });
    });
}
