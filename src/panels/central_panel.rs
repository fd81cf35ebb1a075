use eframe::egui;

use crate::i18n::Translator;
use crate::input::InputHandler;
use crate::state::{CanvasObject, CanvasState};

/// Canvas area: bounding box, canvas objects and the staging bar.
///
/// Only records where the canvas is; pointer tracking happens in the app's
/// input pass using the rect registered here.
pub fn central_panel(
    ui: &mut egui::Ui,
    canvas: &mut CanvasState,
    input: &mut InputHandler,
    translator: &Translator,
) {
    if canvas.is_staging() {
        staging_bar(ui, canvas, translator);
        ui.separator();
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let rect = response.rect;
    input.set_canvas_rect(rect);

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

    let origin = rect.min.to_vec2();
    for object in &canvas.objects {
        match object {
            CanvasObject::FillRect { rect: area, color, .. } => {
                painter.rect_filled(area.translate(origin), 0.0, color.to_color32());
            }
            CanvasObject::EraseRect { rect: area, .. } => {
                painter.rect_filled(area.translate(origin), 0.0, egui::Color32::from_gray(24));
            }
        }
    }

    let stroke_color = if canvas.is_mouse_over_bounding_box {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_gray(160)
    };
    painter.rect_stroke(
        canvas.bounding_box.translate(origin),
        0.0,
        egui::Stroke::new(1.0, stroke_color),
    );

    if let Some(pos) = canvas.cursor_position {
        let radius = canvas.brush_size as f32 / 2.0;
        painter.circle_stroke(pos, radius, egui::Stroke::new(1.0, canvas.brush_color.to_color32()));
    }

    painter.text(
        rect.left_bottom() + egui::vec2(8.0, -8.0),
        egui::Align2::LEFT_BOTTOM,
        format!("{}: {}", translator.t("unifiedcanvas:canvasObjects"), canvas.objects.len()),
        egui::FontId::monospace(12.0),
        egui::Color32::GRAY,
    );
}

fn staging_bar(ui: &mut egui::Ui, canvas: &mut CanvasState, translator: &Translator) {
    ui.horizontal(|ui| {
        ui.label(translator.t("unifiedcanvas:staging"));
        if let Some(image) = canvas.staging_area.selected() {
            ui.monospace(image.name.as_str());
        }
        ui.label(format!("({})", canvas.staging_area.images().len()));
        if ui.button("◀").clicked() {
            canvas.staging_area.select_prev();
        }
        if ui.button("▶").clicked() {
            canvas.staging_area.select_next();
        }
        if ui.button(translator.t("unifiedcanvas:accept")).clicked() {
            if let Some(image) = canvas.staging_area.accept() {
                log::info!("Accepted staged image {}", image.name);
            }
        }
        if ui.button(translator.t("unifiedcanvas:discardAll")).clicked() {
            log::info!("Discarded {} staged images", canvas.staging_area.images().len());
            canvas.staging_area.discard_all();
        }
    });
}
