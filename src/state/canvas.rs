use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};
use uuid::Uuid;

use crate::color::RgbaColor;
use crate::tool::{CanvasTool, DEFAULT_BRUSH_SIZE, clamp_brush_size};

/// Default size of the generation bounding box
pub const DEFAULT_BOUNDING_BOX_SIZE: Vec2 = vec2(512.0, 512.0);

/// Something drawn onto the base layer by a canvas command
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasObject {
    FillRect {
        id: Uuid,
        rect: Rect,
        color: RgbaColor,
    },
    EraseRect {
        id: Uuid,
        rect: Rect,
    },
}

impl CanvasObject {
    pub fn id(&self) -> Uuid {
        match self {
            CanvasObject::FillRect { id, .. } | CanvasObject::EraseRect { id, .. } => *id,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            CanvasObject::FillRect { rect, .. } | CanvasObject::EraseRect { rect, .. } => *rect,
        }
    }
}

/// A generated image waiting to be accepted onto the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct StagingImage {
    pub id: Uuid,
    pub name: String,
}

impl StagingImage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Results of a canvas generation that have not been committed yet.
///
/// While it holds any image the canvas is "staging" and the tool options
/// are read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagingArea {
    images: Vec<StagingImage>,
    selected_index: usize,
}

impl StagingArea {
    pub fn images(&self) -> &[StagingImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn selected(&self) -> Option<&StagingImage> {
        self.images.get(self.selected_index)
    }

    pub fn push(&mut self, image: StagingImage) {
        self.images.push(image);
    }

    pub fn select_next(&mut self) {
        if !self.images.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.images.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.images.is_empty() {
            self.selected_index = (self.selected_index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Commit the selected image and leave staging
    pub fn accept(&mut self) -> Option<StagingImage> {
        let accepted = if self.selected_index < self.images.len() {
            Some(self.images.swap_remove(self.selected_index))
        } else {
            None
        };
        self.discard_all();
        accepted
    }

    pub fn discard_all(&mut self) {
        self.images.clear();
        self.selected_index = 0;
    }
}

/// Canvas slice of the application state
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    pub tool: CanvasTool,
    pub brush_size: u32,
    pub brush_color: RgbaColor,
    pub staging_area: StagingArea,
    pub objects: Vec<CanvasObject>,
    pub bounding_box: Rect,
    pub cursor_position: Option<Pos2>,
    pub is_mouse_over_bounding_box: bool,
    pub does_canvas_need_scaling: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            tool: CanvasTool::default(),
            brush_size: DEFAULT_BRUSH_SIZE,
            brush_color: RgbaColor::default(),
            staging_area: StagingArea::default(),
            objects: Vec::new(),
            bounding_box: Rect::from_min_size(pos2(0.0, 0.0), DEFAULT_BOUNDING_BOX_SIZE),
            cursor_position: None,
            is_mouse_over_bounding_box: false,
            does_canvas_need_scaling: false,
        }
    }
}

impl CanvasState {
    /// Build a canvas with the given starting tool and brush, clamped into range
    pub fn new(tool: CanvasTool, brush_size: i64, brush_color: RgbaColor) -> Self {
        Self {
            tool,
            brush_size: clamp_brush_size(brush_size),
            brush_color: brush_color.clamped(),
            ..Self::default()
        }
    }

    pub fn is_staging(&self) -> bool {
        !self.staging_area.is_empty()
    }

    pub fn object(&self, id: Uuid) -> Option<&CanvasObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    pub fn remove_object(&mut self, id: Uuid) -> Option<CanvasObject> {
        let index = self.objects.iter().position(|object| object.id() == id)?;
        Some(self.objects.remove(index))
    }

    pub fn set_cursor_position(&mut self, pos: Pos2) {
        self.cursor_position = Some(pos);
        self.is_mouse_over_bounding_box = self.bounding_box.contains(pos);
    }

    /// Pointer left the canvas: forget where it was
    pub fn mouse_left_canvas(&mut self) {
        self.cursor_position = None;
        self.is_mouse_over_bounding_box = false;
    }
}
