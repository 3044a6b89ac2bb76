use crate::constants::CLICK_DRAG_TOLERANCE_PX;
use glam::Vec2;
use web_sys as web;

/// What a pointer release amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Press and release without meaningful travel.
    Click,
    /// The press turned into an orbit drag.
    Drag,
    /// Release without a tracked press.
    Stray,
}

/// Press/drag bookkeeping for the canvas pointer.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    pub last: Vec2,
    pressed_at: Option<Vec2>,
    dragging: bool,
}

impl PointerTracker {
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, pos: Vec2) {
        self.pressed_at = Some(pos);
        self.dragging = false;
        self.last = pos;
    }

    /// Record a move. Returns the delta to orbit by while pressed.
    pub fn moved(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = pos - self.last;
        self.last = pos;
        let start = self.pressed_at?;
        if !self.dragging && pos.distance(start) > CLICK_DRAG_TOLERANCE_PX {
            self.dragging = true;
        }
        Some(delta)
    }

    pub fn release(&mut self, pos: Vec2) -> Release {
        self.last = pos;
        let was_dragging = std::mem::take(&mut self.dragging);
        match self.pressed_at.take() {
            None => Release::Stray,
            Some(start) if was_dragging || pos.distance(start) > CLICK_DRAG_TOLERANCE_PX => {
                Release::Drag
            }
            Some(_) => Release::Click,
        }
    }

    pub fn cancel(&mut self) {
        self.pressed_at = None;
        self.dragging = false;
    }
}

// ---------------- Pointer helpers ----------------
/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Backing store size for a canvas laid out at `css` pixels. `None` while
/// the canvas has no layout box (hidden), so the last real size is kept.
pub fn backing_size(css: Vec2, device_pixel_ratio: f32) -> Option<(u32, u32)> {
    if css.x < 1.0 || css.y < 1.0 {
        return None;
    }
    let px = (css * device_pixel_ratio.max(f32::EPSILON)).max(Vec2::ONE);
    Some((px.x as u32, px.y as u32))
}
