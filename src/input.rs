use glam::Vec2;
use web_sys as web;

/// What a drag gesture does to the orbit rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub mode: Option<DragMode>,
}

impl PointerState {
    pub fn press(&mut self, pos: Vec2, mode: DragMode) {
        self.x = pos.x;
        self.y = pos.y;
        self.down = true;
        self.mode = Some(mode);
    }

    /// Move to `pos` and return the pixel delta while a drag is active.
    pub fn move_to(&mut self, pos: Vec2) -> Option<(DragMode, Vec2)> {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        match (self.down, self.mode) {
            (true, Some(m)) => Some((m, delta)),
            _ => None,
        }
    }

    pub fn release(&mut self) {
        self.down = false;
        self.mode = None;
    }
}

/// Primary button rotates; secondary/middle button or a shift-drag pans.
#[inline]
pub fn drag_mode(button: i16, shift: bool) -> DragMode {
    match button {
        0 if !shift => DragMode::Rotate,
        _ => DragMode::Pan,
    }
}

/// Normalize wheel deltas (pixel/line/page modes) to signed notches.
#[inline]
pub fn wheel_notches(delta_y: f64, delta_mode: u32) -> f32 {
    let px = match delta_mode {
        1 => delta_y * 16.0,  // lines
        2 => delta_y * 400.0, // pages
        _ => delta_y,
    };
    if px == 0.0 {
        0.0
    } else {
        (px / 100.0).clamp(-3.0, 3.0) as f32
    }
}

/// Keys handled globally; anything else is left to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMotion,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "m" | "M" => Some(KeyAction::ToggleMotion),
        _ => None,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
