use crate::core::{screen_to_world_ray, OrbitCamera, PageState, Ray};
use crate::input::{self, PointerTracker, Release};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub page: Rc<RefCell<PageState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub tracker: Rc<RefCell<PointerTracker>>,
}

impl InputWiring {
    fn ray_at(&self, pos: Vec2) -> Ray {
        let size = input::canvas_css_size(&self.canvas);
        let cam = self.camera.borrow();
        let aspect = size.x / size.y.max(1.0);
        screen_to_world_ray(pos, size, cam.view_proj(aspect), cam.eye())
    }

    fn set_cursor(&self, pointer: bool) {
        _ = self
            .canvas
            .style()
            .set_property("cursor", if pointer { "pointer" } else { "grab" });
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_pointercancel(&w);
    wire_wheel(&w);
}

fn listen<E>(w: &InputWiring, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w2.canvas);
        let orbit_delta = w2.tracker.borrow_mut().moved(pos);
        if let Some(d) = orbit_delta {
            w2.camera.borrow_mut().rotate(d.x, d.y);
        }
        if w2.tracker.borrow().is_dragging() {
            return;
        }
        let ray = w2.ray_at(pos);
        let hovered = {
            let mut page = w2.page.borrow_mut();
            page.scene_mut().and_then(|s| s.pointer_move(&ray))
        };
        w2.set_cursor(hovered.is_some());
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerdown", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w2.canvas);
        w2.tracker.borrow_mut().press(pos);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerup", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w2.canvas);
        let release = w2.tracker.borrow_mut().release(pos);
        if release == Release::Click {
            let ray = w2.ray_at(pos);
            let mut page = w2.page.borrow_mut();
            if let Some(scene) = page.scene_mut() {
                if let Some(i) = scene.click(&ray) {
                    log::info!("[click] marker {}", i);
                }
            }
        }
        _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerleave", move |_ev: web::PointerEvent| {
        if w2.tracker.borrow().is_pressed() {
            return;
        }
        if let Some(scene) = w2.page.borrow_mut().scene_mut() {
            scene.pointer_leave();
        }
        w2.set_cursor(false);
    });
}

fn wire_pointercancel(w: &InputWiring) {
    // A press the browser took back must not keep orbiting on hover
    for event in ["pointercancel", "lostpointercapture"] {
        let w2 = w.clone();
        listen(w, event, move |ev: web::PointerEvent| {
            if !w2.tracker.borrow().is_pressed() {
                return;
            }
            w2.tracker.borrow_mut().cancel();
            _ = w2.canvas.release_pointer_capture(ev.pointer_id());
            log::debug!("[input] press cancelled by {}", ev.type_());
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "wheel", move |ev: web::WheelEvent| {
        w2.camera.borrow_mut().zoom(ev.delta_y() as f32);
        ev.prevent_default();
    });
}
