use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// Register a click listener on `target` for the lifetime of the page.
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1("hidden");
    } else {
        _ = cl.add_1("hidden");
    }
}

/// Keep the canvas backing store at CSS size * devicePixelRatio. A hidden
/// canvas keeps its previous size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(w) = web::window() else { return };
    let css = input::canvas_css_size(canvas);
    if let Some((w_px, h_px)) = input::backing_size(css, w.device_pixel_ratio() as f32) {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
