#![cfg(target_arch = "wasm32")]
use crate::core::{PageState, SceneDescription, Section};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod chrome;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let description = SceneDescription::portfolio();
    let camera = Rc::new(RefCell::new(description.orbit_camera()));
    let page = Rc::new(RefCell::new(PageState::new(description.clone())));

    let chrome = Rc::new(chrome::Chrome::bind(&document, canvas.clone())?);
    chrome.render(page.borrow().active());
    chrome::wire_navigation(chrome.clone(), page.clone(), {
        let camera = camera.clone();
        let description = description.clone();
        move |section| {
            // A remounted canvas starts from the initial camera pose
            if section == Section::Projects {
                *camera.borrow_mut() = description.orbit_camera();
            }
        }
    });

    let layer = dom::element_by_id(&document, "card-layer")?;
    let cards = overlay::CardLayer::bind(&document, &layer, description.markers.len())?;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        page: page.clone(),
        camera: camera.clone(),
        tracker: Rc::new(RefCell::new(input::PointerTracker::default())),
    });

    // WebGPU comes up asynchronously; frames run (and skip marker animation)
    // until it is ready.
    let gpu: frame::SharedGpu = Rc::new(RefCell::new(None));
    {
        let gpu = gpu.clone();
        let canvas = canvas.clone();
        let description = description.clone();
        spawn_local(async move {
            let state = frame::init_gpu(&canvas, &description).await;
            *gpu.borrow_mut() = state;
        });
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        page,
        camera,
        canvas,
        cards,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
