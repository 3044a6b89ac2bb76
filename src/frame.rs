use crate::constants::MAX_FRAME_DT;
use crate::core::{OrbitCamera, PageState, SceneDescription};
use crate::input;
use crate::overlay::CardLayer;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedGpu = Rc<RefCell<Option<render::GpuState<'static>>>>;

pub struct FrameContext {
    pub page: Rc<RefCell<PageState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub cards: CardLayer,
    pub gpu: SharedGpu,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().clamp(f32::EPSILON, MAX_FRAME_DT);

        let css = input::canvas_css_size(&self.canvas);
        let (view_proj, eye) = {
            let cam = self.camera.borrow();
            (cam.view_proj(css.x / css.y.max(1.0)), cam.eye())
        };

        let mut page = self.page.borrow_mut();
        let Some(scene) = page.scene_mut() else {
            self.cards.hide_all();
            return;
        };

        let mut gpu_ref = self.gpu.borrow_mut();
        if let Some(g) = gpu_ref.as_mut() {
            if !scene.render_ready() {
                scene.attach_render_objects();
                log::info!("[frame] marker render objects attached");
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_camera(view_proj, eye);
        }

        // Entities without render objects are skipped until the GPU is up
        scene.tick(dt_sec);
        let snapshot = scene.frame();
        drop(page);

        self.cards.sync(Some(&snapshot), view_proj, css);

        if let Some(g) = gpu_ref.as_mut() {
            match g.render(&snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    desc: &SceneDescription,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, desc).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
