use crate::core::markup;
use crate::core::{PageState, Section};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page chrome: header navigation, footer and the active section's panel.
pub struct Chrome {
    root: web::HtmlElement,
    header: web::HtmlElement,
    footer: web::HtmlElement,
    panel: web::HtmlElement,
    card_layer: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
}

impl Chrome {
    pub fn bind(document: &web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        Ok(Self {
            root: dom::element_by_id(document, "app-root")?,
            header: dom::element_by_id(document, "app-header")?,
            footer: dom::element_by_id(document, "app-footer")?,
            panel: dom::element_by_id(document, "section-panel")?,
            card_layer: dom::element_by_id(document, "card-layer")?,
            canvas,
        })
    }

    /// Mount the view for `active` and unmount the others.
    pub fn render(&self, active: Section) {
        self.root.set_class_name(&markup::root_class(active));
        self.header.set_inner_html(&markup::header_html(active));
        self.footer.set_inner_html(&markup::footer_html());

        match markup::section_panel_html(active) {
            Some(html) => {
                self.panel.set_inner_html(&html);
                dom::set_visible(&self.panel, true);
            }
            None => {
                self.panel.set_inner_html("");
                dom::set_visible(&self.panel, false);
            }
        }
        let canvas_visible = active.uses_canvas();
        dom::set_visible(&self.canvas, canvas_visible);
        dom::set_visible(&self.card_layer, canvas_visible);
        if canvas_visible {
            // Window resizes while hidden were skipped
            dom::sync_canvas_backing_size(&self.canvas);
        }
    }
}

/// Read the section a click inside the header asked for, if any.
fn clicked_section(ev: &web::MouseEvent) -> Option<Section> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let button = target.closest("[data-section]").ok()??;
    let slug = button.get_attribute("data-section")?;
    Section::from_slug(&slug)
}

/// Route header button clicks to the page's navigation action.
/// `on_enter` runs after a section has been mounted.
pub fn wire_navigation(
    chrome: Rc<Chrome>,
    page: Rc<RefCell<PageState>>,
    mut on_enter: impl FnMut(Section) + 'static,
) {
    let header: web::EventTarget = chrome.header.clone().into();
    dom::add_click_listener(&header, move |ev| {
        let Some(target) = clicked_section(&ev) else {
            return;
        };
        let transition = page.borrow_mut().navigate(target);
        if let Some(t) = transition {
            chrome.render(t.to);
            on_enter(t.to);
        }
    });
}
