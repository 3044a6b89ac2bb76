use crate::core::markup;
use crate::core::{world_to_screen, SceneFrame};
use glam::{Mat4, Vec2, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One absolutely positioned card element inside `#card-layer`.
struct CardSlot {
    el: web::HtmlElement,
    html: String,
    visible: bool,
}

impl CardSlot {
    fn create(document: &web::Document, layer: &web::HtmlElement) -> anyhow::Result<Self> {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create card: {:?}", e))?;
        el.set_class_name("floating-card hidden");
        layer
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append card: {:?}", e))?;
        let el = el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("card is not an HtmlElement: {:?}", e))?;
        Ok(Self {
            el,
            html: String::new(),
            visible: false,
        })
    }

    fn set_html(&mut self, html: String) {
        if self.html != html {
            self.el.set_inner_html(&html);
            self.html = html;
        }
    }

    fn place(&mut self, anchor: Vec3, view_proj: Mat4, size: Vec2) {
        match world_to_screen(anchor, size, view_proj) {
            Some(p) => {
                _ = self.el.style().set_property(
                    "transform",
                    &format!("translate({:.1}px, {:.1}px) translate(-50%, -100%)", p.x, p.y),
                );
                self.show(true);
            }
            None => self.show(false),
        }
    }

    fn show(&mut self, visible: bool) {
        if self.visible != visible {
            let cl = self.el.class_list();
            _ = if visible {
                cl.remove_1("hidden")
            } else {
                cl.add_1("hidden")
            };
            self.visible = visible;
        }
    }
}

/// Floating HTML cards that follow 3D anchors: one per marker plus the
/// identity card.
pub struct CardLayer {
    markers: Vec<CardSlot>,
    identity: CardSlot,
}

impl CardLayer {
    pub fn bind(
        document: &web::Document,
        layer: &web::HtmlElement,
        marker_count: usize,
    ) -> anyhow::Result<Self> {
        let markers = (0..marker_count)
            .map(|_| CardSlot::create(document, layer))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let identity = CardSlot::create(document, layer)?;
        Ok(Self { markers, identity })
    }

    /// Position and show the cards of `frame`; hide everything when no
    /// scene is mounted.
    pub fn sync(&mut self, frame: Option<&SceneFrame>, view_proj: Mat4, size: Vec2) {
        let Some(frame) = frame else {
            self.hide_all();
            return;
        };
        for (i, slot) in self.markers.iter_mut().enumerate() {
            match frame.card_for(i) {
                Some(card) => {
                    slot.set_html(markup::info_card_html(card));
                    slot.place(card.anchor, view_proj, size);
                }
                None => slot.show(false),
            }
        }
        let id = &frame.identity_card;
        self.identity.set_html(markup::identity_card_html(&id.identity));
        self.identity.place(id.anchor, view_proj, size);
    }

    pub fn hide_all(&mut self) {
        for slot in &mut self.markers {
            slot.show(false);
        }
        self.identity.show(false);
    }
}
