use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use crate::domain::{BodyCategory, DomSettings};
use crate::rigid_body::BodyId;
use crate::rigid_body_system::BodyMeasurement;
use crate::simulation::BodyTransform;

/// Handles to every overlay element the intro touches
pub(super) struct Overlay {
    document: Document,
    pub(super) root: HtmlElement,
    pub(super) canvas: HtmlCanvasElement,
    pub(super) enter_button: Option<HtmlElement>,
    tagline: Option<HtmlElement>,
    typed: Option<HtmlElement>,
    subtitle: Option<HtmlElement>,
    cta_group: Option<HtmlElement>,
    letters: Vec<HtmlElement>,
    /// Letters, then icons, then badges: index == body id
    floating: Vec<(BodyCategory, HtmlElement)>,
    flash: Option<Element>,
    draggable_selector: String,
    reveal_selector: String,
}

impl Overlay {
    /// Resolve the overlay. Returns `None` when the page has no overlay or canvas.
    pub(super) fn lookup(document: Document, s: &DomSettings) -> Result<Option<Self>, JsValue> {
        let Some(root) = by_id(&document, &s.overlay_id) else {
            return Ok(None);
        };
        let Some(canvas) = document.get_element_by_id(&s.canvas_id) else {
            return Ok(None);
        };
        let canvas = canvas.dyn_into::<HtmlCanvasElement>()?;

        let letters = select_all(&document, &s.letter_selector)?;
        let mut floating: Vec<(BodyCategory, HtmlElement)> =
            letters.iter().cloned().map(|el| (BodyCategory::Letter, el)).collect();
        for el in select_all(&document, &s.icon_selector)? {
            floating.push((BodyCategory::Icon, el));
        }
        for el in select_all(&document, &s.badge_selector)? {
            floating.push((BodyCategory::Badge, el));
        }

        Ok(Some(Self {
            enter_button: by_id(&document, &s.enter_button_id),
            tagline: by_id(&document, &s.tagline_id),
            typed: by_id(&document, &s.typed_id),
            subtitle: by_id(&document, &s.subtitle_id),
            cta_group: by_id(&document, &s.cta_group_id),
            document,
            root,
            canvas,
            letters,
            floating,
            flash: None,
            draggable_selector: s.draggable_selector(),
            reveal_selector: s.reveal_selector.clone(),
        }))
    }

    pub(super) fn letter_count(&self) -> u32 {
        self.letters.len() as u32
    }

    // === ENTRANCE ===

    pub(super) fn letter_entered(&self, index: u32) {
        if let Some(letter) = self.letters.get(index as usize) {
            add_class(letter, "entered");
        }
    }

    pub(super) fn show_tagline(&self) {
        if let Some(el) = &self.tagline {
            add_class(el, "visible");
        }
    }

    pub(super) fn set_typed(&self, text: &str) {
        if let Some(el) = &self.typed {
            el.set_text_content(Some(text));
        }
    }

    pub(super) fn show_subtitle(&self) {
        if let Some(el) = &self.subtitle {
            add_class(el, "visible");
        }
    }

    pub(super) fn show_cta(&self) {
        if let Some(el) = &self.cta_group {
            add_class(el, "visible");
        }
    }

    pub(super) fn show_enter_button(&self) {
        if let Some(el) = &self.enter_button {
            add_class(el, "visible");
        }
    }

    // === ANTIGRAVITY ===

    /// Flag the overlay, add the flash, stop icon float animations and read every
    /// floating element's layout box.
    pub(super) fn begin_antigravity(&mut self) -> Result<Vec<BodyMeasurement>, JsValue> {
        add_class(&self.root, "antigravity");

        let flash = self.document.create_element("div")?;
        flash.set_class_name("ag-flash");
        self.root.append_child(&flash)?;
        self.flash = Some(flash);

        for letter in &self.letters {
            add_class(letter, "floating");
        }

        let mut measurements = Vec::with_capacity(self.floating.len());
        for (category, el) in &self.floating {
            if *category == BodyCategory::Icon {
                el.style().set_property("animation", "none")?;
            }
            let rect = el.get_bounding_client_rect();
            measurements.push(BodyMeasurement::new(
                *category,
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            ));
        }
        Ok(measurements)
    }

    pub(super) fn remove_flash(&mut self) {
        if let Some(flash) = self.flash.take() {
            flash.remove();
        }
    }

    /// Body under an event target, via the closest draggable ancestor
    pub(super) fn body_for_target(&self, target: &Element) -> Option<BodyId> {
        let hit = target.closest(&self.draggable_selector).ok()??;
        self.floating
            .iter()
            .position(|(_, el)| el.contains(Some(&*hit)))
            .map(|idx| idx as BodyId)
    }

    pub(super) fn apply_transform(&self, t: &BodyTransform) -> Result<(), JsValue> {
        let Some((_, el)) = self.floating.get(t.id as usize) else {
            return Ok(());
        };
        let style = el.style();
        style.set_property("position", "fixed")?;
        style.set_property("left", &format!("{}px", t.left))?;
        style.set_property("top", &format!("{}px", t.top))?;
        style.set_property("transform", &format!("rotate({}deg)", t.rotation))?;
        style.set_property("margin", "0")?;
        Ok(())
    }

    pub(super) fn set_dragging(&self, id: BodyId, dragging: bool) {
        if let Some((_, el)) = self.floating.get(id as usize) {
            if dragging {
                add_class(el, "dragging");
            } else {
                remove_class(el, "dragging");
            }
        }
    }

    // === EXIT ===

    pub(super) fn begin_exit(&self) {
        add_class(&self.root, "exiting");
    }

    /// Hide the overlay and fade the page in
    pub(super) fn hide(&self) -> Result<(), JsValue> {
        add_class(&self.root, "hidden");
        if let Some(body) = self.document.body() {
            remove_class(&body, "intro-active");
        }
        for el in select_all(&self.document, &self.reveal_selector)? {
            let style = el.style();
            style.set_property("transition", "opacity 0.6s ease")?;
            style.set_property("opacity", "1")?;
            style.remove_property("pointer-events")?;
        }
        Ok(())
    }
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

fn add_class(el: &Element, class: &str) {
    if el.class_list().add_1(class).is_err() {
        console_warn!("could not add class {}", class);
    }
}

fn remove_class(el: &Element, class: &str) {
    if el.class_list().remove_1(class).is_err() {
        console_warn!("could not remove class {}", class);
    }
}
