use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent, Window};

use crate::domain::IntroSettings;
use crate::rigid_body::BodyId;
use crate::simulation::IntroCore;
use crate::timeline::Cue;

use super::canvas::FieldPainter;
use super::overlay::Overlay;

struct App {
    core: IntroCore,
    overlay: Overlay,
    painter: FieldPainter,
    mounted_ms: f64,
}

impl App {
    fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.mounted_ms
    }

    /// One animation frame. Returns whether another one is wanted.
    fn tick(&mut self) -> bool {
        let now = self.elapsed_ms();
        let cues = self.core.poll_cues(now).to_vec();
        for cue in &cues {
            if let Err(e) = self.handle_cue(cue) {
                console_warn!("intro cue {:?} failed: {:?}", cue, e);
            }
        }

        let outcome = self.core.step();
        if outcome.field_advanced {
            self.painter.paint(&mut self.core);
        }
        if outcome.physics.advanced {
            self.sync_bodies();
        }
        self.core.wants_next_frame()
    }

    fn handle_cue(&mut self, cue: &Cue) -> Result<(), JsValue> {
        match cue {
            Cue::LetterEntered { index } => self.overlay.letter_entered(*index),
            Cue::TaglineVisible => self.overlay.show_tagline(),
            Cue::Typed { text } => self.overlay.set_typed(text),
            Cue::SubtitleVisible => self.overlay.show_subtitle(),
            Cue::CtaVisible => self.overlay.show_cta(),
            Cue::EnterButtonVisible => self.overlay.show_enter_button(),
            Cue::Antigravity => {
                let measurements = self.overlay.begin_antigravity()?;
                self.core.enter_antigravity(&measurements);
            }
            Cue::FlashDone => self.overlay.remove_flash(),
            Cue::Exiting => self.overlay.begin_exit(),
            Cue::Hidden => self.overlay.hide()?,
        }
        Ok(())
    }

    fn sync_bodies(&self) {
        for t in self.core.body_transforms() {
            if let Err(e) = self.overlay.apply_transform(&t) {
                console_warn!("body {} style write failed: {:?}", t.id, e);
            }
        }
    }

    fn sync_body(&self, id: BodyId) {
        if let Some(t) = self.core.body_transforms().find(|t| t.id == id) {
            if let Err(e) = self.overlay.apply_transform(&t) {
                console_warn!("body {} style write failed: {:?}", id, e);
            }
        }
    }

    fn enter_site(&mut self) {
        let held = self.core.dragging();
        let now = self.elapsed_ms();
        if self.core.enter_site(now) {
            if let Some(id) = held {
                self.overlay.set_dragging(id, false);
            }
        }
    }

    fn pointer_down(&mut self, event: &Event) {
        let Some((x, y)) = pointer_pos(event) else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| self.overlay.body_for_target(&el));
        let Some(target) = target else {
            self.core.set_pointer(x, y);
            return;
        };
        if let Some(id) = self.core.pointer_down(x, y, Some(target)) {
            event.prevent_default();
            self.overlay.set_dragging(id, true);
        }
    }

    fn pointer_move(&mut self, event: &Event) {
        let Some((x, y)) = pointer_pos(event) else {
            return;
        };
        if self.core.pointer_move(x, y) {
            event.prevent_default();
            if let Some(id) = self.core.dragging() {
                self.sync_body(id);
            }
        }
    }

    fn pointer_up(&mut self) {
        if let Some(id) = self.core.pointer_up() {
            self.overlay.set_dragging(id, false);
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.painter.resize(width as u32, height as u32);
        self.core.resize(width, height);
    }
}

/// Mount the intro on the current page.
///
/// Call once the page fonts are ready so the measured boxes are final.
/// Does nothing when the overlay markup is missing.
#[wasm_bindgen]
pub fn mount_intro(settings_json: Option<String>) -> Result<(), JsValue> {
    let settings = match settings_json {
        Some(json) => IntroSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => IntroSettings::default(),
    };

    let window = window()?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
    let Some(overlay) = Overlay::lookup(document.clone(), &settings.dom)? else {
        console_warn!("intro overlay not found; skipping mount");
        return Ok(());
    };

    let (width, height) = viewport_size(&window)?;
    let painter = FieldPainter::new(overlay.canvas.clone(), &settings.field)?;
    painter.resize(width as u32, height as u32);

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let core = IntroCore::new(settings, width, height, overlay.letter_count(), seed);
    console_log!(
        "intro mounted: {}x{}, {} particles, {} letters",
        width,
        height,
        core.field().len(),
        overlay.letter_count()
    );

    let root: EventTarget = overlay.root.clone().into();
    let enter_button = overlay.enter_button.clone();
    let app = Rc::new(RefCell::new(App {
        core,
        overlay,
        painter,
        mounted_ms: js_sys::Date::now(),
    }));

    bind_pointer(&app, &root)?;
    bind_enter(&app, &document, enter_button)?;
    bind_resize(&app, &window)?;
    start_loop(app)
}

// === EVENTS ===

fn bind_pointer(app: &Rc<RefCell<App>>, root: &EventTarget) -> Result<(), JsValue> {
    for kind in ["mousedown", "touchstart"] {
        let app = app.clone();
        listen(root, kind, move |e| {
            if let Ok(mut app) = app.try_borrow_mut() {
                app.pointer_down(&e);
            }
        })?;
    }
    for kind in ["mousemove", "touchmove"] {
        let app = app.clone();
        listen(root, kind, move |e| {
            if let Ok(mut app) = app.try_borrow_mut() {
                app.pointer_move(&e);
            }
        })?;
    }
    for kind in ["mouseup", "touchend"] {
        let app = app.clone();
        listen(root, kind, move |_| {
            if let Ok(mut app) = app.try_borrow_mut() {
                app.pointer_up();
            }
        })?;
    }
    Ok(())
}

fn bind_enter(app: &Rc<RefCell<App>>, document: &EventTarget, button: Option<web_sys::HtmlElement>) -> Result<(), JsValue> {
    if let Some(button) = button {
        let app = app.clone();
        listen(&button, "click", move |_| {
            if let Ok(mut app) = app.try_borrow_mut() {
                app.enter_site();
            }
        })?;
    }

    let app = app.clone();
    listen(document, "keydown", move |e| {
        let is_enter = e.dyn_ref::<KeyboardEvent>().map(|k| k.key() == "Enter").unwrap_or(false);
        if !is_enter {
            return;
        }
        if let Ok(mut app) = app.try_borrow_mut() {
            app.enter_site();
        }
    })
}

fn bind_resize(app: &Rc<RefCell<App>>, window: &Window) -> Result<(), JsValue> {
    let app = app.clone();
    let win = window.clone();
    listen(window, "resize", move |_| {
        let Ok((width, height)) = viewport_size(&win) else {
            return;
        };
        if let Ok(mut app) = app.try_borrow_mut() {
            app.resize(width, height);
        }
    })
}

/// Attach a non-passive listener for the page lifetime
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// First touch, else the mouse position
fn pointer_pos(event: &Event) -> Option<(f32, f32)> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        return Some((touch.client_x() as f32, touch.client_y() as f32));
    }
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((mouse.client_x() as f32, mouse.client_y() as f32))
}

// === FRAME LOOP ===

fn start_loop(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        let again = match app.try_borrow_mut() {
            Ok(mut app) => app.tick(),
            Err(_) => true,
        };
        if !again {
            console_log!("intro finished");
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_frame(cb) {
                console_warn!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        request_frame(cb)?;
    }
    Ok(())
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    Ok((width, height))
}
