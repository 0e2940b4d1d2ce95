use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, Window};

// window event subscription
//
// the listener is attached for exactly as long as this value lives, and dropping it
// (e.g. when the owning component unmounts) detaches it again
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));

        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("failed to subscribe to {event}: {err:?}");
            return None;
        }

        Some(WindowListener {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to unsubscribe from {}: {err:?}", self.event);
        }
    }
}

pub fn scroll_offset() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}
