//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! A drag carries a typed payload; drop targets are identified by string ids.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
pub struct DndSignals<P: Send + Sync + 'static> {
    /// Key of the source being dragged
    pub dragging_key_read: ReadSignal<Option<String>>,
    pub dragging_key_write: WriteSignal<Option<String>>,
    /// Payload of the source being dragged
    pub payload_read: ReadSignal<Option<P>>,
    pub payload_write: WriteSignal<Option<P>>,
    /// Target id under the pointer
    pub drop_target_read: ReadSignal<Option<String>>,
    pub drop_target_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending source key (mousedown but not yet dragging)
    pub pending_key_read: ReadSignal<Option<String>>,
    pub pending_key_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<P: Send + Sync + 'static> Clone for DndSignals<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for DndSignals<P> {}

impl<P: Send + Sync + 'static> DndSignals<P> {
    /// Is `target_id` the current drop target?
    pub fn is_over(&self, target_id: &str) -> bool {
        self.drop_target_read.get().as_deref() == Some(target_id)
    }

    /// Is the source with `key` being dragged?
    pub fn is_dragging(&self, key: &str) -> bool {
        self.dragging_key_read.get().as_deref() == Some(key)
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<P: Send + Sync + 'static>() -> DndSignals<P> {
    let (dragging_key_read, dragging_key_write) = signal(None::<String>);
    let (payload_read, payload_write) = signal(None::<P>);
    let (drop_target_read, drop_target_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_key_read, pending_key_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_key_read,
        dragging_key_write,
        payload_read,
        payload_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_key_read,
        pending_key_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<P: Send + Sync + 'static>(dnd: &DndSignals<P>) {
    dnd.dragging_key_write.set(None);
    dnd.payload_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_key_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a drag source
/// Records pending drag with start position and payload
pub fn make_on_mousedown<P>(dnd: DndSignals<P>, key: String, payload: P) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    P: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Prevent text selection while dragging
            ev.prevent_default();
            dnd.pending_key_write.set(Some(key.clone()));
            dnd.payload_write.set(Some(payload.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<P: Send + Sync + 'static>(dnd: DndSignals<P>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_key_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_key_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_key_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<P: Send + Sync + 'static>(
    dnd: DndSignals<P>,
    target_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_key_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != target_id {
                dnd.drop_target_write.set(Some(target_id.clone()));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<P: Send + Sync + 'static>(dnd: DndSignals<P>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_key_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<P, F>(dnd: DndSignals<P>, on_drop: F)
where
    P: Clone + Send + Sync + 'static,
    F: Fn(P, String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_key_read.get_untracked();
        let payload = dnd.payload_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag over a target drops; a plain click falls through
        if let (Some(_), Some(payload), Some(target)) = (dragging, payload, drop_target) {
            on_drop(payload, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
