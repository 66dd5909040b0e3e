use wasm_bindgen::closure::Closure;

/// The single in-flight page turn. `busy` is the synchronous mutual
/// exclusion flag shared by the wheel and touch handlers; the reducer's
/// `flipping` guard alone is not enough because dispatches are applied by
/// the scheduler, not inline. `pending` keeps the completion closure alive
/// until it fires or the view unmounts.
#[derive(Default)]
pub struct FlipTimer {
    pub busy: bool,
    pub timeout_id: Option<i32>,
    pub pending: Option<Closure<dyn FnMut()>>,
}

impl FlipTimer {
    /// Cancel the scheduled completion, if any. Called on unmount so a
    /// dangling timer can never dispatch into a torn-down view.
    pub fn clear(&mut self, window: &web_sys::Window) {
        if let Some(id) = self.timeout_id.take() {
            window.clear_timeout_with_handle(id);
        }
        self.pending = None;
        self.busy = false;
    }
}
