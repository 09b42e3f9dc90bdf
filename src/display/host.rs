use std::collections::HashMap;

use crate::api::client;
use crate::error::AppError;

/// Selector of the results panel in the generated page.
pub const RESULTS_SELECTOR: &str = "#results";

/// Margin the sizing rule reserves below the results panel.
pub const RESULTS_MARGIN_PX: u32 = 10;

/// Callback run whenever the hosting window changes size.
pub type ResizeHandler = Box<dyn FnMut(&mut dyn UiHost)>;

/// The few window/document capabilities the page logic touches, injected
/// so none of it reaches for a global document.
pub trait UiHost {
    fn viewport_height(&self) -> u32;

    /// Top offset of the element, 0 for unknown selectors.
    fn element_top(&self, selector: &str) -> u32;

    /// Sets an element's height. Unknown selectors are ignored.
    fn set_element_height(&mut self, selector: &str, px: u32);

    fn on_resize(&mut self, handler: ResizeHandler);

    fn http_get(&self, url: &str) -> Result<String, AppError>;
}

/// Recomputes the results panel height for the current viewport.
///
/// The sizing rule is still disabled; keep this inert until the layout
/// settles:
///   viewport_height - (element_top("#results") + RESULTS_MARGIN_PX)
pub fn resize(_host: &mut dyn UiHost) {}

/// Startup hook: sizes the results panel once, then keeps it sized across
/// window resizes.
pub fn init(host: &mut dyn UiHost) {
    resize(host);
    host.on_resize(Box::new(|h| resize(h)));
}

#[derive(Debug, Clone, Copy)]
struct ElementBox {
    top: u32,
    height: u32,
}

/// In-memory page model backing the generated document. Stands in for a
/// browser window: it tracks a viewport, a handful of measured elements
/// and the registered resize handlers.
pub struct PageHost {
    viewport: u32,
    elements: HashMap<String, ElementBox>,
    handlers: Vec<ResizeHandler>,
}

impl PageHost {
    pub fn new(viewport_px: u32) -> Self {
        Self {
            viewport: viewport_px,
            elements: HashMap::new(),
            handlers: Vec::new(),
        }
    }

    pub fn with_element(mut self, selector: &str, top: u32, height: u32) -> Self {
        self.elements
            .insert(selector.to_string(), ElementBox { top, height });
        self
    }

    /// Delivers a window resize: updates the viewport, then runs every
    /// registered handler.
    pub fn fire_resize(&mut self, viewport_px: u32) {
        self.viewport = viewport_px;

        // Handlers borrow the host mutably, so detach them while they run.
        let mut handlers = std::mem::take(&mut self.handlers);
        for handler in handlers.iter_mut() {
            handler(self);
        }

        // Keep anything a handler registered during dispatch.
        let registered_during_dispatch = std::mem::take(&mut self.handlers);
        handlers.extend(registered_during_dispatch);
        self.handlers = handlers;
    }
}

impl UiHost for PageHost {
    fn viewport_height(&self) -> u32 {
        self.viewport
    }

    fn element_top(&self, selector: &str) -> u32 {
        self.elements.get(selector).map(|e| e.top).unwrap_or(0)
    }

    fn set_element_height(&mut self, selector: &str, px: u32) {
        if let Some(element) = self.elements.get_mut(selector) {
            element.height = px;
        }
    }

    fn on_resize(&mut self, handler: ResizeHandler) {
        self.handlers.push(handler);
    }

    fn http_get(&self, url: &str) -> Result<String, AppError> {
        client::get(url)
    }
}
