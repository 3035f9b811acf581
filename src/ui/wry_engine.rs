//! `wry` implementation of the engine seam: one child WebView per tab.
//!
//! wry reports page-load start/finish and title changes but no load
//! failures, so this engine never emits `NavigationEvent::Failed`. It also
//! has no back/forward query API; availability is tracked with a
//! [`HistoryTracker`] fed from page-load events. A requested traversal is
//! dropped by the next `load`, or by a page-load start for any URL other
//! than the entry it targets.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex};

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, error, warn};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use super::webview_app::UserEvent;
use crate::engine::history::{HistoryTracker, Traversal};
use crate::engine::{lock, EngineFactory, EventSink, WebEngine};
use crate::types::navigation::NavigationEvent;
use crate::types::tab::TabId;

#[derive(Default)]
struct PageState {
    history: HistoryTracker,
    title: Option<String>,
}

pub struct WryEngine {
    tab: TabId,
    /// `None` when the platform refused to create the view; the engine then
    /// only tracks state.
    webview: Option<Rc<WebView>>,
    page: Arc<Mutex<PageState>>,
}

impl WryEngine {
    fn run_script(&self, js: &str) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.evaluate_script(js) {
                warn!(tab = %self.tab, error = %e, "script failed");
            }
        }
    }
}

impl WebEngine for WryEngine {
    fn load(&mut self, url: &str) {
        lock(&self.page).history.cancel_pending();
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.load_url(url) {
                warn!(tab = %self.tab, url, error = %e, "load failed");
            }
        }
    }

    fn go_back(&mut self) {
        {
            let mut page = lock(&self.page);
            if page.history.can_go_back() {
                page.history.expect(Traversal::Back);
            }
        }
        self.run_script("history.back()");
    }

    fn go_forward(&mut self) {
        {
            let mut page = lock(&self.page);
            if page.history.can_go_forward() {
                page.history.expect(Traversal::Forward);
            }
        }
        self.run_script("history.forward()");
    }

    fn can_go_back(&self) -> bool {
        lock(&self.page).history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        lock(&self.page).history.can_go_forward()
    }

    fn current_url(&self) -> Option<String> {
        lock(&self.page).history.current().map(str::to_string)
    }

    fn title(&self) -> Option<String> {
        lock(&self.page).title.clone()
    }

    fn display_inline_html(&mut self, html: &str) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.load_html(html) {
                warn!(tab = %self.tab, error = %e, "inline document failed");
            }
        }
    }
}

/// Creates tab views as children of the main window and lays them out.
#[derive(Clone)]
pub struct WryEngineFactory {
    window: Rc<Window>,
    sink: EventSink,
    proxy: EventLoopProxy<UserEvent>,
    views: Rc<RefCell<HashMap<TabId, Weak<WebView>>>>,
    bounds: Rc<RefCell<Rect>>,
}

impl WryEngineFactory {
    pub fn new(
        window: Rc<Window>,
        sink: EventSink,
        proxy: EventLoopProxy<UserEvent>,
        bounds: Rect,
    ) -> Self {
        Self {
            window,
            sink,
            proxy,
            views: Rc::new(RefCell::new(HashMap::new())),
            bounds: Rc::new(RefCell::new(bounds)),
        }
    }

    /// Places every live tab view in `bounds` and shows only the active one.
    pub fn layout(&self, active: Option<TabId>, bounds: Rect) {
        let mut views = self.views.borrow_mut();
        views.retain(|_, view| view.strong_count() > 0);
        for (tab, view) in views.iter() {
            let Some(webview) = view.upgrade() else {
                continue;
            };
            if let Err(e) = webview.set_bounds(bounds.clone()) {
                warn!(tab = %tab, error = %e, "set_bounds failed");
            }
            if let Err(e) = webview.set_visible(active == Some(*tab)) {
                warn!(tab = %tab, error = %e, "set_visible failed");
            }
        }
        *self.bounds.borrow_mut() = bounds;
    }

    fn build_view(
        &self,
        tab: TabId,
        initial_url: &str,
        user_agent: &str,
        page: &Arc<Mutex<PageState>>,
    ) -> Result<WebView, wry::Error> {
        let load_page = Arc::clone(page);
        let load_sink = self.sink.clone();
        let load_proxy = self.proxy.clone();
        let title_page = Arc::clone(page);

        WebViewBuilder::new()
            .with_url(initial_url)
            .with_user_agent(user_agent)
            .with_bounds(self.bounds.borrow().clone())
            .with_devtools(cfg!(debug_assertions))
            .with_on_page_load_handler(move |event, url| {
                debug!(tab = %tab, ?event, url = %url, "page load");
                let nav = match event {
                    PageLoadEvent::Started => {
                        lock(&load_page).history.observe(&url);
                        NavigationEvent::Started
                    }
                    PageLoadEvent::Finished => NavigationEvent::Finished,
                };
                load_sink.push(tab, nav);
                let _ = load_proxy.send_event(UserEvent::EngineActivity);
            })
            .with_document_title_changed_handler(move |title| {
                lock(&title_page).title = Some(title);
            })
            .build_as_child(&*self.window)
    }
}

impl EngineFactory for WryEngineFactory {
    fn create(
        &mut self,
        tab: TabId,
        initial_url: &str,
        user_agent: Option<&str>,
    ) -> Box<dyn WebEngine> {
        // History starts empty; the first page-load start records the URL
        // exactly as the engine reports it.
        let page = Arc::new(Mutex::new(PageState::default()));

        let user_agent = user_agent.unwrap_or(crate::config::DEFAULT_USER_AGENT);
        let webview = match self.build_view(tab, initial_url, user_agent, &page) {
            Ok(webview) => {
                let webview = Rc::new(webview);
                self.views
                    .borrow_mut()
                    .insert(tab, Rc::downgrade(&webview));
                Some(webview)
            }
            Err(e) => {
                error!(tab = %tab, error = %e, "could not create tab view");
                None
            }
        };

        Box::new(WryEngine { tab, webview, page })
    }
}
