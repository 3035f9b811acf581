//! In-memory engine used by the console build and the tests.
//!
//! Loads never touch the network. Each load records the request, moves the
//! history cursor and emits `Started`; the navigation stays pending until a
//! [`HeadlessHandle`] completes or fails it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::history::HistoryTracker;
use super::{lock, EngineFactory, EventSink, WebEngine};
use crate::types::navigation::{NavigationEvent, NavigationPhase};
use crate::types::tab::TabId;

#[derive(Debug, Default)]
struct HeadlessPage {
    history: HistoryTracker,
    title: Option<String>,
    inline_html: Option<String>,
    requests: Vec<String>,
    user_agent: Option<String>,
    pending: bool,
    released: bool,
}

/// One headless engine instance, owned by a tab.
pub struct HeadlessEngine {
    tab: TabId,
    page: Arc<Mutex<HeadlessPage>>,
    sink: EventSink,
}

impl HeadlessEngine {
    fn start(&self, page: &mut HeadlessPage) {
        page.pending = true;
        page.title = None;
        page.inline_html = None;
        self.sink.push(self.tab, NavigationEvent::Started);
    }
}

impl WebEngine for HeadlessEngine {
    fn load(&mut self, url: &str) {
        let mut page = lock(&self.page);
        page.history.push(url);
        page.requests.push(url.to_string());
        self.start(&mut page);
    }

    fn go_back(&mut self) {
        let mut page = lock(&self.page);
        if page.history.back().is_some() {
            self.start(&mut page);
        }
    }

    fn go_forward(&mut self) {
        let mut page = lock(&self.page);
        if page.history.forward().is_some() {
            self.start(&mut page);
        }
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
        let mut page = lock(&self.page);
        page.inline_html = Some(html.to_string());
        page.pending = false;
    }
}

impl Drop for HeadlessEngine {
    fn drop(&mut self) {
        lock(&self.page).released = true;
        debug!(tab = %self.tab, "headless engine released");
    }
}

/// Builds [`HeadlessEngine`]s. Clones share the same set of pages, so a
/// clone kept outside the registry can drive any tab's engine.
///
/// Pages of released engines are forgotten on the next `create`; handles
/// taken before that keep working.
#[derive(Clone)]
pub struct HeadlessFactory {
    sink: EventSink,
    pages: Arc<Mutex<HashMap<TabId, Arc<Mutex<HeadlessPage>>>>>,
}

impl HeadlessFactory {
    pub fn new(sink: EventSink) -> Self {
        Self {
            sink,
            pages: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Control handle for the engine of `tab`, unless it was released and
    /// pruned since.
    pub fn handle(&self, tab: TabId) -> Option<HeadlessHandle> {
        lock(&self.pages).get(&tab).map(|page| HeadlessHandle {
            tab,
            page: Arc::clone(page),
            sink: self.sink.clone(),
        })
    }
}

impl EngineFactory for HeadlessFactory {
    fn create(
        &mut self,
        tab: TabId,
        initial_url: &str,
        user_agent: Option<&str>,
    ) -> Box<dyn WebEngine> {
        let page = Arc::new(Mutex::new(HeadlessPage {
            user_agent: user_agent.map(str::to_string),
            ..HeadlessPage::default()
        }));
        {
            let mut pages = lock(&self.pages);
            pages.retain(|_, page| !lock(page).released);
            pages.insert(tab, Arc::clone(&page));
        }

        let mut engine = HeadlessEngine {
            tab,
            page,
            sink: self.sink.clone(),
        };
        engine.load(initial_url);
        Box::new(engine)
    }
}

/// Drives and inspects one headless engine from outside its tab.
#[derive(Clone)]
pub struct HeadlessHandle {
    tab: TabId,
    page: Arc<Mutex<HeadlessPage>>,
    sink: EventSink,
}

impl HeadlessHandle {
    /// Completes the pending navigation with the given document title.
    pub fn finish(&self, title: Option<&str>) {
        let mut page = lock(&self.page);
        page.pending = false;
        page.title = title.map(str::to_string);
        self.sink.push(self.tab, NavigationEvent::Finished);
    }

    /// Fails the pending navigation.
    pub fn fail(&self, phase: NavigationPhase, message: &str) {
        lock(&self.page).pending = false;
        self.sink.push(
            self.tab,
            NavigationEvent::Failed {
                phase,
                message: message.to_string(),
            },
        );
    }

    /// Every URL passed to `load`, initial load included.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.page).requests.clone()
    }

    pub fn inline_html(&self) -> Option<String> {
        lock(&self.page).inline_html.clone()
    }

    pub fn user_agent(&self) -> Option<String> {
        lock(&self.page).user_agent.clone()
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.page).pending
    }

    /// True once the owning tab dropped the engine.
    pub fn is_released(&self) -> bool {
        lock(&self.page).released
    }
}
