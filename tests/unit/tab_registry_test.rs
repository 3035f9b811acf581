//! Integration tests for TabRegistry: tab lifecycle, the active-tab
//! pointer, event routing and observers, on the headless engine.

use std::cell::RefCell;
use std::rc::Rc;

use playground_browser::config::DEFAULT_URL;
use playground_browser::engine::headless::HeadlessFactory;
use playground_browser::engine::EventSink;
use playground_browser::managers::tab_registry::{RegistryEvent, TabRegistry};
use playground_browser::types::errors::TabError;
use playground_browser::types::navigation::{EngineEvent, NavigationEvent};
use playground_browser::types::tab::TabId;

fn setup() -> (TabRegistry, HeadlessFactory, EventSink) {
    let sink = EventSink::new();
    let factory = HeadlessFactory::new(sink.clone());
    let registry = TabRegistry::new(Box::new(factory.clone()));
    (registry, factory, sink)
}

#[test]
fn test_two_tab_lifecycle() {
    let (mut registry, _factory, _sink) = setup();

    let id1 = registry.add_tab("https://a.com", None);
    assert_eq!(registry.active_id(), Some(id1));
    assert_eq!(registry.session(id1).unwrap().current_url(), "https://a.com");

    let id2 = registry.add_tab("https://b.com", None);
    assert_ne!(id1, id2);
    assert_eq!(registry.active_id(), Some(id2));
    assert_eq!(registry.ids(), vec![id1, id2]);

    assert!(registry.remove_tab(id2));
    assert_eq!(registry.active_id(), Some(id1));

    assert!(registry.remove_tab(id1));
    assert_eq!(registry.active_id(), None);
    assert!(registry.is_empty());
}

#[test]
fn test_blank_url_opens_default() {
    let (mut registry, factory, _sink) = setup();
    let id = registry.add_tab("  ", None);
    assert_eq!(registry.session(id).unwrap().current_url(), DEFAULT_URL);
    assert_eq!(
        factory.handle(id).unwrap().requests(),
        vec![format!("{}/", DEFAULT_URL)]
    );
}

#[test]
fn test_new_session_starts_idle() {
    let (mut registry, _factory, _sink) = setup();
    let id = registry.add_tab("https://a.com", Some("agent/1.0"));
    let session = registry.session(id).unwrap();
    assert_eq!(session.title(), "New Tab");
    assert!(!session.is_loading());
    assert_eq!(session.user_agent_override(), Some("agent/1.0"));
}

#[test]
fn test_user_agent_reaches_engine() {
    let (mut registry, factory, _sink) = setup();
    let with = registry.add_tab("https://a.com", Some("agent/1.0"));
    let without = registry.add_tab("https://b.com", None);
    assert_eq!(factory.handle(with).unwrap().user_agent().as_deref(), Some("agent/1.0"));
    assert_eq!(factory.handle(without).unwrap().user_agent(), None);
}

#[test]
fn test_removing_inactive_tab_keeps_active() {
    let (mut registry, _factory, _sink) = setup();
    let id1 = registry.add_tab("https://a.com", None);
    let id2 = registry.add_tab("https://b.com", None);
    registry.set_active(id1).unwrap();

    assert!(registry.remove_tab(id2));
    assert_eq!(registry.active_id(), Some(id1));
}

#[test]
fn test_removing_active_tab_picks_oldest_remaining() {
    let (mut registry, _factory, _sink) = setup();
    let id1 = registry.add_tab("https://a.com", None);
    let id2 = registry.add_tab("https://b.com", None);
    let id3 = registry.add_tab("https://c.com", None);

    registry.remove_tab(id3);
    assert_eq!(registry.active_id(), Some(id1));
    registry.set_active(id2).unwrap();
    registry.remove_tab(id2);
    assert_eq!(registry.active_id(), Some(id1));
}

#[test]
fn test_remove_unknown_tab_is_noop() {
    let (mut registry, _factory, _sink) = setup();
    let id = registry.add_tab("https://a.com", None);

    assert!(!registry.remove_tab(TabId::new()));
    assert!(registry.remove_tab(id));
    assert!(!registry.remove_tab(id));
    assert!(registry.is_empty());
}

#[test]
fn test_set_active_unknown_tab_errors() {
    let (mut registry, _factory, _sink) = setup();
    let id = registry.add_tab("https://a.com", None);
    let missing = TabId::new();

    assert_eq!(registry.set_active(missing), Err(TabError::NotFound(missing)));
    assert_eq!(registry.active_id(), Some(id));
}

#[test]
fn test_remove_releases_engine() {
    let (mut registry, factory, _sink) = setup();
    let id = registry.add_tab("https://a.com", None);
    let handle = factory.handle(id).unwrap();

    assert!(!handle.is_released());
    registry.remove_tab(id);
    assert!(handle.is_released());
}

#[test]
fn test_dispatch_routes_to_owning_tab() {
    let (mut registry, factory, sink) = setup();
    let id1 = registry.add_tab("https://a.com", None);
    let id2 = registry.add_tab("https://b.com", None);

    factory.handle(id1).unwrap().finish(Some("A"));
    for event in sink.drain() {
        assert!(registry.dispatch(&event));
    }

    assert_eq!(registry.session(id1).unwrap().title(), "A");
    assert!(!registry.session(id1).unwrap().is_loading());
    assert_eq!(registry.session(id2).unwrap().title(), "New Tab");
    assert!(registry.session(id2).unwrap().is_loading());
}

#[test]
fn test_dispatch_drops_events_for_closed_tabs() {
    let (mut registry, _factory, _sink) = setup();
    let id = registry.add_tab("https://a.com", None);
    registry.remove_tab(id);

    let event = EngineEvent::new(id, NavigationEvent::Finished);
    assert!(!registry.dispatch(&event));
}

#[test]
fn test_tab_list_sorted_by_title() {
    let (mut registry, factory, sink) = setup();
    let id1 = registry.add_tab("https://z.com", None);
    let id2 = registry.add_tab("https://a.com", None);
    factory.handle(id1).unwrap().finish(Some("Zebra"));
    factory.handle(id2).unwrap().finish(Some("Apple"));
    for event in sink.drain() {
        registry.dispatch(&event);
    }

    let list = registry.tab_list();
    let titles: Vec<&str> = list.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "Zebra"]);
    assert!(list[0].active);
    assert!(!list[1].active);
}

#[test]
fn test_observers_see_lifecycle() {
    let (mut registry, _factory, _sink) = setup();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let sub = registry.subscribe(move |e| log.borrow_mut().push(e.clone()));

    let id1 = registry.add_tab("https://a.com", None);
    let id2 = registry.add_tab("https://b.com", None);
    registry.set_active(id2).unwrap();
    registry.remove_tab(id2);

    assert_eq!(
        *seen.borrow(),
        vec![
            RegistryEvent::TabAdded(id1),
            RegistryEvent::ActiveChanged(Some(id1)),
            RegistryEvent::TabAdded(id2),
            RegistryEvent::ActiveChanged(Some(id2)),
            RegistryEvent::TabRemoved(id2),
            RegistryEvent::ActiveChanged(Some(id1)),
        ]
    );

    assert!(registry.unsubscribe(sub));
    registry.remove_tab(id1);
    assert_eq!(seen.borrow().len(), 6);
}
