//! Playground Browser entry point.
//!
//! With the `gui` feature, opens the browser window. Otherwise runs a
//! console demo of the tab model on the headless engine.

use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playground_browser=info".into()),
        )
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    if let Err(e) = playground_browser::ui::webview_app::run() {
        tracing::error!(error = %e, "browser failed to start");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Playground Browser v{} (headless demo)          ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let settings_path = std::env::temp_dir().join("playground_browser_demo_settings.json");
    let _ = std::fs::remove_file(&settings_path);

    demo::address_bar();
    demo::tabs(&settings_path);
    demo::failures(&settings_path);
    demo::sidebar(&settings_path);

    let _ = std::fs::remove_file(&settings_path);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ Demo finished. Build with --features gui for the window.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
mod demo {
    use std::path::Path;

    use playground_browser::app::App;
    use playground_browser::engine::headless::{HeadlessFactory, HeadlessHandle};
    use playground_browser::engine::EventSink;
    use playground_browser::services::navigation::resolve_input;
    use playground_browser::services::settings_engine::SettingsEngineTrait;
    use playground_browser::types::navigation::NavigationPhase;
    use playground_browser::ui::chrome::ChromeCommand;

    fn section(name: &str) {
        println!("───────────────────────────────────────────────────────────────");
        println!("  📦 {}", name);
        println!("───────────────────────────────────────────────────────────────");
    }

    fn start(settings_path: &Path) -> (App, HeadlessFactory) {
        let events = EventSink::new();
        let factory = HeadlessFactory::new(events.clone());
        let app = App::new(
            Box::new(factory.clone()),
            events,
            Some(settings_path.to_string_lossy().to_string()),
        );
        (app, factory)
    }

    fn active_handle(app: &App, factory: &HeadlessFactory) -> Option<HeadlessHandle> {
        app.registry.active_id().and_then(|id| factory.handle(id))
    }

    fn print_active(app: &App) {
        if let Some(tab) = app.registry.active_session() {
            println!(
                "  Active: \"{}\" {} [{:?}]",
                tab.title(),
                tab.current_url(),
                tab.load_state()
            );
        }
    }

    pub fn address_bar() {
        section("Address Bar Input");
        for input in ["example.com", "https://x.com", "about:blank", "localhost:3000", "hello world"] {
            match resolve_input(input) {
                Ok(resolved) => println!("  {:<16} -> {} (engine: {})", input, resolved.display, resolved.url),
                Err(e) => println!("  {:<16} -> {}", input, e),
            }
        }
        println!();
    }

    pub fn tabs(settings_path: &Path) {
        section("Tabs");
        let (mut app, factory) = start(settings_path);
        app.pump_events();
        if let Some(handle) = active_handle(&app, &factory) {
            handle.finish(Some("Google"));
        }
        app.pump_events();
        print_active(&app);

        app.new_tab();
        app.navigate("example.com");
        app.pump_events();
        if let Some(handle) = active_handle(&app, &factory) {
            handle.finish(Some("Example Domain"));
        }
        app.pump_events();
        print_active(&app);
        println!("  Open tabs: {}", app.registry.len());

        app.go_back();
        app.pump_events();
        if let Some(handle) = active_handle(&app, &factory) {
            handle.finish(None);
        }
        app.pump_events();
        print_active(&app);
        app.go_forward();
        app.pump_events();
        print_active(&app);

        for entry in app.registry.tab_list() {
            println!("  {} {}", if entry.active { "●" } else { "○" }, entry.title);
        }

        app.close_active_tab();
        println!("  Closed active tab, {} left", app.registry.len());
        println!("  Closing the last tab allowed: {}", app.close_active_tab());
        println!();
    }

    pub fn failures(settings_path: &Path) {
        section("Navigation Failures");
        let (mut app, factory) = start(settings_path);
        app.pump_events();

        if let Some(handle) = active_handle(&app, &factory) {
            handle.fail(NavigationPhase::Provisional, "host not found");
            app.pump_events();
            println!("  Provisional failure shows error page: {}", handle.inline_html().is_some());
        }
        print_active(&app);

        app.navigate("hello world");
        if let Some(tab) = app.registry.active_session() {
            if let Some(err) = tab.last_error() {
                println!("  {}", err);
            }
        }
        print_active(&app);
        println!();
    }

    pub fn sidebar(settings_path: &Path) {
        section("Sidebar & Settings");
        let (mut app, _factory) = start(settings_path);
        app.pump_events();

        for cmd in [
            r#"{"cmd":"set_setting","key":"show_tabs_in_sidebar","value":true}"#,
            r#"{"cmd":"set_setting","key":"beta_features","value":true}"#,
            r#"{"cmd":"add_favorite","title":"Rust","url":"https://www.rust-lang.org"}"#,
            r#"{"cmd":"open_featured","name":"Duolingo"}"#,
        ] {
            match ChromeCommand::parse(cmd) {
                Ok(command) => app.apply_command(command),
                Err(e) => println!("  Bad command: {}", e),
            }
        }
        app.pump_events();

        let sidebar = app.sidebar();
        println!("  {}", sidebar.title);
        if let Some(warning) = &sidebar.beta_warning {
            println!("  ⚠ {}", warning);
        }
        println!("  Tabs listed: {}", sidebar.tabs.as_ref().map_or(0, Vec::len));
        println!(
            "  Featured: {}",
            sidebar.featured.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        if let Some(favorites) = &sidebar.favorites {
            for fav in favorites {
                println!("  ★ {} ({})", fav.name, fav.url);
            }
        }
        print_active(&app);
        match app.share_current_page() {
            Ok(url) => println!("  Shared: {}", url),
            Err(e) => println!("  Share failed: {}", e),
        }
        println!("  Settings file: {}", app.settings_engine.get_config_path());
        println!();
    }
}
