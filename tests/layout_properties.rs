//! End-to-end layout properties against a real session
//!
//! Each test mounts a `LayoutSession` with in-process collaborators and
//! checks one observable property of the shell.

use std::path::Path;
use std::time::{Duration, Instant};

use shell_app::auth::StaticAuth;
use shell_app::navigation::default_table;
use shell_app::storage::Storage;
use shell_app::{
    Collaborators, FileStorage, LayoutSession, MemoryStorage, Settings, UrlRouter, VirtualDocument,
};
use shell_core::{
    Breakpoints, DeviceClass, ResolvedTheme, SectionKey, Theme, User, Viewport, KNOWN_SECTIONS,
};
use tempfile::tempdir;

struct Harness {
    session: LayoutSession,
    document: VirtualDocument,
}

fn harness(
    url: &str,
    viewport: Option<Viewport>,
    scheme: ResolvedTheme,
    storage: Option<Box<dyn Storage>>,
    user: User,
) -> Harness {
    let document = VirtualDocument::new(viewport, scheme);
    let collaborators = Collaborators {
        platform: Box::new(document.clone()),
        router: Box::new(UrlRouter::parse(url).unwrap()),
        storage,
        auth: Box::new(StaticAuth::signed_in(user)),
    };
    let mut session = LayoutSession::new(Settings::default(), default_table(), collaborators);
    session.mount();
    Harness { session, document }
}

fn staff() -> User {
    User::new("staff-1", "Front Desk")
}

fn file_storage(path: &Path) -> Option<Box<dyn Storage>> {
    Some(Box::new(FileStorage::open(path)))
}

#[test]
fn breakpoint_boundaries_are_exclusive_buckets() {
    let breakpoints = Breakpoints::default();
    let cases = [
        (0, DeviceClass::SmallMobile),
        (479, DeviceClass::SmallMobile),
        (480, DeviceClass::LargeMobile),
        (767, DeviceClass::LargeMobile),
        (768, DeviceClass::Tablet),
        (1023, DeviceClass::Tablet),
        (1024, DeviceClass::Desktop),
        (4096, DeviceClass::Desktop),
    ];

    for (width, expected) in cases {
        let device = DeviceClass::from_width(width, &breakpoints);
        assert_eq!(device, expected, "width {width}");

        let flags = device.flags();
        let buckets = [
            flags.is_small_mobile,
            flags.is_large_mobile,
            flags.is_tablet,
            flags.is_desktop,
        ];
        assert_eq!(buckets.iter().filter(|b| **b).count(), 1, "width {width}");
    }
}

#[test]
fn identical_resize_leaves_state_untouched() {
    let mut h = harness(
        "http://studio.local/dashboard",
        Some(Viewport::new(900, 700)),
        ResolvedTheme::Light,
        None,
        staff(),
    );
    let mut rx = h.session.subscribe();
    let before = h.session.snapshot();

    let later = Instant::now() + Duration::from_secs(1);
    h.session.handle_resize(Viewport::new(900, 700), later);
    h.session
        .handle_resize(Viewport::new(900, 700), later + Duration::from_secs(1));

    assert_eq!(h.session.snapshot(), before);
    assert!(rx.try_recv().is_err());
}

#[test]
fn theme_round_trips_through_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.toml");

    let mut first = harness(
        "http://studio.local/dashboard",
        None,
        ResolvedTheme::Light,
        file_storage(&path),
        staff(),
    );
    first.session.set_theme(Theme::Dark);
    drop(first);

    // OS preference is light; the stored intent must win
    let second = harness(
        "http://studio.local/dashboard",
        None,
        ResolvedTheme::Light,
        file_storage(&path),
        staff(),
    );
    assert_eq!(second.session.state().theme, Theme::Dark);
    assert_eq!(second.session.state().resolved_theme, ResolvedTheme::Dark);
    assert_eq!(second.document.theme_marker(), Some(ResolvedTheme::Dark));
}

#[test]
fn system_theme_follows_os_without_persisting() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.toml");
    let mut h = harness(
        "http://studio.local/dashboard",
        None,
        ResolvedTheme::Light,
        file_storage(&path),
        staff(),
    );
    assert_eq!(h.session.state().theme, Theme::System);
    assert_eq!(h.session.state().resolved_theme, ResolvedTheme::Light);

    h.session.color_scheme_changed(ResolvedTheme::Dark);
    assert_eq!(h.session.state().resolved_theme, ResolvedTheme::Dark);
    assert_eq!(h.document.theme_marker(), Some(ResolvedTheme::Dark));

    h.session.color_scheme_changed(ResolvedTheme::Light);
    assert_eq!(h.session.state().resolved_theme, ResolvedTheme::Light);
    assert_eq!(h.session.state().theme, Theme::System);
    assert_eq!(FileStorage::open(&path).get("theme"), None);
}

#[test]
fn url_section_beats_persisted_and_repairs_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.toml");
    {
        let mut seed = FileStorage::open(&path);
        seed.set("activeSection", "admin");
    }

    let h = harness(
        "http://studio.local/payments/transactions?section=payments",
        None,
        ResolvedTheme::Light,
        file_storage(&path),
        staff(),
    );

    assert_eq!(h.session.state().active_section.as_str(), "payments");
    assert_eq!(
        FileStorage::open(&path).get("activeSection").as_deref(),
        Some("payments")
    );
}

#[test]
fn missing_sources_default_to_main_and_write_url() {
    let h = harness(
        "http://studio.local/dashboard",
        Some(Viewport::new(1280, 800)),
        ResolvedTheme::Light,
        Some(Box::new(MemoryStorage::new())),
        staff(),
    );

    assert_eq!(h.session.state().active_section, SectionKey::main());
    assert_eq!(h.session.current_url(), "http://studio.local/dashboard?section=main");
}

#[test]
fn shrinking_to_mobile_closes_open_sidebar() {
    let mut h = harness(
        "http://studio.local/dashboard?section=main",
        Some(Viewport::new(1200, 800)),
        ResolvedTheme::Light,
        None,
        staff(),
    );
    h.session.open_sidebar();
    assert!(h.session.state().sidebar_open);

    h.session
        .handle_resize(Viewport::new(600, 800), Instant::now() + Duration::from_secs(1));

    assert_eq!(h.session.state().device, DeviceClass::LargeMobile);
    assert!(!h.session.state().sidebar_open);
    assert!(!h.session.state().sidebar_visible());
}

#[test]
fn finance_entries_follow_permission_in_every_section() {
    for section in KNOWN_SECTIONS {
        let url = format!("http://studio.local/dashboard?section={section}");

        let without = harness(&url, None, ResolvedTheme::Light, None, staff());
        assert!(
            !without.session.nav_tree().contains_path("/reports"),
            "section {section} leaked finance reports"
        );

        let finance = staff().with_permissions(["finance.view"]);
        let with = harness(&url, None, ResolvedTheme::Light, None, finance);
        assert!(
            with.session.nav_tree().contains_path("/reports"),
            "section {section} hid finance reports"
        );
    }
}

#[test]
fn desktop_system_dark_scenario() {
    let mut h = harness(
        "http://studio.local/dashboard",
        Some(Viewport::new(1024, 768)),
        ResolvedTheme::Dark,
        Some(Box::new(MemoryStorage::new())),
        staff(),
    );
    let state = h.session.state();

    assert_eq!(state.device, DeviceClass::Desktop);
    assert_eq!(state.resolved_theme, ResolvedTheme::Dark);
    assert_eq!(state.active_section.as_str(), "main");
    assert!(state.sidebar_visible());
    assert!(!state.sidebar_is_overlay());

    // Open flag is tracked but does not hide the docked sidebar
    h.session.close_sidebar();
    assert!(h.session.state().sidebar_visible());
    h.session.toggle_sidebar();
    assert!(h.session.state().sidebar_visible());
}
