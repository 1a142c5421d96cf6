//! End-to-end lifecycle: seed defaults, edit in a session, persist to a
//! TOML file, and reload into a fresh schema.

use integration_tests::{init_tracing, sample_schema};
use toml_store::TomlStore;
use tunables_core::{
    load_schema, seed_defaults, ConfigValue, EntryNode, GuiValue, Session, SettingsStore,
};

#[test]
fn seeded_defaults_round_trip_through_a_file() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let schema = sample_schema();
    let mut store = TomlStore::new();
    let seeded = seed_defaults(&schema, &mut store).expect("seed succeeds");
    // Every entry except the non-persistent one.
    assert_eq!(seeded, schema.entries().len() - 1);
    store.save(&path).expect("save succeeds");

    let reloaded = TomlStore::load(&path).expect("load succeeds");
    let mut fresh = sample_schema();
    let report = load_schema(&mut fresh, &reloaded);
    assert!(report.fallbacks.is_empty());
    assert!(report.missing.is_empty());
    assert_eq!(
        fresh.entry("general.volume").unwrap().committed_config(),
        Some(ConfigValue::Int(50))
    );
    assert_eq!(
        fresh
            .entry("display.colors.background")
            .unwrap()
            .committed_config(),
        Some(ConfigValue::Text("#FF000000".into()))
    );
}

#[test]
fn session_edits_survive_a_full_persist_and_reload_cycle() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let mut store = TomlStore::new();
    seed_defaults(&sample_schema(), &mut store).expect("seed succeeds");

    let mut session = Session::new(sample_schema());
    session
        .set_candidate("general.volume", GuiValue::Int(80))
        .unwrap();
    session
        .set_candidate("display.colors.accent", GuiValue::Color(0xFF8800))
        .unwrap();
    session
        .set_candidate(
            "display.overlay",
            GuiValue::Fields(vec![
                ("enabled".to_string(), GuiValue::Toggle(false)),
                ("opacity".to_string(), GuiValue::Float(0.4)),
            ]),
        )
        .unwrap();
    session
        .set_candidate(
            "advanced.weights",
            GuiValue::Entries(vec![
                (GuiValue::Text("speed".into()), GuiValue::Float(0.9)),
                (GuiValue::Text("accuracy".into()), GuiValue::Float(0.3)),
            ]),
        )
        .unwrap();
    session
        .set_candidate(
            "advanced.window-size",
            GuiValue::Pair(Box::new((GuiValue::Int(1920), GuiValue::Int(1080)))),
        )
        .unwrap();

    let report = session.save(&mut store).expect("save succeeds");
    assert_eq!(report.committed.len(), 5);
    assert!(!report.requires_restart);
    store.save(&path).expect("file save succeeds");

    let mut fresh = sample_schema();
    let loaded = TomlStore::load(&path).expect("file load succeeds");
    let report = load_schema(&mut fresh, &loaded);
    assert!(report.fallbacks.is_empty());

    assert_eq!(
        fresh.entry("general.volume").unwrap().committed_config(),
        Some(ConfigValue::Int(80))
    );
    assert_eq!(
        fresh
            .entry("display.colors.accent")
            .unwrap()
            .committed_config(),
        Some(ConfigValue::Text("#FF8800".into()))
    );
    let overlay = fresh
        .entry("display.overlay")
        .unwrap()
        .committed_config()
        .expect("stored form exists");
    assert_eq!(overlay.get("enabled"), Some(&ConfigValue::Bool(false)));
    assert_eq!(overlay.get("opacity"), Some(&ConfigValue::Float(0.4)));

    let weights = fresh
        .entry("advanced.weights")
        .unwrap()
        .committed_config()
        .expect("stored form exists");
    assert_eq!(weights.get("accuracy"), Some(&ConfigValue::Float(0.3)));
}

#[test]
fn restart_flagged_edits_are_reported() {
    let mut store = TomlStore::new();
    let mut session = Session::new(sample_schema());
    session
        .set_candidate("display.fullscreen", GuiValue::Toggle(true))
        .unwrap();
    let report = session.save(&mut store).expect("save succeeds");
    assert!(report.requires_restart);
    assert_eq!(store.get("display.fullscreen"), Some(ConfigValue::Bool(true)));
}

#[test]
fn the_commented_rendering_parses_and_names_every_persistent_entry() {
    let schema = sample_schema();
    let mut store = TomlStore::new();
    seed_defaults(&schema, &mut store).expect("seed succeeds");

    let rendered = store.render_commented(&schema);
    assert!(rendered.contains("# Playback volume"));
    assert!(rendered.contains("# Range: 0 ~ 100"));
    assert!(rendered.contains("# Options: slow, normal, fast"));
    assert!(rendered.contains("# [Requires restart]"));
    assert!(!rendered.contains("display.preview"));

    let reparsed = TomlStore::from_str(&rendered).expect("valid TOML");
    let mut fresh = sample_schema();
    let report = load_schema(&mut fresh, &reparsed);
    assert!(report.fallbacks.is_empty());
    assert!(report.missing.is_empty());
}

#[test]
fn widgets_reflect_the_whole_tree() {
    let schema = sample_schema();
    let widgets = schema.widgets();
    assert_eq!(widgets.len(), schema.entries().len());
    let slider = widgets
        .iter()
        .find(|w| w.path == "general.volume")
        .expect("widget exists");
    assert_eq!(slider.tooltip.as_deref(), Some("Playback volume"));
}
