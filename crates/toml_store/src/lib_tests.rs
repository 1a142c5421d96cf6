//! Tests for the TOML store backend.

use super::*;
use tunables_core::{
    bool_entry, color_entry, int_entry, CategoryBuilder, Rgba, SchemaBuilder, SchemaKind,
};

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn nested_paths_map_to_nested_tables() {
        let store = TomlStore::from_str(
            r##"
            [general]
            volume = 80

            [general.colors]
            accent = "#336699"
            "##,
        )
        .expect("parses");

        assert_eq!(store.get("general.volume"), Some(ConfigValue::Int(80)));
        assert_eq!(
            store.get("general.colors.accent"),
            Some(ConfigValue::Text("#336699".into()))
        );
        assert_eq!(store.get("general.missing"), None);
        assert_eq!(store.get("general.volume.deeper"), None);
    }

    #[test]
    fn set_creates_intermediate_tables() {
        let mut store = TomlStore::new();
        store
            .set("a.b.c", ConfigValue::Bool(true))
            .expect("set succeeds");
        assert_eq!(store.get("a.b.c"), Some(ConfigValue::Bool(true)));
    }

    #[test]
    fn set_through_a_scalar_is_an_error() {
        let mut store = TomlStore::from_str("a = 1\n").expect("parses");
        let error = store
            .set("a.b", ConfigValue::Int(2))
            .expect_err("expected an error");
        assert_eq!(error, StoreError::NotATable { path: "a".to_string() });
    }

    #[test]
    fn remove_is_tolerant_of_missing_paths() {
        let mut store = TomlStore::from_str("[general]\nvolume = 80\n").expect("parses");
        store.remove("general.volume").expect("remove succeeds");
        assert_eq!(store.get("general.volume"), None);
        store.remove("general.volume").expect("still fine");
        store.remove("other.path").expect("still fine");
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        let result = TomlStore::from_str("this is not toml = = =");
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn datetimes_surface_as_text() {
        let store = TomlStore::from_str("updated = 2024-01-01T00:00:00Z\n").expect("parses");
        match store.get("updated") {
            Some(ConfigValue::Text(text)) => assert!(text.starts_with("2024-01-01")),
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn lists_and_tables_round_trip() {
        let mut store = TomlStore::new();
        let value = ConfigValue::Table(vec![
            ("enabled".to_string(), ConfigValue::Bool(true)),
            (
                "weights".to_string(),
                ConfigValue::List(vec![ConfigValue::Float(0.5), ConfigValue::Float(0.75)]),
            ),
        ]);
        store
            .set("display.overlay", value.clone())
            .expect("set succeeds");

        let rendered = store.render().expect("renders");
        let reparsed = TomlStore::from_str(&rendered).expect("reparses");
        assert_eq!(reparsed.get("display.overlay"), Some(value));
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");

        let mut store = TomlStore::new();
        store
            .set("general.volume", ConfigValue::Int(80))
            .expect("set succeeds");
        store.save(&path).expect("save succeeds");

        let loaded = TomlStore::load(&path).expect("load succeeds");
        assert_eq!(loaded.get("general.volume"), Some(ConfigValue::Int(80)));
    }

    #[test]
    fn loading_a_missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = TomlStore::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(StoreError::FileAccess { .. })));
    }
}

#[cfg(test)]
mod commented_rendering_tests {
    use super::*;

    fn demo_schema() -> Schema {
        SchemaBuilder::new("demo", SchemaKind::Client)
            .category(
                CategoryBuilder::new("general")
                    .entry(
                        "volume",
                        int_entry(50).range(0, 100).tooltip("Playback volume"),
                    )
                    .entry("accent", color_entry(Rgba(0x336699)))
                    .entry("fullscreen", bool_entry(false).requires_restart())
                    .entry("preview", bool_entry(false).non_persistent()),
            )
            .build()
            .expect("schema builds")
    }

    #[test]
    fn comments_carry_tooltips_and_codec_hints() {
        let store = TomlStore::new();
        let rendered = store.render_commented(&demo_schema());

        assert!(rendered.contains("# Playback volume"));
        assert!(rendered.contains("# Range: 0 ~ 100"));
        assert!(rendered.contains("# Color: #RRGGBB"));
        assert!(rendered.contains("# [Requires restart]"));
        assert!(rendered.contains("general.volume = 50"));
        assert!(rendered.contains("general.accent = \"#336699\""));
    }

    #[test]
    fn stored_values_win_over_defaults() {
        let mut store = TomlStore::new();
        store
            .set("general.volume", ConfigValue::Int(80))
            .expect("set succeeds");
        let rendered = store.render_commented(&demo_schema());
        assert!(rendered.contains("general.volume = 80"));
    }

    #[test]
    fn non_persistent_entries_are_omitted() {
        let store = TomlStore::new();
        let rendered = store.render_commented(&demo_schema());
        assert!(!rendered.contains("preview"));
    }

    #[test]
    fn the_commented_rendering_is_valid_toml() {
        let store = TomlStore::new();
        let rendered = store.render_commented(&demo_schema());
        assert!(TomlStore::from_str(&rendered).is_ok());
    }
}
