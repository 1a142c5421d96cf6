//! Shared fixtures for the cross-crate scenario tests in `tests/`.

use tunables_core::{
    bool_entry, color_entry, double_entry, int_entry, list_entry, long_entry, map_entry,
    pair_entry, pattern_entry, record_entry, select_entry, string_entry, BoolCodec,
    CategoryBuilder, GroupBuilder, RangedCodec, RecordCodec, Rgba, Schema, SchemaBuilder,
    SchemaKind,
};

/// Install a fmt subscriber for test runs that want log output.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Selection options used by the sample schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Slow,
    Normal,
    Fast,
}

/// Record value used by the sample schema.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub enabled: bool,
    pub opacity: f64,
}

fn overlay_codec() -> RecordCodec<OverlaySettings> {
    RecordCodec::new(OverlaySettings {
        enabled: true,
        opacity: 0.8,
    })
    .field(
        "enabled",
        BoolCodec,
        |o: &OverlaySettings| o.enabled,
        |o, v| o.enabled = v,
    )
    .field(
        "opacity",
        RangedCodec::<f64>::bounded(0.0, 1.0),
        |o: &OverlaySettings| o.opacity,
        |o, v| o.opacity = v,
    )
    .caption("enabled")
}

/// A schema exercising every entry kind the library ships.
pub fn sample_schema() -> Schema {
    SchemaBuilder::new("sample", SchemaKind::Client)
        .category(
            CategoryBuilder::new("general")
                .label("General")
                .entry("enabled", bool_entry(true).tooltip("Master switch"))
                .entry(
                    "volume",
                    int_entry(50).range(0, 100).slider().tooltip("Playback volume"),
                )
                .entry("player-name", string_entry("player").max_len(16))
                .entry("server-id", pattern_entry("srv-001", "^srv-[0-9]{3}$"))
                .entry(
                    "mode",
                    select_entry(
                        Mode::Normal,
                        vec![
                            ("slow", Mode::Slow),
                            ("normal", Mode::Normal),
                            ("fast", Mode::Fast),
                        ],
                    ),
                ),
        )
        .category(
            CategoryBuilder::new("display")
                .entry("fullscreen", bool_entry(false).requires_restart())
                .entry("gamma", double_entry(1.0).range(0.1, 4.0))
                .group(
                    GroupBuilder::new("colors")
                        .expanded()
                        .entry("accent", color_entry(Rgba(0x336699)))
                        .entry("background", color_entry(Rgba(0xFF00_0000)).alpha()),
                )
                .entry("overlay", record_entry(overlay_codec()))
                .entry("preview", bool_entry(false).non_persistent()),
        )
        .category(
            CategoryBuilder::new("advanced")
                .entry(
                    "retry-delays",
                    list_entry(long_entry(0).range(0, 3600), vec![1, 5, 30]),
                )
                .entry(
                    "weights",
                    map_entry(
                        string_entry(""),
                        double_entry(0.0).range(0.0, 1.0),
                        vec![("speed".to_string(), 0.5)],
                    ),
                )
                .entry(
                    "window-size",
                    pair_entry(long_entry(1).min(1), long_entry(1).min(1), (1280, 720)),
                ),
        )
        .build()
        .expect("sample schema builds")
}
