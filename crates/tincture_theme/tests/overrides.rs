use pretty_assertions::assert_eq;
use tincture_theme::{
    build_theme, Color, ColorScheme, ColorToken, DesignSystem, FontDesign, FontWeight,
    RadiusToken, ShadowScale, SpacingToken, ThemeDocument, ThemeError, ThemeOverrides,
    ThemePreset, TypographyToken,
};

#[test]
fn empty_overrides_build_the_default_theme() {
    assert_eq!(
        build_theme(&ThemeOverrides::default()).unwrap(),
        DesignSystem::default()
    );
}

#[test]
fn minimal_is_reproducible_from_literal_tokens() {
    let document = ThemeDocument::from_toml_str(
        r##"
name = "Minimal"
corner_radius_preset = "sharp"
shadow_preset = "none"

[colors]
primary_brand = "000000"
secondary_brand = "6B6B6B"
background_primary = { light = "FFFFFF", dark = "0A0A0A" }
background_secondary = { light = "F8F8F8", dark = "1A1A1A" }
background_tertiary = { light = "F0F0F0", dark = "2A2A2A" }
text_primary = { light = "000000", dark = "FFFFFF" }
text_secondary = { light = "666666", dark = "999999" }
text_tertiary = { light = "999999", dark = "666666" }
success = "00C853"
warning = "FFB300"
error = "FF1744"
info = "2979FF"
separator = { light = "E0E0E0", dark = "333333" }
border = { light = "#E0E0E0", dark = "#333333" }
"##,
    )
    .unwrap();

    assert_eq!(document.build().unwrap(), DesignSystem::minimal());
}

#[test]
fn pop_is_reproducible_from_table_presets() {
    let document = ThemeDocument::from_toml_str(
        r#"
name = "Pop"
colors_preset = "pop"
typography_preset = "rounded"
corner_radius_preset = "rounded"
"#,
    )
    .unwrap();

    assert_eq!(document.build().unwrap(), DesignSystem::pop());
}

#[test]
fn standalone_documents_round_trip_every_preset_through_toml() {
    for preset in ThemePreset::all() {
        let theme = preset.build();
        let text = ThemeDocument::from_theme(&theme).to_toml().unwrap();
        let parsed = ThemeDocument::from_toml_str(&text).unwrap();

        assert_eq!(parsed.extends.as_deref(), Some("none"));
        assert_eq!(parsed.build().unwrap(), theme, "Preset {:?} should survive TOML", preset);
    }
}

#[test]
fn translucent_shadows_keep_exact_alpha() {
    let text = ThemeDocument::from_theme(&DesignSystem::default())
        .to_toml()
        .unwrap();
    let rebuilt = ThemeDocument::from_toml_str(&text).unwrap().build().unwrap();
    assert_eq!(rebuilt.shadow().sm.color.a, 0.08);
    assert_eq!(rebuilt.shadow().lg.color.a, 0.16);
}

#[test]
fn misspelled_color_side_is_rejected() {
    let err = ThemeDocument::from_toml_str("[colors]\nprimary_brand = { ligth = \"FF0000\" }")
        .unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)), "got {err}");
}

#[test]
fn standalone_document_reports_first_missing_token() {
    let err = ThemeDocument::from_toml_str(
        r#"
name = "Partial"
extends = "none"
colors_preset = "default"
typography_preset = "default"
corner_radius_preset = "default"
shadow_preset = "default"

[spacing]
xxs = 2
"#,
    )
    .unwrap()
    .build()
    .unwrap_err();

    match err {
        ThemeError::MissingToken { table, token } => {
            assert_eq!(table, "spacing");
            assert_eq!(token, "xs");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_hex_never_becomes_black() {
    for bad in ["", "#12", "12345", "#XYZXYZ"] {
        let mut document = ThemeDocument::default();
        document.colors.insert(
            "primary_brand".to_string(),
            tincture_theme::ColorEntry::Hex(bad.to_string()),
        );
        let err = document.build().unwrap_err();
        assert!(
            matches!(err, ThemeError::Color { table: "colors", .. }),
            "{bad:?} should be rejected, got {err}"
        );
    }
}

#[test]
fn shorthand_hex_expands() {
    let theme = ThemeDocument::from_toml_str("[colors]\ninfo = \"07F\"")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        theme.color(ColorToken::Info, ColorScheme::Light),
        Color::from_hex(0x0077FF)
    );
}

#[test]
fn overrides_deserialize_from_json_documents() {
    let document: ThemeDocument = serde_json::from_str(
        r##"{
            "name": "Json",
            "extends": "pop",
            "typography": { "headline_large": { "size": 30, "design": "serif" } },
            "corner_radius": { "md": 10 },
            "shadow": { "lg": { "color": "#33000000", "radius": 24 } }
        }"##,
    )
    .unwrap();

    let theme = document.build().unwrap();
    let headline = theme.font(TypographyToken::HeadlineLarge);
    assert_eq!(headline.size, 30.0);
    assert_eq!(headline.design, FontDesign::Serif);
    assert_eq!(headline.weight, FontWeight::Semibold);
    assert_eq!(theme.radius(RadiusToken::Md), 10.0);
    assert_eq!(theme.shadow().lg.radius, 24.0);
    assert_eq!(theme.shadow().lg.y, ShadowScale::default().lg.y);
}

#[test]
fn typed_overrides_and_documents_agree() {
    let typed = build_theme(
        &ThemeOverrides::new()
            .with_name("Agree")
            .with_spacing(SpacingToken::Lg, 28.0)
            .with_color(ColorToken::Warning, Color::from_hex(0xFFAA00)),
    )
    .unwrap();

    let document = ThemeDocument::from_toml_str(
        "name = \"Agree\"\n[spacing]\nlg = 28\n[colors]\nwarning = \"FFAA00\"",
    )
    .unwrap()
    .build()
    .unwrap();

    assert_eq!(typed, document);
}
