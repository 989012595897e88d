use colorshift::prelude::*;
use pretty_assertions::assert_eq;

const LAVENDER: &str = "#b4befe";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Every 6-digit color on a coarse grid, plus a few odd steps
fn sample_colors() -> impl Iterator<Item = (u8, u8, u8)> {
    let steps = [0u8, 1, 17, 63, 64, 127, 128, 129, 191, 200, 254, 255];
    steps.into_iter().flat_map(move |r| {
        steps
            .into_iter()
            .flat_map(move |g| steps.into_iter().map(move |b| (r, g, b)))
    })
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(hex_to_rgb(LAVENDER).unwrap(), (180, 190, 254));
    assert_eq!(rgb_to_hex(180, 190, 254), LAVENDER);

    let (h, s, l) = rgb_to_hsl(180, 190, 254);
    assert_eq!(hsl_to_rgb(h, s, l), (180, 190, 254));
}

#[test]
fn test_hex_rgb_round_trip_normalizes_case() {
    for (r, g, b) in sample_colors() {
        let upper = format!("{r:02X}{g:02X}{b:02X}");
        let rgb = hex_to_rgb(&upper).unwrap();
        assert_eq!(
            rgb_to_hex(rgb.0, rgb.1, rgb.2),
            format!("#{}", upper.to_lowercase())
        );
    }
}

#[test]
fn test_hex_hsl_round_trip_within_one() {
    for (r, g, b) in sample_colors() {
        let hex = rgb_to_hex(r, g, b);
        let (h, s, l) = hex_to_hsl(&hex).unwrap();
        let (r2, g2, b2) = hex_to_rgb(&hsl_to_hex(h, s, l)).unwrap();

        for (before, after) in [(r, r2), (g, g2), (b, b2)] {
            assert!(before.abs_diff(after) <= 1, "{hex} came back as ({r2}, {g2}, {b2})");
        }
    }
}

#[test]
fn test_achromatic_invariant() {
    for v in 0..=255u8 {
        let (h, s, l) = rgb_to_hsl(v, v, v);
        assert_eq!((h, s), (0.0, 0.0));
        assert!((l - f64::from(v) / 255.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_over_shift_clamps() {
    init_tracing();
    for hex in ["#b4befe", "#f38ba8", "#11111b", "#a6e3a1"] {
        assert_eq!(saturation(hex, 1000).unwrap(), saturation(hex, 100).unwrap());
        assert_eq!(lightness(hex, -1000).unwrap(), lightness(hex, -100).unwrap());
        assert_eq!(lightness(hex, -100).unwrap(), "#000000");
    }
}

#[test]
fn test_saturation_shift_inverts_without_clamping() {
    // Mid-range color, small step: no boundary crossed either way
    let up = saturation("#89b4fa", 5).unwrap();
    assert_eq!(up, "#86b3fd");
    assert_eq!(saturation(&up, -5).unwrap(), "#89b4fa");
}

#[test]
fn test_shifts_produce_new_valid_colors() {
    for result in [
        Color::hue(LAVENDER, 20).unwrap(),
        Color::saturation(LAVENDER, 20).unwrap(),
        Color::lightness(LAVENDER, 20).unwrap(),
    ] {
        assert_ne!(result, LAVENDER);
        assert_eq!(normalize_hex(&result).unwrap(), result);
    }
}

#[test]
fn test_hue_shift_is_percent_of_circle() {
    // shift=20 moves the hue fraction by 20/360, not by 20 degrees of a
    // 0-100 scale; a full 360 pins the hue at the clamped ceiling.
    let (h, _, _) = hex_to_hsl(LAVENDER).unwrap();
    let (h2, _, _) = hex_to_hsl(&hue(LAVENDER, 20).unwrap()).unwrap();
    assert!((h2 - h - 20.0 / 360.0).abs() < 0.01);

    assert_eq!(hue(LAVENDER, 360).unwrap(), "#feb4b4");
}

#[test]
fn test_generic_shift_matches_named_operations() {
    assert_eq!(shift(LAVENDER, Channel::Hue, -20).unwrap(), hue(LAVENDER, -20).unwrap());
    assert_eq!(
        shift(LAVENDER, Channel::Saturation, -20).unwrap(),
        saturation(LAVENDER, -20).unwrap()
    );
    assert_eq!(
        shift(LAVENDER, Channel::Lightness, -20).unwrap(),
        lightness(LAVENDER, -20).unwrap()
    );
}

#[test]
fn test_format_errors_propagate() {
    for bad in ["#b4bef", "b4befe00", "#b4befz", ""] {
        assert!(hex_to_rgb(bad).unwrap_err().is_format_error());
        assert!(hex_to_hsl(bad).unwrap_err().is_format_error());
        assert!(hue(bad, 10).unwrap_err().is_format_error());
        assert!(saturation(bad, 10).unwrap_err().is_format_error());
        assert!(lightness(bad, 10).unwrap_err().is_format_error());
    }
}

#[test]
fn test_scheme_from_literal() {
    let scheme: Scheme = [
        ("base00", "#11111b"),
        ("base07", "#b4befe"),
        ("base08", "#f38ba8"),
    ]
    .into_iter()
    .collect();
    let color = Color::new(scheme);

    assert_eq!(color.get("base07").unwrap(), LAVENDER);
    assert_eq!(color.hue_of("base07", 20).unwrap(), "#c3b4fe");
    assert_eq!(color.saturation_of("base00", -30).unwrap(), "#161616");
    assert!(color.get("base0F").is_err());
}

#[test]
fn test_bundled_scheme_lookup() {
    let mocha = find_scheme("Catppuccin Mocha").unwrap();
    assert!(mocha.is_complete_base16());
    assert_eq!(find_slot("base08").unwrap().role, SlotRole::Accent);
    assert_eq!(mocha.get("base08"), Some("#f38ba8"));
}
