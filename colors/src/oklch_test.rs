use super::*;

const EPSILON: f64 = 1e-3;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn parse_percent_lightness_without_alpha() {
    let color = parse("oklch(21% 0.006 285.885)").expect("valid oklch");
    assert_close(color.r, 0.0938);
    assert_close(color.g, 0.0938);
    assert_close(color.b, 0.1058);
    assert_eq!(color.a, None);
}

#[test]
fn parse_unit_lightness_matches_percent_form() {
    assert_eq!(parse("oklch(0.5 0.1 200)"), parse("oklch(50% 0.1 200)"));
}

#[test]
fn parse_alpha_clause() {
    let color = parse("oklch(87% 0 0 / 0.8)").expect("valid oklch");
    assert_eq!(color.a, Some(0.8));
    assert_close(color.r, 0.8314);
    assert_close(color.r, color.g);
    assert_close(color.g, color.b);
}

#[test]
fn parse_alpha_without_spaces_around_slash() {
    assert_eq!(parse("oklch(87% 0 0/0.8)"), parse("oklch(87% 0 0 / 0.8)"));
}

#[test]
fn parse_tolerates_padding_inside_parentheses() {
    assert_eq!(parse("oklch(  50% 0.1 200  )"), parse("oklch(50% 0.1 200)"));
}

#[test]
fn parse_ignores_text_after_closing_parenthesis() {
    assert_eq!(parse("oklch(50% 0.1 200 / 0.5))"), parse("oklch(50% 0.1 200 / 0.5)"));
}

#[test]
fn parse_accepts_leading_dot_numbers() {
    assert_eq!(parse("oklch(.5 .1 200)"), parse("oklch(0.5 0.1 200)"));
}

#[test]
fn parse_clamps_alpha_above_one() {
    let color = parse("oklch(50% 0 0 / 2)").expect("valid oklch");
    assert_eq!(color.a, Some(1.0));
}

#[test]
fn parse_rejects_malformed_arguments() {
    for input in [
        "oklch(bad)",
        "oklch()",
        "oklch(50% 0.1)",
        "oklch(50% 0.1 200 300)",
        "oklch(50% 0.1 200",
        "oklch(50%, 0.1, 200)",
        "oklch(-50% 0.1 200)",
        "oklch(50% 0.1% 200)",
        "oklch(50% 0.1 200 /)",
        "oklch(50% 0.1 200 / 0.5 0.6)",
        "oklch(1.2.3 0 0)",
        "oklch(% 0 0)",
    ] {
        let err = parse(input).expect_err("input should be rejected");
        assert_eq!(err, ResolveError::InvalidOklch(input.to_owned()), "input {input:?}");
    }
}

#[test]
fn parse_rejects_literals_that_overflow() {
    let long_digits = "9".repeat(400);
    let huge = format!("1{}", "0".repeat(200));
    for input in [
        format!("oklch({long_digits} 0 0)"),
        format!("oklch(50% {long_digits} 0)"),
        format!("oklch(50% 0.1 {long_digits})"),
        format!("oklch(50% 0 0 / {long_digits})"),
        format!("oklch(1{} 0 0)", "0".repeat(103)),
        format!("oklch(50% {huge} 0)"),
    ] {
        let err = parse(&input).expect_err("input should be rejected");
        assert_eq!(err, ResolveError::InvalidOklch(input.clone()), "input {input:?}");
    }
}

#[test]
fn parse_huge_finite_hue_stays_in_unit_range() {
    let color = parse(&format!("oklch(50% 0.1 1{})", "0".repeat(300))).expect("valid oklch");
    for channel in [color.r, color.g, color.b] {
        assert!((0.0..=1.0).contains(&channel), "channel {channel} out of range");
    }
}

// =============================================================================
// CONVERSION
// =============================================================================

#[test]
fn conversion_of_black_and_white() {
    let [r, g, b] = oklch_to_srgb(0.0, 0.0, 0.0).expect("finite");
    assert_eq!([r, g, b], [0.0, 0.0, 0.0]);

    let [r, g, b] = oklch_to_srgb(1.0, 0.0, 0.0).expect("finite");
    assert_close(r, 1.0);
    assert_close(g, 1.0);
    assert_close(b, 1.0);
}

#[test]
fn conversion_of_srgb_red() {
    let [r, g, b] = oklch_to_srgb(0.628, 0.2577, 29.23).expect("finite");
    assert_close(r, 1.0);
    assert_close(g, 0.0);
    assert_close(b, 0.0);
}

#[test]
fn conversion_clamps_out_of_gamut_channels() {
    let [r, g, b] = oklch_to_srgb(0.7, 0.4, 150.0).expect("finite");
    assert_eq!(r, 0.0);
    assert_close(g, 0.8387);
    assert_eq!(b, 0.0);
}

#[test]
fn conversion_clamps_overbright_lightness() {
    let [r, g, b] = oklch_to_srgb(4.0, 0.0, 0.0).expect("finite");
    for channel in [r, g, b] {
        assert_close(channel, 1.0);
        assert!(channel <= 1.0);
    }
}

#[test]
fn conversion_refuses_overflowing_components() {
    assert_eq!(oklch_to_srgb(1e103, 0.0, 0.0), None);
    assert_eq!(oklch_to_srgb(0.5, 1e200, 0.0), None);
}
