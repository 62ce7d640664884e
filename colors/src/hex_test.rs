use super::*;

#[test]
fn parse_six_digit_body() {
    let color = parse("f6821f").expect("valid hex");
    assert_eq!(color.r, f64::from(0xf6_u8) / 255.0);
    assert_eq!(color.g, f64::from(0x82_u8) / 255.0);
    assert_eq!(color.b, f64::from(0x1f_u8) / 255.0);
    assert_eq!(color.a, None);
}

#[test]
fn parse_expands_shorthand() {
    assert_eq!(parse("abc"), parse("aabbcc"));
    assert_eq!(parse("fff"), Some(NormalizedColor::rgb(1.0, 1.0, 1.0)));
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(parse("F6821F"), parse("f6821f"));
    assert_eq!(parse("AbC"), parse("aabbcc"));
}

#[test]
fn parse_rejects_bad_lengths() {
    for body in ["", "1", "12", "1234", "12345", "1234567", "123456789"] {
        assert_eq!(parse(body), None, "body {body:?} should be rejected");
    }
}

#[test]
fn parse_rejects_alpha_forms() {
    assert_eq!(parse("fff8"), None);
    assert_eq!(parse("ffffff80"), None);
}

#[test]
fn parse_rejects_non_hex_digits() {
    assert_eq!(parse("ggg"), None);
    assert_eq!(parse("12345z"), None);
}

#[test]
fn parse_rejects_multibyte_text() {
    assert_eq!(parse("é1"), None);
}
