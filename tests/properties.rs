use proptest::prelude::*;
use tincture::{
    hex_to_rgb, hsl_to_rgb, include_alpha, int_to_percent, make_string, parse, rgb_to_hex,
    rgb_to_hsl, short_hex, Component, Format, Model,
};

fn hex_digit() -> impl Strategy<Value = char> {
    prop::sample::select("0123456789abcdef".chars().collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_hex_round_trip(red: u8, green: u8, blue: u8) {
        let literal = format!("#{red:02x}{green:02x}{blue:02x}");

        let color = parse(&literal).expect("valid hex color");
        prop_assert_eq!(make_string(&color).expect("hex output"), literal.clone());

        let through_rgb = rgb_to_hex(hex_to_rgb(Ok(color))).expect("valid hex color");
        prop_assert_eq!(make_string(&through_rgb).expect("hex output"), literal);
    }

    #[test]
    fn prop_short_hex_collapses_doubled_pairs(
        r in hex_digit(),
        g in hex_digit(),
        b in hex_digit(),
    ) {
        let color = parse(&format!("#{r}{r}{g}{g}{b}{b}")).expect("valid hex color");
        prop_assert_eq!(
            make_string(&short_hex(&color)).expect("hex output"),
            format!("#{r}{g}{b}")
        );
    }

    #[test]
    fn prop_short_hex_keeps_pairs_that_are_not_doubled(red: u8, green: u8, blue: u8) {
        prop_assume!(red % 17 != 0);

        let literal = format!("#{red:02x}{green:02x}{blue:02x}");
        let color = parse(&literal).expect("valid hex color");
        prop_assert_eq!(make_string(&short_hex(&color)).expect("hex output"), literal);
    }

    #[test]
    fn prop_rgb_hsl_round_trip(red: u8, green: u8, blue: u8) {
        let source = parse(&format!("rgb({red}, {green}, {blue})")).expect("valid color");
        let back = hsl_to_rgb(rgb_to_hsl(Ok(source.clone()))).expect("valid color");

        let (Model::Rgb(source), Model::Rgb(back)) = (source.model, back.model) else {
            panic!("expected rgb colors");
        };
        for (a, b) in [
            (source.red, back.red),
            (source.green, back.green),
            (source.blue, back.blue),
        ] {
            prop_assert!((a - b).abs() <= 0.035, "{} and {} are too far apart", a, b);
        }
    }

    #[test]
    fn prop_formats_are_idempotent(red in any::<u8>(), alpha in 0.0..=1.0f32) {
        let color = parse(&format!("rgb({red} 0 0 / {alpha})")).expect("valid color");

        let once = include_alpha(&int_to_percent(&color));
        let twice = include_alpha(&int_to_percent(&once));
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.format, Format::ALPHA | Format::INT_TO_PERCENT);
    }

    #[test]
    fn prop_percent_output(red: u8) {
        let color = parse(&format!("rgb({red}, 0, 0)")).expect("valid color");
        let percent = (red as Component / 255.0 * 100.0).round();

        prop_assert_eq!(
            make_string(&int_to_percent(&color)).expect("rgb output"),
            format!("rgb({percent}%, 0%, 0%)")
        );
    }

    #[test]
    fn prop_alpha_defaults_to_opaque(red: u8, green: u8, blue: u8) {
        let color = parse(&format!("rgb({red} {green} {blue})")).expect("valid color");
        prop_assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn prop_errors_pass_through_conversions(input in "[g-z]{1,8}") {
        let error = parse(&input);
        prop_assert!(error.is_err());
        prop_assert_eq!(rgb_to_hex(hsl_to_rgb(rgb_to_hsl(error.clone()))), error);
    }
}
