use grafico_core::{PALETTE, Ticker, color_for, series_specs, time_label};

#[test]
fn intraday_values_render_as_hour_minute() {
    assert_eq!(time_label("2024-01-01T09:30:00"), "09:30");
    assert_eq!(time_label("2024-01-01T16:05:59"), "16:05");
}

#[test]
fn calendar_dates_pass_through_unchanged() {
    assert_eq!(time_label("2024-01-01"), "2024-01-01");
}

#[test]
fn unparseable_datetimes_fall_back_to_the_raw_value() {
    assert_eq!(time_label("2024-01-01Tnot-a-time"), "2024-01-01Tnot-a-time");
}

#[test]
fn palette_cycles_past_its_length() {
    assert_eq!(color_for(0), PALETTE[0]);
    assert_eq!(color_for(5), PALETTE[5]);
    assert_eq!(color_for(6), PALETTE[0]);
    assert_eq!(color_for(13), PALETTE[1]);
}

#[test]
fn palette_tokens_are_distinct() {
    for (i, a) in PALETTE.iter().enumerate() {
        for b in &PALETTE[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn series_specs_follow_selection_order() {
    let selection: Vec<Ticker> = ["MSFT", "AAPL", "IBM"]
        .into_iter()
        .map(|s| Ticker::new(s).unwrap())
        .collect();

    let specs = series_specs(&selection);
    assert_eq!(specs.len(), 3);
    assert_eq!(specs[0].ticker.as_str(), "MSFT");
    assert_eq!(specs[0].color, PALETTE[0]);
    assert_eq!(specs[0].display_name, "MSFT Close");
    assert_eq!(specs[1].ticker.as_str(), "AAPL");
    assert_eq!(specs[1].color, PALETTE[1]);
    assert_eq!(specs[2].color, PALETTE[2]);
}

#[test]
fn reordering_a_selection_reassigns_colors_by_position() {
    let a = Ticker::new("AAPL").unwrap();
    let b = Ticker::new("MSFT").unwrap();

    let first = series_specs(&[a.clone(), b.clone()]);
    let second = series_specs(&[b, a]);

    assert_eq!(first[0].color, second[0].color);
    assert_eq!(first[0].ticker, second[1].ticker);
}
