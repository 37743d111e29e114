use super::*;

parameterized_test! {can_validate_time_window, (start, end, is_valid), {
    assert_eq!(TimeWindow::new(start, end).is_ok(), is_valid);
}}

can_validate_time_window! {
    case01_valid: (0., 10., true),
    case02_point: (5., 5., true),
    case03_negative_start: (-1., 10., false),
    case04_end_before_start: (10., 5., false),
    case05_nan_start: (Float::NAN, 5., false),
    case06_nan_end: (0., Float::NAN, false),
}

#[test]
fn can_use_max_time_window_as_default() {
    let time_window = TimeWindow::default();

    assert_eq!(time_window, TimeWindow::max());
    assert_eq!(time_window.start, 0.);
    assert_eq!(time_window.end, Float::MAX);
}

#[test]
fn can_check_intersection() {
    let time_window = TimeWindow::new(10., 20.).unwrap();

    assert!(time_window.intersects(&TimeWindow::new(20., 30.).unwrap()));
    assert!(!time_window.intersects(&TimeWindow::new(21., 30.).unwrap()));
}

parameterized_test! {can_format_coordinate, (x, y, expected), {
    assert_eq!(Coordinate::new(x, y).to_string(), expected);
}}

can_format_coordinate! {
    case01_integral: (3., 4., "[x=3.0][y=4.0]"),
    case02_fractional: (1.5, -2.25, "[x=1.5][y=-2.25]"),
    case03_zero: (0., 0., "[x=0.0][y=0.0]"),
}

#[test]
fn can_resolve_location() {
    let coord = Coordinate::new(3., 4.);

    assert_eq!(Location::resolve(Some("loc"), None), Some(Location::new("loc", None)));
    assert_eq!(Location::resolve(Some("loc"), Some(coord)).map(|l| l.id), Some("loc".to_string()));
    assert_eq!(Location::resolve(None, Some(coord)).map(|l| l.id), Some("[x=3.0][y=4.0]".to_string()));
    assert_eq!(Location::resolve(None, None), None);
}
