//! Integration tests for configuration and mode selection

use rgb_cycler::{
    ConfigError, CycleMode, CyclerConfig, DEFAULT_HIDE_DELAY_MS, MAX_INTERVAL_MS, ModeError,
    TickInterval,
};

#[test]
fn builder_defaults() {
    let config = CyclerConfig::builder().build().unwrap();
    assert_eq!(config.mode(), CycleMode::Rgb);
    assert_eq!(config.interval().as_millis(), 100);
    assert_eq!(config.start_color(), rgb_cycler::BLACK);
    assert_eq!(config.hide_delay_ms(), DEFAULT_HIDE_DELAY_MS);
}

#[test]
fn builder_rejects_out_of_range_interval() {
    let result = CyclerConfig::builder().interval_millis(0).build();
    assert_eq!(result, Err(ConfigError::IntervalOutOfRange { millis: 0 }));

    let result = CyclerConfig::builder()
        .interval_millis(MAX_INTERVAL_MS + 1)
        .build();
    assert_eq!(
        result,
        Err(ConfigError::IntervalOutOfRange {
            millis: MAX_INTERVAL_MS + 1
        })
    );
}

#[test]
fn builder_accepts_interval_extremes() {
    for millis in [1, 5000] {
        let config = CyclerConfig::builder()
            .interval_millis(millis)
            .build()
            .unwrap();
        assert_eq!(config.interval().as_millis(), millis);
    }
}

#[test]
fn builder_rejects_zero_hide_delay() {
    let result = CyclerConfig::builder().hide_delay_millis(0).build();
    assert_eq!(result, Err(ConfigError::ZeroHideDelay));
}

#[test]
fn builder_rejects_unknown_mode_index_instead_of_defaulting() {
    let result = CyclerConfig::builder().mode_index(3);
    assert_eq!(
        result.err(),
        Some(ConfigError::Mode(ModeError::UnknownIndex(3)))
    );

    let result = CyclerConfig::builder().mode_index(-1);
    assert_eq!(
        result.err(),
        Some(ConfigError::Mode(ModeError::UnknownIndex(-1)))
    );
}

#[test]
fn builder_selects_mode_by_index_and_name() {
    let config = CyclerConfig::builder()
        .mode_index(2)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.mode(), CycleMode::Rainbow);

    let config = CyclerConfig::builder()
        .mode_name("BW")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.mode(), CycleMode::BlackWhite);
}

#[test]
fn mode_names_parse_case_insensitively() {
    assert_eq!("rgb".parse::<CycleMode>(), Ok(CycleMode::Rgb));
    assert_eq!("Black-White".parse::<CycleMode>(), Ok(CycleMode::BlackWhite));
    assert_eq!(" RAINBOW ".parse::<CycleMode>(), Ok(CycleMode::Rainbow));
    assert_eq!("strobe".parse::<CycleMode>(), Err(ModeError::UnknownName));
}

#[test]
fn mode_labels_follow_picker_order() {
    let labels: Vec<&str> = CycleMode::ALL.iter().map(|mode| mode.label()).collect();
    assert_eq!(labels, vec!["Red, Green, Blue", "Black, White", "Rainbow"]);
    assert_eq!(CycleMode::Rainbow.to_string(), "Rainbow");
}

#[test]
fn tick_interval_converts_to_host_duration() {
    let interval = TickInterval::try_from(250u32).unwrap();
    let duration: core::time::Duration = interval.to_duration();
    assert_eq!(duration, core::time::Duration::from_millis(250));
}

#[test]
fn errors_display_readably() {
    let err = ConfigError::IntervalOutOfRange { millis: 9000 };
    assert_eq!(err.to_string(), "tick interval 9000 ms is outside 1..=5000 ms");

    let err = ConfigError::from(ModeError::UnknownIndex(7));
    assert_eq!(
        err.to_string(),
        "mode error: unknown cycle mode index 7 (expected 0, 1 or 2)"
    );
}
