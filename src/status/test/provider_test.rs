use crate::{
    config::Config,
    external::command::{mock::MockCommandRunner, CommandError},
    status::{
        provider::{BrightnessStatusProvider, ClickEvent, StatusError, NOT_INSTALLED_TEXT},
        theme::{Theme, DEFAULT_BRIGHT, DEFAULT_DARK, DEFAULT_DEGRADED},
    },
};

fn floor_config() -> Config {
    Config {
        minimum_brightness: 20,
        dark_threshold: 50,
        ..Config::default()
    }
}

fn no_device_error() -> CommandError {
    CommandError::Failed {
        command: "brightnessctl".to_string(),
        code: 1,
        message: "No devices found".to_string(),
    }
}

#[test]
fn missing_tool_renders_a_degraded_line_without_querying() {
    let runner = MockCommandRunner::new(Ok(String::new()));
    runner.set_resolvable(false);
    let provider = BrightnessStatusProvider::new(Config::default(), runner.clone());

    let status = provider.get_status().expect("degraded line errored");
    assert_eq!(status.full_text, NOT_INSTALLED_TEXT);
    assert_eq!(status.color, DEFAULT_DEGRADED);
    assert!(runner.queries().is_empty());
    assert!(runner.dispatches().is_empty());
}

#[test]
fn a_dark_reading_renders_with_the_dark_color() {
    let runner =
        MockCommandRunner::new(Ok("intel_backlight,backlight,400,50%,800\n".to_string()));
    let provider = BrightnessStatusProvider::new(floor_config(), runner.clone());

    let status = provider.get_status().expect("query failed");
    assert_eq!(status.full_text, "💡: 50%");
    assert_eq!(status.color, DEFAULT_DARK);
    assert!(runner.dispatches().is_empty());
}

#[test]
fn a_bright_reading_renders_with_the_bright_color() {
    let runner =
        MockCommandRunner::new(Ok("intel_backlight,backlight,600,75%,800\n".to_string()));
    let provider = BrightnessStatusProvider::new(floor_config(), runner.clone());

    let status = provider.get_status().expect("query failed");
    assert_eq!(status.full_text, "💡: 75%");
    assert_eq!(status.color, DEFAULT_BRIGHT);
}

#[test]
fn queries_use_the_configured_class_and_device() {
    let config = Config {
        ctl_class: "leds".to_string(),
        ctl_device: "kbd_backlight".to_string(),
        ..Config::default()
    };
    let runner = MockCommandRunner::new(Ok("kbd_backlight,leds,1,50%,2\n".to_string()));
    let provider = BrightnessStatusProvider::new(config, runner.clone());

    provider.get_status().expect("query failed");
    assert_eq!(
        runner.queries(),
        vec![vec![
            "-c".to_string(),
            "leds".to_string(),
            "-d".to_string(),
            "kbd_backlight".to_string(),
            "-m".to_string(),
        ]]
    );
}

#[test]
fn a_reading_below_the_floor_is_corrected_once_and_displayed_as_the_floor() {
    let runner = MockCommandRunner::new(Ok("intel_backlight,backlight,80,10%,800\n".to_string()));
    let provider = BrightnessStatusProvider::new(floor_config(), runner.clone());

    let status = provider.get_status().expect("query failed");
    assert_eq!(status.full_text, "💡: 20%");
    // 20 does not exceed the threshold of 50
    assert_eq!(status.color, DEFAULT_DARK);

    let dispatches = runner.dispatches();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(
        &dispatches[0][dispatches[0].len() - 2..],
        &["s".to_string(), "20%".to_string()]
    );
}

#[test]
fn no_correction_when_below_minimum_is_allowed() {
    let config = Config {
        allow_below_minimum: true,
        ..floor_config()
    };
    let runner = MockCommandRunner::new(Ok("intel_backlight,backlight,80,10%,800\n".to_string()));
    let provider = BrightnessStatusProvider::new(config, runner.clone());

    let status = provider.get_status().expect("query failed");
    assert_eq!(status.full_text, "💡: 10%");
    assert!(runner.dispatches().is_empty());
}

#[test]
fn no_device_is_recoverable_and_renders_not_available() {
    let runner = MockCommandRunner::new(Err(no_device_error()));
    let provider = BrightnessStatusProvider::new(floor_config(), runner.clone());

    let status = provider.get_status().expect("recoverable error propagated");
    assert_eq!(status.full_text, "💡: N/A");
    // The unavailable branch keeps the pre-set dark color
    assert_eq!(status.color, DEFAULT_DARK);
    assert!(runner.dispatches().is_empty());
}

#[test]
fn other_exit_codes_propagate() {
    let runner = MockCommandRunner::new(Err(CommandError::Failed {
        command: "brightnessctl".to_string(),
        code: 2,
        message: "Unknown class".to_string(),
    }));
    let provider = BrightnessStatusProvider::new(Config::default(), runner);

    let error = provider.get_status().expect_err("fatal error was absorbed");
    assert!(matches!(error, StatusError::Command(_)));
}

#[test]
fn unparsable_output_propagates() {
    let runner = MockCommandRunner::new(Ok("garbage".to_string()));
    let provider = BrightnessStatusProvider::new(Config::default(), runner);

    let error = provider.get_status().expect_err("garbage output parsed");
    assert!(matches!(error, StatusError::Parse(_)));
}

#[test]
fn scroll_up_dispatches_a_relative_increase() {
    let runner = MockCommandRunner::new(Ok(String::new()));
    let provider = BrightnessStatusProvider::new(Config::default(), runner.clone());

    provider.on_click(&ClickEvent { button: 4 });
    let dispatches = runner.dispatches();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(
        &dispatches[0][dispatches[0].len() - 2..],
        &["s".to_string(), "+5%".to_string()]
    );
}

#[test]
fn scroll_down_dispatches_a_relative_decrease() {
    let runner = MockCommandRunner::new(Ok(String::new()));
    let provider = BrightnessStatusProvider::new(Config::default(), runner.clone());

    provider.on_click(&ClickEvent { button: 5 });
    assert_eq!(
        runner.dispatches()[0].last().unwrap(),
        &"-5%".to_string()
    );
}

#[test]
fn the_min_button_dispatches_an_absolute_set_to_the_floor() {
    let runner = MockCommandRunner::new(Ok(String::new()));
    let provider = BrightnessStatusProvider::new(floor_config(), runner.clone());

    provider.on_click(&ClickEvent { button: 3 });
    assert_eq!(
        runner.dispatches()[0].last().unwrap(),
        &"20%".to_string()
    );
}

#[test]
fn the_max_button_dispatches_an_absolute_set_to_full() {
    let config = Config {
        button_max: Some(2),
        ..Config::default()
    };
    let runner = MockCommandRunner::new(Ok(String::new()));
    let provider = BrightnessStatusProvider::new(config, runner.clone());

    provider.on_click(&ClickEvent { button: 2 });
    assert_eq!(
        runner.dispatches()[0].last().unwrap(),
        &"100%".to_string()
    );
}

#[test]
fn unbound_buttons_are_a_no_op() {
    let runner = MockCommandRunner::new(Ok(String::new()));
    let provider = BrightnessStatusProvider::new(Config::default(), runner.clone());

    // 2 is unbound by default; 1 (left click) is never bound
    provider.on_click(&ClickEvent { button: 2 });
    provider.on_click(&ClickEvent { button: 1 });
    provider.on_click(&ClickEvent { button: 9 });
    assert!(runner.dispatches().is_empty());
}

#[test]
fn the_post_config_hook_adopts_host_theme_colors() {
    let runner =
        MockCommandRunner::new(Ok("intel_backlight,backlight,600,75%,800\n".to_string()));
    let mut provider = BrightnessStatusProvider::new(Config::default(), runner);
    provider.post_config_hook(&Theme {
        color_bright: Some("#FFA500".to_string()),
        ..Theme::default()
    });

    let status = provider.get_status().expect("query failed");
    assert_eq!(status.color, "#FFA500");
}

#[test]
fn config_color_overrides_beat_the_host_theme() {
    let config = Config {
        color_bright: Some("#ABCDEF".to_string()),
        ..Config::default()
    };
    let runner =
        MockCommandRunner::new(Ok("intel_backlight,backlight,600,75%,800\n".to_string()));
    let mut provider = BrightnessStatusProvider::new(config, runner);
    provider.post_config_hook(&Theme {
        color_bright: Some("#FFA500".to_string()),
        ..Theme::default()
    });

    let status = provider.get_status().expect("query failed");
    assert_eq!(status.color, "#ABCDEF");
}

#[test]
fn cached_until_reflects_the_configured_interval() {
    let config = Config {
        cache_timeout: 60,
        ..Config::default()
    };
    let runner = MockCommandRunner::new(Ok("intel_backlight,backlight,400,50%,800\n".to_string()));
    let provider = BrightnessStatusProvider::new(config, runner);

    let before = std::time::Instant::now();
    let status = provider.get_status().expect("query failed");
    assert!(status.cached_until >= before + std::time::Duration::from_secs(59));
    assert!(status.cached_until <= std::time::Instant::now() + std::time::Duration::from_secs(60));
}
