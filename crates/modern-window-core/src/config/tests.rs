use super::*;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let config = Config::default();

    // Assert
    assert_eq!(config.title_bar.drag_height, 50);
    assert_eq!(config.title_bar.snap_width, 100);
    assert_eq!(config.title_bar.snap_height, 50);
    assert_eq!(config.resize_border.width, 8);
    assert_eq!(config.resize_border.policy, PolicyChoice::Auto);
    assert_eq!(config.paint.font, "Times New Roman");
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[title_bar]\nsnap_width = 140\n";

    // Act
    let config = loader::parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.title_bar.snap_width, 140);
    assert_eq!(config.title_bar.drag_height, 50);
    assert_eq!(config.paint.font_size, 16);
}

#[test]
fn policy_parses_kebab_case() {
    // Arrange
    let toml_str = "[resize_border]\npolicy = \"corner-fix\"\n";

    // Act
    let config = loader::parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.resize_border.policy, PolicyChoice::CornerFix);
}

#[test]
fn unknown_policy_is_a_parse_error() {
    // Act
    let result = loader::parse("[resize_border]\npolicy = \"sideways\"\n");

    // Assert
    assert!(result.is_err());
}

#[test]
fn validate_clamps_extreme_values() {
    // Arrange
    let mut config = Config {
        title_bar: TitleBarConfig {
            drag_height: -5,
            snap_width: 10_000,
            snap_height: 0,
        },
        resize_border: ResizeBorderConfig {
            width: 0,
            height: 999,
            ..Default::default()
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.title_bar.drag_height, 1);
    assert_eq!(config.title_bar.snap_width, 400);
    assert_eq!(config.title_bar.snap_height, 1);
    assert_eq!(config.resize_border.width, 1);
    assert_eq!(config.resize_border.height, 64);
}

#[test]
fn validate_repairs_bad_border_color_and_font() {
    // Arrange
    let mut config = Config {
        paint: PaintConfig {
            border_color: "not-a-color".into(),
            font: "   ".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.paint.border_color, "#bcbcbc");
    assert_eq!(config.paint.font, "Times New Roman");
}

#[test]
fn border_color_falls_back_to_gray() {
    let paint = PaintConfig {
        border_color: "#12".into(),
        ..Default::default()
    };
    assert_eq!(paint.border_color(), Color::BORDER_GRAY);
}

#[test]
fn auto_policy_follows_windows_version() {
    // Act / Assert
    assert_eq!(
        PolicyChoice::Auto.resolve(WindowsVersion::Windows11),
        ResizePolicy::CornerFix
    );
    assert_eq!(
        PolicyChoice::Auto.resolve(WindowsVersion::Windows7),
        ResizePolicy::Direct
    );
    assert_eq!(
        PolicyChoice::Direct.resolve(WindowsVersion::Windows11),
        ResizePolicy::Direct
    );
}

#[test]
fn template_parses_to_defaults() {
    // Arrange
    let text = template::generate_config();

    // Act
    let config = loader::parse(&text).unwrap();

    // Assert
    let defaults = Config::default();
    assert_eq!(config.window.title, defaults.window.title);
    assert_eq!(config.title_bar.snap_width, defaults.title_bar.snap_width);
    assert_eq!(config.resize_border.policy, defaults.resize_border.policy);
    assert_eq!(config.paint.drag_label, defaults.paint.drag_label);
    assert_eq!(config.logging.level, defaults.logging.level);
}
