//! Tests for the run module.

use super::*;

use tagplay_widget::config::{Cli, ValidatedConfig};
use tempfile::TempDir;

/// Builds a config whose store lives in `dir`, with wrapper markup.
fn config_in(dir: &TempDir) -> ValidatedConfig {
    let store = dir.path().join("instances.json");
    let cli = Cli::parse_from_iter([
        "tagplay-widget",
        "render",
        "--store",
        store.to_str().unwrap(),
    ]);
    let mut config = ValidatedConfig::from_raw(&cli, None).unwrap();
    config.args.before_widget = "<aside>".to_string();
    config.args.after_widget = "</aside>".to_string();
    config
}

fn command(args: &[&str]) -> Command {
    let mut full_args = vec!["tagplay-widget"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args).command
}

mod run_error {
    use super::*;

    #[test]
    fn input_error_displays_path() {
        let error = RunError::Input {
            path: PathBuf::from("page.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read input 'page.html': missing");
    }

    #[test]
    fn config_error_is_transparent() {
        let error = RunError::from(ConfigError::InvalidAssignment {
            value: "rows".to_string(),
        });
        assert!(error.to_string().starts_with("Invalid setting 'rows'"));
    }
}

mod render_command {
    use super::*;

    #[test]
    fn renders_ad_hoc_settings_with_wrappers_and_script() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let output = execute(
            &config,
            command(&[
                "render",
                "--set",
                "project_id=p1",
                "--set",
                "feed_id=f1",
                "--set",
                "token=t1",
            ]),
        )
        .unwrap();

        assert!(output.starts_with(r#"<aside><div id="tagplay-widget-f1""#));
        assert!(output.contains("</script>\n</aside>\n<script type=\"text/javascript\""));
        assert!(output.ends_with(
            r#"src="https://api.tagplay.co/1.8.2/tagplay-widget.min.js" id="tagplay_widget-js"></script>"#
        ));
    }

    #[test]
    fn missing_placement_renders_notice() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let output = execute(&config, command(&["render", "--number", "9"])).unwrap();

        assert_eq!(
            output,
            "<aside>Misconfigured widget: project, feed or token missing</aside>"
        );
    }

    #[test]
    fn malformed_assignment_is_config_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let result = execute(&config, command(&["render", "--set", "rows"]));

        assert!(matches!(result, Err(RunError::Config(_))));
    }
}

mod update_command {
    use super::*;

    #[test]
    fn update_then_render_stored_placement() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        execute(
            &config,
            command(&[
                "update",
                "-n",
                "2",
                "--set",
                "project_id=p1",
                "--set",
                "feed_id=feed123456",
                "--set",
                "token=t1",
                "--set",
                "widget_version=bogus",
            ]),
        )
        .unwrap();

        let stored = FileInstanceStore::new(&config.store_path)
            .load(2)
            .unwrap()
            .unwrap();
        assert_eq!(stored.string("widget_version"), "1.8.2");
        assert_eq!(stored.string("html_id"), "tagplay-widget-feed12");

        let output = execute(&config, command(&["render", "-n", "2"])).unwrap();
        assert!(output.contains(r#"<div id="tagplay-widget-feed12""#));
        assert!(output.contains(r#"data-project="p1""#));
    }

    #[test]
    fn second_update_unchecks_missing_checkboxes() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        execute(&config, command(&["update", "--set", "project_id=p1"])).unwrap();
        let output = execute(
            &config,
            command(&["update", "--set", "project_id=p1", "--set", "images=on"]),
        )
        .unwrap();

        let stored: Instance = serde_json::from_str(&output).unwrap();
        assert_eq!(stored.get("images"), Some(&true.into()));
        assert_eq!(stored.get("include_captions"), Some(&false.into()));
    }
}

mod form_command {
    use super::*;

    #[test]
    fn form_uses_configured_naming() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.id_base = "feed_widget".to_string();

        let output = execute(&config, command(&["form", "-n", "4"])).unwrap();

        assert!(output.starts_with(
            "<h3>Tagplay Widget</h3>\n<p class=\"description\">Displays your latest social media posts.</p>\n"
        ));
        assert!(output.contains(r#"id="widget-feed_widget-4-project_id""#));
        assert!(output.contains(r#"name="widget-feed_widget[4][rows]""#));
    }
}

mod shortcode_command {
    use super::*;

    #[test]
    fn expands_text_argument() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let output = execute(
            &config,
            command(&[
                "shortcode",
                r#"<p>[tagplay-widget project_id="p" feed_id="f" token="t" no_videos="on"]</p>"#,
            ]),
        )
        .unwrap();

        assert!(output.starts_with(r#"<p><div id="tagplay-widget-f""#));
        assert!(output.contains(" data-no-videos "));
        assert!(!output.contains("<aside>"));
        assert!(output.ends_with("</script>"));
    }

    #[test]
    fn reads_content_from_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let page = dir.path().join("page.html");
        std::fs::write(&page, "plain text").unwrap();

        let output = execute(
            &config,
            command(&["shortcode", "--file", page.to_str().unwrap()]),
        )
        .unwrap();

        assert_eq!(output, "plain text");
    }

    #[test]
    fn missing_file_is_input_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let result = execute(
            &config,
            command(&["shortcode", "--file", "/nonexistent/page.html"]),
        );

        assert!(matches!(result, Err(RunError::Input { .. })));
    }
}

mod init_command {
    use super::*;

    #[test]
    fn writes_template() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let output_path = dir.path().join("generated.toml");

        let output = execute(
            &config,
            command(&["init", "-o", output_path.to_str().unwrap()]),
        )
        .unwrap();

        assert!(output.starts_with("Configuration template written to:"));
        assert!(std::fs::read_to_string(&output_path).unwrap().contains("[markup]"));
    }

    #[test]
    fn unwritable_output_is_config_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let output_path = dir.path().join("missing").join("generated.toml");

        let result = execute(
            &config,
            command(&["init", "-o", output_path.to_str().unwrap()]),
        );

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::FileWrite { .. }))
        ));
    }
}
