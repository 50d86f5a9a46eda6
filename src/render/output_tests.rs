//! Tests for widget output rendering.

use crate::render::{RenderOutcome, TitleFilter, WidgetArgs};
use crate::settings::{Instance, Value};
use crate::widget::{TagplayWidget, Widget};

fn widget() -> TagplayWidget {
    TagplayWidget::new().unwrap()
}

fn configured() -> Instance {
    [("project_id", "p1"), ("feed_id", "f1"), ("token", "t1")]
        .into_iter()
        .collect()
}

fn wrapped_args() -> WidgetArgs {
    WidgetArgs {
        before_widget: "<aside>".to_string(),
        after_widget: "</aside>".to_string(),
        before_title: "<h2>".to_string(),
        after_title: "</h2>".to_string(),
    }
}

struct Shout;

impl TitleFilter for Shout {
    fn filter_title(&self, title: String) -> String {
        title.to_uppercase()
    }
}

mod rendered {
    use super::*;

    #[test]
    fn renders_container_with_identifiers() {
        let rendered = widget().render(&WidgetArgs::default(), &configured()).unwrap();

        assert!(rendered.html.starts_with(
            r#"<div id="tagplay-widget-f1" class="tagplay-widget" data-project="p1" data-feed="f1" data-token="t1" data-type="grid""#
        ));
        assert!(rendered.html.contains(r#"data-rows="4" data-cols="1" data-spacing="10"></div>"#));
        assert!(!rendered.html.contains("data-no-images"));
    }

    #[test]
    fn emits_loader_script_for_element() {
        let rendered = widget().render(&WidgetArgs::default(), &configured()).unwrap();

        assert!(rendered
            .html
            .contains(r#"document.getElementById("tagplay-widget-f1")"#));
        assert!(rendered.html.contains("TagplayWidget(widgetElement);"));
        assert!(rendered.html.contains("window.tagplayWidgetQueue.push(widgetElement);"));
    }

    #[test]
    fn requests_default_script_version() {
        let rendered = widget().render(&WidgetArgs::default(), &configured()).unwrap();

        let script = rendered.script().unwrap();
        assert_eq!(script.handle, "tagplay_widget");
        assert_eq!(
            script.src.as_str(),
            "https://api.tagplay.co/1.8.2/tagplay-widget.min.js"
        );
    }

    #[test]
    fn requests_configured_script_version() {
        let mut instance = configured();
        instance.insert("widget_version", "2.1.0");

        let rendered = widget().render(&WidgetArgs::default(), &instance).unwrap();

        assert_eq!(
            rendered.script().unwrap().src.as_str(),
            "https://api.tagplay.co/2.1.0/tagplay-widget.min.js"
        );
    }

    #[test]
    fn odd_version_stays_inside_one_path_segment() {
        let mut instance = configured();
        instance.insert("widget_version", "../evil");

        let rendered = widget().render(&WidgetArgs::default(), &instance).unwrap();

        assert_eq!(
            rendered.script().unwrap().src.as_str(),
            "https://api.tagplay.co/..%2Fevil/tagplay-widget.min.js"
        );
    }

    #[test]
    fn explicit_html_id_and_escaped_identifiers() {
        let mut instance = configured();
        instance.insert("html_id", "my-feed");
        instance.insert("token", r#"t"1"#);

        let rendered = widget().render(&WidgetArgs::default(), &instance).unwrap();

        assert!(rendered.html.contains(r#"id="my-feed""#));
        assert!(rendered.html.contains(r#"data-token="t&quot;1""#));
    }

    #[test]
    fn inverted_attribute_is_serialized_negated() {
        let mut instance = configured();
        instance.insert("images", false);

        let rendered = widget().render(&WidgetArgs::default(), &instance).unwrap();

        assert!(rendered.html.contains(" data-no-images "));
    }

    #[test]
    fn wraps_output_and_title() {
        let mut instance = configured();
        instance.insert("title", "News & views");

        let rendered = widget().render(&wrapped_args(), &instance).unwrap();

        assert!(rendered.html.starts_with("<aside><h2>News &amp; views</h2><div "));
        assert!(rendered.html.ends_with("</script>\n</aside>"));
    }

    #[test]
    fn title_filter_is_applied() {
        let mut instance = configured();
        instance.insert("title", "latest");

        let rendered = widget()
            .with_title_filter(Shout)
            .render(&wrapped_args(), &instance)
            .unwrap();

        assert!(rendered.html.contains("<h2>LATEST</h2>"));
    }
}

mod misconfigured {
    use super::*;

    #[test]
    fn missing_token_renders_only_notice() {
        let mut instance = configured();
        instance.remove("token");

        let rendered = widget().render(&WidgetArgs::default(), &instance).unwrap();

        assert_eq!(
            rendered.html,
            "Misconfigured widget: project, feed or token missing"
        );
        assert_eq!(rendered.outcome, RenderOutcome::Misconfigured);
        assert!(rendered.script().is_none());
    }

    #[test]
    fn empty_identifier_counts_as_missing() {
        let mut instance = configured();
        instance.insert("project_id", "");

        let rendered = widget().render(&WidgetArgs::default(), &instance).unwrap();

        assert!(rendered.is_misconfigured());
        assert!(!rendered.html.contains("<div"));
    }

    #[test]
    fn notice_keeps_wrappers_and_title() {
        let instance: Instance = [("title", Value::from("Feed"))].into_iter().collect();

        let rendered = widget().render(&wrapped_args(), &instance).unwrap();

        assert_eq!(
            rendered.html,
            "<aside><h2>Feed</h2>Misconfigured widget: project, feed or token missing</aside>"
        );
    }
}

mod scripts {
    use crate::render::{ScriptAsset, ScriptQueue};

    #[test]
    fn queue_deduplicates_by_handle() {
        let mut queue = ScriptQueue::new();

        assert!(queue.enqueue(ScriptAsset::widget_script("1.8.2").unwrap()));
        assert!(!queue.enqueue(ScriptAsset::widget_script("2.0.0").unwrap()));

        assert_eq!(queue.assets().len(), 1);
        assert_eq!(
            queue.to_html(),
            r#"<script type="text/javascript" src="https://api.tagplay.co/1.8.2/tagplay-widget.min.js" id="tagplay_widget-js"></script>"#
        );
    }

    #[test]
    fn empty_queue_renders_nothing() {
        let queue = ScriptQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.to_html(), "");
    }
}
