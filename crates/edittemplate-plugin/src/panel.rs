//! On-page debug panel.
//!
//! With the debug parameter enabled the plugin appends a fixed HTML
//! fragment to every front-end page showing the current component, view,
//! and layout, so the site builder can copy the exact values into the
//! plugin configuration.

use edittemplate_core::RouteDescriptor;

/// Literal shown for a route field the router left empty.
const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Escape text for interpolation into HTML body or attribute context.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A route field ready for display: escaped, with empty values replaced
/// by the placeholder.
fn display_field(value: &str) -> String {
    if value.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        escape_html(value)
    }
}

/// Render the debug panel for the current route.
pub fn render_debug_panel(route: &RouteDescriptor) -> String {
    format!(
        concat!(
            "<div class=\"alert alert-info\" role=\"alert\" ",
            "style=\"margin: 10px; z-index: 9999; position: relative;\">\n",
            "<h4 class=\"alert-heading\">Edit Template Debug Info</h4>\n",
            "<p><strong>Component:</strong> {component}<br>\n",
            "<strong>View:</strong> {view}<br>\n",
            "<strong>Layout:</strong> {layout}</p>\n",
            "<hr>\n",
            "<p class=\"mb-0\"><small>Use these values in your plugin ",
            "configuration to target this page.</small></p>\n",
            "<p class=\"mb-0\"><small>To remove this message disable the ",
            "debug option in the plugin configuration.</small></p>\n",
            "</div>"
        ),
        component = display_field(&route.component),
        view = display_field(&route.view),
        layout = display_field(&route.layout),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_panel_shows_route_fields() {
        let panel = render_debug_panel(&RouteDescriptor::new("com_content", "article", "edit"));

        assert!(panel.contains("com_content"));
        assert!(panel.contains("article"));
        assert!(panel.contains("edit"));
        assert!(!panel.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_panel_uses_placeholder_for_empty_fields() {
        let panel = render_debug_panel(&RouteDescriptor::new("com_users", "", ""));

        assert!(panel.contains("com_users"));
        assert_eq!(panel.matches(EMPTY_PLACEHOLDER).count(), 2);
    }

    #[test]
    fn test_panel_escapes_route_values() {
        let panel = render_debug_panel(&RouteDescriptor::new("<script>", "article", "edit"));

        assert!(!panel.contains("<script>"));
        assert!(panel.contains("&lt;script&gt;"));
    }
}
