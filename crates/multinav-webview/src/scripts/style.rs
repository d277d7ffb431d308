//! Style injection for pane backgrounds and the source outline.

const BACKGROUND_STYLE_ID: &str = "multinav-background";
const OUTLINE_STYLE_ID: &str = "multinav-source-outline";

/// Add, replace, or remove (`css = None`) a `<style>` element by id. Waits
/// for the document if it is still loading.
fn style_script(id: &str, css: Option<&str>) -> String {
    let id = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    let css = match css {
        Some(css) => serde_json::to_string(css).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    };
    format!(
        r#"(function() {{
    var id = {id};
    var css = {css};
    function apply() {{
        var el = document.getElementById(id);
        if (css === null) {{ if (el) {{ el.remove(); }} return; }}
        if (!el) {{
            el = document.createElement('style');
            el.id = id;
            (document.head || document.documentElement).appendChild(el);
        }}
        el.textContent = css;
    }}
    if (document.readyState === 'loading') {{
        document.addEventListener('DOMContentLoaded', apply, {{ once: true }});
    }} else {{
        apply();
    }}
}})();"#
    )
}

/// Paints pages with `color` so blank or transparent pages don't show black.
pub fn background_script(color: &str) -> String {
    let css = format!("html,body{{background:{color} !important;min-height:100vh;}}");
    style_script(BACKGROUND_STYLE_ID, Some(&css))
}

/// Draws (or removes) the outline and "SOURCE" badge on the mirror source.
pub fn highlight_script(on: bool, color: &str) -> String {
    if !on {
        return style_script(OUTLINE_STYLE_ID, None);
    }
    let css = format!(
        "html {{ outline: 3px solid {color} !important; outline-offset: -3px !important; }}\n\
         body::after {{ content: \"SOURCE\"; position: fixed; top: 8px; right: 8px; \
         background: {color}; color: white; font: 600 10px/1 ui-sans-serif, system-ui; \
         padding: 3px 6px; border-radius: 6px; z-index: 2147483647; opacity: 0.9; \
         pointer-events: none; }}"
    );
    style_script(OUTLINE_STYLE_ID, Some(&css))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_on_embeds_color_and_badge() {
        let js = highlight_script(true, "#2a60e8");
        assert!(js.contains("\"multinav-source-outline\""));
        assert!(js.contains("3px solid #2a60e8"));
        assert!(js.contains("SOURCE"));
        assert!(!js.contains("var css = null;"));
    }

    #[test]
    fn highlight_off_removes_style() {
        let js = highlight_script(false, "#2a60e8");
        assert!(js.contains("var css = null;"));
        assert!(!js.contains("#2a60e8"));
    }

    #[test]
    fn background_paints_html_and_body() {
        let js = background_script("#1b1d23");
        assert!(js.contains("\"multinav-background\""));
        assert!(js.contains("html,body{background:#1b1d23 !important;min-height:100vh;}"));
    }

    #[test]
    fn hostile_color_cannot_break_out_of_string() {
        let js = background_script("red\";alert(1);//");
        assert!(js.contains(r#"red\";alert(1);//"#));
    }
}
