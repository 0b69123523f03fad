//! HTML rendering for the form shell.
//!
//! The UI is a single page: input widgets on top, original and rewritten
//! panes below. Everything interpolated into the page goes through
//! [`escape_html`]; only the prompt sent to the model stays unescaped.

use recast_core::{AccessContext, Audience, Channel};

/// Everything one render of the page needs.
#[derive(Debug, Default, Clone)]
pub struct PageView {
    pub url: String,
    pub audience: String,
    pub context: String,
    pub channel: String,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub title: Option<String>,
    pub original: Option<String>,
    pub rewritten: Option<String>,
}

/// Escapes text for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn options(values: &[(&str, &str)], selected: &str) -> String {
    let mut out = String::new();
    for (value, label) in values {
        let attr = if *value == selected { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            value, attr, escape_html(label)
        ));
    }
    out
}

fn audience_options(selected: &str) -> String {
    let values: Vec<(&str, &str)> = Audience::ALL.iter().map(|a| (a.as_str(), a.as_str())).collect();
    options(&values, selected)
}

fn context_options(selected: &str) -> String {
    let values: Vec<(&str, &str)> = AccessContext::ALL.iter().map(|c| (c.as_str(), c.as_str())).collect();
    options(&values, selected)
}

fn channel_options(selected: &str) -> String {
    let mut values: Vec<(&str, &str)> = vec![("", "none")];
    values.extend(Channel::ALL.iter().map(|c| (c.as_str(), c.as_str())));
    options(&values, selected)
}

fn banner(class: &str, message: &str) -> String {
    format!("<p class=\"banner {}\">{}</p>", class, escape_html(message))
}

/// Renders the full page for a view.
pub fn render_page(view: &PageView) -> String {
    let mut banners = String::new();
    if let Some(warning) = &view.warning {
        banners.push_str(&banner("warning", warning));
    }
    if let Some(error) = &view.error {
        banners.push_str(&banner("error", error));
    }

    let mut panes = String::new();
    if let Some(original) = &view.original {
        if let Some(title) = &view.title {
            panes.push_str(&format!("<h2>{}</h2>", escape_html(title)));
        }
        panes.push_str(&format!(
            "<h3>Original Content</h3>\n<textarea id=\"original\" readonly rows=\"10\">{}</textarea>",
            escape_html(original)
        ));
    }
    if let Some(rewritten) = &view.rewritten {
        panes.push_str(&format!(
            "\n<h3>Rewritten Content</h3>\n<textarea id=\"rewritten\" readonly rows=\"20\">{}</textarea>",
            escape_html(rewritten)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Recast</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
label {{ display: block; margin-top: 0.75rem; }}
input[type="url"], select, textarea {{ width: 100%; box-sizing: border-box; }}
textarea {{ margin-top: 0.25rem; }}
.banner.warning {{ color: #8a6d00; background: #fff6d6; padding: 0.5rem; }}
.banner.error {{ color: #8a1c1c; background: #ffe3e3; padding: 0.5rem; }}
button {{ margin-top: 1rem; padding: 0.5rem 1.5rem; }}
</style>
</head>
<body>
<h1>Content Rewriter</h1>
{banners}
<form method="post" action="/rewrite" onsubmit="var b=document.getElementById('go');b.disabled=true;b.textContent='Working…';">
<label>Enter a URL to scrape content from:
<input type="url" name="url" value="{url}" placeholder="https://example.com/article">
</label>
<label>Select the audience:
<select name="audience">{audiences}</select>
</label>
<label>Select the context:
<select name="context">{contexts}</select>
</label>
<label>Select the channel:
<select name="channel">{channels}</select>
</label>
<button id="go" type="submit">Rewrite Content</button>
</form>
{panes}
</body>
</html>
"#,
        banners = banners,
        url = escape_html(&view.url),
        audiences = audience_options(&view.audience),
        contexts = context_options(&view.context),
        channels = channel_options(&view.channel),
        panes = panes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_default_page() {
        let page = render_page(&PageView::default());
        assert!(page.contains("Content Rewriter"));
        assert!(page.contains("name=\"audience\""));
        assert!(page.contains("imaging technicians"));
        assert!(page.contains("podcast"));
        assert!(!page.contains("id=\"rewritten\""));
    }

    #[test]
    fn test_render_selected_option() {
        let view = PageView { audience: "procurement".to_string(), ..Default::default() };
        let page = render_page(&view);
        assert!(page.contains("value=\"procurement\" selected"));
    }

    #[test]
    fn test_render_panes_are_escaped() {
        let view = PageView {
            original: Some("<script>alert(1)</script>".to_string()),
            rewritten: Some("safe & sound".to_string()),
            ..Default::default()
        };
        let page = render_page(&view);
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("safe &amp; sound"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_render_warning_banner() {
        let view = PageView { warning: Some("Please enter a valid URL.".to_string()), ..Default::default() };
        let page = render_page(&view);
        assert!(page.contains("banner warning"));
        assert!(page.contains("Please enter a valid URL."));
    }
}
