use super::{display_fields, RenderOptions};
use crate::core::MenuGroups;
use std::borrow::Cow;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Menu</title>
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "</body>\n</html>";

pub fn render(groups: &MenuGroups) -> String {
    render_html(groups, &RenderOptions::default())
}

pub fn render_html(groups: &MenuGroups, options: &RenderOptions) -> String {
    let mut html = String::from(DOCUMENT_HEAD);

    for (course, items) in groups.sorted_courses() {
        html.push_str(&format!(
            "<h2>{} Items</h2>\n<table>\n",
            cell(course.as_str(), options)
        ));
        for item in items {
            let [price, title, description] = display_fields(item, options);
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                cell(price, options),
                cell(title, options),
                cell(description, options)
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str(DOCUMENT_TAIL);
    html
}

fn cell<'a>(value: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        escape(value)
    } else {
        Cow::Borrowed(value)
    }
}

pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
