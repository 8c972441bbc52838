pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;

use crate::core::ItemRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown in place of a field the menu line did not have.
    /// Defaults to empty text rather than a literal `undefined`.
    pub missing_field: String,
    /// HTML only. Field values are inserted verbatim when false.
    pub escape_html: bool,
}

/// Output order is price, title, description.
pub(crate) fn display_fields<'a>(
    item: &'a ItemRecord,
    options: &'a RenderOptions,
) -> [&'a str; 3] {
    let placeholder = options.missing_field.as_str();
    [
        item.price.as_deref().unwrap_or(placeholder),
        item.title.as_deref().unwrap_or(placeholder),
        item.description.as_deref().unwrap_or(placeholder),
    ]
}
