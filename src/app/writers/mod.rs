pub mod html_writer;
pub mod text_writer;

pub use html_writer::{HtmlWriter, HTML_OUTPUT};
pub use text_writer::{TextWriter, TEXT_OUTPUT};
