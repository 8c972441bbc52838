use super::{display_fields, RenderOptions};
use crate::core::MenuGroups;

pub fn render(groups: &MenuGroups) -> String {
    render_text(groups, &RenderOptions::default())
}

pub fn render_text(groups: &MenuGroups, options: &RenderOptions) -> String {
    let mut output = String::new();

    for (course, items) in groups.sorted_courses() {
        output.push_str(&format!("* {} Items *\n", course));
        for item in items {
            let [price, title, description] = display_fields(item, options);
            output.push_str(&format!("{}\t{} - {}\n", price, title, description));
        }
        output.push('\n');
    }

    output.trim().to_string()
}
