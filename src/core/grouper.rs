use crate::core::{CourseName, ItemRecord, MenuGroups};
use crate::utils::error::{MenuError, Result};
use crate::utils::logger::RECORDS_TARGET;

/// Minimum fields for a complete line: course, title, description, price.
pub const EXPECTED_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupOptions {
    pub strict: bool,
}

/// Permissive grouping: short lines become records with missing fields.
pub fn group<S: AsRef<str>>(lines: &[S]) -> MenuGroups {
    let mut groups = MenuGroups::new();
    let mut incomplete = 0;
    for (index, line) in lines.iter().enumerate() {
        if let Some((course, item)) = parse_line(line.as_ref()) {
            if !item.is_complete() {
                incomplete += 1;
                tracing::debug!(
                    target: RECORDS_TARGET,
                    "Line {} has missing fields: {:?}",
                    index + 1,
                    line.as_ref()
                );
            }
            groups.push(course, item);
        }
    }
    if incomplete > 0 {
        tracing::warn!(
            target: RECORDS_TARGET,
            "{} menu lines have missing fields and render with placeholders",
            incomplete
        );
    }
    groups
}

pub fn group_with<S: AsRef<str>>(lines: &[S], options: &GroupOptions) -> Result<MenuGroups> {
    if !options.strict {
        return Ok(group(lines));
    }

    let mut groups = MenuGroups::new();
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let Some((course, item)) = parse_line(line) else {
            continue;
        };

        let fields = line.split(',').count();
        if fields < EXPECTED_FIELDS {
            return Err(MenuError::MalformedRecordError {
                line_number: index + 1,
                fields,
                reason: format!("expected at least {} comma-separated fields", EXPECTED_FIELDS),
            });
        }
        if course.as_str().is_empty() {
            return Err(MenuError::MalformedRecordError {
                line_number: index + 1,
                fields,
                reason: "course name is empty".to_string(),
            });
        }
        groups.push(course, item);
    }
    Ok(groups)
}

/// Blank lines carry no course and yield `None`.
fn parse_line(line: &str) -> Option<(CourseName, ItemRecord)> {
    if line.trim().is_empty() {
        return None;
    }

    // 不處理引號：欄位內的逗號會切壞該行
    let mut fields = line.split(',');
    let course = CourseName::normalize(fields.next().unwrap_or_default());
    Some((course, ItemRecord::from_fields(fields)))
}
