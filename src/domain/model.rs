use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// 課程名稱：去除前後空白後，首字母轉大寫，其餘保持不變
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseName(String);

impl CourseName {
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One menu item, fields already trimmed. Short lines leave trailing fields as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub extra_fields: usize,
}

impl ItemRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            price: Some(price.into()),
            extra_fields: 0,
        }
    }

    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter().map(|field| field.trim().to_string());
        let title = fields.next();
        let description = fields.next();
        let price = fields.next();
        Self {
            title,
            description,
            price,
            extra_fields: fields.count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.description.is_some() && self.price.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuGroups {
    courses: HashMap<CourseName, Vec<ItemRecord>>,
}

impl MenuGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, course: CourseName, item: ItemRecord) {
        self.courses.entry(course).or_default().push(item);
    }

    pub fn items(&self, course: &CourseName) -> Option<&[ItemRecord]> {
        self.courses.get(course).map(Vec::as_slice)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn item_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in rendering order, see [`collate`].
    pub fn sorted_courses(&self) -> Vec<(&CourseName, &[ItemRecord])> {
        let mut courses: Vec<_> = self
            .courses
            .iter()
            .map(|(name, items)| (name, items.as_slice()))
            .collect();
        let mut collator = menu_collator();
        courses.sort_by(|(a, _), (b, _)| collator.collate(a.as_str(), b.as_str()));
        courses
    }
}

/// CLDR root collation, punctuation non-ignorable, ties broken by code point.
fn menu_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Same ordering as `String.prototype.localeCompare` in the root locale.
pub fn collate(a: &str, b: &str) -> Ordering {
    menu_collator().collate(a, b)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritePayload {
    /// Written verbatim.
    Raw(String),
    /// Rendered by the writer before writing.
    Structured(MenuGroups),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_name_normalization() {
        assert_eq!(CourseName::normalize("appetizer").as_str(), "Appetizer");
        assert_eq!(CourseName::normalize("  dessert ").as_str(), "Dessert");
        assert_eq!(CourseName::normalize("main course").as_str(), "Main course");
        assert_eq!(CourseName::normalize("éclair").as_str(), "Éclair");
        assert_eq!(CourseName::normalize("   ").as_str(), "");
    }

    #[test]
    fn test_course_name_normalization_is_idempotent() {
        for raw in ["appetizer", " Dessert", "sIDES ", "ßoup", ""] {
            let once = CourseName::normalize(raw);
            let twice = CourseName::normalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_item_record_from_fields() {
        let item = ItemRecord::from_fields(["Spring Roll ", " Crispy veggie roll", "5.99"]);
        assert_eq!(item, ItemRecord::new("Spring Roll", "Crispy veggie roll", "5.99"));
        assert!(item.is_complete());

        let short = ItemRecord::from_fields(["Soup"]);
        assert_eq!(short.title.as_deref(), Some("Soup"));
        assert_eq!(short.description, None);
        assert_eq!(short.price, None);
        assert!(!short.is_complete());

        let long = ItemRecord::from_fields(["Tea", "Green", "2.00", "hot", "large"]);
        assert!(long.is_complete());
        assert_eq!(long.extra_fields, 2);
    }

    #[test]
    fn test_collate_order() {
        let mut names = vec!["dessert", "Appetizer", "Main", "appetizer", "Bread"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["appetizer", "Appetizer", "Bread", "dessert", "Main"]);
    }

    #[test]
    fn test_sorted_courses_accents_and_punctuation() {
        let mut groups = MenuGroups::new();
        for raw in ["fruit", "éclair", "zebra", "eggs", "_Special", "1st"] {
            groups.push(CourseName::normalize(raw), ItemRecord::new("Item", "Desc", "1.00"));
        }

        let names: Vec<&str> = groups
            .sorted_courses()
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["_Special", "1st", "Éclair", "Eggs", "Fruit", "Zebra"]);
    }

    #[test]
    fn test_sorted_courses() {
        let mut groups = MenuGroups::new();
        groups.push(CourseName::normalize("soup"), ItemRecord::new("Miso", "Tofu", "3.00"));
        groups.push(CourseName::normalize("bread"), ItemRecord::new("Naan", "Garlic", "2.50"));
        groups.push(CourseName::normalize("soup"), ItemRecord::new("Pho", "Beef", "9.00"));

        let sorted = groups.sorted_courses();
        let names: Vec<&str> = sorted.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Soup"]);
        assert_eq!(sorted[1].1.len(), 2);
        assert_eq!(sorted[1].1[0].title.as_deref(), Some("Miso"));
        assert_eq!(groups.item_count(), 3);
        assert_eq!(groups.course_count(), 2);
    }
}
