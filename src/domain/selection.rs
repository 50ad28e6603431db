use std::fmt::Display;

pub const SECTION_COUNT: u8 = 30;
const LABEL_PREFIX: &str = "Section ";

/// One of the thirty numbered sections of the recitation.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Selection(u8);

impl Selection {
    /// Returns `None` unless `number` is in `1..=30`
    pub fn new(number: u8) -> Option<Self> {
        match number {
            1..=SECTION_COUNT => Some(Selection(number - 1)),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = Selection> {
        (0..SECTION_COUNT).map(Selection)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        label
            .trim()
            .strip_prefix(LABEL_PREFIX)
            .filter(|n| n.len() == 2)
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(Selection::new)
    }

    pub fn label(&self) -> String {
        format!("{LABEL_PREFIX}{:02}", self.number())
    }

    pub fn number(&self) -> u8 {
        self.0 + 1
    }

    /// Zero-based position within the enumeration
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn next(&self) -> Self {
        Selection((self.0 + 1) % SECTION_COUNT)
    }

    pub fn prev(&self) -> Self {
        Selection((self.0 + SECTION_COUNT - 1) % SECTION_COUNT)
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{LABEL_PREFIX}{:02}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_the_whole_range() {
        let labels: Vec<String> = Selection::all().map(|s| s.label()).collect();

        assert_eq!(labels.len(), 30);
        assert_eq!(labels[0], "Section 01");
        assert_eq!(labels[29], "Section 30");
    }

    #[test]
    fn parses_only_known_labels() {
        assert_eq!(Selection::from_label("Section 07"), Selection::new(7));
        assert_eq!(Selection::from_label(" Section 30 "), Selection::new(30));

        assert_eq!(Selection::from_label("Section 31"), None);
        assert_eq!(Selection::from_label("Section 00"), None);
        assert_eq!(Selection::from_label("Section 7"), None);
        assert_eq!(Selection::from_label("Juz 01"), None);
    }

    #[test]
    fn navigation_wraps() {
        let first = Selection::default();
        assert_eq!(first.label(), "Section 01");
        assert_eq!(first.prev().label(), "Section 30");
        assert_eq!(first.prev().next(), first);
    }
}
