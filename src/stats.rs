use serde::{Serialize, Serializer};

use crate::types::{Category, Format};

/// Counts over the results of a batch detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub recognized: usize,
    pub unknown: usize,
    /// Inputs that could not be read. They are also counted as unknown.
    pub unreadable: usize,
    #[serde(rename = "categories", serialize_with = "serialize_categories")]
    by_category: [usize; Category::COUNT],
}

impl BatchSummary {
    pub fn from_formats<I>(formats: I) -> Self
    where
        I: IntoIterator<Item = Format>,
    {
        let mut summary = Self::default();
        for format in formats {
            summary.record(format);
        }
        summary
    }

    pub fn record(&mut self, format: Format) {
        self.total += 1;
        if format.is_known() {
            self.recognized += 1;
        } else {
            self.unknown += 1;
        }
        self.by_category[format.category() as usize] += 1;
    }

    pub fn record_unreadable(&mut self) {
        self.record(Format::Unknown);
        self.unreadable += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category[category as usize]
    }

    /// Non-empty categories in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
            .filter(|(_, count)| *count > 0)
    }
}

fn serialize_categories<S>(
    counts: &[usize; Category::COUNT],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        Category::ALL
            .iter()
            .zip(counts)
            .filter(|(_, count)| **count > 0)
            .map(|(category, count)| (category.name(), *count)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_category() {
        let summary = BatchSummary::from_formats([
            Format::Png,
            Format::Jpeg,
            Format::Pdf,
            Format::Unknown,
        ]);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.recognized, 3);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.count(Category::Image), 2);
        assert_eq!(summary.count(Category::Document), 1);
        assert_eq!(summary.count(Category::Media), 0);
        assert_eq!(summary.categories().count(), 3);
    }

    #[test]
    fn unreadable_counts_as_unknown() {
        let mut summary = BatchSummary::default();
        summary.record_unreadable();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.unreadable, 1);
    }

    #[test]
    fn serializes_non_empty_categories() {
        let summary = BatchSummary::from_formats([Format::Zip, Format::Elf]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["categories"]["archive"], 1);
        assert_eq!(json["categories"]["executable"], 1);
        assert!(json["categories"].get("image").is_none());
    }
}
