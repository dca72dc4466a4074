use catalog::{CatalogRecord, normalize::GENERATED_ID_PREFIX};

#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub foods: usize,
    pub generated_ids: usize,
    pub without_keywords: usize,
}

pub fn summarize(catalog: &[CatalogRecord]) -> Summary {
    Summary {
        foods: catalog.len(),
        generated_ids: catalog
            .iter()
            .filter(|record| record.id.starts_with(GENERATED_ID_PREFIX))
            .count(),
        without_keywords: catalog
            .iter()
            .filter(|record| record.keywords.trim().is_empty())
            .count(),
    }
}
