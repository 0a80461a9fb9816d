//! Read-only clothing catalog loaded from a delimited flat file.

mod parser;

use crate::recommend::domain::Item;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Error raised while reading the catalog source.
///
/// A missing file is not an error: it yields an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// The immutable collection of items available to the assembler.
/// Loaded once per process and never mutated afterwards.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Load a catalog from a CSV file. A missing file logs a warning
    /// and produces an empty catalog.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        match std::fs::File::open(path.as_ref()) {
            Ok(file) => Ok(Self::from_reader(file)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    "catalog file missing, starting with an empty catalog"
                );
                Ok(Self::default())
            }
            Err(err) => Err(CatalogError::Io(err)),
        }
    }

    /// Load a catalog from any reader. Duplicate item ids keep their
    /// first occurrence.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let parsed = parser::parse_items(reader);

        let mut items = Vec::with_capacity(parsed.len());
        let mut seen: HashSet<String> = HashSet::new();
        for item in parsed {
            if seen.insert(item.id.clone()) {
                items.push(item);
            } else {
                tracing::warn!(item_id = %item.id, "dropping duplicate catalog item id");
            }
        }

        Self { items }
    }

    pub fn get_all_items(&self) -> &[Item] {
        &self.items
    }

    pub fn get_item_by_id(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn get_items_by_category(&self, category: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct categories present, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .items
            .iter()
            .map(|item| item.category.clone())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "item_id,name,category,brand,color_family,price,style_tags,occasion_tags,seasonality,warmth,formality,image_path\n";

    fn catalog_from(rows: &str) -> Catalog {
        Catalog::from_reader(Cursor::new(format!("{HEADER}{rows}")))
    }

    #[test]
    fn parses_rows_with_pipe_delimited_tags() {
        let catalog = catalog_from(
            "t1,Oxford Shirt,Top,Crane,white,68.00,classic|tailored,work|date,all,2,4,images/t1.jpg\n",
        );

        let item = catalog.get_item_by_id("t1").expect("item present");
        assert_eq!(item.category, "top");
        assert_eq!(item.color_family, "white");
        assert_eq!(item.price, 68.0);
        assert_eq!(item.style_tags, vec!["classic", "tailored"]);
        assert_eq!(item.occasion_tags, vec!["work", "date"]);
        assert_eq!(item.warmth, 2);
        assert_eq!(item.formality, 4);
        assert_eq!(item.image_path.as_deref(), Some("images/t1.jpg"));
    }

    #[test]
    fn blank_columns_degrade_to_defaults() {
        let catalog = catalog_from("t2,Plain Tee,top,,,,,,,,,\n");

        let item = catalog.get_item_by_id("t2").expect("item present");
        assert_eq!(item.price, 0.0);
        assert!(item.style_tags.is_empty());
        assert!(item.occasion_tags.is_empty());
        assert_eq!(item.seasonality, "all");
        assert_eq!(item.warmth, 3);
        assert_eq!(item.formality, 3);
        assert_eq!(item.image_path, None);
    }

    #[test]
    fn non_numeric_ratings_degrade_to_defaults() {
        let catalog = catalog_from("t3,Knit Sweater,top,Loft,gray,not-a-price,cozy,casual,winter,nine,x,\n");

        let item = catalog.get_item_by_id("t3").expect("item present");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.warmth, 3);
        assert_eq!(item.formality, 3);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let catalog = catalog_from(
            "t4,First Tee,top,A,white,10,,,all,2,2,\nt4,Second Tee,top,B,black,20,,,all,2,2,\n",
        );

        assert_eq!(catalog.get_all_items().len(), 1);
        assert_eq!(
            catalog.get_item_by_id("t4").expect("item present").name,
            "First Tee"
        );
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let catalog = Catalog::from_path("./does-not-exist.csv").expect("missing file tolerated");
        assert!(catalog.get_all_items().is_empty());
    }

    #[test]
    fn category_queries_are_case_insensitive() {
        let catalog = catalog_from(
            "t5,Tee,top,A,white,10,,,all,2,2,\nb1,Chinos,bottom,A,beige,40,,,all,2,2,\n",
        );

        assert_eq!(catalog.get_items_by_category("TOP").len(), 1);
        assert_eq!(catalog.categories(), vec!["bottom", "top"]);
    }
}
