use std::collections::HashSet;
use tracing::{debug, warn};

use crate::pipeline::processing::normalize::TransformRegistry;
use crate::types::RecordSet;

/// Prunes, renames and reorders columns into the stable output schema.
#[derive(Debug, Clone)]
pub struct SchemaFinalizer {
    drop: Vec<String>,
    renames: Vec<(String, String)>,
    column_order: Vec<String>,
}

impl SchemaFinalizer {
    pub fn new(registry: &TransformRegistry, column_order: &[String]) -> Self {
        let mut drop: Vec<String> = registry.dropped_columns().into_iter().map(str::to_string).collect();
        drop.sort();
        let mut renames: Vec<(String, String)> = registry
            .renames()
            .into_iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        renames.sort();

        Self {
            drop,
            renames,
            column_order: column_order.to_vec(),
        }
    }

    /// Final column order for a table whose columns are `present`.
    pub fn ordered_columns(&self, present: &[String]) -> Vec<String> {
        let present_set: HashSet<&str> = present.iter().map(String::as_str).collect();
        let mut ordered: Vec<String> = self
            .column_order
            .iter()
            .filter(|c| present_set.contains(c.as_str()))
            .cloned()
            .collect();
        let listed: HashSet<&str> = self.column_order.iter().map(String::as_str).collect();
        ordered.extend(present.iter().filter(|c| !listed.contains(c.as_str())).cloned());
        ordered
    }

    pub fn finalize(&self, table: &mut RecordSet) {
        for column in &self.drop {
            if table.remove_column(column) {
                debug!("Dropped column '{}'", column);
            }
        }

        for (from, to) in &self.renames {
            if !table.has_column(from) {
                continue;
            }
            if table.has_column(to) {
                warn!(
                    "Column '{}' already exists; dropping '{}' instead of renaming it",
                    to, from
                );
                table.remove_column(from);
            } else {
                table.rename_column(from, to);
            }
        }

        let order = self.ordered_columns(table.columns());
        table.set_column_order(order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_COLUMN_ORDER;
    use crate::types::{CellValue, RawRecord};

    fn finalizer() -> SchemaFinalizer {
        let order: Vec<String> = DEFAULT_COLUMN_ORDER.iter().map(|c| c.to_string()).collect();
        SchemaFinalizer::new(&TransformRegistry::new(), &order)
    }

    #[test]
    fn test_drop_rename_and_order() {
        let record = RawRecord::new("https://www.fbi.gov/wanted/cyber/x")
            .with_description("Reward", "None")
            .with_description("Height", "6'0\"")
            .with_description("Eyes", "Blue")
            .with_description("Sex", "Male");
        let mut table = RecordSet::from_raw(&[record]);
        finalizer().finalize(&mut table);

        let columns: Vec<&str> = table.columns().iter().map(String::as_str).collect();
        assert_eq!(
            columns,
            vec![
                "source_url",
                "name",
                "alias_text",
                "category",
                "sex",
                "eye_color",
                "field_office",
                "Reward"
            ]
        );
        assert_eq!(table.get(0, "eye_color"), Some(&CellValue::text("Blue")));
    }

    #[test]
    fn test_rename_onto_existing_column_drops_source() {
        let mut table = RecordSet::from_raw(&[RawRecord::new("u").with_description("Sex", "F")]);
        table.ensure_column("sex");
        table.set(0, "sex", Some(CellValue::text("Female")));
        finalizer().finalize(&mut table);

        assert!(!table.has_column("Sex"));
        assert_eq!(table.get(0, "sex"), Some(&CellValue::text("Female")));
    }

    #[test]
    fn test_order_is_independent_of_input_order() {
        let f = finalizer();
        let a = vec!["Zeta".to_string(), "height_cm".to_string(), "name".to_string()];
        let b = vec!["name".to_string(), "Zeta".to_string(), "height_cm".to_string()];
        assert_eq!(f.ordered_columns(&a), f.ordered_columns(&b));
        assert_eq!(f.ordered_columns(&a), vec!["name", "height_cm", "Zeta"]);
    }
}
