//! Snapshot Datasets
//!
//! The dashboard has no backend: every dataset is a JSON document bundled
//! into the binary and parsed once at startup.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::bq::BqTree;
use crate::entity::DomainError;
use crate::gantt::Task;
use crate::quantity::{Element, QuantityNode};
use crate::schedule::ScheduleCatalogue;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to parse {dataset} dataset: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {dataset} dataset: {source}")]
    Invalid {
        dataset: &'static str,
        #[source]
        source: DomainError,
    },
}

/// Raw JSON text of each dataset
#[derive(Debug, Clone, Copy)]
pub struct SnapshotSources<'a> {
    pub schedules: &'a str,
    pub elements: &'a str,
    pub bill_of_quantities: &'a str,
    pub tasks: &'a str,
    pub formula_quantities: &'a str,
}

/// Datasets compiled into the application
pub const BUNDLED: SnapshotSources<'static> = SnapshotSources {
    schedules: include_str!("../data/schedules.json"),
    elements: include_str!("../data/takeoff.json"),
    bill_of_quantities: include_str!("../data/bill_of_quantities.json"),
    tasks: include_str!("../data/tasks.json"),
    formula_quantities: include_str!("../data/formula_quantities.json"),
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub schedules: ScheduleCatalogue,
    pub elements: Vec<Element>,
    pub bill_of_quantities: BqTree,
    pub tasks: Vec<Task>,
    pub formula_quantities: Vec<Arc<QuantityNode>>,
}

fn parse<T: DeserializeOwned>(dataset: &'static str, json: &str) -> Result<T, SnapshotError> {
    serde_json::from_str(json).map_err(|source| SnapshotError::Parse { dataset, source })
}

impl Snapshot {
    pub fn bundled() -> Result<Self, SnapshotError> {
        Self::from_sources(&BUNDLED)
    }

    pub fn from_sources(sources: &SnapshotSources<'_>) -> Result<Self, SnapshotError> {
        let bill_of_quantities: BqTree = parse("bill of quantities", sources.bill_of_quantities)?;
        bill_of_quantities
            .validate()
            .map_err(|source| SnapshotError::Invalid {
                dataset: "bill of quantities",
                source,
            })?;

        let snapshot = Self {
            schedules: parse("schedules", sources.schedules)?,
            elements: parse("takeoff elements", sources.elements)?,
            bill_of_quantities,
            tasks: parse("tasks", sources.tasks)?,
            formula_quantities: parse("formula quantities", sources.formula_quantities)?,
        };
        info!(
            schedules = snapshot.schedules.all().len(),
            elements = snapshot.elements.len(),
            bq_items = snapshot.bill_of_quantities.len(),
            tasks = snapshot.tasks.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_snapshot_parses() {
        let snapshot = Snapshot::bundled().unwrap();
        assert_eq!(snapshot.schedules.all().len(), 8);
        assert_eq!(snapshot.elements.len(), 3);
        assert_eq!(snapshot.bill_of_quantities.len(), 13);
        assert_eq!(snapshot.tasks.len(), 8);
        assert_eq!(snapshot.formula_quantities.len(), 1);
    }

    #[test]
    fn test_parse_error_names_dataset() {
        let sources = SnapshotSources {
            tasks: "[{]",
            ..BUNDLED
        };
        let err = Snapshot::from_sources(&sources).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { dataset: "tasks", .. }));
    }

    #[test]
    fn test_invalid_levels_are_rejected() {
        let sources = SnapshotSources {
            bill_of_quantities: r#"[{ "id": "P", "code": "P", "description": "p", "level": 3,
                "children": [{ "id": "C", "code": "C", "description": "c", "level": 5 }] }]"#,
            ..BUNDLED
        };
        let err = Snapshot::from_sources(&sources).unwrap_err();
        assert!(matches!(err, SnapshotError::Invalid { .. }));
        assert!(err.to_string().contains("bill of quantities"));
    }
}
