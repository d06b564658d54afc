//! BIM Schedule Domain
//!
//! Platform-independent model behind the schedule dashboard:
//! - bq: bill-of-quantities tree and quantity mapping
//! - tree: expand state and visible-row projection
//! - takeoff / formula: takeoff manager rows and the formula editor
//! - gantt / timeline: 4D layout and the timeline scrubber
//! - schedule / navigation: dashboard catalogue and view selection
//! - cost_detail: state of an open 5D page
//! - config / snapshot: embedded configuration and datasets

pub mod bq;
pub mod config;
pub mod cost_detail;
pub mod entity;
pub mod format;
pub mod formula;
pub mod gantt;
pub mod navigation;
pub mod quantity;
pub mod schedule;
pub mod snapshot;
pub mod takeoff;
pub mod timeline;
pub mod tree;

pub use bq::{BqItem, BqTree, MappingError};
pub use config::{ConfigError, DashboardConfig};
pub use cost_detail::CostDetailState;
pub use entity::{DomainError, DomainResult, Entity, TreeNode};
pub use formula::{FormulaBook, FormulaEditor};
pub use gantt::{BarLayout, MonthTick, ScheduleStats, Task, TaskStatus, TimelineWindow};
pub use navigation::View;
pub use quantity::{Element, QuantityDrag, QuantityItem, QuantityNode};
pub use schedule::{CatalogueStats, ScheduleCatalogue, ScheduleFilter, ScheduleKind, ScheduleStatus, ScheduleSummary};
pub use snapshot::{Snapshot, SnapshotError};
pub use takeoff::TakeoffRow;
pub use timeline::TimelineState;
pub use tree::{visible_rows, ExpandedSet, VisibleRow};
