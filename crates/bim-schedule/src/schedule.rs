//! Schedule Catalogue
//!
//! Summaries of every 4D and 5D schedule listed on the dashboard.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{DomainError, DomainResult, Entity};

/// 5D schedules track cost and quantity, 4D schedules track time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleKind {
    #[serde(rename = "5D")]
    FiveD,
    #[serde(rename = "4D")]
    FourD,
}

impl ScheduleKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleKind::FiveD => "5D",
            ScheduleKind::FourD => "4D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Active,
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
}

impl ScheduleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Active => "Active",
            ScheduleStatus::Completed => "Completed",
            ScheduleStatus::InProgress => "In Progress",
            ScheduleStatus::Planning => "Planning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    pub project: String,
    pub status: ScheduleStatus,
    pub last_modified: NaiveDate,
    #[serde(default)]
    pub total_cost: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl ScheduleSummary {
    /// Total cost for 5D schedules, duration for 4D ones
    pub fn cost_or_duration(&self) -> &str {
        self.total_cost
            .as_deref()
            .or(self.duration.as_deref())
            .unwrap_or_default()
    }
}

impl Entity for ScheduleSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Dashboard tab filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScheduleFilter {
    #[default]
    All,
    FiveD,
    FourD,
}

impl ScheduleFilter {
    pub const ALL: [ScheduleFilter; 3] = [ScheduleFilter::All, ScheduleFilter::FiveD, ScheduleFilter::FourD];

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleFilter::All => "All Schedules",
            ScheduleFilter::FiveD => "5D Schedules",
            ScheduleFilter::FourD => "4D Schedules",
        }
    }

    pub fn matches(&self, schedule: &ScheduleSummary) -> bool {
        match self {
            ScheduleFilter::All => true,
            ScheduleFilter::FiveD => schedule.kind == ScheduleKind::FiveD,
            ScheduleFilter::FourD => schedule.kind == ScheduleKind::FourD,
        }
    }
}

/// Headline numbers on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogueStats {
    pub five_d: usize,
    pub four_d: usize,
    pub active: usize,
    pub projects: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleCatalogue {
    schedules: Vec<ScheduleSummary>,
}

impl ScheduleCatalogue {
    pub fn new(schedules: Vec<ScheduleSummary>) -> Self {
        Self { schedules }
    }

    pub fn all(&self) -> &[ScheduleSummary] {
        &self.schedules
    }

    pub fn filtered(&self, filter: ScheduleFilter) -> Vec<ScheduleSummary> {
        self.schedules.iter().filter(|s| filter.matches(s)).cloned().collect()
    }

    pub fn find(&self, id: &str) -> DomainResult<&ScheduleSummary> {
        self.schedules
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("schedule {id}")))
    }

    pub fn stats(&self) -> CatalogueStats {
        let projects: BTreeSet<&str> = self.schedules.iter().map(|s| s.project.as_str()).collect();
        CatalogueStats {
            five_d: self.schedules.iter().filter(|s| s.kind == ScheduleKind::FiveD).count(),
            four_d: self.schedules.iter().filter(|s| s.kind == ScheduleKind::FourD).count(),
            active: self.schedules.iter().filter(|s| s.status == ScheduleStatus::Active).count(),
            projects: projects.len(),
        }
    }
}
