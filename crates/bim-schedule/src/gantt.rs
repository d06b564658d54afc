//! Gantt Layout
//!
//! Places tasks on a fixed display window as fractions of the timeline
//! width. Bars are independent: overlapping tasks simply overlap.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delayed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Completed,
        TaskStatus::InProgress,
        TaskStatus::NotStarted,
        TaskStatus::Delayed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Delayed => "Delayed",
        }
    }
}

/// A scheduled construction activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Length in days
    pub duration: u32,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub status: TaskStatus,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Horizontal placement of one bar, as fractions of the timeline width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub offset: f64,
    pub width: f64,
    /// Share of the bar filled as done
    pub progress: f64,
}

/// A month column in the timeline header
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTick {
    pub label: String,
    pub offset: f64,
    pub width: f64,
}

/// Fixed display window of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimelineWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::InvalidInput(format!("timeline ends {end} before it starts {start}")));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn total_days(&self) -> f64 {
        (self.end - self.start).num_days() as f64
    }

    /// `(date - start) / (end - start)`; not clamped
    pub fn offset_of(&self, date: NaiveDate) -> f64 {
        (date - self.start).num_days() as f64 / self.total_days()
    }

    pub fn bar(&self, task: &Task) -> BarLayout {
        BarLayout {
            offset: self.offset_of(task.start_date),
            width: f64::from(task.duration) / self.total_days(),
            progress: f64::from(task.progress.min(100)) / 100.0,
        }
    }

    /// Date under a timeline fraction, clamped to the window
    pub fn date_at(&self, fraction: f64) -> NaiveDate {
        let days = (fraction.clamp(0.0, 1.0) * self.total_days()).round() as u64;
        self.start + chrono::Days::new(days)
    }

    /// One tick per calendar month touching the window
    pub fn month_ticks(&self) -> Vec<MonthTick> {
        let mut ticks = Vec::new();
        let mut month = NaiveDate::from_ymd_opt(self.start.year(), self.start.month(), 1);
        while let Some(first) = month {
            if first > self.end {
                break;
            }
            let next = first.checked_add_months(Months::new(1));
            let from = first.max(self.start);
            let to = next.map_or(self.end, |n| n.min(self.end));
            ticks.push(MonthTick {
                label: first.format("%b %Y").to_string(),
                offset: self.offset_of(from),
                width: (to - from).num_days() as f64 / self.total_days(),
            });
            month = next;
        }
        ticks
    }
}

/// Headline numbers shown above the chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Rounded mean of task progress
    pub overall_progress: u32,
}

impl ScheduleStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count = |status| tasks.iter().filter(|t| t.status == status).count();
        let overall_progress = if tasks.is_empty() {
            0
        } else {
            let sum: u32 = tasks.iter().map(|t| u32::from(t.progress)).sum();
            (f64::from(sum) / tasks.len() as f64).round() as u32
        };
        Self {
            total: tasks.len(),
            completed: count(TaskStatus::Completed),
            in_progress: count(TaskStatus::InProgress),
            overall_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> TimelineWindow {
        TimelineWindow::new(date(2025, 1, 1), date(2025, 6, 30)).unwrap()
    }

    fn task(start: NaiveDate, duration: u32, progress: u8, status: TaskStatus) -> Task {
        Task {
            id: "T".into(),
            name: "task".into(),
            start_date: start,
            end_date: start,
            duration,
            progress,
            status,
            dependencies: vec![],
        }
    }

    #[test]
    fn test_window_spans_180_days() {
        assert_eq!(window().total_days(), 180.0);
        assert!(TimelineWindow::new(date(2025, 2, 1), date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_bar_offset_and_width() {
        let bar = window().bar(&task(date(2025, 1, 1), 15, 100, TaskStatus::Completed));
        assert_eq!(bar.offset, 0.0);
        assert_eq!(bar.width, 15.0 / 180.0);
        assert_eq!(bar.progress, 1.0);

        let bar = window().bar(&task(date(2025, 1, 16), 21, 50, TaskStatus::InProgress));
        assert_eq!(bar.offset, 15.0 / 180.0);
        assert_eq!(bar.progress, 0.5);
    }

    #[test]
    fn test_month_ticks_cover_window() {
        let ticks = window().month_ticks();
        let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 2025", "Feb 2025", "Mar 2025", "Apr 2025", "May 2025", "Jun 2025"]);
        assert_eq!(ticks[0].offset, 0.0);
        assert_eq!(ticks[1].offset, 31.0 / 180.0);
        let covered: f64 = ticks.iter().map(|t| t.width).sum();
        assert!((covered - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_date_at_clamps() {
        assert_eq!(window().date_at(0.0), date(2025, 1, 1));
        assert_eq!(window().date_at(1.5), date(2025, 6, 30));
        assert_eq!(window().date_at(0.5), date(2025, 4, 1));
    }

    #[test]
    fn test_stats_round_mean_progress() {
        let tasks = vec![
            task(date(2025, 1, 1), 1, 100, TaskStatus::Completed),
            task(date(2025, 1, 1), 1, 85, TaskStatus::InProgress),
            task(date(2025, 1, 1), 1, 0, TaskStatus::NotStarted),
        ];
        let stats = ScheduleStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.overall_progress, 62);
        assert_eq!(ScheduleStats::from_tasks(&[]).overall_progress, 0);
    }
}
