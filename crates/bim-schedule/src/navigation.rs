//! View selection between the dashboard and the schedule detail pages.

use crate::schedule::ScheduleKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    /// 5D cost/quantity detail
    CostDetail { schedule_id: String },
    /// 4D time detail
    TimeDetail { schedule_id: String },
}

impl View {
    pub fn for_schedule(schedule_id: impl Into<String>, kind: ScheduleKind) -> Self {
        let schedule_id = schedule_id.into();
        match kind {
            ScheduleKind::FiveD => View::CostDetail { schedule_id },
            ScheduleKind::FourD => View::TimeDetail { schedule_id },
        }
    }

    /// Detail pages only ever go back to the dashboard
    pub fn back(&self) -> Self {
        View::Home
    }

    pub fn schedule_id(&self) -> Option<&str> {
        match self {
            View::Home => None,
            View::CostDetail { schedule_id } | View::TimeDetail { schedule_id } => Some(schedule_id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_back() {
        let view = View::for_schedule("5D-001", ScheduleKind::FiveD);
        assert_eq!(view, View::CostDetail { schedule_id: "5D-001".into() });
        assert_eq!(view.schedule_id(), Some("5D-001"));
        assert_eq!(view.back(), View::Home);

        let view = View::for_schedule("4D-002", ScheduleKind::FourD);
        assert!(matches!(view, View::TimeDetail { .. }));
        assert_eq!(View::default().schedule_id(), None);
    }
}
