//! UI Components
//!
//! Pages and panels of the dashboard.

mod page_header;
mod home_page;
mod takeoff_manager;
mod cost_planner;
mod formula_editor;
mod cost_detail_page;
mod gantt_chart;
mod time_detail_page;

pub use page_header::PageHeader;
pub use home_page::HomePage;
pub use takeoff_manager::TakeoffManager;
pub use cost_planner::CostPlanner;
pub use formula_editor::FormulaDialog;
pub use cost_detail_page::CostDetailPage;
pub use gantt_chart::GanttChart;
pub use time_detail_page::TimeDetailPage;
