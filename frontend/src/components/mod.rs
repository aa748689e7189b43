pub mod availability_form;
pub mod availability_list;
pub mod profile_panel;
pub mod week_grid;
pub mod weekly_planner;

pub use profile_panel::ProfilePanel;
pub use weekly_planner::WeeklyPlanner;
