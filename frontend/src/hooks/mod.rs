pub mod use_planner;
