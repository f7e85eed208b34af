//! Dashboard statistics.

pub mod dashboard;

pub use dashboard::{AdminDashboard, DashboardService, EmployeeDashboard};
