mod dashboard;

pub use dashboard::ClientDashboard;
