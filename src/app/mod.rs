mod root;
mod state;

pub use root::DashboardApp;
pub use state::Page;
