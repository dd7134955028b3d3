mod health;
mod state;
mod status_check;
mod url_check;

pub use health::HealthReport;
pub use state::AppState;
pub use status_check::{StatusCheck, StatusCheckCreate};
pub use url_check::{UrlCheckRequest, UrlStatus};
