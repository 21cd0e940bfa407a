pub mod chart_service;
pub mod dashboard_service;
pub mod history_service;
pub mod insight_service;
pub mod ping_service;
pub mod price_service;
pub mod series_service;
pub mod session_service;
