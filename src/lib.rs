// Stripe Analytics - Core Library
// Exposes the data model, generator, and API router for the server and tests

pub mod api;
pub mod generator;
pub mod metrics;

// Re-export commonly used types
pub use generator::{generate, generate_at_with, mrr_growth, round2};
pub use metrics::{
    CustomerMetrics, DashboardSnapshot, MonthlyPoint, RevenueBreakdown, BASE_MRR, CHURNED_CUSTOMERS,
    CHURN_RATE, HISTORY_MONTHS, NEW_CUSTOMERS, ONE_TIME_REVENUE, TOTAL_CUSTOMERS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
