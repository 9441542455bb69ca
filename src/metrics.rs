// Stripe Analytics - Dashboard Metrics Model
// Plain value records, recreated fresh for every request

use serde::{Deserialize, Serialize};

// ============================================================================
// BUSINESS CONSTANTS
// ============================================================================

/// Baseline monthly recurring revenue the history is sampled around
pub const BASE_MRR: f64 = 45_000.0;

/// Number of months of MRR history in every snapshot
pub const HISTORY_MONTHS: usize = 12;

/// Fixed one-time revenue reported in every breakdown
pub const ONE_TIME_REVENUE: f64 = 12_450.0;

/// Fixed customer metrics (not derived from the MRR series)
pub const TOTAL_CUSTOMERS: u32 = 1_247;
pub const NEW_CUSTOMERS: u32 = 89;
pub const CHURNED_CUSTOMERS: u32 = 23;
pub const CHURN_RATE: f64 = 1.8;

// ============================================================================
// DATA MODEL
// ============================================================================

/// One month of MRR history
///
/// `month` is a "YYYY-MM" label; points are ordered oldest to newest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub mrr: f64,
    pub growth_rate: f64,
}

/// Customer counts and churn for the current period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerMetrics {
    pub total_customers: u32,
    pub new_customers: u32,
    pub churned_customers: u32,
    pub churn_rate: f64,
}

impl CustomerMetrics {
    /// Current-period metrics (fixed constants)
    pub fn current() -> Self {
        CustomerMetrics {
            total_customers: TOTAL_CUSTOMERS,
            new_customers: NEW_CUSTOMERS,
            churned_customers: CHURNED_CUSTOMERS,
            churn_rate: CHURN_RATE,
        }
    }
}

/// Revenue split by source
///
/// Invariant: `total_revenue = subscription_revenue + one_time_revenue`,
/// exactly. Construct via `from_subscription` to keep it that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub subscription_revenue: f64,
    pub one_time_revenue: f64,
    pub total_revenue: f64,
}

impl RevenueBreakdown {
    /// Breakdown for a given subscription revenue plus the fixed
    /// one-time revenue
    pub fn from_subscription(subscription_revenue: f64) -> Self {
        RevenueBreakdown {
            subscription_revenue,
            one_time_revenue: ONE_TIME_REVENUE,
            total_revenue: subscription_revenue + ONE_TIME_REVENUE,
        }
    }
}

/// Complete dashboard payload for a single request
///
/// `current_mrr` equals the `mrr` of the last history point, and
/// `revenue_breakdown.subscription_revenue` equals `current_mrr`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub current_mrr: f64,
    pub mrr_growth: f64,
    pub mrr_history: Vec<MonthlyPoint>,
    pub customer_metrics: CustomerMetrics,
    pub revenue_breakdown: RevenueBreakdown,
}

// ============================================================================
// TESTS
// ============================================================================
