// Stripe Analytics - Synthetic Data Generator
// Produces one internally consistent dashboard snapshot per call

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::metrics::{
    CustomerMetrics, DashboardSnapshot, MonthlyPoint, RevenueBreakdown, BASE_MRR, HISTORY_MONTHS,
};

// ============================================================================
// GENERATOR
// ============================================================================

/// Generate a fresh dashboard snapshot from the system clock and an
/// unseeded RNG. Never fails.
pub fn generate() -> DashboardSnapshot {
    generate_at_with(Utc::now(), &mut rand::thread_rng())
}

/// Generate a snapshot for an explicit clock and random source.
///
/// Month anchors are `now - 30*i days` formatted "YYYY-MM" — a calendar
/// approximation, not exact month arithmetic. The oldest point always
/// reports a growth rate of 0.
pub fn generate_at_with<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> DashboardSnapshot {
    let mut mrr_history = Vec::with_capacity(HISTORY_MONTHS);

    for i in (1..=HISTORY_MONTHS).rev() {
        let month_date = now - Duration::days(30 * i as i64);
        let month = month_date.format("%Y-%m").to_string();

        // Drift upward toward the present, with per-month noise
        let growth_factor =
            1.0 + rng.gen_range(0.02..0.08) * (HISTORY_MONTHS - i) as f64 / HISTORY_MONTHS as f64;
        let mrr = round2(BASE_MRR * growth_factor + rng.gen_range(-2_000.0..3_000.0));
        let growth_rate = if i < HISTORY_MONTHS {
            round2(rng.gen_range(-5.0..15.0))
        } else {
            0.0
        };

        mrr_history.push(MonthlyPoint {
            month,
            mrr,
            growth_rate,
        });
    }

    let current_mrr = mrr_history[mrr_history.len() - 1].mrr;
    let previous_mrr = if mrr_history.len() > 1 {
        mrr_history[mrr_history.len() - 2].mrr
    } else {
        current_mrr
    };

    DashboardSnapshot {
        current_mrr,
        mrr_growth: mrr_growth(current_mrr, previous_mrr),
        mrr_history,
        customer_metrics: CustomerMetrics::current(),
        revenue_breakdown: RevenueBreakdown::from_subscription(current_mrr),
    }
}

/// Month-over-month growth as a percentage, rounded to 2 decimals.
///
/// Policy: a zero `previous` reports 0% growth rather than dividing by zero.
pub fn mrr_growth(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    round2((current - previous) / previous * 100.0)
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snapshot(seed: u64) -> DashboardSnapshot {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        generate_at_with(now, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_history_has_twelve_points_in_order() {
        let snap = snapshot(7);

        assert_eq!(snap.mrr_history.len(), 12);

        // "YYYY-MM" labels compare chronologically as strings. Adjacent
        // anchors 30 days apart can share a month label, so non-decreasing.
        for pair in snap.mrr_history.windows(2) {
            assert!(pair[0].month <= pair[1].month);
        }
    }

    #[test]
    fn test_month_labels_follow_the_clock() {
        let snap = snapshot(7);

        // 2025-06-15 minus 360 days is 2024-06-20; minus 30 days is 2025-05-16
        assert_eq!(snap.mrr_history[0].month, "2024-06");
        assert_eq!(snap.mrr_history[11].month, "2025-05");
        for point in &snap.mrr_history {
            assert_eq!(point.month.len(), 7);
            assert_eq!(&point.month[4..5], "-");
        }
    }

    #[test]
    fn test_oldest_point_growth_is_zero() {
        for seed in 0..20 {
            let snap = snapshot(seed);
            assert_eq!(snap.mrr_history[0].growth_rate, 0.0);
        }
    }

    #[test]
    fn test_snapshot_internal_consistency() {
        for seed in 0..20 {
            let snap = snapshot(seed);

            assert_eq!(snap.current_mrr, snap.mrr_history[11].mrr);
            assert_eq!(snap.revenue_breakdown.subscription_revenue, snap.current_mrr);
            assert_eq!(
                snap.revenue_breakdown.total_revenue,
                snap.revenue_breakdown.subscription_revenue
                    + snap.revenue_breakdown.one_time_revenue
            );
        }
    }

    #[test]
    fn test_mrr_values_stay_in_sampling_bounds() {
        // base 45000, growth factor at most 1.08, noise in [-2000, 3000)
        for seed in 0..50 {
            let snap = snapshot(seed);
            for point in &snap.mrr_history {
                assert!(
                    point.mrr > 30_000.0 && point.mrr < 70_000.0,
                    "mrr {} out of bounds",
                    point.mrr
                );
            }
        }
    }

    #[test]
    fn test_growth_rates_stay_in_sampling_bounds() {
        for seed in 0..50 {
            let snap = snapshot(seed);
            for point in &snap.mrr_history[1..] {
                assert!(point.growth_rate >= -5.0 && point.growth_rate <= 15.0);
            }
        }
    }

    #[test]
    fn test_customer_metrics_fixed_in_every_snapshot() {
        for seed in 0..20 {
            let snap = snapshot(seed);
            assert_eq!(snap.customer_metrics.total_customers, 1_247);
            assert_eq!(snap.customer_metrics.new_customers, 89);
            assert_eq!(snap.customer_metrics.churned_customers, 23);
            assert_eq!(snap.customer_metrics.churn_rate, 1.8);
        }
    }

    #[test]
    fn test_mrr_growth_formula() {
        assert_eq!(mrr_growth(110.0, 100.0), 10.0);
        assert_eq!(mrr_growth(95.0, 100.0), -5.0);
        assert_eq!(mrr_growth(100.0, 100.0), 0.0);
        // third decimal rounds away
        assert_eq!(mrr_growth(100.125, 100.0), 0.13);
    }

    #[test]
    fn test_mrr_growth_zero_previous_reports_zero() {
        assert_eq!(mrr_growth(45_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.0); // binary 1.005 sits just below the half
        assert_eq!(round2(45_123.456), 45_123.46);
        assert_eq!(round2(-1.235), -1.24);
        assert_eq!(round2(2.0), 2.0);
    }
}
