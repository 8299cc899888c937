use super::*;

// ==========================================================================
// Range windowing
// ==========================================================================

#[test]
fn each_range_keeps_its_month_count() {
    assert_eq!(tail_slice(&DEPLOY_SERIES, TimeRange::OneMonth).len(), 1);
    assert_eq!(tail_slice(&DEPLOY_SERIES, TimeRange::ThreeMonths).len(), 3);
    assert_eq!(tail_slice(&DEPLOY_SERIES, TimeRange::SixMonths).len(), 6);
    assert_eq!(tail_slice(&DEPLOY_SERIES, TimeRange::OneYear).len(), 12);
}

#[test]
fn windows_keep_the_most_recent_months() {
    let window = tail_slice(&DEPLOY_SERIES, TimeRange::SixMonths);
    assert_eq!(window[0].month, "Jul");
    assert_eq!(window[window.len() - 1].month, "Dec");

    let window = tail_slice(&USER_SERIES, TimeRange::OneMonth);
    assert_eq!(window[0].month, "Dec");
}

#[test]
fn short_series_saturate_instead_of_panicking() {
    let short = &DEPLOY_SERIES[..2];
    assert_eq!(tail_slice(short, TimeRange::OneYear).len(), 2);
    assert_eq!(tail_slice(short, TimeRange::SixMonths).len(), 2);
}

// ==========================================================================
// KPI derivations
// ==========================================================================

#[test]
fn deploy_totals_follow_the_window() {
    assert_eq!(total_deploys(tail_slice(&DEPLOY_SERIES, TimeRange::OneYear)), 990);
    assert_eq!(total_deploys(tail_slice(&DEPLOY_SERIES, TimeRange::SixMonths)), 645);
    assert_eq!(total_deploys(&DEPLOY_SERIES[..6]), 345);
    assert_eq!(total_deploys(&[]), 0);
}

#[test]
fn growth_is_percent_change_first_to_last() {
    assert!((growth_percent(200, 400) - 100.0).abs() < 1e-9);
    assert!((growth_percent(30, 90) - 200.0).abs() < 1e-9);
    assert!((growth_percent(400, 300) - (-25.0)).abs() < 1e-9);
    assert!((growth_percent(50, 50)).abs() < 1e-9);
}

#[test]
fn growth_from_a_zero_baseline_reads_flat() {
    assert!(growth_percent(0, 120).abs() < f64::EPSILON);
}

#[test]
fn success_rate_averages_the_monthly_ratios() {
    // First half of the year: 28/30, 41/45, 57/60, 45/50, 65/70, 86/90.
    let rate = average_success_rate(&DEPLOY_SERIES[..6]);
    assert!((rate - 92.976).abs() < 1e-3);
}

#[test]
fn success_rate_over_nothing_is_zero() {
    assert!(average_success_rate(&[]).abs() < f64::EPSILON);
    let idle = [MonthlyDeploys { month: "Jan", projects: 0, successful: 0, failed: 0 }];
    assert!(average_success_rate(&idle).abs() < f64::EPSILON);
}

// ==========================================================================
// Shares, targets, and bars
// ==========================================================================

#[test]
fn resource_shares_split_the_total() {
    let total: f64 = RESOURCES.iter().map(|slice| slice.value).sum();
    assert!((share_percent(RESOURCES[0].value, total) - 40.0).abs() < 1e-9);
    assert!((share_percent(RESOURCES[1].value, total) - 30.0).abs() < 1e-9);
    assert!(share_percent(100.0, 0.0).abs() < f64::EPSILON);
}

#[test]
fn lower_is_better_metrics_hit_their_target_from_below() {
    let latency =
        PerfMetric { name: "Latency", value: 85.0, target: 90.0, unit: "ms", lower_is_better: true };
    assert!(target_met(&latency));

    let slow = PerfMetric { value: 95.0, ..latency };
    assert!(!target_met(&slow));
}

#[test]
fn higher_is_better_metrics_hit_their_target_from_above() {
    let uptime =
        PerfMetric { name: "Uptime", value: 99.95, target: 99.9, unit: "%", lower_is_better: false };
    assert!(target_met(&uptime));

    let degraded = PerfMetric { value: 99.5, ..uptime };
    assert!(!target_met(&degraded));
}

#[test]
fn every_shipping_metric_is_currently_on_target() {
    for metric in &PERF_METRICS {
        assert!(target_met(metric), "{} should be on target", metric.name);
    }
}

#[test]
fn bar_fill_clamps_to_the_track() {
    assert!((fill_percent(50.0, 100.0) - 50.0).abs() < 1e-9);
    assert!((fill_percent(200.0, 100.0) - 100.0).abs() < 1e-9);
    assert!((fill_percent(-5.0, 100.0)).abs() < f64::EPSILON);
    assert!(fill_percent(10.0, 0.0).abs() < f64::EPSILON);
}

// ==========================================================================
// Formatting and sample data
// ==========================================================================

#[test]
fn thousands_grouping_inserts_commas_every_three_digits() {
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_500), "1,500");
    assert_eq!(group_thousands(12_500), "12,500");
    assert_eq!(group_thousands(1_000_000), "1,000,000");
    assert_eq!(group_thousands(0), "0");
}

#[test]
fn monthly_breakdowns_add_up() {
    for month in &DEPLOY_SERIES {
        assert_eq!(month.successful + month.failed, month.projects, "{}", month.month);
    }
    for month in &USER_SERIES {
        assert_eq!(month.new_users + month.returning, month.users, "{}", month.month);
    }
}

#[test]
fn regions_are_listed_busiest_first() {
    for pair in REGIONS.windows(2) {
        assert!(pair[0].users >= pair[1].users);
    }
}

#[test]
fn incident_tones_distinguish_status_and_impact() {
    assert_ne!(
        incident_status_class(IncidentStatus::Resolved),
        incident_status_class(IncidentStatus::Investigating)
    );
    assert_ne!(impact_class(Impact::Low), impact_class(Impact::Medium));
    assert_ne!(impact_class(Impact::Medium), impact_class(Impact::High));
    assert_eq!(impact_label(Impact::High), "High Impact");
    assert_eq!(incident_status_label(IncidentStatus::Investigating), "Investigating");
}
