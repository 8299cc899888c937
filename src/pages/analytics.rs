//! Analytics page: platform KPIs, monthly deployment and user series,
//! resource shares, performance targets, regions, and incidents.
//!
//! The time-range tabs window the monthly series from the tail, so "6M"
//! is the most recent half of the year. All series are platform mock
//! data; derived figures (totals, growth, success rate) are computed
//! from whatever window is visible rather than hard-coded.

use leptos::prelude::*;

use crate::components::stat_card::{StatCard, Trend};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MonthlyDeploys {
    pub month: &'static str,
    pub projects: u32,
    pub successful: u32,
    pub failed: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MonthlyUsers {
    pub month: &'static str,
    pub users: u32,
    pub new_users: u32,
    pub returning: u32,
}

pub(crate) const DEPLOY_SERIES: [MonthlyDeploys; 12] = [
    MonthlyDeploys { month: "Jan", projects: 30, successful: 28, failed: 2 },
    MonthlyDeploys { month: "Feb", projects: 45, successful: 41, failed: 4 },
    MonthlyDeploys { month: "Mar", projects: 60, successful: 57, failed: 3 },
    MonthlyDeploys { month: "Apr", projects: 50, successful: 45, failed: 5 },
    MonthlyDeploys { month: "May", projects: 70, successful: 65, failed: 5 },
    MonthlyDeploys { month: "Jun", projects: 90, successful: 86, failed: 4 },
    MonthlyDeploys { month: "Jul", projects: 85, successful: 80, failed: 5 },
    MonthlyDeploys { month: "Aug", projects: 95, successful: 91, failed: 4 },
    MonthlyDeploys { month: "Sep", projects: 110, successful: 104, failed: 6 },
    MonthlyDeploys { month: "Oct", projects: 120, successful: 115, failed: 5 },
    MonthlyDeploys { month: "Nov", projects: 105, successful: 99, failed: 6 },
    MonthlyDeploys { month: "Dec", projects: 130, successful: 125, failed: 5 },
];

pub(crate) const USER_SERIES: [MonthlyUsers; 12] = [
    MonthlyUsers { month: "Jan", users: 200, new_users: 40, returning: 160 },
    MonthlyUsers { month: "Feb", users: 250, new_users: 55, returning: 195 },
    MonthlyUsers { month: "Mar", users: 300, new_users: 70, returning: 230 },
    MonthlyUsers { month: "Apr", users: 280, new_users: 45, returning: 235 },
    MonthlyUsers { month: "May", users: 350, new_users: 85, returning: 265 },
    MonthlyUsers { month: "Jun", users: 400, new_users: 95, returning: 305 },
    MonthlyUsers { month: "Jul", users: 420, new_users: 80, returning: 340 },
    MonthlyUsers { month: "Aug", users: 450, new_users: 90, returning: 360 },
    MonthlyUsers { month: "Sep", users: 480, new_users: 95, returning: 385 },
    MonthlyUsers { month: "Oct", users: 510, new_users: 100, returning: 410 },
    MonthlyUsers { month: "Nov", users: 540, new_users: 105, returning: 435 },
    MonthlyUsers { month: "Dec", users: 580, new_users: 120, returning: 460 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

pub(crate) fn months_in_range(range: TimeRange) -> usize {
    match range {
        TimeRange::OneMonth => 1,
        TimeRange::ThreeMonths => 3,
        TimeRange::SixMonths => 6,
        TimeRange::OneYear => 12,
    }
}

/// Window a series from the tail: "3M" means the three most recent months.
pub(crate) fn tail_slice<T>(series: &[T], range: TimeRange) -> &[T] {
    let keep = months_in_range(range).min(series.len());
    &series[series.len() - keep..]
}

pub(crate) fn total_deploys(window: &[MonthlyDeploys]) -> u32 {
    window.iter().map(|month| month.projects).sum()
}

/// Percent change from the first value to the last. A window of one month
/// compares the month to itself, which reads as flat.
pub(crate) fn growth_percent(first: u32, last: u32) -> f64 {
    if first == 0 {
        return 0.0;
    }
    (f64::from(last) / f64::from(first) - 1.0) * 100.0
}

/// Mean of the per-month success ratios, as a percentage.
pub(crate) fn average_success_rate(window: &[MonthlyDeploys]) -> f64 {
    let rates: Vec<f64> = window
        .iter()
        .filter(|month| month.projects > 0)
        .map(|month| f64::from(month.successful) / f64::from(month.projects))
        .collect();
    if rates.is_empty() {
        return 0.0;
    }
    rates.iter().sum::<f64>() / rates.len() as f64 * 100.0
}

fn growth_trend(percent: f64) -> Trend {
    if percent >= 0.0 {
        Trend::up(percent)
    } else {
        Trend::down(percent)
    }
}

// ==========================================================================
// Resource allocation
// ==========================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResourceSlice {
    pub name: &'static str,
    pub value: f64,
}

pub(crate) const RESOURCES: [ResourceSlice; 3] = [
    ResourceSlice { name: "Compute", value: 400.0 },
    ResourceSlice { name: "Storage", value: 300.0 },
    ResourceSlice { name: "Networking", value: 300.0 },
];

pub(crate) fn share_percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    value / total * 100.0
}

// ==========================================================================
// Performance metrics
// ==========================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PerfMetric {
    pub name: &'static str,
    pub value: f64,
    pub target: f64,
    pub unit: &'static str,
    /// Latency-style metrics hit their target by staying under it.
    pub lower_is_better: bool,
}

pub(crate) const PERF_METRICS: [PerfMetric; 4] = [
    PerfMetric { name: "Latency", value: 85.0, target: 90.0, unit: "ms", lower_is_better: true },
    PerfMetric { name: "Uptime", value: 99.95, target: 99.9, unit: "%", lower_is_better: false },
    PerfMetric { name: "Response Time", value: 120.0, target: 150.0, unit: "ms", lower_is_better: true },
    PerfMetric { name: "Error Rate", value: 0.8, target: 1.0, unit: "%", lower_is_better: true },
];

pub(crate) fn target_met(metric: &PerfMetric) -> bool {
    if metric.lower_is_better {
        metric.value <= metric.target
    } else {
        metric.value >= metric.target
    }
}

/// Fill for a progress bar, clamped to the track.
pub(crate) fn fill_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

// ==========================================================================
// Incidents and regions
// ==========================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IncidentStatus {
    Resolved,
    Investigating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Incident {
    pub kind: &'static str,
    pub status: IncidentStatus,
    pub time: &'static str,
    pub impact: Impact,
}

pub(crate) const INCIDENTS: [Incident; 3] = [
    Incident {
        kind: "Server Outage",
        status: IncidentStatus::Resolved,
        time: "2 days ago",
        impact: Impact::Medium,
    },
    Incident {
        kind: "Database Latency",
        status: IncidentStatus::Investigating,
        time: "4 hours ago",
        impact: Impact::Low,
    },
    Incident {
        kind: "API Rate Limiting",
        status: IncidentStatus::Resolved,
        time: "1 week ago",
        impact: Impact::High,
    },
];

pub(crate) fn incident_status_label(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Resolved => "Resolved",
        IncidentStatus::Investigating => "Investigating",
    }
}

pub(crate) fn incident_status_class(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Resolved => "incident__status incident__status--resolved",
        IncidentStatus::Investigating => "incident__status incident__status--open",
    }
}

pub(crate) fn impact_label(impact: Impact) -> &'static str {
    match impact {
        Impact::Low => "Low Impact",
        Impact::Medium => "Medium Impact",
        Impact::High => "High Impact",
    }
}

pub(crate) fn impact_class(impact: Impact) -> &'static str {
    match impact {
        Impact::Low => "incident__impact incident__impact--low",
        Impact::Medium => "incident__impact incident__impact--medium",
        Impact::High => "incident__impact incident__impact--high",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RegionStat {
    pub name: &'static str,
    pub users: u32,
    pub servers: u32,
}

pub(crate) const REGIONS: [RegionStat; 6] = [
    RegionStat { name: "North America", users: 12_500, servers: 25 },
    RegionStat { name: "Europe", users: 10_200, servers: 20 },
    RegionStat { name: "Asia", users: 8_700, servers: 18 },
    RegionStat { name: "South America", users: 3_200, servers: 8 },
    RegionStat { name: "Africa", users: 1_800, servers: 5 },
    RegionStat { name: "Oceania", users: 1_500, servers: 4 },
];

const REGION_BAR_MAX: f64 = 15_000.0;

/// "12500" reads poorly in a stat row; group it as "12,500".
pub(crate) fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let range = RwSignal::new(TimeRange::SixMonths);
    let resource_total: f64 = RESOURCES.iter().map(|slice| slice.value).sum();
    let range_tab = move |label: &'static str, value: TimeRange| {
        view! {
            <button
                class="range-tabs__tab"
                class:range-tabs__tab--active=move || range.get() == value
                on:click=move |_| range.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__header">
                <div>
                    <h1 class="dashboard-page__title">"Analytics Dashboard"</h1>
                    <p class="dashboard-page__subtitle">
                        "Track your platform's performance and user engagement metrics"
                    </p>
                </div>
                <div class="range-tabs">
                    {range_tab("1M", TimeRange::OneMonth)}
                    {range_tab("3M", TimeRange::ThreeMonths)}
                    {range_tab("6M", TimeRange::SixMonths)}
                    {range_tab("1Y", TimeRange::OneYear)}
                </div>
            </div>

            {move || {
                let deploys = tail_slice(&DEPLOY_SERIES, range.get());
                let users = tail_slice(&USER_SERIES, range.get());
                let deploy_growth =
                    growth_percent(deploys[0].projects, deploys[deploys.len() - 1].projects);
                let user_growth = growth_percent(users[0].users, users[users.len() - 1].users);
                view! {
                    <div class="stat-grid">
                        <StatCard
                            title="Total Deployments"
                            value=total_deploys(deploys).to_string()
                            icon="deployments"
                            trend=growth_trend(deploy_growth)
                            description="Since the start of the range"
                        />
                        <StatCard
                            title="Active Users"
                            value=users[users.len() - 1].users.to_string()
                            icon="users"
                            trend=growth_trend(user_growth)
                            description="Monthly active at range end"
                        />
                        <StatCard
                            title="Deployment Success"
                            value=format!("{:.1}%", average_success_rate(deploys))
                            icon="success"
                            trend=Trend::up(3.2)
                            description="Average monthly success rate"
                        />
                        <StatCard
                            title="Global Regions"
                            value=REGIONS.len().to_string()
                            icon="regions"
                            description="Serving traffic worldwide"
                        />
                    </div>
                }
            }}

            <div class="analytics-grid">
                <section class="analytics-card">
                    <h2 class="analytics-card__title">"Projects Deployed"</h2>
                    <p class="analytics-card__hint">"Monthly deployment activity"</p>
                    <table class="analytics-table">
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th>"Deployments"</th>
                                <th>"Successful"</th>
                                <th>"Failed"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tail_slice(&DEPLOY_SERIES, range.get())
                                    .iter()
                                    .map(|month| {
                                        view! {
                                            <tr>
                                                <td>{month.month}</td>
                                                <td>{month.projects}</td>
                                                <td>{month.successful}</td>
                                                <td>{month.failed}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="analytics-card">
                    <h2 class="analytics-card__title">"User Activity"</h2>
                    <p class="analytics-card__hint">"Monthly active users breakdown"</p>
                    <table class="analytics-table">
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th>"Active"</th>
                                <th>"New"</th>
                                <th>"Returning"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tail_slice(&USER_SERIES, range.get())
                                    .iter()
                                    .map(|month| {
                                        view! {
                                            <tr>
                                                <td>{month.month}</td>
                                                <td>{month.users}</td>
                                                <td>{month.new_users}</td>
                                                <td>{month.returning}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="analytics-card">
                    <h2 class="analytics-card__title">"Resource Allocation"</h2>
                    <p class="analytics-card__hint">"Current resource distribution"</p>
                    <div class="share-list">
                        {RESOURCES
                            .iter()
                            .map(move |slice| {
                                let share = share_percent(slice.value, resource_total);
                                view! {
                                    <div class="share-list__row">
                                        <div class="share-list__labels">
                                            <span>{slice.name}</span>
                                            <span class="share-list__value">
                                                {format!("{share:.0}%")}
                                            </span>
                                        </div>
                                        <div class="share-bar">
                                            <div
                                                class="share-bar__fill"
                                                style=format!("width:{share:.0}%")
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>

            <section class="analytics-card">
                <h2 class="analytics-card__title">"Performance Metrics"</h2>
                <p class="analytics-card__hint">"Key platform performance indicators"</p>
                <div class="perf-grid">
                    {PERF_METRICS
                        .iter()
                        .map(|metric| {
                            let met = target_met(metric);
                            let missed = !met;
                            view! {
                                <div class="perf-metric">
                                    <div class="perf-metric__head">
                                        <span class="perf-metric__name">{metric.name}</span>
                                        <span class="perf-metric__target">
                                            {format!("Target: {} {}", metric.target, metric.unit)}
                                        </span>
                                    </div>
                                    <div class="perf-metric__body">
                                        <span class="perf-metric__value">
                                            {format!("{} {}", metric.value, metric.unit)}
                                        </span>
                                        <span class=if met {
                                            "perf-metric__verdict perf-metric__verdict--met"
                                        } else {
                                            "perf-metric__verdict perf-metric__verdict--missed"
                                        }>
                                            {if met { "On Target" } else { "Off Target" }}
                                        </span>
                                    </div>
                                    <div class="share-bar">
                                        <div
                                            class="share-bar__fill"
                                            class:share-bar__fill--missed=missed
                                            style=format!(
                                                "width:{:.0}%",
                                                fill_percent(metric.value, metric.target * 1.5),
                                            )
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <div class="analytics-bottom">
                <section class="analytics-card">
                    <h2 class="analytics-card__title">"Regional Distribution"</h2>
                    <p class="analytics-card__hint">"Users and infrastructure by region"</p>
                    <div class="share-list">
                        {REGIONS
                            .iter()
                            .map(|region| {
                                view! {
                                    <div class="share-list__row">
                                        <div class="share-list__labels">
                                            <span>{region.name}</span>
                                            <span class="share-list__value">
                                                {format!(
                                                    "{} users · {} servers",
                                                    group_thousands(region.users),
                                                    region.servers,
                                                )}
                                            </span>
                                        </div>
                                        <div class="share-bar">
                                            <div
                                                class="share-bar__fill"
                                                style=format!(
                                                    "width:{:.0}%",
                                                    fill_percent(f64::from(region.users), REGION_BAR_MAX),
                                                )
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="analytics-card">
                    <h2 class="analytics-card__title">"Recent Incidents"</h2>
                    <p class="analytics-card__hint">"Platform stability events"</p>
                    <ul class="incident-list">
                        {INCIDENTS
                            .iter()
                            .map(|incident| {
                                view! {
                                    <li class="incident">
                                        <div class="incident__head">
                                            <span class="incident__kind">{incident.kind}</span>
                                            <span class=incident_status_class(incident.status)>
                                                {incident_status_label(incident.status)}
                                            </span>
                                        </div>
                                        <div class="incident__meta">
                                            <span class="incident__time">{incident.time}</span>
                                            <span class=impact_class(incident.impact)>
                                                {impact_label(incident.impact)}
                                            </span>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;
