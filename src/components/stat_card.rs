//! KPI stat card used on the overview and analytics pages.

use leptos::prelude::*;

/// Period-over-period movement shown under the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub positive: bool,
}

impl Trend {
    pub fn up(value: f64) -> Self {
        Self { value, positive: true }
    }

    pub fn down(value: f64) -> Self {
        Self { value, positive: false }
    }
}

pub(crate) fn trend_class(positive: bool) -> &'static str {
    if positive {
        "stat-card__trend stat-card__trend--up"
    } else {
        "stat-card__trend stat-card__trend--down"
    }
}

pub(crate) fn format_trend(trend: Trend) -> String {
    let sign = if trend.positive { "+" } else { "-" };
    format!("{sign}{:.1}%", trend.value.abs())
}

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    /// CSS modifier picking the glyph.
    icon: &'static str,
    #[prop(optional)] trend: Option<Trend>,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__top">
                <span class="stat-card__title">{title}</span>
                <span class=format!("stat-card__icon stat-card__icon--{icon}") aria-hidden="true"></span>
            </div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__meta">
                {trend.map(|trend| {
                    view! { <span class=trend_class(trend.positive)>{format_trend(trend)}</span> }
                })}
                <span class="stat-card__description">{description}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;
