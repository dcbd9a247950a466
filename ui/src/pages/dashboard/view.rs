use dioxus::prelude::*;

use crate::charts::{BarChart, LineChart, PieChart};
use crate::components::date_range_selector::DateRangeSelector;
use crate::components::kpi_card::KpiCard;
use crate::components::tabs::{Tab, Tabs};
use crate::core::generator::today;
use crate::core::kpi::revenue_summaries;
use crate::pages::SeriesLabels;
use crate::t;

use super::charts::DashboardCharts;
use super::state::{reduce, DashboardEvent, DashboardState, DashboardTab};

#[component]
pub fn DashboardView() -> Element {
    let mut state = use_signal(|| DashboardState::initial(&mut rand::thread_rng(), today()));

    let mut dispatch = move |event: DashboardEvent| {
        let next = reduce(&state.read(), event, &mut rand::thread_rng(), today());
        state.set(next);
    };

    let snapshot = state();
    let charts = DashboardCharts::project(&snapshot, &SeriesLabels::localized());
    let kpis = snapshot.data.kpis.clone();
    let [subscriptions, arpu] = revenue_summaries(&snapshot.data.revenue);

    rsx! {
        section { class: "page page-dashboard",
            div { class: "page__header",
                div {
                    h1 { class: "page__title", {t!("dashboard-title")} }
                    p { class: "page__subtitle", {t!("dashboard-subtitle")} }
                }
                DateRangeSelector {
                    selected: snapshot.time_range,
                    custom: snapshot.custom_bounds,
                    on_range_change: move |range| dispatch(DashboardEvent::SelectRange(range)),
                    on_custom_bounds: move |bounds| dispatch(DashboardEvent::SetCustomBounds(bounds)),
                }
            }

            Tabs { class: "page__tabs",
                for tab in DashboardTab::ALL {
                    Tab {
                        key: "{tab.as_str()}",
                        label: tab_label(tab),
                        active: snapshot.active_tab == tab,
                        onclick: move |_| dispatch(DashboardEvent::SelectTab(tab)),
                    }
                }
            }

            {match snapshot.active_tab {
                DashboardTab::Overview => rsx! {
                    div { class: "kpi-grid kpi-grid--three",
                        for (idx, kpi) in kpis.iter().take(6).cloned().enumerate() {
                            KpiCard { key: "{idx}", data: kpi }
                        }
                    }
                    div { class: "chart-grid chart-grid--two",
                        LineChart { title: t!("chart-user-growth"), data: charts.user_growth, fill: true }
                        LineChart { title: t!("chart-revenue-trend"), data: charts.revenue_trend, fill: true }
                    }
                    div { class: "chart-grid chart-grid--two",
                        BarChart { title: t!("chart-page-views"), data: charts.page_views }
                        PieChart { title: t!("chart-users-by-source"), data: charts.sources, donut: true }
                    }
                },
                DashboardTab::Users => rsx! {
                    div { class: "kpi-grid kpi-grid--three",
                        for (idx, kpi) in kpis.iter().take(3).cloned().enumerate() {
                            KpiCard { key: "{idx}", data: kpi }
                        }
                    }
                    div { class: "chart-grid",
                        LineChart {
                            title: t!("chart-user-metrics-over-time"),
                            data: charts.user_growth,
                            height: 350,
                            fill: true,
                        }
                    }
                    div { class: "chart-grid chart-grid--two",
                        PieChart { title: t!("chart-acquisition-by-source"), data: charts.sources, donut: true }
                        BarChart { title: t!("chart-new-users-by-day"), data: charts.recent_new_users }
                    }
                },
                DashboardTab::Revenue => rsx! {
                    div { class: "kpi-grid kpi-grid--three",
                        if let Some(revenue) = kpis.get(2).cloned() {
                            KpiCard { data: revenue }
                        }
                        KpiCard { data: subscriptions }
                        KpiCard { data: arpu }
                    }
                    div { class: "chart-grid",
                        LineChart {
                            title: t!("chart-revenue-trend"),
                            data: charts.revenue_trend,
                            height: 350,
                            fill: true,
                        }
                    }
                    div { class: "chart-grid chart-grid--two",
                        BarChart { title: t!("chart-monthly-revenue"), data: charts.monthly_revenue }
                        LineChart { title: t!("chart-arpu"), data: charts.arpu, fill: true }
                    }
                },
                DashboardTab::Engagement => rsx! {
                    div { class: "kpi-grid kpi-grid--three",
                        for (idx, kpi) in kpis.iter().skip(3).take(3).cloned().enumerate() {
                            KpiCard { key: "{idx}", data: kpi }
                        }
                    }
                    div { class: "chart-grid",
                        LineChart {
                            title: t!("chart-engagement"),
                            data: charts.engagement,
                            height: 350,
                        }
                    }
                    div { class: "chart-grid chart-grid--two",
                        BarChart { title: t!("chart-page-views"), data: charts.page_views }
                        LineChart { title: t!("chart-bounce-vs-retention"), data: charts.bounce_vs_retention }
                    }
                },
            }}
        }
    }
}

fn tab_label(tab: DashboardTab) -> String {
    match tab {
        DashboardTab::Overview => t!("tab-overview"),
        DashboardTab::Users => t!("tab-users"),
        DashboardTab::Revenue => t!("tab-revenue"),
        DashboardTab::Engagement => t!("tab-engagement"),
    }
}
