use dioxus::prelude::*;

use crate::components::card::{Card, CardBody};
use crate::core::kpi::{ChangeType, KpiKind, KpiSummary};
use crate::core::time_range::TimeRange;
use crate::t;

#[component]
pub fn KpiCard(data: KpiSummary) -> Element {
    let title = localized_title(data.kind);
    let value = data.display_value();
    let bar_width = data.bar_width();
    let color = data.color.css_modifier();
    let change = data.change;
    let change_label = localized_change_label(data.compared_to);

    let (badge_class, arrow) = match data.change_type {
        ChangeType::Increase => ("kpi__change kpi__change--increase", "↗"),
        ChangeType::Decrease => ("kpi__change kpi__change--decrease", "↘"),
    };

    rsx! {
        Card { class: "kpi",
            CardBody {
                h3 { class: "kpi__title", "{title}" }
                div { class: "kpi__headline",
                    p { class: "kpi__value", "{value}" }
                    span { class: "{badge_class}",
                        span { class: "kpi__arrow", aria_hidden: "true", "{arrow}" }
                        "{change}%"
                    }
                }
                div { class: "kpi__footer",
                    div { class: "kpi__track",
                        div {
                            class: "kpi__bar kpi__bar--{color}",
                            style: "width: {bar_width}%;",
                        }
                    }
                    p { class: "kpi__label", "{change_label}" }
                }
            }
        }
    }
}

fn localized_title(kind: KpiKind) -> String {
    match kind {
        KpiKind::TotalUsers => t!("kpi-total-users"),
        KpiKind::ActiveUsers => t!("kpi-active-users"),
        KpiKind::Revenue => t!("kpi-revenue"),
        KpiKind::RetentionRate => t!("kpi-retention-rate"),
        KpiKind::ConversionRate => t!("kpi-conversion-rate"),
        KpiKind::BounceRate => t!("kpi-bounce-rate"),
        KpiKind::Subscriptions => t!("kpi-subscriptions"),
        KpiKind::Arpu => t!("kpi-arpu"),
    }
}

fn localized_change_label(compared_to: Option<TimeRange>) -> String {
    match compared_to {
        Some(TimeRange::Last7Days) => t!("change-vs-7d"),
        Some(TimeRange::Last30Days) => t!("change-vs-30d"),
        Some(TimeRange::Last90Days) => t!("change-vs-90d"),
        Some(TimeRange::LastYear) => t!("change-vs-1y"),
        Some(TimeRange::Custom) | None => t!("change-vs-period"),
    }
}
