use dioxus::prelude::*;

use crate::charts::{LineChart, PieChart};
use crate::components::card::{Card, CardBody, CardHeader};
use crate::components::date_range_selector::DateRangeSelector;
use crate::core::directory::{UserRecord, UserStatus};
use crate::core::format::format_count;
use crate::core::generator::today;
use crate::core::sources::SourceBreakdown;
use crate::pages::SeriesLabels;
use crate::t;

use super::charts::UsersCharts;
use super::state::{reduce, UsersEvent, UsersState};

#[component]
pub fn UsersView() -> Element {
    let mut state = use_signal(|| UsersState::initial(&mut rand::thread_rng(), today()));

    let mut dispatch = move |event: UsersEvent| {
        let next = reduce(&state.read(), event, &mut rand::thread_rng(), today());
        state.set(next);
    };

    let snapshot = state();
    let charts = UsersCharts::project(&snapshot, &SeriesLabels::localized());
    let visible = snapshot.visible_users();

    rsx! {
        section { class: "page page-users",
            div { class: "page__header",
                div {
                    h1 { class: "page__title", {t!("users-title")} }
                    p { class: "page__subtitle", {t!("users-subtitle")} }
                }
                DateRangeSelector {
                    selected: snapshot.time_range,
                    custom: snapshot.custom_bounds,
                    on_range_change: move |range| dispatch(UsersEvent::SelectRange(range)),
                    on_custom_bounds: move |bounds| dispatch(UsersEvent::SetCustomBounds(bounds)),
                }
            }

            div { class: "chart-grid chart-grid--two",
                LineChart { title: t!("chart-new-signups"), data: charts.signups, fill: true }
                LineChart { title: t!("chart-active-users"), data: charts.active, fill: true }
            }
            div { class: "chart-grid chart-grid--two",
                LineChart { title: t!("chart-total-growth"), data: charts.total_growth }
                PieChart { title: t!("chart-users-by-source"), data: charts.sources, donut: true }
            }

            SourcesTable { sources: snapshot.sources.clone() }

            Card { class: "table-card",
                CardHeader { class: "table-card__header",
                    h3 { class: "table-card__title", {t!("users-recent-title")} }
                    div { class: "search",
                        span { class: "search__icon", aria_hidden: "true", "⌕" }
                        input {
                            class: "search__input",
                            r#type: "text",
                            placeholder: t!("users-search-placeholder"),
                            value: "{snapshot.search}",
                            oninput: move |evt| dispatch(UsersEvent::Search(evt.value())),
                        }
                    }
                }
                CardBody {
                    RecentUsersTable { users: visible }
                }
            }
        }
    }
}

#[component]
fn SourcesTable(sources: Vec<SourceBreakdown>) -> Element {
    rsx! {
        Card { class: "table-card",
            CardHeader { class: "table-card__header",
                h3 { class: "table-card__title", {t!("users-sources-title")} }
            }
            CardBody {
                div { class: "table-scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { {t!("table-source")} }
                                th { {t!("table-users")} }
                                th { {t!("table-percentage")} }
                            }
                        }
                        tbody {
                            for (idx, source) in sources.iter().enumerate() {
                                tr {
                                    key: "{source.source}",
                                    class: if idx % 2 == 1 { "data-table__row data-table__row--striped" } else { "data-table__row" },
                                    td { class: "data-table__strong", "{source.source}" }
                                    td { "{format_count(source.count)}" }
                                    td {
                                        div { class: "share",
                                            span { class: "share__value", "{source.percentage}%" }
                                            div { class: "share__track",
                                                div {
                                                    class: "share__bar",
                                                    style: "width: {source.percentage}%;",
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentUsersTable(users: Vec<UserRecord>) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        th { {t!("table-user")} }
                        th { {t!("table-joined")} }
                        th { {t!("table-last-active")} }
                        th { {t!("table-status")} }
                    }
                }
                tbody {
                    if users.is_empty() {
                        tr {
                            td { class: "data-table__empty", colspan: "4", {t!("users-no-match")} }
                        }
                    }
                    for user in users.iter() {
                        tr { key: "{user.id}", class: "data-table__row",
                            td {
                                div { class: "user-cell",
                                    div { class: "user-cell__avatar", "{user.initial()}" }
                                    div {
                                        div { class: "user-cell__name", "{user.name}" }
                                        div { class: "user-cell__email", "{user.email}" }
                                    }
                                }
                            }
                            td { "{user.join_date}" }
                            td { "{user.last_active}" }
                            td {
                                span { class: "status status--{user.status.as_str()}",
                                    {status_label(user.status)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_label(status: UserStatus) -> String {
    match status {
        UserStatus::Active => t!("status-active"),
        UserStatus::Inactive => t!("status-inactive"),
    }
}
