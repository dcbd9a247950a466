use dioxus::prelude::*;
use time::{macros::format_description, Date};

use crate::core::generator::today;
use crate::core::time_range::{format_date, resolve_date_range, DateRange, RangeError, TimeRange};
use crate::t;

/// Dropdown for picking the reporting window. Choosing "Custom Range" reveals
/// two date inputs; the bounds are only reported once both parse and are ordered.
#[component]
pub fn DateRangeSelector(
    selected: TimeRange,
    custom: Option<DateRange>,
    on_range_change: EventHandler<TimeRange>,
    on_custom_bounds: EventHandler<DateRange>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let mut draft_start = use_signal(String::new);
    let mut draft_end = use_signal(String::new);
    let mut custom_error = use_signal(|| None::<String>);

    let button_label = match selected {
        TimeRange::Custom => {
            let bounds = custom
                .map(Ok)
                .unwrap_or_else(|| resolve_date_range(TimeRange::Last30Days, today(), None));
            match bounds {
                Ok(bounds) => format!("{} - {}", format_date(bounds.start), format_date(bounds.end)),
                Err(_) => range_label(selected),
            }
        }
        other => range_label(other),
    };

    let apply_custom = move |_: MouseEvent| {
        match parse_bounds(&draft_start(), &draft_end()) {
            Ok(bounds) => {
                custom_error.set(None);
                on_custom_bounds.call(bounds);
            }
            Err(err) => {
                tracing::debug!(%err, "rejected custom range");
                custom_error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        div { class: "range-selector",
            button {
                r#type: "button",
                class: "range-selector__toggle",
                aria_expanded: "{is_open()}",
                onclick: move |_| is_open.toggle(),
                span { class: "range-selector__icon", aria_hidden: "true", "📅" }
                span { "{button_label}" }
                span { class: "range-selector__chevron", aria_hidden: "true", "▾" }
            }

            if is_open() {
                div { class: "range-selector__menu",
                    for range in TimeRange::ALL {
                        button {
                            key: "{range}",
                            r#type: "button",
                            class: if range == selected { "range-selector__option range-selector__option--active" } else { "range-selector__option" },
                            onclick: move |_| {
                                on_range_change.call(range);
                                is_open.set(false);
                            },
                            "{range_label(range)}"
                        }
                    }
                }
            }

            if selected == TimeRange::Custom {
                div { class: "range-selector__custom",
                    label { class: "range-selector__field",
                        span { {t!("range-custom-start")} }
                        input {
                            r#type: "date",
                            value: "{draft_start}",
                            oninput: move |evt| draft_start.set(evt.value()),
                        }
                    }
                    label { class: "range-selector__field",
                        span { {t!("range-custom-end")} }
                        input {
                            r#type: "date",
                            value: "{draft_end}",
                            oninput: move |evt| draft_end.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: apply_custom,
                        {t!("range-custom-apply")}
                    }
                    if let Some(message) = custom_error() {
                        p { class: "range-selector__error", "{message}" }
                    }
                }
            }
        }
    }
}

pub fn range_label(range: TimeRange) -> String {
    match range {
        TimeRange::Last7Days => t!("range-7d"),
        TimeRange::Last30Days => t!("range-30d"),
        TimeRange::Last90Days => t!("range-90d"),
        TimeRange::LastYear => t!("range-1y"),
        TimeRange::Custom => t!("range-custom"),
    }
}

/// Parse the `YYYY-MM-DD` values produced by `<input type="date">`.
fn parse_bounds(start: &str, end: &str) -> Result<DateRange, RangeError> {
    let format = format_description!("[year]-[month]-[day]");
    let parse = |raw: &str| Date::parse(raw.trim(), &format).ok();

    match (parse(start), parse(end)) {
        (Some(start), Some(end)) => DateRange::new(start, end),
        _ => Err(RangeError::MissingCustomBounds),
    }
}
