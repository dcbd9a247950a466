//! Formatting helpers for presenting metrics.

/// Options for [`format_number`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormat<'a> {
    pub abbreviate: bool,
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub decimals: usize,
}

impl<'a> NumberFormat<'a> {
    pub fn abbreviated() -> Self {
        Self {
            abbreviate: true,
            ..Self::default()
        }
    }

    pub fn decimals(decimals: usize) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    pub fn affixed(prefix: &'a str, suffix: &'a str) -> Self {
        Self {
            prefix,
            suffix,
            ..Self::default()
        }
    }
}

/// `1.5M`, `2.5K` or fixed-decimal output, wrapped in the literal prefix/suffix.
pub fn format_number(value: f64, options: &NumberFormat<'_>) -> String {
    let NumberFormat {
        abbreviate,
        prefix,
        suffix,
        decimals,
    } = options;
    let decimals = *decimals;

    if *abbreviate {
        if value >= 1_000_000.0 {
            return format!("{prefix}{:.1}M{suffix}", value / 1_000_000.0);
        }
        if value >= 1_000.0 {
            return format!("{prefix}{:.1}K{suffix}", value / 1_000.0);
        }
    }

    format!("{prefix}{value:.decimals$}{suffix}")
}

/// Options for [`format_currency`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat<'a> {
    pub abbreviate: bool,
    /// ISO 4217 code.
    pub currency: &'a str,
    pub decimals: usize,
}

impl Default for CurrencyFormat<'_> {
    fn default() -> Self {
        Self {
            abbreviate: false,
            currency: "USD",
            decimals: 0,
        }
    }
}

/// en-US currency rendering, e.g. `$42,569` or compact `$42.6K`.
pub fn format_currency(value: f64, options: &CurrencyFormat<'_>) -> String {
    let symbol = currency_symbol(options.currency);
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if options.abbreviate && magnitude >= 1_000.0 {
        return format!("{sign}{symbol}{}", compact(magnitude));
    }

    format!(
        "{sign}{symbol}{}",
        group_decimal(magnitude, options.decimals)
    )
}

/// Options for [`format_percentage`]. One decimal, unsigned by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentFormat {
    pub decimals: usize,
    pub include_sign: bool,
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self {
            decimals: 1,
            include_sign: false,
        }
    }
}

impl PercentFormat {
    pub fn signed() -> Self {
        Self {
            include_sign: true,
            ..Self::default()
        }
    }
}

/// `+12.4%` style output. The sign is only added for strictly positive values.
pub fn format_percentage(value: f64, options: &PercentFormat) -> String {
    let decimals = options.decimals;
    let sign = if options.include_sign && value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// Integer with thousands separators (`4,235`).
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{other} "),
    }
}

/// Short-scale notation with at most one fraction digit.
fn compact(magnitude: f64) -> String {
    const UNITS: [(f64, &str); 4] = [
        (1e12, "T"),
        (1e9, "B"),
        (1e6, "M"),
        (1e3, "K"),
    ];

    let mut scaled = magnitude;
    let mut unit = "";
    for (idx, &(threshold, label)) in UNITS.iter().enumerate() {
        if magnitude >= threshold {
            scaled = (magnitude / threshold * 10.0).round() / 10.0;
            unit = label;
            // 999.95K rounds up to the next unit.
            if scaled >= 1_000.0 && idx > 0 {
                let (bigger, bigger_label) = UNITS[idx - 1];
                scaled = (magnitude / bigger * 10.0).round() / 10.0;
                unit = bigger_label;
            }
            break;
        }
    }

    let rendered = format!("{scaled:.1}");
    let trimmed = rendered.strip_suffix(".0").unwrap_or(&rendered);
    format!("{trimmed}{unit}")
}

fn group_decimal(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    match rendered.split_once('.') {
        Some((int_part, frac)) => format!("{}.{frac}", group_thousands(int_part)),
        None => group_thousands(&rendered),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
