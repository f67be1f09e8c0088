use anyhow::Result;
use rust_decimal::{Decimal, RoundingStrategy};

/// How amounts are shown to the user. Arithmetic never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
    pub decimal_places: u32,
    pub locale: String,
}

impl CurrencyConfig {
    fn preset(code: &str, symbol: &str, decimal_places: u32, locale: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            decimal_places,
            locale: locale.to_string(),
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::preset("USD", "$", 2, "en-US")),
            "EUR" => Ok(Self::preset("EUR", "€", 2, "de-DE")),
            "GBP" => Ok(Self::preset("GBP", "£", 2, "en-GB")),
            "JPY" => Ok(Self::preset("JPY", "¥", 0, "ja-JP")),
            "CAD" => Ok(Self::preset("CAD", "$", 2, "en-CA")),
            other => {
                anyhow::bail!("Unsupported currency '{other}' (expected USD, EUR, GBP, JPY or CAD)")
            }
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::preset("USD", "$", 2, "en-US")
    }
}

/// Format an amount with the locale's grouping and decimal separators,
/// rounded half away from zero to the configured number of places.
/// e.g. `1234567.891` in USD → `"$1,234,567.89"`, in EUR → `"1.234.567,89 €"`
pub fn format_currency(amount: Decimal, config: &CurrencyConfig) -> String {
    let style = LocaleStyle::for_locale(&config.locale);
    let places = config.decimal_places;
    let rounded = amount
        .abs()
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{rounded:.prec$}", prec = places as usize);
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("");

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(style.group);

    let number = if dec_part.is_empty() {
        grouped
    } else {
        format!("{grouped}{}{dec_part}", style.decimal)
    };
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if style.symbol_first {
        format!("{sign}{}{number}", config.symbol)
    } else {
        format!("{sign}{number} {}", config.symbol)
    }
}

struct LocaleStyle {
    group: &'static str,
    decimal: &'static str,
    symbol_first: bool,
}

impl LocaleStyle {
    fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" => Self {
                group: ".",
                decimal: ",",
                symbol_first: false,
            },
            "fr" => Self {
                group: " ",
                decimal: ",",
                symbol_first: false,
            },
            _ => Self {
                group: ",",
                decimal: ".",
                symbol_first: true,
            },
        }
    }
}
