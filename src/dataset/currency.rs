//! Currency display for fee totals.

use std::fmt;

/// Currency that fee totals are expressed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Japanese yen.
    Jpy,
    /// Any other ISO code, kept verbatim.
    Other(String),
}

impl Currency {
    /// Parses an ISO code, case-insensitively.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "GBP" => Self::Gbp,
            "JPY" => Self::Jpy,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the ISO code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Other(code) => code,
        }
    }

    /// Returns the display symbol, `?` when unknown.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Other(_) => "?",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats a fee amount with magnitude-dependent precision.
///
/// Amounts of 10 000 and above are shown in thousands. USD places its
/// symbol in front; other currencies append it.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "scaling to thousands is inherently a float division"
)]
pub fn format_fee(amount: f64, currency: &Currency) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let (scaled, decimals, in_thousands) = if amount < 100.0 {
        (amount, 2_usize, false)
    } else if amount < 1_000.0 {
        (amount, 1, false)
    } else if amount < 10_000.0 {
        (amount, 0, false)
    } else if amount < 100_000.0 {
        (amount / 1_000.0, 2, true)
    } else if amount < 1_000_000.0 {
        (amount / 1_000.0, 1, true)
    } else {
        (amount / 1_000.0, 0, true)
    };

    let number = group_thousands(&format!("{scaled:.decimals$}"));
    let symbol = currency.symbol();
    let suffix = if in_thousands { "k" } else { "" };

    if *currency == Currency::Usd {
        format!("{symbol}{number}{suffix}")
    } else {
        format!("{number} {suffix}{symbol}")
    }
}

/// Inserts `,` separators into the integer part of a formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = formatted
        .strip_prefix('-')
        .map_or(("", formatted), |rest| ("-", rest));
    let (integer, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(int, frac)| (int, Some(frac)));

    let reversed: Vec<char> = integer.chars().rev().collect();
    let groups: Vec<String> = reversed
        .chunks(3)
        .rev()
        .map(|chunk| chunk.iter().rev().collect())
        .collect();
    let grouped = groups.join(",");

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
