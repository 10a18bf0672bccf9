// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use numfmt::{Formatter, Precision};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().without_time())
        .with(filter)
        .init();
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

fn whole_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    })
}

fn cents_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(2))
    })
}

/// Grouped money display, e.g. "PKR 2,800" or "USD -12.50". Whole amounts
/// render without decimals.
pub fn fmt_money(amount: &Decimal, ccy: &str) -> String {
    let value = amount.round_dp(2);
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    let magnitude = value.abs().to_f64().unwrap_or_default();
    let digits = if value.is_integer() {
        whole_formatter().fmt_string(magnitude)
    } else {
        let mut s = cents_formatter().fmt_string(magnitude);
        // numfmt omits the last trailing zero ("12.30" renders as "12.3")
        if s.len() >= 3 && s.as_bytes()[s.len() - 3] != b'.' {
            s.push('0');
        }
        s
    };
    format!("{} {}{}", ccy, sign, digits)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Unique-enough id: millisecond timestamp plus a random suffix, both in
/// base36. No collision detection.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix = rand::random::<u32>() as u64;
    format!("{}{}", base36(millis), base36(suffix))
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
