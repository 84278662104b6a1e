//! Rendering for the live data feeds (price, staking, validators, ...).

use std::fmt::Write as _;

use serde_json::{Map, Value};

const MAX_TOP_VALIDATORS: usize = 5;

/// Plain display of a field, `N/A` when absent or null.
fn field(data: &Map<String, Value>, key: &str) -> String {
    display(data.get(key))
}

fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric fields get thousands separators; anything else is shown as-is.
fn grouped(data: &Map<String, Value>, key: &str) -> String {
    match data.get(key) {
        Some(Value::Number(n)) => group_thousands(&n.to_string()),
        other => display(other),
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    if !int.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }

    let mut out = String::from(sign);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn entries<'a>(data: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn entry_field(entry: &Value, key: &str, default: &str) -> String {
    match entry.get(key) {
        None | Some(Value::Null) => default.to_string(),
        value => display(value),
    }
}

pub fn price(data: &Map<String, Value>) -> String {
    format!(
        "**XAND Price Information**\n\
         💰 Price: ${}\n\
         📊 24h Change: {}%\n\
         💎 Market Cap: ${}\n\
         📈 24h Volume: ${}",
        field(data, "price_usd"),
        field(data, "change_24h"),
        grouped(data, "market_cap"),
        grouped(data, "volume_24h"),
    )
}

pub fn staking(data: &Map<String, Value>) -> String {
    format!(
        "**Staking Information**\n\
         🎯 Total Staked: {} XAND\n\
         📈 APY: {}\n\
         ⚡ Min Stake: {} XAND\n\
         🔧 Active Validators: {}\n\
         📊 Total Validators: {}",
        field(data, "total_staked"),
        field(data, "staking_apy"),
        field(data, "min_stake"),
        field(data, "active_validators"),
        field(data, "total_validators"),
    )
}

pub fn validators(data: &Map<String, Value>) -> String {
    let mut out = format!(
        "**Validators Information**\n\
         🔧 Active Validators: {}\n\
         📊 Total Validators: {}\n\n\
         **Top Validators:**",
        field(data, "active"),
        field(data, "total"),
    );

    for (i, validator) in entries(data, "top_validators")
        .iter()
        .take(MAX_TOP_VALIDATORS)
        .enumerate()
    {
        let _ = write!(
            out,
            "\n{}. **{}**\n   Stake: {} XAND\n   Commission: {}",
            i + 1,
            entry_field(validator, "name", "Unknown"),
            entry_field(validator, "stake", "N/A"),
            entry_field(validator, "commission", "N/A"),
        );
    }
    out
}

pub fn governance(data: &Map<String, Value>) -> String {
    let mut out = format!(
        "**Governance Proposals**\n\
         📋 Active Proposals: {}\n\n\
         **Current Proposals:**",
        field(data, "active_proposals"),
    );

    for proposal in entries(data, "proposals") {
        let _ = write!(
            out,
            "\n• **{}**\n  ID: {}\n  Status: {}",
            entry_field(proposal, "title", "Unknown"),
            entry_field(proposal, "id", "N/A"),
            entry_field(proposal, "status", "N/A"),
        );
    }
    out
}

pub fn network(data: &Map<String, Value>) -> String {
    format!(
        "**Network Status**\n\
         🟢 Status: {}\n\
         📦 Block Height: {}\n\
         🔧 Validators: {}\n\
         💰 Total Staked: {} XAND\n\
         ⏱️ Uptime: {}",
        field(data, "status"),
        grouped(data, "block_height"),
        field(data, "validators"),
        field(data, "total_staked"),
        field(data, "network_uptime"),
    )
}
