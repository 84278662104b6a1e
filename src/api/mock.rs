//! Canned payloads substituted when the live API is unavailable.

use serde_json::{json, Value};

use super::{DataCategory, DataResult};

pub const UNKNOWN_DATA_TYPE: &str = "Unknown data type";

/// Mock payload for a mock key (`network_status`, `price_data`, ...).
pub fn mock_data(key: &str) -> DataResult {
    let payload = match key {
        "network_status" => json!({
            "status": "online",
            "block_height": 1234567,
            "validators": 150,
            "total_staked": "50000000",
            "network_uptime": "99.9%"
        }),
        "price_data" => json!({
            "price_usd": 0.25,
            "price_btc": 0.00001234,
            "market_cap": 25000000,
            "volume_24h": 1000000,
            "change_24h": 2.5
        }),
        "staking_info" => json!({
            "total_staked": "50000000",
            "staking_apy": "12.5%",
            "min_stake": "1000",
            "active_validators": 150,
            "total_validators": 200
        }),
        "validators" => json!({
            "active": 150,
            "total": 200,
            "top_validators": [
                {"name": "Validator1", "stake": "1000000", "commission": "5%"},
                {"name": "Validator2", "stake": "950000", "commission": "4%"},
                {"name": "Validator3", "stake": "900000", "commission": "6%"}
            ]
        }),
        "governance" => json!({
            "active_proposals": 3,
            "proposals": [
                {"id": 1, "title": "Increase block reward", "status": "active"},
                {"id": 2, "title": "Update staking parameters", "status": "active"},
                {"id": 3, "title": "Add new validator", "status": "active"}
            ]
        }),
        _ => return DataResult::Error(UNKNOWN_DATA_TYPE.to_string()),
    };

    match payload {
        Value::Object(map) => DataResult::Data(map),
        _ => DataResult::Error(UNKNOWN_DATA_TYPE.to_string()),
    }
}

pub fn for_category(category: DataCategory) -> DataResult {
    mock_data(category.key())
}
