use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::money::TransportMoney;
use crate::domain::Envelope;

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonData {
    remaining_balance: TransportMoney,
}

/// Decode `GET /api/v3/balance`.
///
/// Unlike the other endpoints, the body's own `status` decides the envelope kind.
pub fn decode_balance_json_response(json: &str) -> Result<Envelope<String>, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;

    if parsed.status != SUCCESS_STATUS {
        let message = parsed
            .message
            .unwrap_or_else(|| format!("gateway reported status `{}`", parsed.status));
        return Ok(Envelope::error(message));
    }

    let raw = parsed
        .data
        .ok_or(TransportError::MissingField("data.remaining_balance"))?;
    let data: BalanceJsonData = serde_json::from_str(raw.get())?;
    Ok(Envelope::success(data.remaining_balance.into_amount()))
}
