use serde::Deserialize;
use serde::de::Error as DeError;

/// Balance value returned by CloudSMS as either a JSON string (`"€12.50"`) or number.
///
/// For numbers, the raw JSON token is preserved so `12.50` stays `"12.50"`
/// instead of becoming `"12.5"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMoney(String);

impl TransportMoney {
    /// Amount text with every euro sign removed.
    pub fn into_amount(self) -> String {
        self.0.replace('€', "")
    }
}

impl<'de> Deserialize<'de> for TransportMoney {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected remaining_balance to be JSON string or number",
            )),
        }
    }
}
