use rust_decimal::Decimal;
use serde::Deserialize;

/// Point-in-time market snapshot for one trading pair.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickerRecord {
    /// Quote currency code (wire name: `"cur"`).
    #[serde(rename = "cur")]
    pub currency: String,
    pub symbol: String,
    pub last: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub vwap: Decimal,
    pub max_bid: Decimal,
    pub min_ask: Decimal,
    pub best_bid: Decimal,
    pub best_ask: Decimal,
    pub usd: Decimal,
}

impl TickerRecord {
    /// Returns every numeric field paired with its wire name.
    pub fn numeric_fields(&self) -> [(&'static str, Decimal); 10] {
        [
            ("last", self.last),
            ("high", self.high),
            ("low", self.low),
            ("volume", self.volume),
            ("vwap", self.vwap),
            ("maxBid", self.max_bid),
            ("minAsk", self.min_ask),
            ("bestBid", self.best_bid),
            ("bestAsk", self.best_ask),
            ("usd", self.usd),
        ]
    }

    /// Best ask minus best bid. Negative when the book is crossed.
    pub fn spread(&self) -> Decimal {
        self.best_ask - self.best_bid
    }

    /// Checks that every numeric field is non-negative.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first negative field.
    pub fn validate(&self) -> Result<(), String> {
        match self
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| *value < Decimal::ZERO)
        {
            Some((name, value)) => Err(format!(
                "{}: field {name} is negative ({value})",
                self.symbol
            )),
            None => Ok(()),
        }
    }
}

/// Response body of the ticker endpoint.
///
/// A request for one pair answers with a bare object, a request for all
/// pairs with an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TickerPayload {
    Many(Vec<TickerRecord>),
    One(TickerRecord),
}

impl TickerPayload {
    /// Normalises the payload to a sequence, keeping response order.
    pub fn into_records(self) -> Vec<TickerRecord> {
        match self {
            TickerPayload::Many(records) => records,
            TickerPayload::One(record) => vec![record],
        }
    }
}

/// Error envelope some endpoints return with a success status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub success: bool,
    #[serde(alias = "message")]
    pub error_message: Option<String>,
}
