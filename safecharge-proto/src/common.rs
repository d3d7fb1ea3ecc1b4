//! Field groups shared across request and response types.
//!
//! Amounts and other numeric values the API treats as decimals are carried
//! as strings, so they round-trip without precision loss.

use serde::{Deserialize, Serialize};

/// Merchant identification and authentication fields present on every request.
///
/// `server_host` selects the API environment the request is sent to. It is
/// never serialized: the dispatcher consumes it to build the service URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBase {
    /// Merchant account identifier.
    pub merchant_id: String,

    /// Merchant site identifier.
    pub merchant_site_id: String,

    /// Caller-generated identifier echoed back in the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_id: Option<String>,

    /// Request timestamp (`YYYYMMDDHHmmss`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,

    /// Request checksum computed over the authenticated fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    /// Session token obtained from `getSessionToken`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Server host (e.g. `https://ppp-test.safecharge.com/ppp/`).
    #[serde(skip)]
    pub server_host: Option<String>,
}

impl RequestBase {
    /// Creates a base with the merchant credentials set.
    #[must_use]
    pub fn new(merchant_id: impl Into<String>, merchant_site_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_site_id: merchant_site_id.into(),
            ..Self::default()
        }
    }

    /// Sets the server host the request will be dispatched to.
    #[must_use]
    pub fn with_server_host(mut self, host: impl Into<String>) -> Self {
        self.server_host = Some(host.into());
        self
    }

    /// Sets the session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Sets the client request id.
    #[must_use]
    pub fn with_client_request_id(mut self, id: impl Into<String>) -> Self {
        self.client_request_id = Some(id.into());
        self
    }
}

/// Overall outcome reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The call was processed.
    Success,
    /// The call was rejected; see `errCode` and `reason`.
    Error,
    /// Missing or unrecognized status.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Outcome of a gateway transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Approved by the issuer.
    Approved,
    /// Declined by the issuer.
    Declined,
    /// Failed during processing.
    Error,
    /// The payer must be redirected to complete the payment.
    Redirect,
    /// Awaiting asynchronous confirmation.
    Pending,
    /// Missing or unrecognized status.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Fields common to every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBase {
    /// Overall call status.
    #[serde(default)]
    pub status: Status,

    /// API error code; `0` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_code: Option<i64>,

    /// Human-readable error description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Merchant account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Merchant site identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_site_id: Option<String>,

    /// API version that served the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Echo of the request's `clientRequestId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_id: Option<String>,

    /// Session token for the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Gateway-side request identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_request_id: Option<i64>,

    /// Echo of the request's `clientUniqueId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_unique_id: Option<String>,
}

impl ResponseBase {
    /// Returns `true` when the API reported [`Status::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// A purchased item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Unit price.
    pub price: String,
    /// Quantity.
    pub quantity: String,
}

impl Item {
    /// Creates an item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

/// Postal and contact details, used for user, billing and shipping data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// State or province code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Mobile phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
}

/// Redirect and notification URLs for asynchronous payment flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDetails {
    /// Where the payer lands after a successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Where the payer lands after a failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    /// Where the payer lands while the payment is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_url: Option<String>,
    /// Server-to-server notification endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
}

/// Card details for card-present payment and tokenization calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    /// Primary account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// Name as printed on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<String>,
    /// Two-digit expiry month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    /// Two- or four-digit expiry year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    /// Card verification value.
    #[serde(default, rename = "CVV", skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    /// Temporary token returned by `cardTokenization`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_temp_token: Option<String>,
}

/// Identifies a stored user payment option (UPO).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpoReference {
    /// Merchant-side user identifier.
    pub user_token_id: String,
    /// Identifier of the stored payment option.
    pub user_payment_option_id: String,
}

/// Gateway transaction result fields shared by payment and follow-up replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutcome {
    /// Order the transaction belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Issuer decision.
    #[serde(default)]
    pub transaction_status: TransactionStatus,
    /// Gateway transaction identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Issuer authorization code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Identifier assigned by the external payment provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_transaction_id: Option<String>,
    /// Stored payment option used or created by the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_payment_option_id: Option<String>,
    /// Gateway error code; `0` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_error_code: Option<i64>,
    /// Detailed gateway error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_extended_error_code: Option<i64>,
    /// Gateway error description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_error_reason: Option<String>,
}

/// Personal details of a stored user, shared by `createUser` and `updateUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    /// Merchant-side user identifier.
    pub user_token_id: String,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// State or province code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Preferred locale, e.g. `en_US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}
