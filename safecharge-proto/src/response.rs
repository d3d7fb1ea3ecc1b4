//! Response bodies, one per [`ResponseKind`].
//!
//! Every type flattens a [`ResponseBase`] with the call status and echo
//! fields. Payment-like replies additionally flatten a
//! [`TransactionOutcome`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{ResponseBase, TransactionOutcome, UserDetails};
use crate::{ApiResponse, ResponseKind};

macro_rules! api_response {
    ($response:ty, $kind:expr) => {
        impl ApiResponse for $response {
            const KIND: ResponseKind = $kind;

            fn base(&self) -> &ResponseBase {
                &self.base
            }
        }
    };
}

/// Reply to `getSessionToken`; the token is in [`ResponseBase::session_token`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionTokenResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `openOrder`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenOrderResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Identifier of the opened order.
    pub order_id: Option<String>,
    /// Merchant-side user identifier.
    pub user_token_id: Option<String>,
}

/// Reply to `updateOrder`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateOrderResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Identifier of the updated order.
    pub order_id: Option<String>,
}

/// Reply to `getOrderDetails`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetOrderDetailsResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Order identifier.
    pub order_id: Option<String>,
    /// Order state as reported by the gateway.
    pub order_status: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Order total.
    pub amount: Option<String>,
}

/// Reply to `paymentCC`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCcResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
}

/// Reply to `paymentAPM`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentApmResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
    /// Where to send the payer to complete the payment.
    pub redirect_url: Option<String>,
}

/// Reply to `authorization3D`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Authorization3dResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
    /// Access control server URL for the challenge.
    pub acs_url: Option<String>,
    /// Payer authentication request to post to the ACS.
    pub pa_request: Option<String>,
    /// `"1"` if the card is enrolled in 3-D Secure.
    pub three_d_flow: Option<String>,
}

/// Reply to `dynamic3D`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dynamic3dResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
    /// Access control server URL for the challenge.
    pub acs_url: Option<String>,
    /// Payer authentication request to post to the ACS.
    pub pa_request: Option<String>,
    /// `"1"` if a challenge is required.
    pub three_d_flow: Option<String>,
    /// Whether liability shifted to the issuer.
    pub is_liability_on_issuer: Option<String>,
}

/// Reply to `cardTokenization`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardTokenizationResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Temporary card token.
    pub cc_temp_token: Option<String>,
    /// Card BIN.
    pub bin: Option<String>,
    /// Last four digits of the card number.
    pub last4_digits: Option<String>,
}

/// Reply to `payment3D`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment3dResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
}

/// Reply to every operation that stores a payment option.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredUpo {
    /// Identifier of the stored payment option.
    pub user_payment_option_id: Option<String>,
}

/// Reply to `addUPOCreditCardByTempToken`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddUpoCreditCardByTempTokenResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Stored payment option.
    #[serde(flatten)]
    pub upo: StoredUpo,
}

/// Reply to `settleTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleTransactionResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
}

/// Reply to `voidTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoidTransactionResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
}

/// Reply to `refundTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundTransactionResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
}

/// Reply to `addUPOCreditCard`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddUpoCreditCardResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Stored payment option.
    #[serde(flatten)]
    pub upo: StoredUpo,
}

/// Reply to `addUPOAPM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddUpoApmResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Stored payment option.
    #[serde(flatten)]
    pub upo: StoredUpo,
}

/// A payment method offered to the merchant.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethod {
    /// Method identifier (e.g. `cc_card`, `apmgw_expresscheckout`).
    pub payment_method: String,
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Whether the method is processed without a redirect.
    pub is_direct: Option<String>,
    /// Field names the method requires.
    pub fields: Vec<serde_json::Value>,
}

/// Reply to `getMerchantPaymentMethods`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMerchantPaymentMethodsResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Available methods.
    pub payment_methods: Vec<PaymentMethod>,
}

/// Reply to `cancelSubscription`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSubscriptionResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `createSubscription`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSubscriptionResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Identifier of the new subscription.
    pub subscription_id: Option<String>,
}

/// A subscription entry.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    /// Subscription identifier.
    pub subscription_id: String,
    /// Plan identifier.
    pub plan_id: Option<String>,
    /// Subscriber.
    pub user_token_id: Option<String>,
    /// Charged payment option.
    pub user_payment_option_id: Option<String>,
    /// `ACTIVE` or `INACTIVE`.
    pub subscription_status: Option<String>,
}

/// Reply to `getSubscriptionsList`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetSubscriptionsListResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Matching subscriptions.
    pub subscriptions: Vec<Subscription>,
    /// Total number of matches across pages.
    pub total_count: Option<u64>,
}

/// A subscription plan.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionPlan {
    /// Plan identifier.
    pub plan_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Initial charge.
    pub initial_amount: Option<String>,
    /// Recurring charge.
    pub recurring_amount: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Plan status.
    pub plan_status: Option<String>,
}

/// Reply to `getSubscriptionPlans`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetSubscriptionPlansResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Matching plans.
    pub plans: Vec<SubscriptionPlan>,
    /// Total number of matches across pages.
    pub total_count: Option<u64>,
}

/// Reply to `payout`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Transaction result.
    #[serde(flatten)]
    pub transaction: TransactionOutcome,
}

/// Reply to `createUser` and `updateUser`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Gateway-side user identifier.
    pub user_id: Option<i64>,
}

/// Reply to `getUserDetails`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUserDetailsResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// The stored user.
    pub user_details: Option<UserDetails>,
}

/// Reply to `addUPOCreditCardByToken`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddUpoCreditCardByTokenResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Stored payment option.
    #[serde(flatten)]
    pub upo: StoredUpo,
}

/// A stored payment option as listed by `getUserUPOs`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPaymentOption {
    /// Payment option identifier.
    pub user_payment_option_id: String,
    /// Method name (`cc_card` or an APM identifier).
    pub payment_method_name: Option<String>,
    /// `enabled`, `disabled` or `suspended`.
    pub upo_status: Option<String>,
    /// Method-specific stored fields.
    pub upo_data: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Reply to `getUserUPOs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUserUposResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Stored payment options.
    pub payment_methods: Vec<UserPaymentOption>,
}

/// Reply to `editUPOCC`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditUpoCreditCardResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `editUPOAPM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditUpoApmResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `enableUPO`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableUpoResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `deleteUPO`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUpoResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `suspendUPO`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspendUpoResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
}

/// Reply to `getPaymentPage`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPaymentPageResponse {
    /// Status fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Hosted payment page URL.
    pub payment_page_url: Option<String>,
}

api_response!(GetSessionTokenResponse, ResponseKind::GetSessionToken);
api_response!(OpenOrderResponse, ResponseKind::OpenOrder);
api_response!(UpdateOrderResponse, ResponseKind::UpdateOrder);
api_response!(GetOrderDetailsResponse, ResponseKind::GetOrderDetails);
api_response!(PaymentCcResponse, ResponseKind::PaymentCc);
api_response!(PaymentApmResponse, ResponseKind::PaymentApm);
api_response!(Authorization3dResponse, ResponseKind::Authorization3d);
api_response!(Dynamic3dResponse, ResponseKind::Dynamic3d);
api_response!(CardTokenizationResponse, ResponseKind::CardTokenization);
api_response!(Payment3dResponse, ResponseKind::Payment3d);
api_response!(AddUpoCreditCardByTempTokenResponse, ResponseKind::AddUpoCreditCardByTempToken);
api_response!(SettleTransactionResponse, ResponseKind::SettleTransaction);
api_response!(VoidTransactionResponse, ResponseKind::VoidTransaction);
api_response!(RefundTransactionResponse, ResponseKind::RefundTransaction);
api_response!(AddUpoCreditCardResponse, ResponseKind::AddUpoCreditCard);
api_response!(AddUpoApmResponse, ResponseKind::AddUpoApm);
api_response!(GetMerchantPaymentMethodsResponse, ResponseKind::GetMerchantPaymentMethods);
api_response!(CancelSubscriptionResponse, ResponseKind::CancelSubscription);
api_response!(CreateSubscriptionResponse, ResponseKind::CreateSubscription);
api_response!(GetSubscriptionsListResponse, ResponseKind::GetSubscriptionsList);
api_response!(GetSubscriptionPlansResponse, ResponseKind::GetSubscriptionPlans);
api_response!(PayoutResponse, ResponseKind::Payout);
api_response!(UserResponse, ResponseKind::User);
api_response!(GetUserDetailsResponse, ResponseKind::GetUserDetails);
api_response!(AddUpoCreditCardByTokenResponse, ResponseKind::AddUpoCreditCardByToken);
api_response!(GetUserUposResponse, ResponseKind::GetUserUpos);
api_response!(EditUpoCreditCardResponse, ResponseKind::EditUpoCreditCard);
api_response!(EditUpoApmResponse, ResponseKind::EditUpoApm);
api_response!(EnableUpoResponse, ResponseKind::EnableUpo);
api_response!(DeleteUpoResponse, ResponseKind::DeleteUpo);
api_response!(SuspendUpoResponse, ResponseKind::SuspendUpo);
api_response!(GetPaymentPageResponse, ResponseKind::GetPaymentPage);

/// Decodes `body` as `T` and re-encodes it, dropping fields `T` does not know.
fn normalize<T: DeserializeOwned + Serialize>(
    body: &str,
) -> Result<serde_json::Value, serde_json::Error> {
    let typed: T = serde_json::from_str(body)?;
    serde_json::to_value(typed)
}

impl ResponseKind {
    /// Decodes a raw reply as this kind's response type.
    ///
    /// Returns the reply normalized through the typed shape, for callers
    /// that only know the kind at runtime.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if `body` does not match the shape.
    pub fn decode(self, body: &str) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::GetSessionToken => normalize::<GetSessionTokenResponse>(body),
            Self::OpenOrder => normalize::<OpenOrderResponse>(body),
            Self::UpdateOrder => normalize::<UpdateOrderResponse>(body),
            Self::GetOrderDetails => normalize::<GetOrderDetailsResponse>(body),
            Self::PaymentCc => normalize::<PaymentCcResponse>(body),
            Self::PaymentApm => normalize::<PaymentApmResponse>(body),
            Self::Authorization3d => normalize::<Authorization3dResponse>(body),
            Self::Dynamic3d => normalize::<Dynamic3dResponse>(body),
            Self::CardTokenization => normalize::<CardTokenizationResponse>(body),
            Self::Payment3d => normalize::<Payment3dResponse>(body),
            Self::AddUpoCreditCardByTempToken => {
                normalize::<AddUpoCreditCardByTempTokenResponse>(body)
            }
            Self::SettleTransaction => normalize::<SettleTransactionResponse>(body),
            Self::VoidTransaction => normalize::<VoidTransactionResponse>(body),
            Self::RefundTransaction => normalize::<RefundTransactionResponse>(body),
            Self::AddUpoCreditCard => normalize::<AddUpoCreditCardResponse>(body),
            Self::AddUpoApm => normalize::<AddUpoApmResponse>(body),
            Self::GetMerchantPaymentMethods => {
                normalize::<GetMerchantPaymentMethodsResponse>(body)
            }
            Self::CancelSubscription => normalize::<CancelSubscriptionResponse>(body),
            Self::CreateSubscription => normalize::<CreateSubscriptionResponse>(body),
            Self::GetSubscriptionsList => normalize::<GetSubscriptionsListResponse>(body),
            Self::GetSubscriptionPlans => normalize::<GetSubscriptionPlansResponse>(body),
            Self::Payout => normalize::<PayoutResponse>(body),
            Self::User => normalize::<UserResponse>(body),
            Self::GetUserDetails => normalize::<GetUserDetailsResponse>(body),
            Self::AddUpoCreditCardByToken => normalize::<AddUpoCreditCardByTokenResponse>(body),
            Self::GetUserUpos => normalize::<GetUserUposResponse>(body),
            Self::EditUpoCreditCard => normalize::<EditUpoCreditCardResponse>(body),
            Self::EditUpoApm => normalize::<EditUpoApmResponse>(body),
            Self::EnableUpo => normalize::<EnableUpoResponse>(body),
            Self::DeleteUpo => normalize::<DeleteUpoResponse>(body),
            Self::SuspendUpo => normalize::<SuspendUpoResponse>(body),
            Self::GetPaymentPage => normalize::<GetPaymentPageResponse>(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{RequestBase, Status, TransactionStatus};
    use crate::request::GetOrderDetailsRequest;

    #[test]
    fn session_token_reply_decodes() {
        let body = r#"{"status":"SUCCESS","sessionToken":"abc123"}"#;
        let response: GetSessionTokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.base.status, Status::Success);
        assert_eq!(response.base.session_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn request_fields_survive_into_the_paired_response() {
        let request = GetOrderDetailsRequest {
            base: RequestBase::new("2885023999185468261", "5612")
                .with_session_token("e9a1bd14-0e5c-4b20-9ad1-a4c2d0a7fa4f")
                .with_client_request_id("20170216100230"),
            order_id: "33704071".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let response: GetOrderDetailsResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(response.order_id.as_deref(), Some("33704071"));
        assert_eq!(
            response.base.merchant_id.as_deref(),
            Some("2885023999185468261")
        );
        assert_eq!(response.base.merchant_site_id.as_deref(), Some("5612"));
        assert_eq!(
            response.base.session_token.as_deref(),
            Some("e9a1bd14-0e5c-4b20-9ad1-a4c2d0a7fa4f")
        );
        assert_eq!(
            response.base.client_request_id.as_deref(),
            Some("20170216100230")
        );
    }

    #[test]
    fn transaction_fields_are_flattened() {
        let body = r#"{
            "status": "SUCCESS",
            "errCode": 0,
            "orderId": "33704071",
            "transactionStatus": "APPROVED",
            "transactionId": "1110000000000751234",
            "authCode": "111361"
        }"#;
        let response: PaymentCcResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.base.err_code, Some(0));
        assert_eq!(response.transaction.transaction_status, TransactionStatus::Approved);
        assert_eq!(response.transaction.auth_code.as_deref(), Some("111361"));
    }

    #[test]
    fn decode_checks_the_shape_of_the_kind() {
        let ok = ResponseKind::OpenOrder
            .decode(r#"{"status":"SUCCESS","orderId":"42","extra":"dropped"}"#)
            .unwrap();
        assert_eq!(ok["orderId"], "42");
        assert!(ok.get("extra").is_none());

        let err = ResponseKind::OpenOrder.decode(r#"{"orderId":42}"#);
        assert!(err.is_err());
        assert!(ResponseKind::User.decode("not json").is_err());
    }
}
