//! Request bodies, one per API operation.
//!
//! Each type flattens a [`RequestBase`] carrying the merchant credentials,
//! session token and (unserialized) server host, then adds the fields of
//! its operation. Types derive [`Default`]; build them with struct-update
//! syntax:
//!
//! ```rust
//! use safecharge_proto::RequestBase;
//! use safecharge_proto::request::GetOrderDetailsRequest;
//!
//! let request = GetOrderDetailsRequest {
//!     base: RequestBase::new("2885023999185468261", "5612")
//!         .with_server_host("https://ppp-test.safecharge.com/ppp/"),
//!     order_id: "33704071".into(),
//! };
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{Address, CardData, Item, RequestBase, UpoReference, UrlDetails, UserDetails};
use crate::response::{
    AddUpoApmResponse, AddUpoCreditCardByTempTokenResponse, AddUpoCreditCardByTokenResponse,
    AddUpoCreditCardResponse, Authorization3dResponse, CancelSubscriptionResponse,
    CardTokenizationResponse, CreateSubscriptionResponse, DeleteUpoResponse, Dynamic3dResponse,
    EditUpoApmResponse, EditUpoCreditCardResponse, EnableUpoResponse,
    GetMerchantPaymentMethodsResponse, GetOrderDetailsResponse, GetPaymentPageResponse,
    GetSessionTokenResponse, GetSubscriptionPlansResponse, GetSubscriptionsListResponse,
    GetUserDetailsResponse, GetUserUposResponse, OpenOrderResponse, Payment3dResponse,
    PaymentApmResponse, PaymentCcResponse, PayoutResponse, RefundTransactionResponse,
    SettleTransactionResponse, SuspendUpoResponse, UpdateOrderResponse, UserResponse,
    VoidTransactionResponse,
};
use crate::{ApiRequest, RequestKind};

macro_rules! api_request {
    ($request:ty => $response:ty, $kind:expr) => {
        impl ApiRequest for $request {
            const KIND: RequestKind = $kind;
            type Response = $response;

            fn base(&self) -> &RequestBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut RequestBase {
                &mut self.base
            }
        }
    };
}

/// Order contents shared by order and payment-page operations.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDetails {
    /// ISO 4217 currency code.
    pub currency: String,
    /// Total amount.
    pub amount: String,
    /// Line items.
    pub items: Vec<Item>,
    /// Payer details.
    pub user_details: Option<Address>,
    /// Billing address.
    pub billing_address: Option<Address>,
    /// Shipping address.
    pub shipping_address: Option<Address>,
    /// Redirect and notification URLs.
    pub url_details: Option<UrlDetails>,
    /// Merchant-side user identifier.
    pub user_token_id: Option<String>,
    /// Merchant-side order reference.
    pub client_unique_id: Option<String>,
}

/// Follow-up operation on an existing transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionReference {
    /// Gateway id of the original transaction.
    pub related_transaction_id: String,
    /// Amount to settle, void or refund.
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Authorization code of the original transaction.
    pub auth_code: Option<String>,
    /// Merchant-side reference.
    pub client_unique_id: Option<String>,
    /// Free-form comment.
    pub comment: Option<String>,
}

/// Opens a session; the reply carries the session token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetSessionTokenRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
}

/// Opens an order for a later payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenOrderRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
}

/// Replaces the contents of an open order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateOrderRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Order to update.
    pub order_id: String,
    /// New order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
}

/// Fetches an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetOrderDetailsRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Order to fetch.
    pub order_id: String,
}

/// Card payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentCcRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Open order to pay.
    pub order_id: Option<String>,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
    /// Card to charge.
    pub card_data: Option<CardData>,
    /// `Auth` or `Sale`.
    pub transaction_type: Option<String>,
    /// Stored payment option to charge instead of `card_data`.
    pub user_payment_option_id: Option<String>,
    /// Recurring charge flag (`"1"`).
    pub is_rebilling: Option<String>,
}

/// Alternative payment method (APM) payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentApmRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Open order to pay.
    pub order_id: Option<String>,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
    /// APM identifier (e.g. `apmgw_expresscheckout`).
    pub payment_method: String,
    /// APM-specific account fields.
    pub user_account_details: HashMap<String, String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    /// Stored payment option to charge.
    pub user_payment_option_id: Option<String>,
}

/// 3-D Secure authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Authorization3dRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Open order to pay.
    pub order_id: Option<String>,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
    /// Card to authorize.
    pub card_data: Option<CardData>,
    /// `Auth` or `Sale`.
    pub transaction_type: Option<String>,
    /// Stored payment option to authorize instead of `card_data`.
    pub user_payment_option_id: Option<String>,
}

/// Dynamic 3-D Secure: decides whether the payment needs a challenge.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dynamic3dRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Open order to pay.
    pub order_id: Option<String>,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
    /// Card to check.
    pub card_data: Option<CardData>,
    /// Stored payment option to check instead of `card_data`.
    pub user_payment_option_id: Option<String>,
    /// Transaction that started the 3-D Secure flow.
    pub related_transaction_id: Option<String>,
}

/// Exchanges card details for a temporary token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardTokenizationRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Card to tokenize.
    pub card_data: CardData,
    /// Billing address.
    pub billing_address: Option<Address>,
    /// Merchant-side user identifier.
    pub user_token_id: Option<String>,
}

/// Completes a 3-D Secure payment after the challenge.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment3dRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Open order to pay.
    pub order_id: Option<String>,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
    /// Card that was challenged.
    pub card_data: Option<CardData>,
    /// Issuer's `PaRes` returned by the ACS.
    pub pa_response: Option<String>,
    /// Transaction returned by `authorization3D` or `dynamic3D`.
    pub related_transaction_id: Option<String>,
    /// `Auth` or `Sale`.
    pub transaction_type: Option<String>,
}

/// Stores a card as a payment option using a temporary token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddUpoCreditCardByTempTokenRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: String,
    /// Token from `cardTokenization`.
    pub cc_temp_token: String,
    /// Billing address.
    pub billing_address: Option<Address>,
}

/// Settles an authorized transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettleTransactionRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Transaction to settle.
    #[serde(flatten)]
    pub transaction: TransactionReference,
}

/// Voids a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoidTransactionRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Transaction to void.
    #[serde(flatten)]
    pub transaction: TransactionReference,
}

/// Refunds a settled transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefundTransactionRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Transaction to refund.
    #[serde(flatten)]
    pub transaction: TransactionReference,
}

/// Stores a card as a payment option from clear card details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddUpoCreditCardRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: String,
    /// Card number.
    pub cc_card_number: String,
    /// Expiry month (`MM`).
    pub cc_exp_month: String,
    /// Expiry year (`YYYY`).
    pub cc_exp_year: String,
    /// Card holder name.
    pub cc_name_on_card: String,
    /// Billing address.
    pub billing_address: Option<Address>,
}

/// Stores an APM account as a payment option.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddUpoApmRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: String,
    /// APM identifier.
    pub payment_method_name: String,
    /// APM-specific account fields.
    pub apm_data: HashMap<String, String>,
    /// Billing address.
    pub billing_address: Option<Address>,
}

/// Lists the payment methods available to the merchant.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMerchantPaymentMethodsRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Filter by ISO 4217 currency code.
    pub currency_code: Option<String>,
    /// Filter by ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    /// Language for display names.
    pub language_code: Option<String>,
}

/// Cancels a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelSubscriptionRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Subscription to cancel.
    pub subscription_id: String,
}

/// Subscribes a user payment option to a plan.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSubscriptionRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Plan to subscribe to.
    pub plan_id: String,
    /// Payment option to charge.
    #[serde(flatten)]
    pub upo: UpoReference,
    /// Initial charge, if different from the plan's.
    pub initial_amount: Option<String>,
    /// Recurring charge, if different from the plan's.
    pub recurring_amount: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
}

/// Lists a user's subscriptions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetSubscriptionsListRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: Option<String>,
    /// Filter by plan.
    pub plan_id: Option<String>,
    /// Filter by status (`ACTIVE`, `INACTIVE`).
    pub subscription_status: Option<String>,
    /// Offset of the first result.
    pub first_result: Option<String>,
    /// Page size.
    pub max_results: Option<String>,
}

/// Lists the merchant's subscription plans.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetSubscriptionPlansRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Filter by plan status.
    pub plan_status: Option<String>,
    /// Filter by ISO 4217 currency code.
    pub currency: Option<String>,
}

/// Pays money out to a stored payment option.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayoutRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Payment option receiving the funds.
    #[serde(flatten)]
    pub upo: UpoReference,
    /// Amount to pay out.
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Merchant-side reference.
    pub client_unique_id: Option<String>,
    /// Free-form comment.
    pub comment: Option<String>,
}

/// Registers a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// User details.
    #[serde(flatten)]
    pub user: UserDetails,
}

/// Updates a registered user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// User details.
    #[serde(flatten)]
    pub user: UserDetails,
}

/// Fetches a registered user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUserDetailsRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: String,
}

/// Stores a card as a payment option from a network token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddUpoCreditCardByTokenRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: String,
    /// Card token.
    pub card_token: String,
    /// Card holder name.
    pub card_holder_name: Option<String>,
    /// Expiry month (`MM`).
    pub expiration_month: Option<String>,
    /// Expiry year (`YYYY`).
    pub expiration_year: Option<String>,
    /// Card BIN.
    pub bin: Option<String>,
    /// Last four digits of the card number.
    pub last4_digits: Option<String>,
    /// Billing address.
    pub billing_address: Option<Address>,
}

/// Lists a user's stored payment options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUserUposRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Merchant-side user identifier.
    pub user_token_id: String,
}

/// Edits a stored card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditUpoCreditCardRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Payment option to edit.
    #[serde(flatten)]
    pub upo: UpoReference,
    /// New expiry month (`MM`).
    pub cc_exp_month: Option<String>,
    /// New expiry year (`YYYY`).
    pub cc_exp_year: Option<String>,
    /// New card holder name.
    pub cc_name_on_card: Option<String>,
    /// New billing address.
    pub billing_address: Option<Address>,
}

/// Edits a stored APM account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditUpoApmRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Payment option to edit.
    #[serde(flatten)]
    pub upo: UpoReference,
    /// APM-specific account fields.
    pub apm_data: HashMap<String, String>,
    /// New billing address.
    pub billing_address: Option<Address>,
}

/// Re-enables a suspended payment option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnableUpoRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Payment option to enable.
    #[serde(flatten)]
    pub upo: UpoReference,
}

/// Deletes a stored payment option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteUpoRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Payment option to delete.
    #[serde(flatten)]
    pub upo: UpoReference,
}

/// Suspends a stored payment option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuspendUpoRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Payment option to suspend.
    #[serde(flatten)]
    pub upo: UpoReference,
}

/// Creates a hosted payment page for an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPaymentPageRequest {
    /// Merchant fields.
    #[serde(flatten)]
    pub base: RequestBase,
    /// Order contents.
    #[serde(flatten)]
    pub order: OrderDetails,
    /// Preselected payment method.
    pub payment_method: Option<String>,
}

api_request!(GetSessionTokenRequest => GetSessionTokenResponse, RequestKind::GetSessionToken);
api_request!(OpenOrderRequest => OpenOrderResponse, RequestKind::OpenOrder);
api_request!(UpdateOrderRequest => UpdateOrderResponse, RequestKind::UpdateOrder);
api_request!(GetOrderDetailsRequest => GetOrderDetailsResponse, RequestKind::GetOrderDetails);
api_request!(PaymentCcRequest => PaymentCcResponse, RequestKind::PaymentCc);
api_request!(PaymentApmRequest => PaymentApmResponse, RequestKind::PaymentApm);
api_request!(Authorization3dRequest => Authorization3dResponse, RequestKind::Authorization3d);
api_request!(Dynamic3dRequest => Dynamic3dResponse, RequestKind::Dynamic3d);
api_request!(CardTokenizationRequest => CardTokenizationResponse, RequestKind::CardTokenization);
api_request!(Payment3dRequest => Payment3dResponse, RequestKind::Payment3d);
api_request!(
    AddUpoCreditCardByTempTokenRequest => AddUpoCreditCardByTempTokenResponse,
    RequestKind::AddUpoCreditCardByTempToken
);
api_request!(SettleTransactionRequest => SettleTransactionResponse, RequestKind::SettleTransaction);
api_request!(VoidTransactionRequest => VoidTransactionResponse, RequestKind::VoidTransaction);
api_request!(RefundTransactionRequest => RefundTransactionResponse, RequestKind::RefundTransaction);
api_request!(AddUpoCreditCardRequest => AddUpoCreditCardResponse, RequestKind::AddUpoCreditCard);
api_request!(AddUpoApmRequest => AddUpoApmResponse, RequestKind::AddUpoApm);
api_request!(
    GetMerchantPaymentMethodsRequest => GetMerchantPaymentMethodsResponse,
    RequestKind::GetMerchantPaymentMethods
);
api_request!(
    CancelSubscriptionRequest => CancelSubscriptionResponse,
    RequestKind::CancelSubscription
);
api_request!(
    CreateSubscriptionRequest => CreateSubscriptionResponse,
    RequestKind::CreateSubscription
);
api_request!(
    GetSubscriptionsListRequest => GetSubscriptionsListResponse,
    RequestKind::GetSubscriptionsList
);
api_request!(
    GetSubscriptionPlansRequest => GetSubscriptionPlansResponse,
    RequestKind::GetSubscriptionPlans
);
api_request!(PayoutRequest => PayoutResponse, RequestKind::Payout);
api_request!(CreateUserRequest => UserResponse, RequestKind::CreateUser);
api_request!(UpdateUserRequest => UserResponse, RequestKind::UpdateUser);
api_request!(GetUserDetailsRequest => GetUserDetailsResponse, RequestKind::GetUserDetails);
api_request!(
    AddUpoCreditCardByTokenRequest => AddUpoCreditCardByTokenResponse,
    RequestKind::AddUpoCreditCardByToken
);
api_request!(GetUserUposRequest => GetUserUposResponse, RequestKind::GetUserUpos);
api_request!(EditUpoCreditCardRequest => EditUpoCreditCardResponse, RequestKind::EditUpoCreditCard);
api_request!(EditUpoApmRequest => EditUpoApmResponse, RequestKind::EditUpoApm);
api_request!(EnableUpoRequest => EnableUpoResponse, RequestKind::EnableUpo);
api_request!(DeleteUpoRequest => DeleteUpoResponse, RequestKind::DeleteUpo);
api_request!(SuspendUpoRequest => SuspendUpoResponse, RequestKind::SuspendUpo);
api_request!(GetPaymentPageRequest => GetPaymentPageResponse, RequestKind::GetPaymentPage);
