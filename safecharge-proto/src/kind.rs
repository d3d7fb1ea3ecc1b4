//! Request and response kinds, and the static endpoint table that binds them.
//!
//! Every API operation is identified by a [`RequestKind`]. The kind decides
//! two things at dispatch time: the path appended to the server host, and the
//! [`ResponseKind`] the reply is decoded into. Both live in [`ENDPOINTS`],
//! a fixed table with exactly one [`Endpoint`] per request kind.
//!
//! The table is closed: a typed caller cannot name an unregistered kind. The
//! only fallible lookup is by name ([`RequestKind::from_str`]), which fails
//! with [`UnknownRequestKind`] instead of guessing.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Discriminator for a SafeCharge API operation.
///
/// Serializes as its API operation name ([`RequestKind::name`]) and
/// deserializes through [`FromStr`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub enum RequestKind {
    /// `getSessionToken`
    GetSessionToken,
    /// `openOrder`
    OpenOrder,
    /// `updateOrder`
    UpdateOrder,
    /// `getOrderDetails`
    GetOrderDetails,
    /// `paymentCC`
    PaymentCc,
    /// `paymentAPM`
    PaymentApm,
    /// `authorization3D`
    Authorization3d,
    /// `dynamic3D`
    Dynamic3d,
    /// `cardTokenization`
    CardTokenization,
    /// `payment3D`
    Payment3d,
    /// `addUPOCreditCardByTempToken`
    AddUpoCreditCardByTempToken,
    /// `settleTransaction`
    SettleTransaction,
    /// `voidTransaction`
    VoidTransaction,
    /// `refundTransaction`
    RefundTransaction,
    /// `addUPOCreditCard`
    AddUpoCreditCard,
    /// `addUPOAPM`
    AddUpoApm,
    /// `getMerchantPaymentMethods`
    GetMerchantPaymentMethods,
    /// `cancelSubscription`
    CancelSubscription,
    /// `createSubscription`
    CreateSubscription,
    /// `getSubscriptionsList`
    GetSubscriptionsList,
    /// `getSubscriptionPlans`
    GetSubscriptionPlans,
    /// `payout`
    Payout,
    /// `createUser`
    CreateUser,
    /// `updateUser`
    UpdateUser,
    /// `getUserDetails`
    GetUserDetails,
    /// `addUPOCreditCardByToken`
    AddUpoCreditCardByToken,
    /// `getUserUPOs`
    GetUserUpos,
    /// `editUPOCC`
    EditUpoCreditCard,
    /// `editUPOAPM`
    EditUpoApm,
    /// `enableUPO`
    EnableUpo,
    /// `deleteUPO`
    DeleteUpo,
    /// `suspendUPO`
    SuspendUpo,
    /// `getPaymentPage`
    GetPaymentPage,
}

/// Discriminator for the shape of a SafeCharge API reply.
///
/// Distinct from [`RequestKind`]: `createUser` and `updateUser` share
/// [`ResponseKind::User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay)]
pub enum ResponseKind {
    /// Reply to `getSessionToken`.
    GetSessionToken,
    /// Reply to `openOrder`.
    OpenOrder,
    /// Reply to `updateOrder`.
    UpdateOrder,
    /// Reply to `getOrderDetails`.
    GetOrderDetails,
    /// Reply to `paymentCC`.
    PaymentCc,
    /// Reply to `paymentAPM`.
    PaymentApm,
    /// Reply to `authorization3D`.
    Authorization3d,
    /// Reply to `dynamic3D`.
    Dynamic3d,
    /// Reply to `cardTokenization`.
    CardTokenization,
    /// Reply to `payment3D`.
    Payment3d,
    /// Reply to `addUPOCreditCardByTempToken`.
    AddUpoCreditCardByTempToken,
    /// Reply to `settleTransaction`.
    SettleTransaction,
    /// Reply to `voidTransaction`.
    VoidTransaction,
    /// Reply to `refundTransaction`.
    RefundTransaction,
    /// Reply to `addUPOCreditCard`.
    AddUpoCreditCard,
    /// Reply to `addUPOAPM`.
    AddUpoApm,
    /// Reply to `getMerchantPaymentMethods`.
    GetMerchantPaymentMethods,
    /// Reply to `cancelSubscription`.
    CancelSubscription,
    /// Reply to `createSubscription`.
    CreateSubscription,
    /// Reply to `getSubscriptionsList`.
    GetSubscriptionsList,
    /// Reply to `getSubscriptionPlans`.
    GetSubscriptionPlans,
    /// Reply to `payout`.
    Payout,
    /// Reply to `createUser` and `updateUser`.
    User,
    /// Reply to `getUserDetails`.
    GetUserDetails,
    /// Reply to `addUPOCreditCardByToken`.
    AddUpoCreditCardByToken,
    /// Reply to `getUserUPOs`.
    GetUserUpos,
    /// Reply to `editUPOCC`.
    EditUpoCreditCard,
    /// Reply to `editUPOAPM`.
    EditUpoApm,
    /// Reply to `enableUPO`.
    EnableUpo,
    /// Reply to `deleteUPO`.
    DeleteUpo,
    /// Reply to `suspendUPO`.
    SuspendUpo,
    /// Reply to `getPaymentPage`.
    GetPaymentPage,
}

/// One row of the endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// The operation this row describes.
    pub request: RequestKind,
    /// The reply shape for the operation.
    pub response: ResponseKind,
    /// Path appended to the server host, without a leading slash.
    pub path: &'static str,
    /// Operation name as used by the API (e.g. `"getSessionToken"`).
    pub name: &'static str,
}

const fn endpoint(
    request: RequestKind,
    response: ResponseKind,
    name: &'static str,
    path: &'static str,
) -> Endpoint {
    Endpoint {
        request,
        response,
        path,
        name,
    }
}

/// The endpoint table, ordered by [`RequestKind`] discriminant.
#[rustfmt::skip]
pub static ENDPOINTS: [Endpoint; RequestKind::COUNT] = [
    endpoint(RequestKind::GetSessionToken, ResponseKind::GetSessionToken, "getSessionToken", "api/v1/getSessionToken.do"),
    endpoint(RequestKind::OpenOrder, ResponseKind::OpenOrder, "openOrder", "api/v1/openOrder.do"),
    endpoint(RequestKind::UpdateOrder, ResponseKind::UpdateOrder, "updateOrder", "api/v1/updateOrder.do"),
    endpoint(RequestKind::GetOrderDetails, ResponseKind::GetOrderDetails, "getOrderDetails", "api/v1/getOrderDetails.do"),
    endpoint(RequestKind::PaymentCc, ResponseKind::PaymentCc, "paymentCC", "api/v1/paymentCC.do"),
    endpoint(RequestKind::PaymentApm, ResponseKind::PaymentApm, "paymentAPM", "api/v1/paymentAPM.do"),
    endpoint(RequestKind::Authorization3d, ResponseKind::Authorization3d, "authorization3D", "api/v1/authorization3D.do"),
    endpoint(RequestKind::Dynamic3d, ResponseKind::Dynamic3d, "dynamic3D", "api/v1/dynamic3D.do"),
    endpoint(RequestKind::CardTokenization, ResponseKind::CardTokenization, "cardTokenization", "api/v1/cardTokenization.do"),
    endpoint(RequestKind::Payment3d, ResponseKind::Payment3d, "payment3D", "api/v1/payment3D.do"),
    endpoint(RequestKind::AddUpoCreditCardByTempToken, ResponseKind::AddUpoCreditCardByTempToken, "addUPOCreditCardByTempToken", "api/v1/addUPOCreditCardByTempToken.do"),
    endpoint(RequestKind::SettleTransaction, ResponseKind::SettleTransaction, "settleTransaction", "api/v1/settleTransaction.do"),
    endpoint(RequestKind::VoidTransaction, ResponseKind::VoidTransaction, "voidTransaction", "api/v1/voidTransaction.do"),
    endpoint(RequestKind::RefundTransaction, ResponseKind::RefundTransaction, "refundTransaction", "api/v1/refundTransaction.do"),
    endpoint(RequestKind::AddUpoCreditCard, ResponseKind::AddUpoCreditCard, "addUPOCreditCard", "api/v1/addUPOCreditCard.do"),
    endpoint(RequestKind::AddUpoApm, ResponseKind::AddUpoApm, "addUPOAPM", "api/v1/addUPOAPM.do"),
    endpoint(RequestKind::GetMerchantPaymentMethods, ResponseKind::GetMerchantPaymentMethods, "getMerchantPaymentMethods", "api/v1/getMerchantPaymentMethods.do"),
    endpoint(RequestKind::CancelSubscription, ResponseKind::CancelSubscription, "cancelSubscription", "api/v1/cancelSubscription.do"),
    endpoint(RequestKind::CreateSubscription, ResponseKind::CreateSubscription, "createSubscription", "api/v1/createSubscription.do"),
    endpoint(RequestKind::GetSubscriptionsList, ResponseKind::GetSubscriptionsList, "getSubscriptionsList", "api/v1/getSubscriptionsList.do"),
    endpoint(RequestKind::GetSubscriptionPlans, ResponseKind::GetSubscriptionPlans, "getSubscriptionPlans", "api/v1/getSubscriptionPlans.do"),
    endpoint(RequestKind::Payout, ResponseKind::Payout, "payout", "api/v1/payout.do"),
    endpoint(RequestKind::CreateUser, ResponseKind::User, "createUser", "api/v1/createUser.do"),
    endpoint(RequestKind::UpdateUser, ResponseKind::User, "updateUser", "api/v1/updateUser.do"),
    endpoint(RequestKind::GetUserDetails, ResponseKind::GetUserDetails, "getUserDetails", "api/v1/getUserDetails.do"),
    endpoint(RequestKind::AddUpoCreditCardByToken, ResponseKind::AddUpoCreditCardByToken, "addUPOCreditCardByToken", "api/v1/addUPOCreditCardByToken.do"),
    endpoint(RequestKind::GetUserUpos, ResponseKind::GetUserUpos, "getUserUPOs", "api/v1/getUserUPOs.do"),
    endpoint(RequestKind::EditUpoCreditCard, ResponseKind::EditUpoCreditCard, "editUPOCC", "api/v1/editUPOCC.do"),
    endpoint(RequestKind::EditUpoApm, ResponseKind::EditUpoApm, "editUPOAPM", "api/v1/editUPOAPM.do"),
    endpoint(RequestKind::EnableUpo, ResponseKind::EnableUpo, "enableUPO", "api/v1/enableUPO.do"),
    endpoint(RequestKind::DeleteUpo, ResponseKind::DeleteUpo, "deleteUPO", "api/v1/deleteUPO.do"),
    endpoint(RequestKind::SuspendUpo, ResponseKind::SuspendUpo, "suspendUPO", "api/v1/suspendUPO.do"),
    endpoint(RequestKind::GetPaymentPage, ResponseKind::GetPaymentPage, "getPaymentPage", "api/v1/getPaymentPage.do"),
];

impl RequestKind {
    /// Number of supported operations.
    pub const COUNT: usize = 33;

    /// Every request kind, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::GetSessionToken,
        Self::OpenOrder,
        Self::UpdateOrder,
        Self::GetOrderDetails,
        Self::PaymentCc,
        Self::PaymentApm,
        Self::Authorization3d,
        Self::Dynamic3d,
        Self::CardTokenization,
        Self::Payment3d,
        Self::AddUpoCreditCardByTempToken,
        Self::SettleTransaction,
        Self::VoidTransaction,
        Self::RefundTransaction,
        Self::AddUpoCreditCard,
        Self::AddUpoApm,
        Self::GetMerchantPaymentMethods,
        Self::CancelSubscription,
        Self::CreateSubscription,
        Self::GetSubscriptionsList,
        Self::GetSubscriptionPlans,
        Self::Payout,
        Self::CreateUser,
        Self::UpdateUser,
        Self::GetUserDetails,
        Self::AddUpoCreditCardByToken,
        Self::GetUserUpos,
        Self::EditUpoCreditCard,
        Self::EditUpoApm,
        Self::EnableUpo,
        Self::DeleteUpo,
        Self::SuspendUpo,
        Self::GetPaymentPage,
    ];

    /// Returns the endpoint table row for this kind.
    #[must_use]
    pub fn endpoint(self) -> &'static Endpoint {
        &ENDPOINTS[self as usize]
    }

    /// Path suffix appended to the server host to form the service URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.endpoint().path
    }

    /// The response kind replies to this operation are decoded into.
    #[must_use]
    pub fn response_kind(self) -> ResponseKind {
        self.endpoint().response
    }

    /// Operation name as used by the API (e.g. `"paymentCC"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.endpoint().name
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RequestKind {
    type Err = UnknownRequestKind;

    /// Accepts the API operation name (`"getUserUPOs"`), case-insensitively,
    /// with or without a trailing `"Request"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed
            .strip_suffix("Request")
            .or_else(|| trimmed.strip_suffix("request"))
            .unwrap_or(trimmed);
        ENDPOINTS
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.request)
            .ok_or_else(|| UnknownRequestKind(s.to_owned()))
    }
}

impl ResponseKind {
    /// Type-level name of the reply shape (e.g. `"UserResponse"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetSessionToken => "GetSessionTokenResponse",
            Self::OpenOrder => "OpenOrderResponse",
            Self::UpdateOrder => "UpdateOrderResponse",
            Self::GetOrderDetails => "GetOrderDetailsResponse",
            Self::PaymentCc => "PaymentCcResponse",
            Self::PaymentApm => "PaymentApmResponse",
            Self::Authorization3d => "Authorization3dResponse",
            Self::Dynamic3d => "Dynamic3dResponse",
            Self::CardTokenization => "CardTokenizationResponse",
            Self::Payment3d => "Payment3dResponse",
            Self::AddUpoCreditCardByTempToken => "AddUpoCreditCardByTempTokenResponse",
            Self::SettleTransaction => "SettleTransactionResponse",
            Self::VoidTransaction => "VoidTransactionResponse",
            Self::RefundTransaction => "RefundTransactionResponse",
            Self::AddUpoCreditCard => "AddUpoCreditCardResponse",
            Self::AddUpoApm => "AddUpoApmResponse",
            Self::GetMerchantPaymentMethods => "GetMerchantPaymentMethodsResponse",
            Self::CancelSubscription => "CancelSubscriptionResponse",
            Self::CreateSubscription => "CreateSubscriptionResponse",
            Self::GetSubscriptionsList => "GetSubscriptionsListResponse",
            Self::GetSubscriptionPlans => "GetSubscriptionPlansResponse",
            Self::Payout => "PayoutResponse",
            Self::User => "UserResponse",
            Self::GetUserDetails => "GetUserDetailsResponse",
            Self::AddUpoCreditCardByToken => "AddUpoCreditCardByTokenResponse",
            Self::GetUserUpos => "GetUserUposResponse",
            Self::EditUpoCreditCard => "EditUpoCreditCardResponse",
            Self::EditUpoApm => "EditUpoApmResponse",
            Self::EnableUpo => "EnableUpoResponse",
            Self::DeleteUpo => "DeleteUpoResponse",
            Self::SuspendUpo => "SuspendUpoResponse",
            Self::GetPaymentPage => "GetPaymentPageResponse",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request kind name that is not in the endpoint table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unregistered request kind: {0:?}")]
pub struct UnknownRequestKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for (index, kind) in RequestKind::ALL.iter().enumerate() {
            assert_eq!(ENDPOINTS[index].request, *kind);
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn every_kind_resolves_to_stable_non_empty_values() {
        for kind in RequestKind::ALL {
            let path = kind.path();
            let response = kind.response_kind();
            assert!(!path.is_empty(), "{kind:?} has an empty path");
            assert!(!path.starts_with('/'), "{kind:?} path must be relative");
            assert!(!response.name().is_empty());
            assert_eq!(kind.path(), path);
            assert_eq!(kind.response_kind(), response);
        }
    }

    #[test]
    fn paths_and_names_are_unique() {
        let paths: HashSet<_> = ENDPOINTS.iter().map(|e| e.path).collect();
        let names: HashSet<_> = ENDPOINTS.iter().map(|e| e.name).collect();
        assert_eq!(paths.len(), RequestKind::COUNT);
        assert_eq!(names.len(), RequestKind::COUNT);
    }

    #[test]
    fn user_operations_share_a_response_kind() {
        assert_eq!(RequestKind::CreateUser.response_kind(), ResponseKind::User);
        assert_eq!(RequestKind::UpdateUser.response_kind(), ResponseKind::User);
    }

    #[test]
    fn from_str_round_trips_every_name() {
        for kind in RequestKind::ALL {
            assert_eq!(kind.name().parse::<RequestKind>(), Ok(kind));
            assert_eq!(kind.to_string().parse::<RequestKind>(), Ok(kind));
        }
        assert_eq!(
            "GetSessionTokenRequest".parse::<RequestKind>(),
            Ok(RequestKind::GetSessionToken)
        );
    }

    #[test]
    fn from_str_rejects_unregistered_names() {
        let err = "refundEverything".parse::<RequestKind>().unwrap_err();
        assert_eq!(err, UnknownRequestKind("refundEverything".into()));
        assert!("".parse::<RequestKind>().is_err());
    }

    #[test]
    fn serde_uses_api_names() {
        for kind in RequestKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.name());
            assert_eq!(serde_json::from_value::<RequestKind>(json).unwrap(), kind);
        }
        assert_eq!(
            serde_json::from_str::<RequestKind>(r#""paymentCC""#).unwrap(),
            RequestKind::PaymentCc
        );
        assert!(serde_json::from_str::<RequestKind>(r#""paymentCc2""#).is_err());
        assert_eq!(
            serde_json::to_value(ResponseKind::User).unwrap(),
            "UserResponse"
        );
    }
}
