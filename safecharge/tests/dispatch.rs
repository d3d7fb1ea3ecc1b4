use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_TYPE};
use safecharge::proto::request::{
    CreateUserRequest, GetSessionTokenRequest, GetUserUposRequest, PayoutRequest,
};
use safecharge::proto::{RequestBase, Status};
use safecharge::{
    DispatchError, Dispatcher, HttpTransport, RequestKind, ResponseKind, Transport,
    TransportError, TransportGuard,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOST: &str = "https://ppp-test.safecharge.com/ppp/";

/// One recorded call to a stub transport.
#[derive(Debug, Clone)]
struct Sent {
    body: String,
    url: String,
    headers: HeaderMap,
}

/// Replies with a fixed body and records every call.
#[derive(Debug, Default)]
struct Canned {
    reply: String,
    calls: Mutex<Vec<Sent>>,
}

impl Canned {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_owned(),
            calls: Mutex::default(),
        })
    }

    fn last(&self) -> Sent {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

impl Transport for Canned {
    fn send(&self, body: &str, url: &str, headers: &HeaderMap) -> Result<String, TransportError> {
        self.calls.lock().unwrap().push(Sent {
            body: body.to_owned(),
            url: url.to_owned(),
            headers: headers.clone(),
        });
        Ok(self.reply.clone())
    }
}

/// Fails every call as if the connection was refused.
#[derive(Debug, Default)]
struct Unreachable {
    attempts: AtomicUsize,
}

impl Transport for Unreachable {
    fn send(&self, _: &str, _: &str, _: &HeaderMap) -> Result<String, TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let refused = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        Err(refused.into())
    }
}

/// Replies with the request body it received.
#[derive(Debug)]
struct Echo;

impl Transport for Echo {
    fn send(&self, body: &str, _: &str, _: &HeaderMap) -> Result<String, TransportError> {
        Ok(body.to_owned())
    }
}

fn session_request() -> GetSessionTokenRequest {
    GetSessionTokenRequest {
        base: RequestBase::new("merchant-1", "site-1").with_server_host(HOST),
    }
}

#[test]
fn session_token_round_trip() {
    let transport = Canned::new(r#"{"status":"SUCCESS","sessionToken":"abc123"}"#);
    let dispatcher = Dispatcher::new(transport.clone());

    let reply = dispatcher.execute(session_request()).unwrap();
    assert_eq!(reply.base.status, Status::Success);
    assert_eq!(reply.base.session_token.as_deref(), Some("abc123"));

    let sent = transport.last();
    assert_eq!(
        sent.url,
        "https://ppp-test.safecharge.com/ppp/api/v1/getSessionToken.do"
    );
    assert_eq!(
        sent.headers.get(CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(sent.headers.get(ACCEPT).unwrap(), "application/json");
}

#[test]
fn server_host_never_reaches_the_wire() {
    let transport = Canned::new(r#"{"status":"SUCCESS"}"#);
    let dispatcher = Dispatcher::new(transport.clone());

    dispatcher.execute(session_request()).unwrap();

    let body: Value = serde_json::from_str(&transport.last().body).unwrap();
    assert_eq!(body, json!({"merchantId": "merchant-1", "merchantSiteId": "site-1"}));
    assert!(!transport.last().body.contains("ppp-test"));
}

#[test]
fn transport_failure_is_absent_response() {
    let transport = Arc::new(Unreachable::default());
    let dispatcher = Dispatcher::new(transport.clone());

    let reply = dispatcher.dispatch(session_request()).unwrap();
    assert!(reply.is_none());
    assert_eq!(transport.attempts.load(Ordering::SeqCst), 1);

    let err = dispatcher.execute(session_request()).unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn empty_reply_is_absent_but_distinguishable() {
    let dispatcher = Dispatcher::new(Canned::new("  \n"));

    assert!(dispatcher.dispatch(session_request()).unwrap().is_none());

    let err = dispatcher.execute(session_request()).unwrap_err();
    assert!(!err.is_transport());
    assert!(matches!(
        err,
        DispatchError::EmptyResponse {
            kind: ResponseKind::GetSessionToken
        }
    ));
}

#[test]
fn null_reply_is_absent() {
    let dispatcher = Dispatcher::new(Canned::new("null"));

    assert!(dispatcher.dispatch(session_request()).unwrap().is_none());
    assert!(matches!(
        dispatcher.execute(session_request()).unwrap_err(),
        DispatchError::EmptyResponse {
            kind: ResponseKind::GetSessionToken
        }
    ));

    let json = dispatcher
        .with_default_host(HOST)
        .dispatch_json(RequestKind::Payout, json!({"merchantId": "m"}))
        .unwrap();
    assert!(json.is_none());
}

#[test]
fn malformed_reply_propagates_decode_error() {
    let dispatcher = Dispatcher::new(Canned::new("<html>gateway down</html>"));

    let err = dispatcher.dispatch(session_request()).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Deserialize {
            kind: ResponseKind::GetSessionToken,
            ..
        }
    ));
}

#[test]
fn reply_decodes_into_registered_type() {
    let transport = Canned::new(
        r#"{"status":"SUCCESS","transactionStatus":"APPROVED","transactionId":"1110000000004146935"}"#,
    );
    let dispatcher = Dispatcher::new(transport.clone()).with_default_host(HOST);

    let request = PayoutRequest {
        base: RequestBase::new("m", "s"),
        amount: "10.00".into(),
        currency: "EUR".into(),
        ..PayoutRequest::default()
    };
    let reply = dispatcher.execute(request).unwrap();
    assert_eq!(
        reply.transaction.transaction_id.as_deref(),
        Some("1110000000004146935")
    );
    assert!(transport.last().url.ends_with("/api/v1/payout.do"));
}

#[test]
fn shared_response_kind_serves_both_user_operations() {
    let transport = Canned::new(r#"{"status":"SUCCESS","userId":42}"#);
    let dispatcher = Dispatcher::new(transport.clone()).with_default_host(HOST);

    let created = dispatcher
        .execute(CreateUserRequest {
            base: RequestBase::new("m", "s"),
            ..CreateUserRequest::default()
        })
        .unwrap();
    assert!(created.base.is_success());
    assert!(transport.last().url.ends_with("/api/v1/createUser.do"));
}

#[test]
fn missing_host_is_reported_before_sending() {
    let transport = Arc::new(Unreachable::default());
    let dispatcher = Dispatcher::new(transport.clone());

    let err = dispatcher
        .execute(GetUserUposRequest {
            base: RequestBase::new("m", "s"),
            user_token_id: "u".into(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::MissingHost {
            kind: RequestKind::GetUserUpos
        }
    ));
    assert_eq!(transport.attempts.load(Ordering::SeqCst), 0);
}

#[test]
fn concurrent_dispatches_do_not_cross_talk() {
    const THREADS: usize = 32;
    let dispatcher = Dispatcher::new(Arc::new(Echo)).with_default_host(HOST);

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                let id = format!("request-{i}");
                let request = GetSessionTokenRequest {
                    base: RequestBase::new("m", "s").with_client_request_id(id.clone()),
                };
                let reply = dispatcher.execute(request).unwrap();
                (id, reply.base.client_request_id)
            })
        })
        .collect();

    for handle in handles {
        let (sent, echoed) = handle.join().unwrap();
        assert_eq!(echoed.as_deref(), Some(sent.as_str()));
    }
}

#[test]
fn lazy_dispatcher_uses_first_installed_transport() {
    static GUARD: TransportGuard = TransportGuard::new();

    let first = Canned::new(r#"{"status":"SUCCESS","sessionToken":"first"}"#);
    assert!(GUARD.init(first.clone()));
    assert!(!GUARD.init(Canned::new(r#"{"status":"SUCCESS","sessionToken":"second"}"#)));

    let reply = Dispatcher::with_guard(&GUARD)
        .execute(session_request())
        .unwrap();
    assert_eq!(reply.base.session_token.as_deref(), Some("first"));
    assert_eq!(first.calls.lock().unwrap().len(), 1);
}

#[test]
fn first_dispatch_installs_default_transport() {
    static EMPTY_GUARD: TransportGuard = TransportGuard::new();
    assert!(!EMPTY_GUARD.is_initialized());

    let closed = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let request = GetSessionTokenRequest {
        base: RequestBase::new("m", "s").with_server_host(format!("http://{closed}/ppp/")),
    };

    let reply = Dispatcher::with_guard(&EMPTY_GUARD)
        .dispatch(request)
        .unwrap();
    assert!(reply.is_none());
    assert!(EMPTY_GUARD.is_initialized());
}

#[test]
fn process_wide_functions_share_one_transport() {
    let transport = Canned::new(r#"{"status":"SUCCESS","sessionToken":"global"}"#);
    assert!(safecharge::init(transport.clone()));

    let typed = safecharge::execute(session_request()).unwrap();
    let compat = safecharge::dispatch(session_request()).unwrap().unwrap();
    assert_eq!(typed, compat);
    assert_eq!(transport.calls.lock().unwrap().len(), 2);
}

#[test]
fn json_dispatch_strips_host_and_normalizes_reply() {
    let transport = Canned::new(
        r#"{"status":"SUCCESS","sessionToken":"t","orderId":"39272","userTokenId":"u1"}"#,
    );
    let dispatcher = Dispatcher::new(transport.clone());

    let reply = dispatcher
        .execute_json(
            RequestKind::OpenOrder,
            json!({"merchantId": "m", "merchantSiteId": "s", "serverHost": HOST, "amount": "1"}),
        )
        .unwrap();
    assert_eq!(reply["orderId"], "39272");
    assert_eq!(reply["sessionToken"], "t");

    let sent = transport.last();
    assert_eq!(sent.url, "https://ppp-test.safecharge.com/ppp/api/v1/openOrder.do");
    let body: Value = serde_json::from_str(&sent.body).unwrap();
    assert!(body.get("serverHost").is_none());
    assert_eq!(body["amount"], "1");
}

#[test]
fn json_dispatch_rejects_non_objects() {
    let dispatcher = Dispatcher::new(Canned::new("{}")).with_default_host(HOST);
    let err = dispatcher
        .execute_json(RequestKind::Payout, json!(["not", "an", "object"]))
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::NotAnObject {
            kind: RequestKind::Payout
        }
    ));
}

#[test]
fn json_dispatch_under_absent_contract() {
    let dispatcher = Dispatcher::new(Arc::new(Unreachable::default())).with_default_host(HOST);
    let reply = dispatcher
        .dispatch_json(RequestKind::GetSessionToken, json!({"merchantId": "m"}))
        .unwrap();
    assert!(reply.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn http_round_trip_against_mock_gateway() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ppp/api/v1/getSessionToken.do"))
        .and(body_json(json!({"merchantId": "merchant-1", "merchantSiteId": "site-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "sessionToken": "abc123",
            "errCode": 0,
            "version": "1.0"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let host = format!("{}/ppp/", mock_server.uri());
    let reply = tokio::task::spawn_blocking(move || {
        let dispatcher = Dispatcher::new(Arc::new(HttpTransport::try_default().unwrap()));
        let request = GetSessionTokenRequest {
            base: RequestBase::new("merchant-1", "site-1").with_server_host(host),
        };
        dispatcher.execute(request)
    })
    .await
    .unwrap()
    .unwrap();

    assert!(reply.base.is_success());
    assert_eq!(reply.base.session_token.as_deref(), Some("abc123"));
    assert_eq!(reply.base.err_code, Some(0));
}
