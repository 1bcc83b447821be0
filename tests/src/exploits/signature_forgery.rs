//! # Signature Forgery
//!
//! An attacker who can observe signed requests but does not hold the secret
//! tries to get an altered body through the gate. Every attempt must end in
//! `401 wrong hmac` without the template being evaluated.

#[cfg(test)]
mod tests {
    use crate::client_signature;
    use axum::body::{to_bytes, Body};
    use axum::http::{HeaderValue, Request, StatusCode};
    use axum::Router;
    use proptest::prelude::*;
    use relay_gateway::{Authenticator, GatewayConfig, RenderGatewayService, SecretKey};
    use tower::ServiceExt;

    const SECRET: &[u8] = b"victim-secret";
    const BODY: &str = r#"{"template":"Hello {{ name }}","data":{"name":"World"}}"#;

    fn router() -> Router {
        RenderGatewayService::new(GatewayConfig::default(), SecretKey::new(SECRET))
            .unwrap()
            .router()
    }

    async fn send(body: impl Into<Vec<u8>>, signature: Option<HeaderValue>) -> (StatusCode, String) {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(signature) = signature {
            builder = builder.header("X-Hmac-Sha256", signature);
        }
        let response = router()
            .oneshot(builder.body(Body::from(body.into())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn header(value: &str) -> Option<HeaderValue> {
        Some(HeaderValue::from_str(value).unwrap())
    }

    fn assert_rejected((status, body): (StatusCode, String)) {
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "wrong hmac");
    }

    #[tokio::test]
    async fn test_control_genuine_request_renders() {
        let (status, body) = send(BODY, header(&client_signature(SECRET, BODY.as_bytes()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"rendered":"Hello World"}"#);
    }

    #[tokio::test]
    async fn test_tampered_data_rejected() {
        let signature = client_signature(SECRET, BODY.as_bytes());
        let forged = BODY.replace("World", "Admin");
        assert_rejected(send(forged, header(&signature)).await);
    }

    #[tokio::test]
    async fn test_signature_replayed_on_other_body_rejected() {
        let observed = r#"{"template":"ok"}"#;
        let signature = client_signature(SECRET, observed.as_bytes());
        assert_rejected(send(BODY, header(&signature)).await);
    }

    #[tokio::test]
    async fn test_reserialized_json_rejected() {
        // Same JSON value, different bytes.
        let signature = client_signature(SECRET, BODY.as_bytes());
        let value: serde_json::Value = serde_json::from_str(BODY).unwrap();
        let pretty = serde_json::to_string_pretty(&value).unwrap();
        assert_rejected(send(pretty, header(&signature)).await);
    }

    #[tokio::test]
    async fn test_appended_bytes_rejected() {
        let signature = client_signature(SECRET, BODY.as_bytes());
        assert_rejected(send(format!("{BODY} "), header(&signature)).await);
    }

    #[tokio::test]
    async fn test_truncated_signature_rejected() {
        let signature = client_signature(SECRET, BODY.as_bytes());
        assert_rejected(send(BODY, header(&signature[..signature.len() - 4])).await);
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected() {
        let signature = client_signature(b"guessed-secret", BODY.as_bytes());
        assert_rejected(send(BODY, header(&signature)).await);
    }

    #[tokio::test]
    async fn test_empty_secret_signature_rejected() {
        let signature = client_signature(b"", BODY.as_bytes());
        assert_rejected(send(BODY, header(&signature)).await);
    }

    #[tokio::test]
    async fn test_hex_encoded_mac_rejected() {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let mut mac = Hmac::<Sha256>::new_from_slice(SECRET).unwrap();
        mac.update(BODY.as_bytes());
        let hex: String = mac
            .finalize()
            .into_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        assert_rejected(send(BODY, header(&hex)).await);
    }

    #[tokio::test]
    async fn test_empty_header_rejected() {
        assert_rejected(send(BODY, header("")).await);
    }

    #[tokio::test]
    async fn test_non_ascii_header_rejected() {
        let value = HeaderValue::from_bytes(&[0xC3, 0xA9, 0xFF]).unwrap();
        assert_rejected(send(BODY, Some(value)).await);
    }

    #[tokio::test]
    async fn test_rejection_happens_before_parsing() {
        // Garbage that would be a JSON error if it ever reached the pipeline.
        assert_rejected(send("{{{{", header("AAAA")).await);
    }

    proptest! {
        #[test]
        fn prop_gateway_signer_matches_client(body in prop::collection::vec(any::<u8>(), 0..512)) {
            let gateway = Authenticator::new(SecretKey::new(SECRET));
            prop_assert_eq!(gateway.sign(&body), client_signature(SECRET, &body));
        }

        #[test]
        fn prop_foreign_key_never_verifies(
            body in prop::collection::vec(any::<u8>(), 0..512),
            key in prop::collection::vec(any::<u8>(), 1..64),
        ) {
            prop_assume!(key.as_slice() != SECRET);
            let gateway = Authenticator::new(SecretKey::new(SECRET));
            let forged = client_signature(&key, &body);
            prop_assert!(!gateway.authenticate(&body, Some(forged.as_str())));
        }
    }
}
