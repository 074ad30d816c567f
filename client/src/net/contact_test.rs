use super::*;

fn relay() -> RelayConfig {
    RelayConfig { service_id: "svc".into(), template_id: "tpl".into(), public_key: "pk".into() }
}

fn form() -> ContactForm {
    ContactForm {
        name: "홍길동".into(),
        email: "hong@example.com".into(),
        phone: "010-0000-0000".into(),
        message: "문의합니다".into(),
    }
}

#[test]
fn payload_matches_relay_schema() {
    let relay = relay();
    let form = form();
    let json = serde_json::to_value(send_request(&relay, &form)).unwrap_or_default();
    assert_eq!(
        json,
        serde_json::json!({
            "service_id": "svc",
            "template_id": "tpl",
            "user_id": "pk",
            "template_params": {
                "from_name": "홍길동",
                "from_email": "hong@example.com",
                "phone": "010-0000-0000",
                "message": "문의합니다",
                "type": "포트폴리오 고객 문의"
            }
        })
    );
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ContactError::Status(400).to_string(), "contact relay rejected the message: 400");
    assert_eq!(ContactError::NotConfigured.to_string(), "contact relay is not configured");
}

#[cfg(not(feature = "csr"))]
mod native {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn missing_relay_is_not_configured() {
        assert_eq!(block_on(send_contact(None, &form())), Err(ContactError::NotConfigured));
    }

    #[test]
    fn native_send_is_unavailable() {
        let relay = relay();
        assert_eq!(block_on(send_contact(Some(&relay), &form())), Err(ContactError::Unavailable));
    }
}
