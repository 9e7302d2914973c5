use axum::body::Body;
use axum::http::{Request, StatusCode};
use route53_ddns::{InMemoryDnsProvider, InMemorySecretStore, OperatingConfig, Updater};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;

const PASSWORD: &str = "TOPSECRETPW";

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn password_stays_out_of_request_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("route53_ddns=debug,tower_http=debug"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let updater = Updater::new(
        Arc::new(OperatingConfig {
            secret_parameter_ref: "/inadyn/password".to_string(),
            zone_id: "Z0EXAMPLE".to_string(),
            domain_suffix: "example.com".to_string(),
        }),
        Arc::new(InMemorySecretStore::default().with_password("/inadyn/password", PASSWORD)),
        Arc::new(InMemoryDnsProvider::default()),
    );
    let router = route53_ddns::api::router(Arc::new(updater), Duration::from_secs(5));

    for (query, status) in [
        (
            format!("subdomain=home&password={PASSWORD}&newVal=1.2.3.4"),
            StatusCode::OK,
        ),
        (
            format!("subdomain=home&password={PASSWORD}x&newVal=1.2.3.4"),
            StatusCode::FORBIDDEN,
        ),
        (
            format!("password={PASSWORD}&newVal=1.2.3.4"),
            StatusCode::BAD_REQUEST,
        ),
    ] {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/?{query}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), status);
    }

    let logs = logs.contents();
    assert!(logs.contains("upserting A home.example.com"), "{logs}");
    assert!(logs.contains("path=/"), "{logs}");
    assert!(!logs.contains(PASSWORD), "{logs}");
}
