use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr; stdout carries protocol messages only.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn redact_audit_params(params: &Value) -> Value {
    match params {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| {
                    let item = if is_sensitive_key(key) {
                        Value::String("[REDACTED]".to_string())
                    } else {
                        redact_audit_params(item)
                    };
                    (key.clone(), item)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_audit_params).collect()),
        _ => params.clone(),
    }
}

pub fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.trim().to_ascii_lowercase();
    matches!(
        normalized.as_str(),
        "authorization" | "bearer" | "api_key" | "apikey"
    ) || ["token", "secret", "password", "credential"]
        .iter()
        .any(|marker| normalized.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redacts_sensitive_fields_recursively() {
        let params = json!({
            "name": "echo",
            "arguments": {
                "message": "hi",
                "api_key": "hidden",
                "items": [{"refresh_token": "hidden"}],
                "nested": {"Password": "hidden"}
            }
        });

        let redacted = redact_audit_params(&params);

        assert_eq!(redacted["name"], "echo");
        assert_eq!(redacted["arguments"]["message"], "hi");
        assert_eq!(redacted["arguments"]["api_key"], "[REDACTED]");
        assert_eq!(redacted["arguments"]["items"][0]["refresh_token"], "[REDACTED]");
        assert_eq!(redacted["arguments"]["nested"]["Password"], "[REDACTED]");
    }

    #[test]
    fn leaves_scalars_untouched() {
        assert_eq!(redact_audit_params(&Value::Null), Value::Null);
        assert_eq!(redact_audit_params(&json!("token")), json!("token"));
    }
}
