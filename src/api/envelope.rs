use serde::Deserialize;

/// Standard response shape of the platform API.
///
/// Every endpoint wraps its payload the same way: a `success` flag, the
/// payload under `data`, and (on some endpoints) an upstream quota block.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub quota: Option<QuotaInfo>,
    pub error: Option<String>,
}

/// Upstream odds-provider quota usage, reported alongside sports data.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaInfo {
    pub used: i64,
    pub total: i64,
    #[serde(rename = "percentUsed")]
    pub percent_used: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let body = r#"{"success": true, "data": [1, 2, 3]}"#;
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
        assert!(envelope.quota.is_none());
    }

    #[test]
    fn test_decode_failure_envelope() {
        let body = r#"{"success": false, "error": "Invalid credentials"}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_decode_quota_block() {
        let body = r#"{
            "success": true,
            "data": [],
            "quota": {"used": 120, "total": 500, "percentUsed": 24.0}
        }"#;
        let envelope: Envelope<Vec<serde_json::Value>> = serde_json::from_str(body).unwrap();
        let quota = envelope.quota.unwrap();
        assert_eq!(quota.used, 120);
        assert_eq!(quota.total, 500);
        assert_eq!(quota.percent_used, 24.0);
    }
}
