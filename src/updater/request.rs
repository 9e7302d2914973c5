use crate::error::Error;
use crate::record::{DEFAULT_RECORD_TYPE, DEFAULT_TTL};
use serde::Deserialize;
use std::fmt;

/// Caller supplied update parameters, exactly as received. Any of them may be absent.
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordRequest {
    pub subdomain: Option<String>,
    pub password: Option<String>,
    pub new_val: Option<String>,
    pub record_type: Option<String>,
    /// Kept as text so a malformed value is reported after the required fields are checked.
    pub ttl: Option<String>,
    pub ok_resp_body: Option<String>,
}

impl fmt::Debug for UpdateRecordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateRecordRequest")
            .field("subdomain", &self.subdomain)
            .field("password", &self.password.as_ref().map(|_| "<REDACTED>"))
            .field("new_val", &self.new_val)
            .field("record_type", &self.record_type)
            .field("ttl", &self.ttl)
            .field("ok_resp_body", &self.ok_resp_body)
            .finish()
    }
}

/// An [`UpdateRecordRequest`] whose required fields are present and non-empty, with the
/// optional ones defaulted.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidUpdate {
    pub subdomain: String,
    pub password: String,
    pub new_val: String,
    pub record_type: String,
    pub ttl: u32,
    pub ok_resp_body: Option<String>,
}

impl fmt::Debug for ValidUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidUpdate")
            .field("subdomain", &self.subdomain)
            .field("password", &"<REDACTED>")
            .field("new_val", &self.new_val)
            .field("record_type", &self.record_type)
            .field("ttl", &self.ttl)
            .field("ok_resp_body", &self.ok_resp_body)
            .finish()
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl UpdateRecordRequest {
    /// Check the required fields, then parse and default the optional ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameters`] if `subdomain`, `password` or `newVal` is absent
    /// or empty, and [`Error::InvalidTtl`] if `ttl` isn't a whole number of seconds.
    pub fn validate(self) -> Result<ValidUpdate, Error> {
        let (Some(subdomain), Some(password), Some(new_val)) = (
            non_empty(self.subdomain),
            non_empty(self.password),
            non_empty(self.new_val),
        ) else {
            return Err(Error::MissingParameters);
        };
        let ttl = match self.ttl {
            None => DEFAULT_TTL,
            Some(ttl) => ttl.parse().map_err(|_| Error::InvalidTtl(ttl))?,
        };
        Ok(ValidUpdate {
            subdomain,
            password,
            new_val,
            record_type: self
                .record_type
                .unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string()),
            ttl,
            ok_resp_body: self.ok_resp_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UpdateRecordRequest {
        UpdateRecordRequest {
            subdomain: Some("home".to_string()),
            password: Some("hunter2".to_string()),
            new_val: Some("1.2.3.4".to_string()),
            ..UpdateRecordRequest::default()
        }
    }

    #[test]
    fn defaults_optional_fields() {
        let update = complete().validate().unwrap();
        assert_eq!(update.record_type, "A");
        assert_eq!(update.ttl, 300);
        assert_eq!(update.ok_resp_body, None);
    }

    #[test]
    fn keeps_supplied_optional_fields() {
        let update = UpdateRecordRequest {
            record_type: Some("TXT".to_string()),
            ttl: Some("60".to_string()),
            ok_resp_body: Some("good".to_string()),
            ..complete()
        }
        .validate()
        .unwrap();
        assert_eq!(update.record_type, "TXT");
        assert_eq!(update.ttl, 60);
        assert_eq!(update.ok_resp_body.as_deref(), Some("good"));
    }

    #[test]
    fn rejects_absent_or_empty_required_fields() {
        let cases = [
            UpdateRecordRequest { subdomain: None, ..complete() },
            UpdateRecordRequest { password: None, ..complete() },
            UpdateRecordRequest { new_val: None, ..complete() },
            UpdateRecordRequest { subdomain: Some(String::new()), ..complete() },
            UpdateRecordRequest { password: Some(String::new()), ..complete() },
            UpdateRecordRequest { new_val: Some(String::new()), ..complete() },
            UpdateRecordRequest::default(),
        ];
        for request in cases {
            assert!(matches!(request.validate(), Err(Error::MissingParameters)));
        }
    }

    #[test]
    fn rejects_malformed_ttl() {
        for ttl in ["abc", "", "-1", "1.5", "4294967296"] {
            let request = UpdateRecordRequest {
                ttl: Some(ttl.to_string()),
                ..complete()
            };
            assert!(
                matches!(request.validate(), Err(Error::InvalidTtl(value)) if value == ttl),
                "ttl {ttl:?}"
            );
        }
    }

    #[test]
    fn missing_field_reported_before_malformed_ttl() {
        let request = UpdateRecordRequest {
            subdomain: None,
            ttl: Some("abc".to_string()),
            ..complete()
        };
        assert!(matches!(request.validate(), Err(Error::MissingParameters)));
    }

    #[test]
    fn debug_never_shows_password() {
        let request = complete();
        assert!(!format!("{request:?}").contains("hunter2"));
        assert!(!format!("{:?}", request.validate().unwrap()).contains("hunter2"));
    }

    #[test]
    fn deserializes_camel_case_query_names() {
        let request: UpdateRecordRequest = serde_json::from_str(
            r#"{"subdomain":"home","password":"p","newVal":"1.2.3.4","recordType":"AAAA","ttl":"60","okRespBody":"ok"}"#,
        )
        .unwrap();
        assert_eq!(request.new_val.as_deref(), Some("1.2.3.4"));
        assert_eq!(request.record_type.as_deref(), Some("AAAA"));
        assert_eq!(request.ttl.as_deref(), Some("60"));
        assert_eq!(request.ok_resp_body.as_deref(), Some("ok"));
    }
}
