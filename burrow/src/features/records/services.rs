use super::errors::RecordsError;
use super::model::Record;
use crate::app::config::AppConfig;

/// HTTP client for the records endpoint.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from app configuration.
    pub(crate) fn new(config: &AppConfig) -> Result<Self, RecordsError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Fetch the top level record collection.
    pub(crate) async fn fetch_roots(
        &self,
    ) -> Result<Vec<Record>, RecordsError> {
        let payload = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_records(&payload)
    }

    /// Fetch the child collection scoped to a parent record.
    pub(crate) async fn fetch_children(
        &self,
        parent: u64,
    ) -> Result<Vec<Record>, RecordsError> {
        let payload = self
            .client
            .get(&self.base_url)
            .query(&[("parent", parent)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_records(&payload)
    }
}

fn decode_records(payload: &str) -> Result<Vec<Record>, RecordsError> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use burrow_ui_table::TableRecord;

    use super::decode_records;
    use crate::features::records::RecordsError;

    #[test]
    fn given_array_payload_when_decoded_then_records_are_returned_untagged() {
        let payload = r#"[
            {"id": 1, "title": "alpha", "body": "first", "userId": 7},
            {"id": 2, "title": "beta", "body": "second"}
        ]"#;

        let records = decode_records(payload).expect("payload should decode");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), 1);
        assert_eq!(records[0].title(), "alpha");
        assert_eq!(records[1].body(), "second");
        assert!(TableRecord::parent(&records[0]).is_none());
    }

    #[test]
    fn given_malformed_payload_when_decoded_then_decode_error_is_returned() {
        let error =
            decode_records("not json").expect_err("payload must be rejected");

        assert!(matches!(error, RecordsError::Decode(_)));
    }

    #[test]
    fn given_object_payload_when_decoded_then_decode_error_is_returned() {
        let error = decode_records(r#"{"id": 1, "title": "t", "body": "b"}"#)
            .expect_err("payload must be rejected");

        assert!(matches!(error, RecordsError::Decode(_)));
    }

    #[test]
    fn given_record_missing_a_field_when_decoded_then_decode_error_is_returned()
    {
        let error = decode_records(r#"[{"id": 1, "title": "alpha"}]"#)
            .expect_err("payload must be rejected");

        assert!(matches!(error, RecordsError::Decode(_)));
    }
}
