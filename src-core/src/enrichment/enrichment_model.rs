use serde::{Deserialize, Serialize};

/// Payload posted to the enrichment webhook.
#[derive(Debug, Serialize)]
pub struct EnrichmentRequest<'a> {
    pub id: i32,
    pub name: &'a str,
    pub message: &'a str,
}

/// Whatever the webhook answers with. Both fields are optional and
/// unknown fields are ignored; a body that fails to parse at all is
/// treated upstream as an empty result, not a failure.
#[derive(Debug, Default, Deserialize)]
pub struct EnrichmentResponse {
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}
