use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Parameters accepted by the paste lookup endpoint, as a query string or JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct PasteQuery {
    pub url: Option<String>,
    pub id: Option<String>,
}

impl PasteQuery {
    /// Read parameters from a URL query string. Only the first occurrence of a key counts.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = PasteQuery::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "url" => &mut params.url,
                "id" => &mut params.id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

/// What the index route tells clients about the service.
#[derive(Serialize)]
pub struct Usage {
    pub message: &'static str,
    pub usage: UsageDetails,
}

#[derive(Serialize)]
pub struct UsageDetails {
    pub endpoint: &'static str,
    pub methods: [&'static str; 2],
    pub parameters: UsageParameters,
    pub examples: [&'static str; 2],
}

#[derive(Serialize)]
pub struct UsageParameters {
    pub url: &'static str,
    pub id: &'static str,
}

impl Default for Usage {
    fn default() -> Self {
        Usage {
            message: "Pastefy API",
            usage: UsageDetails {
                endpoint: "/api/pastefy",
                methods: ["GET", "POST"],
                parameters: UsageParameters {
                    url: "Full Pastefy URL (e.g., https://pastefy.app/mFGLQfek)",
                    id: "Just the paste ID (e.g., mFGLQfek)",
                },
                examples: [
                    "/api/pastefy?url=https://pastefy.app/mFGLQfek",
                    "/api/pastefy?id=mFGLQfek",
                ],
            },
        }
    }
}
