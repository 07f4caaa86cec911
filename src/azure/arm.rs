//! Shared ARM REST plumbing.
//!
//! Every listing endpoint this tool touches returns the same envelope: a
//! `value` array plus an optional `nextLink` to the next page. Paging is
//! followed here so callers only ever see the full record list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fault from a single ARM listing call.
#[derive(Debug, thiserror::Error)]
pub enum ArmError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("parsing response from {url} failed at {path}: {source}")]
    Parse {
        url: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("nextLink did not advance at {url}")]
    NextLinkLoop { url: String },
}

/// One page of an ARM listing response.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListPage<T> {
    pub value: Vec<T>,
    pub next_link: Option<String>,
}

/// Parse one response body into a [`ListPage`], reporting the JSON path on
/// failure.
pub(crate) fn parse_page<T: DeserializeOwned>(url: &str, body: &str) -> Result<ListPage<T>, ArmError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{body}\n\nOUTPUT END\n");
        ArmError::Parse {
            url: url.to_string(),
            path: e.path().to_string(),
            source: e.into_inner(),
        }
    })
}

/// Fetch every record behind a paginated ARM listing URL, in upstream order.
///
/// Follows `nextLink` until absent. A `nextLink` equal to the URL just
/// fetched aborts instead of looping forever.
pub(crate) async fn fetch_all_pages<T: DeserializeOwned>(
    http: &reqwest::Client,
    bearer: &str,
    first_url: String,
) -> Result<Vec<T>, ArmError> {
    let mut records = Vec::new();
    let mut url = first_url;
    let mut page_no = 0usize;

    loop {
        let response = http
            .get(&url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|source| ArmError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ArmError::Http {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ArmError::Status { url, status, body });
        }

        let page: ListPage<T> = parse_page(&url, &body)?;
        let added = page.value.len();
        records.extend(page.value);

        log::info!(
            "got page#{page_no:2} record_count=+{added:3} => {total:3}",
            total = records.len(),
        );

        match page.next_link {
            Some(next) => {
                if next == url {
                    return Err(ArmError::NextLinkLoop { url });
                }
                url = next;
            }
            None => break,
        }
        page_no += 1;
    }

    Ok(records)
}
