//! Subscription listing.

use super::arm::{fetch_all_pages, ArmError};
use crate::config;
use serde::Deserialize;

/// One subscription record from the ARM listing.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: String,
    pub display_name: Option<String>,
}

/// List every subscription the credential can see, in ARM listing order.
pub(crate) async fn list_subscriptions(
    http: &reqwest::Client,
    bearer: &str,
) -> Result<Vec<Subscription>, ArmError> {
    let url = format!(
        "{}/subscriptions?api-version={}",
        config::ARM_ENDPOINT,
        config::API_VERSION_SUBSCRIPTIONS,
    );
    fetch_all_pages(http, bearer, url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::arm::parse_page;

    #[test]
    fn test_parse_subscription_listing() {
        let body = std::fs::read_to_string("src/tests/test_data/subscriptions_01.json")
            .expect("Error reading test data");
        let page = parse_page::<Subscription>("https://example/subscriptions", &body)
            .expect("Error parsing subscriptions");
        assert_eq!(page.value.len(), 2);
        assert_eq!(
            page.value[0].subscription_id,
            "11111111-1111-1111-1111-111111111111",
            "First subscription must keep listing order"
        );
        assert_eq!(page.value[0].display_name.as_deref(), Some("Primary"));
        assert!(page.next_link.is_none());
    }
}
