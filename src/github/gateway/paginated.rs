//! Fetches every page of a list endpoint.

use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;

use crate::github::error::IntakeError;

use super::error_mapping::map_octocrab_error;

/// Loads the first page at `route` and follows `Link` headers until the last
/// page, converting each item into its domain type.
pub(super) async fn fetch_all_pages<Api, Domain>(
    client: &Octocrab,
    route: String,
    operation: &str,
) -> Result<Vec<Domain>, IntakeError>
where
    Api: DeserializeOwned + Send,
    Domain: From<Api> + Send,
{
    let page = client
        .get::<Page<Api>, _, _>(route, None::<&()>)
        .await
        .map_err(|error| map_octocrab_error(operation, &error))?;

    client
        .all_pages(page)
        .await
        .map(|items| items.into_iter().map(Domain::from).collect())
        .map_err(|error| map_octocrab_error(operation, &error))
}
