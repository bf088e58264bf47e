use url::Url;

use crate::server::error::{internal::InternalError, AppError};

/// Builds the dashboard page the OAuth callback redirects to.
///
/// The access key is percent-encoded into the `key` query parameter.
///
/// # Arguments
/// - `dashboard_url` - Base URL of the dashboard, with or without trailing slash
/// - `key` - Access key handed to the dashboard
///
/// # Returns
/// - `Ok(Url)` - `<dashboard_url>/auth?key=<key>`
/// - `Err(AppError::InternalErr(InvalidUrl))` - The dashboard URL is malformed
pub fn dashboard_auth_url(dashboard_url: &str, key: &str) -> Result<Url, AppError> {
    let value = format!("{}/auth", dashboard_url.trim_end_matches('/'));

    let mut url = Url::parse(&value).map_err(|source| InternalError::InvalidUrl {
        value: value.clone(),
        source,
    })?;
    url.query_pairs_mut().append_pair("key", key);

    Ok(url)
}
