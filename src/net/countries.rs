//! Country-name lookup for the doctor form.
//!
//! Third-party dependency (restcountries.com), so failures are absorbed
//! completely: the form stays usable with an empty dropdown and the user
//! never sees an error. The only trace of a failure is a WARN log line.

#[cfg(test)]
#[path = "countries_test.rs"]
mod countries_test;

use crate::error::ApiError;
use crate::net::types::CountryName;

pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";

/// Fetch the sorted list of country display names, or an empty list on any
/// failure.
pub async fn fetch_country_names(http: &reqwest::Client, url: &str) -> Vec<String> {
    match try_fetch(http, url).await {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(error = %e, "country lookup failed, continuing with empty list");
            Vec::new()
        }
    }
}

async fn try_fetch(http: &reqwest::Client, url: &str) -> Result<Vec<String>, ApiError> {
    let response = http.get(url).send().await.map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(crate::error::response_error(status.as_u16(), &body));
    }
    let countries: Vec<CountryName> = response.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
    let mut names: Vec<String> = countries.into_iter().map(|c| c.name.common).collect();
    names.sort_unstable();
    Ok(names)
}
