//! Where country names come from.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LoadError;

/// A provider of country names, in any order.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<String>, LoadError>;
}

/// A source that always returns the same names.
///
/// Useful for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticCountries {
    names: Vec<String>,
}

impl StaticCountries {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl CountrySource for StaticCountries {
    async fn fetch_countries(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.names.clone())
    }
}

/// One record of the country service, reduced to the requested fields.
#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// The public REST Countries service.
///
/// Issues `GET <endpoint>/v3.1/all?fields=name` and expects a JSON array of
/// `{ "name": { "common": "..." } }` records.
#[derive(Debug, Clone)]
pub struct RestCountries {
    http_client: Client,
    url: String,
}

impl RestCountries {
    pub fn new(http_client: Client, endpoint: &str) -> Result<Self, LoadError> {
        let url = format!("{}/v3.1/all?fields=name", endpoint.trim_end_matches('/'));
        url::Url::parse(&url).map_err(|e| LoadError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self { http_client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CountrySource for RestCountries {
    async fn fetch_countries(&self) -> Result<Vec<String>, LoadError> {
        debug!("GET {}", self.url);
        let response = self.http_client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or("Unknown status");
            return Err(LoadError::http(status.as_u16(), message));
        }

        let body = response.text().await?;
        let records: Vec<CountryRecord> = match serde_json::from_str(&body) {
            Ok(records) => records,
            Err(e) => return Err(LoadError::parse_with_body(e.to_string(), body)),
        };

        Ok(records.into_iter().map(|r| r.name.common).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_endpoint() {
        let source = RestCountries::new(Client::new(), "https://restcountries.com/").unwrap();
        assert_eq!(
            source.url(),
            "https://restcountries.com/v3.1/all?fields=name"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = RestCountries::new(Client::new(), "not a url").unwrap_err();
        assert!(matches!(err, LoadError::InvalidUrl(_)));
    }

    #[test]
    fn test_record_shape() {
        let records: Vec<CountryRecord> = serde_json::from_str(
            r#"[{"name":{"common":"Peru","official":"Republic of Peru","nativeName":{}}}]"#,
        )
        .unwrap();
        assert_eq!(records[0].name.common, "Peru");
    }
}
