use bytes::Bytes;
use paapi_core::{Error, Result, SigningRequest};

use crate::constants::*;

/// A single `ItemLookup` operation.
///
/// ```
/// use paapi_item_lookup::LookupRequest;
///
/// let req = LookupRequest::new("0439708184", "ASIN")
///     .with_response_groups(["Large", "Offers"]);
/// assert_eq!(req.response_group(), "Large,Offers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupRequest {
    /// Identifier of the item, interpreted according to `id_type`.
    pub item_id: String,
    /// How `item_id` is interpreted: `ASIN`, `SKU`, `UPC`, `EAN`, `ISBN`.
    pub id_type: String,
    /// Result sections to populate, sent in order and without deduplication.
    pub response_groups: Vec<String>,
    /// Page of variations to return for parent items.
    pub variation_page: Option<String>,
    /// Product category to search in, required by the service for every `id_type` except `ASIN`.
    pub search_index: Option<String>,
}

impl LookupRequest {
    /// Create a lookup for `item_id` interpreted as `id_type`.
    pub fn new(item_id: &str, id_type: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            id_type: id_type.to_string(),
            ..Default::default()
        }
    }

    /// Create a lookup by ASIN.
    pub fn asin(item_id: &str) -> Self {
        Self::new(item_id, "ASIN")
    }

    /// Append one response group.
    pub fn with_response_group(mut self, group: impl Into<String>) -> Self {
        self.response_groups.push(group.into());
        self
    }

    /// Append response groups in order.
    pub fn with_response_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Select a variation page.
    pub fn with_variation_page(mut self, page: impl Into<String>) -> Self {
        self.variation_page = Some(page.into());
        self
    }

    /// Select the search index.
    pub fn with_search_index(mut self, index: impl Into<String>) -> Self {
        self.search_index = Some(index.into());
        self
    }

    /// The `ResponseGroup` parameter value: groups joined by `,`.
    ///
    /// An empty list gives an empty string.
    pub fn response_group(&self) -> String {
        self.response_groups.join(",")
    }

    /// Check the lookup has the fields the service requires.
    pub fn validate(&self) -> Result<()> {
        if self.item_id.is_empty() {
            return Err(Error::request_invalid("item id must not be empty"));
        }
        if self.id_type.is_empty() {
            return Err(Error::request_invalid("id type must not be empty")
                .with_context(format!("item_id: {}", self.item_id)));
        }
        Ok(())
    }

    /// Operation parameters of this lookup, unsigned and unsorted.
    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            (PARAM_OPERATION.to_string(), OPERATION_ITEM_LOOKUP.to_string()),
            (PARAM_ITEM_ID.to_string(), self.item_id.clone()),
            (PARAM_ID_TYPE.to_string(), self.id_type.clone()),
            (PARAM_RESPONSE_GROUP.to_string(), self.response_group()),
        ];
        if let Some(v) = &self.variation_page {
            query.push((PARAM_VARIATION_PAGE.to_string(), v.clone()));
        }
        if let Some(v) = &self.search_index {
            query.push((PARAM_SEARCH_INDEX.to_string(), v.clone()));
        }

        query
    }

    /// Build the unsigned `GET {scheme}://{endpoint}/onca/xml?...` request.
    pub fn to_http_request(&self, scheme: &str, endpoint: &str) -> Result<http::Request<Bytes>> {
        self.validate()?;

        let uri = format!(
            "{scheme}://{endpoint}{REQUEST_PATH}?{}",
            SigningRequest::query_to_encoded_string(&self.query())
        );
        let req = http::Request::get(uri).body(Bytes::new()).map_err(|e| {
            Error::request_invalid("failed to build item lookup request")
                .with_source(e)
                .with_context(format!("endpoint: {endpoint}"))
        })?;

        Ok(req)
    }
}
