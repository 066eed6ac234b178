//! Typed view of an `ItemLookupResponse` document.
//!
//! Every field falls back to its zero value when the service leaves it out,
//! so partially populated documents decode without error.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Root of a successful lookup response.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemLookupResponse {
    /// Echoed request and the looked up item.
    pub items: Items,
}

impl ItemLookupResponse {
    /// Whether the service accepted the request.
    pub fn is_valid(&self) -> bool {
        self.items.request.is_valid
    }

    /// The looked up item, `None` if the document carried no item.
    pub fn item(&self) -> Option<&Item> {
        if self.items.item.asin.is_empty() {
            None
        } else {
            Some(&self.items.item)
        }
    }

    /// Errors reported by the service for this request.
    pub fn errors(&self) -> &[ServiceError] {
        &self.items.request.errors
    }
}

/// The `Items` section.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Items {
    /// How the service understood the request.
    pub request: Request,
    /// The item. Only the first `Item` element is kept.
    #[serde(deserialize_with = "first_or_default")]
    pub item: Item,
}

/// The `Items/Request` section.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Request {
    #[serde(deserialize_with = "flag")]
    pub is_valid: bool,
    pub item_lookup_request: ItemLookupRequest,
    #[serde(deserialize_with = "service_errors")]
    pub errors: Vec<ServiceError>,
}

/// Parameters echoed back by the service.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemLookupRequest {
    pub id_type: String,
    pub item_id: String,
    #[serde(rename = "ResponseGroup")]
    pub response_groups: Vec<String>,
    pub variation_page: String,
}

/// An error the service attached to a response.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServiceError {
    /// Machine readable code, for example `AWS.InvalidParameterValue`.
    pub code: String,
    /// Human readable description.
    pub message: String,
}

/// Body of a non-2xx response: `<ItemLookupErrorResponse>`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ServiceError,
    #[serde(alias = "RequestID")]
    pub request_id: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: String,
    #[serde(deserialize_with = "item_links")]
    pub item_links: Vec<ItemLink>,
    #[serde(deserialize_with = "number")]
    pub sales_rank: u64,
    pub item_attributes: ItemAttributes,
    pub offer_summary: OfferSummary,
    pub offers: Offers,
    #[serde(deserialize_with = "browse_nodes")]
    pub browse_nodes: Vec<BrowseNode>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemLink {
    pub description: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// The `ItemAttributes` section.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemAttributes {
    pub binding: String,
    pub brand: String,
    pub color: String,
    #[serde(rename = "EAN")]
    pub ean: String,
    #[serde(rename = "EANList", deserialize_with = "ean_list")]
    pub ean_list: Vec<String>,
    #[serde(rename = "Feature")]
    pub features: Vec<String>,
    pub item_dimensions: Dimensions,
    pub label: String,
    pub list_price: Price,
    pub manufacturer: String,
    pub model: String,
    #[serde(rename = "MPN")]
    pub mpn: String,
    pub package_dimensions: Dimensions,
    pub part_number: String,
    pub product_group: String,
    pub product_type_name: String,
    pub publisher: String,
    pub studio: String,
    pub title: String,
    #[serde(rename = "UPC")]
    pub upc: String,
    #[serde(rename = "UPCList", deserialize_with = "upc_list")]
    pub upc_list: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Dimensions {
    pub height: Measurement,
    pub length: Measurement,
    pub weight: Measurement,
    pub width: Measurement,
}

/// A number with its `Units` attribute, e.g. `<Weight Units="hundredths-pounds">120</Weight>`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Measurement {
    #[serde(rename = "@Units")]
    pub units: String,
    #[serde(rename = "$text", deserialize_with = "number")]
    pub value: u64,
}

/// A price. `amount` is in the currency's minor unit.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Price {
    #[serde(deserialize_with = "number")]
    pub amount: u64,
    pub currency_code: String,
    pub formatted_price: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OfferSummary {
    pub lowest_new_price: Price,
    pub lowest_used_price: Price,
    pub lowest_collectible_price: Price,
    pub lowest_refurbished_price: Price,
    #[serde(deserialize_with = "number")]
    pub total_new: u64,
    #[serde(deserialize_with = "number")]
    pub total_used: u64,
    #[serde(deserialize_with = "number")]
    pub total_collectible: u64,
    #[serde(deserialize_with = "number")]
    pub total_refurbished: u64,
}

/// The `Offers` section. Only the first `Offer` element is kept.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Offers {
    #[serde(deserialize_with = "number")]
    pub total_offers: u64,
    #[serde(deserialize_with = "number")]
    pub total_offer_pages: u64,
    pub more_offers_url: String,
    #[serde(deserialize_with = "first_or_default")]
    pub offer: Offer,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Offer {
    pub offer_attributes: OfferAttributes,
    pub offer_listing: OfferListing,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OfferAttributes {
    pub condition: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OfferListing {
    pub offer_listing_id: String,
    pub price: Price,
    pub amount_saved: Price,
    #[serde(deserialize_with = "number")]
    pub percentage_saved: u32,
    pub availability: String,
    pub availability_attributes: AvailabilityAttributes,
    #[serde(deserialize_with = "flag")]
    pub is_eligible_for_super_saver_shipping: bool,
    #[serde(deserialize_with = "flag")]
    pub is_eligible_for_prime: bool,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AvailabilityAttributes {
    pub availability_type: String,
    #[serde(deserialize_with = "number")]
    pub minimum_hours: u32,
    #[serde(deserialize_with = "number")]
    pub maximum_hours: u32,
}

/// A browse category together with its parent chain.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BrowseNode {
    #[serde(deserialize_with = "number")]
    pub browse_node_id: u64,
    pub name: String,
    #[serde(deserialize_with = "flag")]
    pub is_category_root: bool,
    pub ancestors: Ancestors,
}

impl BrowseNode {
    /// Iterate from this node up through its ancestors.
    ///
    /// ```
    /// use paapi_item_lookup::BrowseNode;
    ///
    /// let node = BrowseNode::default();
    /// assert_eq!(node.ancestry().count(), 1);
    /// ```
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry { next: Some(self) }
    }

    /// The direct parent, if any.
    pub fn parent(&self) -> Option<&BrowseNode> {
        self.ancestors.browse_node.as_deref()
    }
}

/// At most one parent browse node.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ancestors {
    #[serde(deserialize_with = "first_boxed")]
    pub browse_node: Option<Box<BrowseNode>>,
}

/// Iterator returned by [`BrowseNode::ancestry`].
#[derive(Debug, Clone)]
pub struct Ancestry<'a> {
    next: Option<&'a BrowseNode>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a BrowseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}

/// Numbers may arrive as empty elements, which read as zero.
fn number<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let s = String::deserialize(d)?;
    let s = s.trim();
    if s.is_empty() {
        return Ok(T::default());
    }
    s.parse().map_err(|e| de::Error::custom(format!("invalid number {s:?}: {e}")))
}

/// Boolean flags are sent as `True`/`False` or `1`/`0`.
fn flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    match s.trim() {
        "True" | "true" | "1" => Ok(true),
        "False" | "false" | "0" | "" => Ok(false),
        v => Err(de::Error::custom(format!("invalid flag value: {v}"))),
    }
}

// Repeated siblings are collected as one sequence, which keeps a second
// `Item` or `Offer` from failing as a duplicate field.
fn first_or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Vec::<T>::deserialize(d)?
        .into_iter()
        .next()
        .unwrap_or_default())
}

fn first_boxed<'de, D>(d: D) -> Result<Option<Box<BrowseNode>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<BrowseNode>::deserialize(d)?
        .into_iter()
        .next()
        .map(Box::new))
}

fn item_links<'de, D>(d: D) -> Result<Vec<ItemLink>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(default, rename = "ItemLink")]
        inner: Vec<ItemLink>,
    }
    Ok(List::deserialize(d)?.inner)
}

fn browse_nodes<'de, D>(d: D) -> Result<Vec<BrowseNode>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(default, rename = "BrowseNode")]
        inner: Vec<BrowseNode>,
    }
    Ok(List::deserialize(d)?.inner)
}

fn ean_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(default, rename = "EANListElement")]
        inner: Vec<String>,
    }
    Ok(List::deserialize(d)?.inner)
}

fn upc_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(default, rename = "UPCListElement")]
        inner: Vec<String>,
    }
    Ok(List::deserialize(d)?.inner)
}

fn service_errors<'de, D>(d: D) -> Result<Vec<ServiceError>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(default, rename = "Error")]
        inner: Vec<ServiceError>,
    }
    Ok(List::deserialize(d)?.inner)
}
