use anyhow::Result;
use paapi_core::ErrorKind;
use paapi_item_lookup::{decode, parse_error_response, Measurement, Price};
use pretty_assertions::assert_eq;

const LARGE: &[u8] = include_bytes!("../../testdata/item_lookup_large.xml");
const NO_OFFERS: &[u8] = include_bytes!("../../testdata/item_lookup_no_offers.xml");
const INVALID_PARAMETER: &[u8] = include_bytes!("../../testdata/item_lookup_invalid_parameter.xml");
const ERROR_RESPONSE: &[u8] = include_bytes!("../../testdata/item_lookup_error_response.xml");

#[test]
fn test_decode_large_response() -> Result<()> {
    let resp = decode(LARGE)?;

    assert!(resp.is_valid());
    let echoed = &resp.items.request.item_lookup_request;
    assert_eq!(echoed.id_type, "ASIN");
    assert_eq!(echoed.item_id, "0439708184");
    assert_eq!(echoed.response_groups, vec!["Large", "Offers"]);
    assert_eq!(echoed.variation_page, "All");

    let item = resp.item().expect("item must be present");
    assert_eq!(item.asin, "0439708184");
    assert_eq!(item.sales_rank, 1532);
    assert_eq!(item.item_links.len(), 2);
    assert_eq!(item.item_links[1].description, "All Offers");

    let attrs = &item.item_attributes;
    assert_eq!(attrs.title, "Harry Potter and the Sorcerer's Stone");
    assert_eq!(attrs.ean_list, vec!["9780439708180", "9780590353427"]);
    assert_eq!(attrs.upc_list, vec!["717356278525"]);
    assert_eq!(attrs.features.len(), 2);
    assert_eq!(attrs.mpn, "");
    assert_eq!(
        attrs.item_dimensions.weight,
        Measurement {
            units: "hundredths-pounds".to_string(),
            value: 70
        }
    );
    assert_eq!(
        attrs.list_price,
        Price {
            amount: 1099,
            currency_code: "USD".to_string(),
            formatted_price: "$10.99".to_string(),
        }
    );

    let summary = &item.offer_summary;
    assert_eq!(summary.lowest_new_price.amount, 599);
    assert_eq!(summary.lowest_collectible_price, Price::default());
    assert_eq!(
        (summary.total_new, summary.total_used, summary.total_collectible, summary.total_refurbished),
        (94, 812, 3, 0)
    );

    let listing = &item.offers.offer.offer_listing;
    assert_eq!(item.offers.offer.offer_attributes.condition, "New");
    assert_eq!(listing.percentage_saved, 45);
    assert_eq!(listing.availability_attributes.availability_type, "now");
    assert!(listing.is_eligible_for_super_saver_shipping);
    assert!(listing.is_eligible_for_prime);

    Ok(())
}

#[test]
fn test_decode_browse_node_ancestry() -> Result<()> {
    let resp = decode(LARGE)?;
    let nodes = &resp.item().expect("item must be present").browse_nodes;
    assert_eq!(nodes.len(), 2);

    let names: Vec<&str> = nodes[0].ancestry().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Fantasy & Magic", "Children's Books", "Books"]);
    assert!(nodes[0].ancestry().last().expect("root").is_category_root);

    assert!(nodes[1].parent().is_none());
    Ok(())
}

#[test]
fn test_decode_missing_offers() -> Result<()> {
    let resp = decode(NO_OFFERS)?;
    let item = resp.item().expect("item must be present");

    assert_eq!(item.item_attributes.title, "Discontinued Widget");
    assert_eq!(item.offers.total_offers, 0);
    assert_eq!(item.offers.total_offer_pages, 0);
    assert_eq!(item.offers.more_offers_url, "");
    assert_eq!(item.offers.offer.offer_listing.price, Price::default());
    assert!(!item.offers.offer.offer_listing.is_eligible_for_prime);
    assert_eq!(item.offer_summary.total_new, 0);
    assert!(item.browse_nodes.is_empty());
    Ok(())
}

#[test]
fn test_decode_request_errors() -> Result<()> {
    let resp = decode(INVALID_PARAMETER)?;

    assert!(!resp.is_valid());
    assert!(resp.item().is_none());
    assert_eq!(resp.errors().len(), 1);
    assert_eq!(resp.errors()[0].code, "AWS.InvalidParameterValue");
    Ok(())
}

#[test]
fn test_decode_error_document_is_not_a_lookup_response() {
    let err = decode(ERROR_RESPONSE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailed);

    let resp = parse_error_response(ERROR_RESPONSE).expect("error document must parse");
    assert_eq!(resp.error.code, "SignatureDoesNotMatch");
    assert_eq!(resp.request_id, "6d5f0b1e-8a43-4c12-b7e9-51a2c3d4e5f6");
}

#[test]
fn test_decode_truncated_fixture() {
    let err = decode(&LARGE[..LARGE.len() / 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailed);
}
