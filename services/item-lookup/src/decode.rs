use quick_xml::events::Event;
use quick_xml::{de, Reader};

use paapi_core::{Error, Result};

use crate::model::{ErrorResponse, ItemLookupResponse};

const ROOT_ELEMENT: &[u8] = b"ItemLookupResponse";

/// Decode the body of a successful lookup.
///
/// Missing sections decode to their zero value. Empty or non UTF-8 bodies,
/// broken XML, a root element other than `ItemLookupResponse`, and values that
/// don't fit their field all fail with `DecodeFailed`.
pub fn decode(body: &[u8]) -> Result<ItemLookupResponse> {
    if body.is_empty() {
        return Err(Error::decode_failed("response body is empty"));
    }
    let content = std::str::from_utf8(body)
        .map_err(|e| Error::decode_failed("response body is not valid utf-8").with_source(e))?;

    let root = root_element(content)?;
    if root.as_bytes() != ROOT_ELEMENT {
        return Err(Error::decode_failed("unexpected root element")
            .with_context(format!("root: {root}")));
    }

    de::from_str(content)
        .map_err(|e| Error::decode_failed("failed to decode item lookup response").with_source(e))
}

/// Parse a service error document, returning `None` if `body` isn't one.
pub fn parse_error_response(body: &[u8]) -> Option<ErrorResponse> {
    let content = std::str::from_utf8(body).ok()?;
    let resp: ErrorResponse = de::from_str(content).ok()?;
    if resp.error.code.is_empty() && resp.error.message.is_empty() {
        return None;
    }

    Some(resp)
}

fn root_element(content: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned())
            }
            Ok(Event::Eof) => return Err(Error::decode_failed("response has no root element")),
            Ok(_) => {}
            Err(e) => {
                return Err(Error::decode_failed("response is not well-formed xml")
                    .with_source(e)
                    .with_context(format!("position: {}", reader.buffer_position())))
            }
        }
    }
}
