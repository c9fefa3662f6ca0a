use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

const MESSAGING_ENDPOINT: &str = "https://wa.me/";

/// Characters left as-is by a browser's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Messaging deep link carrying `text` as its percent-encoded `text`
/// parameter. Spaces become `%20`, never `+`.
pub fn share_link(text: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(MESSAGING_ENDPOINT)?;
    let encoded = utf8_percent_encode(text, COMPONENT);
    url.set_query(Some(&format!("text={encoded}")));
    Ok(url)
}
