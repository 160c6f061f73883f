use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_CART_ENDPOINT: &str = "/cart";
pub const NOTE_PREFIX: &str = "Quiz+Recommendation:+";

/// Characters left untouched by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Cart link text for a finished recommendation. Nothing here touches the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartPayload {
    base_endpoint: String,
}

impl Default for CartPayload {
    fn default() -> Self {
        Self { base_endpoint: DEFAULT_CART_ENDPOINT.to_owned() }
    }
}

impl CartPayload {
    pub fn new(base_endpoint: Option<&str>) -> Self {
        match base_endpoint.map(str::trim).filter(|endpoint| !endpoint.is_empty()) {
            Some(endpoint) => Self { base_endpoint: endpoint.to_owned() },
            None => Self::default(),
        }
    }

    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// `<base>?note=Quiz+Recommendation:+<encoded stack name>`
    pub fn build(&self, stack_name: &str) -> String {
        format!(
            "{}?note={NOTE_PREFIX}{}",
            self.base_endpoint,
            utf8_percent_encode(stack_name, URI_COMPONENT)
        )
    }

    /// Recovers the stack name from a payload built by [`CartPayload::build`].
    pub fn decode_stack_name(payload: &str) -> Option<String> {
        let (_, query) = payload.split_once('?')?;
        let note = query.split('&').find_map(|pair| pair.strip_prefix("note="))?;
        let name = note.strip_prefix(NOTE_PREFIX)?;
        percent_decode_str(name).decode_utf8().ok().map(|decoded| decoded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::CartPayload;

    #[test]
    fn defaults_to_cart_endpoint() {
        let payload = CartPayload::new(None).build("Peak Synergy Pro Stack");
        assert_eq!(payload, "/cart?note=Quiz+Recommendation:+Peak%20Synergy%20Pro%20Stack");
    }

    #[test]
    fn blank_endpoint_falls_back_to_default() {
        assert_eq!(CartPayload::new(Some("  ")).base_endpoint(), "/cart");
    }

    #[test]
    fn uses_configured_endpoint() {
        let payload = CartPayload::new(Some("https://shop.example.com/cart")).build("Elite Stack");
        assert_eq!(
            payload,
            "https://shop.example.com/cart?note=Quiz+Recommendation:+Elite%20Stack"
        );
    }

    #[test]
    fn encodes_like_uri_component() {
        let payload = CartPayload::default().build("Mind-Muscle (3 Flavors) + more & 'stuff'!");
        assert!(payload.ends_with("Mind-Muscle%20(3%20Flavors)%20%2B%20more%20%26%20'stuff'!"));
    }

    #[test]
    fn stack_names_round_trip() {
        let names = [
            "Ultimate Mind-Muscle Mastery Discovery Stack",
            "Wellness Warrior Starter Stack",
            "Plus+Sign & Ampersand: 100% ?#",
            "Café Crème Stack",
        ];
        for name in names {
            let payload = CartPayload::new(Some("/checkout")).build(name);
            assert_eq!(CartPayload::decode_stack_name(&payload).as_deref(), Some(name));
        }
    }

    #[test]
    fn foreign_urls_do_not_decode() {
        assert_eq!(CartPayload::decode_stack_name("/cart"), None);
        assert_eq!(CartPayload::decode_stack_name("/cart?note=Something+else"), None);
    }
}
