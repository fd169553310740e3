use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("page address must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

/// Swap the page scheme for its websocket equivalent and append the `ws`
/// route. Host, port, and path are preserved; the suffix is appended
/// directly, so a page address is expected to end in `/`.
pub fn endpoint_url(page: &str) -> Result<String, EndpointError> {
    let swapped = if let Some(rest) = page.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = page.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        return Err(EndpointError::UnsupportedScheme(page.to_string()));
    };
    Ok(format!("{swapped}ws"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_http_scheme() {
        assert_eq!(
            endpoint_url("http://localhost:8080/").unwrap(),
            "ws://localhost:8080/ws"
        );
    }

    #[test]
    fn substitutes_https_scheme() {
        assert_eq!(
            endpoint_url("https://example.com/").unwrap(),
            "wss://example.com/ws"
        );
    }

    #[test]
    fn preserves_port_and_path() {
        assert_eq!(
            endpoint_url("http://example.com:9001/game/").unwrap(),
            "ws://example.com:9001/game/ws"
        );
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            endpoint_url("ftp://example.com/"),
            Err(EndpointError::UnsupportedScheme("ftp://example.com/".into()))
        );
    }
}
