//! Attachment URL canonicalization.

/// Strips the query string from a URL, turning a pre-signed upload URL into
/// the stable public-read URL that gets persisted on the item.
pub fn public_read_url(url: &str) -> &str {
    match url.split_once('?') {
        Some((base, _)) => base,
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_presign_credentials() {
        let url = "https://bucket.s3.amazonaws.com/abc?X-Amz-Signature=deadbeef&X-Amz-Expires=300";
        assert_eq!(public_read_url(url), "https://bucket.s3.amazonaws.com/abc");
    }

    #[test]
    fn test_plain_url_unchanged() {
        let url = "https://bucket.s3.amazonaws.com/abc";
        assert_eq!(public_read_url(url), url);
    }

    #[test]
    fn test_empty_query_still_stripped() {
        assert_eq!(public_read_url("https://example.com/x?"), "https://example.com/x");
    }
}
