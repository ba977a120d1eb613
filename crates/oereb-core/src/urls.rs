use url::Url;

use crate::error::{Error, Result};

/// Returns whether `candidate` is an absolute http(s) URL with a host.
pub fn uri_validator(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.has_host(),
        Err(_) => false,
    }
}

/// Merges query parameters into `url`.
///
/// Parameters already present in the URL keep their position unless they
/// are being replaced; everything else about the URL is preserved.
pub fn add_url_params(url: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut parsed = Url::parse(url).map_err(|_| Error::InvalidUrl {
        url: url.to_string(),
    })?;
    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(name, _)| !params.iter().any(|(new_name, _)| name.as_ref() == *new_name))
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    {
        let mut editor = parsed.query_pairs_mut();
        editor.clear();
        for (name, value) in &kept {
            editor.append_pair(name, value);
        }
        for (name, value) in params {
            editor.append_pair(name, value);
        }
    }
    Ok(parsed.to_string())
}
