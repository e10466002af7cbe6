use maud::{Markup, html};
use reqwest::Url;

/// Logos are either an image under the relative `static/` route, an absolute
/// http(s) URL, or a short text/emoji mark.
#[must_use]
pub fn render_logo(name: &str, logo: &str) -> Markup {
    if logo.starts_with("static/") || logo.starts_with("http://") || logo.starts_with("https://") {
        html! {
            img class="logo-image" src=(logo) alt=(format!("{name} logo"));
        }
    } else {
        html! {
            span class="logo-text" { (logo) }
        }
    }
}

/// Relative link with an encoded query string, e.g. `compare?left=Ohio+State`.
#[must_use]
pub fn relative_link(path: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params("http://localhost/", params) {
        Ok(url) => match url.query() {
            Some(query) if !query.is_empty() => format!("{path}?{query}"),
            _ => path.to_string(),
        },
        Err(_) => path.to_string(),
    }
}
