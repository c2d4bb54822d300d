use axum::http::{HeaderMap, HeaderName, HeaderValue, header::LINK};
use serde::Deserialize;

use armory_app::config::Config;
use armory_types::errors::AppError;
use armory_types::page::{Page, PageRequest, SortDirection, SortField, SortOrder};

pub const X_TOTAL_COUNT: &str = "x-total-count";

/// Query-string shape of a page spec: `?page=0&size=20&sort=name,desc`.
/// The `sort` key may repeat.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    #[serde(default)]
    pub sort: Vec<String>,
}

impl PageParams {
    /// Resolves raw query params against the configured default and cap,
    /// falling back to a deterministic `id,asc` order when no sort is given.
    pub fn into_page_request(self, config: &Config) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(0);
        let size = self
            .size
            .unwrap_or(config.default_page_size)
            .clamp(1, config.max_page_size);

        let mut sort = Vec::with_capacity(self.sort.len());
        for entry in &self.sort {
            sort.push(SortOrder::parse(entry)?);
        }
        if sort.is_empty() {
            sort.push(SortOrder::new(SortField::Id, SortDirection::Asc));
        }

        Ok(PageRequest::new(page, size, sort))
    }
}

fn page_link(base: &str, request: &PageRequest, page_number: u32, rel: &str) -> String {
    let mut query = format!("page={}&size={}", page_number, request.size);
    for order in &request.sort {
        query.push_str(&format!("&sort={order}"));
    }
    format!("<{base}?{query}>; rel=\"{rel}\"")
}

/// Builds the `X-Total-Count` and RFC 5988 `Link` headers for one page,
/// preserving size and sort parameters in every relation.
pub fn pagination_headers<T>(base: &str, request: &PageRequest, page: &Page<T>) -> HeaderMap {
    let mut links = Vec::new();
    if page.has_next() {
        links.push(page_link(base, request, page.number + 1, "next"));
    }
    if page.has_previous() {
        links.push(page_link(base, request, page.number - 1, "prev"));
    }
    links.push(page_link(
        base,
        request,
        page.total_pages().saturating_sub(1),
        "last",
    ));
    links.push(page_link(base, request, 0, "first"));

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&page.total_elements.to_string()) {
        headers.insert(HeaderName::from_static(X_TOTAL_COUNT), value);
    }
    if let Ok(value) = HeaderValue::from_str(&links.join(",")) {
        headers.insert(LINK, value);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_types::hero::Hero;

    fn config() -> Config {
        Config {
            http_port: 8080,
            default_page_size: 20,
            max_page_size: 2000,
        }
    }

    #[test]
    fn defaults_apply_when_params_are_absent() {
        let request = PageParams::default().into_page_request(&config()).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 20);
        assert_eq!(request.sort.len(), 1);
        assert_eq!(request.sort[0].field, SortField::Id);
    }

    #[test]
    fn size_is_capped() {
        let params = PageParams {
            page: None,
            size: Some(100_000),
            sort: vec![],
        };
        let request = params.into_page_request(&config()).unwrap();
        assert_eq!(request.size, 2000);
    }

    #[test]
    fn invalid_sort_is_rejected() {
        let params = PageParams {
            page: None,
            size: None,
            sort: vec!["health,asc".to_string()],
        };
        assert!(matches!(
            params.into_page_request(&config()),
            Err(AppError::InvalidSortProperty(_))
        ));
    }

    #[test]
    fn headers_carry_total_and_links() {
        let request = PageRequest::new(
            1,
            2,
            vec![SortOrder::new(SortField::Name, SortDirection::Desc)],
        );
        let page = Page::<Hero> {
            content: vec![],
            number: 1,
            size: 2,
            total_elements: 5,
        };

        let headers = pagination_headers("/api/heroes", &request, &page);

        assert_eq!(headers.get(X_TOTAL_COUNT).unwrap(), "5");
        let link = headers.get(LINK).unwrap().to_str().unwrap();
        assert!(link.contains("</api/heroes?page=2&size=2&sort=name,desc>; rel=\"next\""));
        assert!(link.contains("rel=\"prev\""));
        assert!(link.contains("</api/heroes?page=2&size=2&sort=name,desc>; rel=\"last\""));
        assert!(link.contains("</api/heroes?page=0&size=2&sort=name,desc>; rel=\"first\""));
    }
}
