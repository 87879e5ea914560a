use std::collections::HashMap;

pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Reads `limit`/`offset` out of the query string, clamping the limit to
    /// 1-100. Unparseable values fall back to the defaults.
    pub fn from_params(params: &HashMap<String, String>, default_limit: i64) -> Self {
        let limit = params
            .get("limit")
            .and_then(|l| l.parse::<i64>().ok())
            .unwrap_or(default_limit)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let offset = params
            .get("offset")
            .and_then(|o| o.parse::<i64>().ok())
            .unwrap_or(0)
            .max(0);
        Page { limit, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_params_missing() {
        let page = Page::from_params(&HashMap::new(), 30);
        assert_eq!(page.limit, 30);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn limit_is_clamped_to_bounds() {
        let page = Page::from_params(&params(&[("limit", "500")]), 30);
        assert_eq!(page.limit, 100);

        let page = Page::from_params(&params(&[("limit", "0")]), 30);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn negative_offset_becomes_zero() {
        let page = Page::from_params(&params(&[("offset", "-3")]), 30);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let page = Page::from_params(&params(&[("limit", "abc"), ("offset", "xyz")]), 30);
        assert_eq!(page.limit, 30);
        assert_eq!(page.offset, 0);
    }
}
