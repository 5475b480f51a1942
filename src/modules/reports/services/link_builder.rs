use url::Url;

use crate::core::{AppError, Result};
use crate::modules::reports::models::{NavigationLinks, PageRequest};

/// Path of the monthly listing endpoint
pub const REPORT_PATH: &str = "/report";

/// Path of the date-range endpoint
pub const REPORTING_PATH: &str = "/reporting";

/// Builds absolute navigation URLs for report pages.
///
/// Query parameters are always written in the same order (`limit`,
/// `outlet_id`, `page`), so identical requests yield identical links.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: Url,
}

impl LinkBuilder {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| {
            AppError::configuration(format!("Invalid report base URL '{}': {}", base_url, e))
        })?;

        if base.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Report base URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self { base })
    }

    /// URL of one report page
    pub fn link_for(&self, path: &str, outlet_id: u64, limit: u32, page: u32) -> String {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(None);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            if outlet_id > 0 {
                query.append_pair("outlet_id", &outlet_id.to_string());
            }
            query.append_pair("page", &page.to_string());
        }

        url.to_string()
    }

    /// Current, next and previous links for `paging`.
    ///
    /// `next` exists whenever there is more than one page; `previous` also
    /// needs the current page to be past the first.
    pub fn navigation(
        &self,
        path: &str,
        outlet_id: u64,
        paging: PageRequest,
        total_page: u32,
    ) -> NavigationLinks {
        let link = |page: u32| self.link_for(path, outlet_id, paging.limit(), page);
        let paginated = total_page > 1;

        NavigationLinks {
            current: link(paging.page()),
            next: paginated.then(|| link(paging.page().saturating_add(1))),
            previous: (paginated && paging.page() > 1).then(|| link(paging.page() - 1)),
        }
    }
}
