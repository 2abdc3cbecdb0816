use super::common::{Query, QueryParams, Resource};

/// Account details for the authenticated credentials (`account_info.json`).
///
/// The resource takes no parameters of its own; overrides and client-wide
/// defaults are still sent.
#[derive(Clone, Debug, Default)]
pub struct AccountInfoQuery {
    pub overrides: QueryParams,
}

impl Query for AccountInfoQuery {
    fn resource(&self) -> Resource {
        Resource::AccountInfo
    }
    fn default_params(&self) -> QueryParams {
        QueryParams::new()
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}
