/// Prefix of every API request. Set `DASHBOARD_API_URL` at build time to
/// point the dashboard at another host.
pub const API_BASE_URL: &str = match option_env!("DASHBOARD_API_URL") {
    Some(url) => url,
    None => "/api",
};
