/// Default base URL of the Gitee REST API v5
pub const DEFAULT_BASE_URL: &str = "https://gitee.com/api/v5";
/// Default web URL, used to build repository links the API did not return
pub const DEFAULT_WEB_URL: &str = "https://gitee.com";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default page size for list endpoints (Gitee caps `per_page` at 100)
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// First page number; Gitee pages are 1-based
pub const FIRST_PAGE: u32 = 1;
/// Name of the authentication parameter expected by Gitee
pub const ACCESS_TOKEN_PARAM: &str = "access_token";
/// User agent string used in HTTP requests to identify this client to Gitee
pub const USER_AGENT: &str = concat!("gitee-client/", env!("CARGO_PKG_VERSION"));
/// Prefix of fully-qualified tag references
pub const TAG_REF_PREFIX: &str = "refs/tags/";
/// Prefix of fully-qualified branch references
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";
