/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;

/// Fails with [`AppError::InvalidInput`] when `value` is empty or whitespace
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validates the `owner`/`repo` pair shared by every repository endpoint
pub fn require_repo(owner: &str, repo: &str) -> Result<(), AppError> {
    require_non_empty("owner", owner)?;
    require_non_empty("repo", repo)
}

/// Fails with [`AppError::InvalidInput`] when a numeric id is zero
pub fn require_id(field: &str, id: u64) -> Result<(), AppError> {
    if id == 0 {
        return Err(AppError::InvalidInput(format!("{field} must be positive")));
    }
    Ok(())
}

/// Fails with [`AppError::InvalidInput`] unless `url` is an http(s) URL
pub fn require_http_url(field: &str, url: &str) -> Result<(), AppError> {
    require_non_empty(field, url)?;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::InvalidInput(format!(
            "{field} must be an http(s) url, got {url}"
        )));
    }
    Ok(())
}
