use super::prelude::*;

/// Checks the shared admin password.
///
/// This is a convenience gate and not a security boundary.
pub fn authorize_admin(configured_password: &str, password: &str) -> Result<()> {
    if configured_password.is_empty() || configured_password != password {
        log::info!("Rejected admin login attempt");
        return Err(Error::Credentials);
    }
    Ok(())
}
