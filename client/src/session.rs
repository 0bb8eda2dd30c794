use crate::error::{ClientError, Result};
use crate::models::User;

/// Who is using this process right now. Replaces the old ambient
/// shared-mutable context: the session lives in one place and screens get a
/// reference instead of reaching into a global.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
    pub driver_name: Option<String>,
    pub upi_id: Option<String>,
}

/// Single ownership point for the session. Constructed once at startup and
/// passed by reference to whatever needs identity.
#[derive(Debug, Default)]
pub struct SessionManager {
    session: Option<Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, user: &User) -> &Session {
        self.session = Some(Session {
            user_id: user.id,
            username: user.username.clone(),
            driver_name: None,
            upi_id: user.upi_id.clone(),
        });
        self.session.as_ref().unwrap()
    }

    pub fn current(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(ClientError::NoSession)
    }

    pub fn set_driver_name(&mut self, driver_name: &str) -> Result<()> {
        let session = self.session.as_mut().ok_or(ClientError::NoSession)?;
        session.driver_name = Some(driver_name.to_string());
        Ok(())
    }

    pub fn set_upi_id(&mut self, upi_id: &str) -> Result<()> {
        let session = self.session.as_mut().ok_or(ClientError::NoSession)?;
        session.upi_id = Some(upi_id.to_string());
        Ok(())
    }

    pub fn end(&mut self) {
        self.session = None;
    }
}
