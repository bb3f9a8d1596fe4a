//! Login and balance bootstrap

use super::{ensure_ok, Session};
use matchfarm_core::{Error, LoginData, LoginRequest, Points, Result};
use matchfarm_networking::api::with_authorization;
use matchfarm_networking::Endpoint;
use tracing::info;

impl Session<'_> {
    /// Exchange the raw credential for a session token
    pub(super) async fn login(&mut self) -> Result<()> {
        let response = self
            .post(Endpoint::Login, &LoginRequest::from(&self.credential))
            .await?;
        ensure_ok(Endpoint::Login, &response)?;

        let token = response
            .data::<LoginData>(Endpoint::Login)
            .ok()
            .and_then(|data| data.token)
            .filter(|token| !token.is_empty())
            .ok_or(Error::TokenMissing)?;

        self.headers = with_authorization(&self.headers, &token)?;
        self.token = Some(token);

        info!("Login successful!");
        Ok(())
    }

    /// Fetch the point balance; only used for display
    pub(super) async fn fetch_balance(&mut self) -> Result<()> {
        let response = self.post(Endpoint::Balance, &self.uid_body()).await?;
        ensure_ok(Endpoint::Balance, &response)?;

        self.balance = Points(response.data::<f64>(Endpoint::Balance).unwrap_or_default());
        info!("Balance: {}", self.balance.display_value());
        Ok(())
    }
}
