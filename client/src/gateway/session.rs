//! Session operations

use shared::store::{BusinessAction, ReviewAction, SessionAction};
use shared::{LoginInput, SessionUser, SignupInput, UserEnvelope};

use super::Gateway;
use crate::error::{ApiOutcome, ClientResult};

impl Gateway {
    /// `GET /api/auth/`; a rejection means nobody is logged in
    pub async fn restore_user(&self) -> ClientResult<ApiOutcome<SessionUser>> {
        let request = self.client.get(self.url("/api/auth/"));
        let outcome: ApiOutcome<SessionUser> = self.execute("restore_user", request).await?;
        if let ApiOutcome::Success(user) = &outcome {
            self.store.dispatch(SessionAction::SetUser(user.clone()));
        }
        Ok(outcome)
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, input: &LoginInput) -> ClientResult<ApiOutcome<SessionUser>> {
        let request = self.client.post(self.url("/api/auth/login")).json(input);
        let outcome: ApiOutcome<SessionUser> = self.execute("login", request).await?;
        if let ApiOutcome::Success(user) = &outcome {
            self.store.dispatch(SessionAction::SetUser(user.clone()));
        }
        Ok(outcome)
    }

    /// `POST /api/users/`; the new user is logged in
    pub async fn signup(&self, input: &SignupInput) -> ClientResult<ApiOutcome<SessionUser>> {
        let request = self.client.post(self.url("/api/users/")).json(input);
        let outcome: ApiOutcome<UserEnvelope> = self.execute("signup", request).await?;
        if let ApiOutcome::Success(envelope) = &outcome {
            self.store
                .dispatch(SessionAction::SetUser(envelope.user.clone()));
        }
        Ok(outcome.map(|envelope| envelope.user))
    }

    /// `GET /api/auth/logout`; clears session, business and review state
    pub async fn logout(&self) -> ClientResult<ApiOutcome<()>> {
        let request = self.client.get(self.url("/api/auth/logout"));
        let outcome = self.execute_empty("logout", request).await?;
        if outcome.is_success() {
            self.store.dispatch(SessionAction::RemoveUser);
            self.store.dispatch(BusinessAction::Clear);
            self.store.dispatch(ReviewAction::Clear);
        }
        Ok(outcome)
    }
}
