//! Session slice

use serde::Serialize;

use crate::models::SessionUser;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetUser(SessionUser),
    RemoveUser,
}

impl SessionAction {
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::SetUser(_) => "session/set-user",
            SessionAction::RemoveUser => "session/remove-user",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn reduce(&self, action: &SessionAction) -> SessionState {
        match action {
            SessionAction::SetUser(user) => SessionState {
                user: Some(user.clone()),
            },
            SessionAction::RemoveUser => SessionState { user: None },
        }
    }
}
