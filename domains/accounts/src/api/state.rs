//! Accounts domain state and session verifier integration

use std::sync::Arc;

use axum::extract::FromRef;
use marketplace_auth::{SessionVerifier, TokenCodec};

use crate::repository::AccountStore;

/// Application state for the accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub store: Arc<dyn AccountStore>,
    pub verifier: SessionVerifier,
}

impl AccountsState {
    pub fn new(store: Arc<dyn AccountStore>, verifier: SessionVerifier) -> Self {
        Self { store, verifier }
    }

    pub fn codec(&self) -> &TokenCodec {
        self.verifier.codec()
    }
}

impl FromRef<AccountsState> for SessionVerifier {
    fn from_ref(state: &AccountsState) -> Self {
        state.verifier.clone()
    }
}
