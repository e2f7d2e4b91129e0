use axum::extract::FromRef;

use crate::auth::TokenCodec;
use crate::database::Store;
use crate::services::payments::PaymentClient;

/// Shared application state. Each field is independently extractable so
/// guards and handlers only name the dependency they actually use.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub tokens: TokenCodec,
    pub payments: PaymentClient,
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for PaymentClient {
    fn from_ref(state: &AppState) -> Self {
        state.payments.clone()
    }
}
