use std::sync::Arc;

use actix_web::web;
use portfolio_api::{
    repositories::{memory::MemStorage, storage::Storage},
    use_cases::seed::seed_catalog,
    AppState,
};

/// Fresh in-memory application state plus a handle on the underlying store.
pub fn empty_state() -> (Arc<dyn Storage>, web::Data<AppState>) {
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
    let state = web::Data::new(AppState::new(storage.clone(), None, None));
    (storage, state)
}

/// In-memory application state with the built-in catalog seeded.
pub async fn seeded_state() -> web::Data<AppState> {
    let (storage, state) = empty_state();
    seed_catalog(storage.as_ref())
        .await
        .expect("Failed to seed test store");
    state
}
