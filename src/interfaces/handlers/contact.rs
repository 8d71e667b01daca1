use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::message::ContactForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn submit_message(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler.submit_message(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
