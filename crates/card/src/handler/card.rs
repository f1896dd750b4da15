use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::{
    abstract_trait::card::service::{command::DynCardCommandService, query::DynCardQueryService},
    domain::{
        requests::CreateCardRequest,
        responses::{ApiResponse, CardResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/cards/create",
    tag = "Card",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card issued", body = ApiResponse<CardResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_card(
    Extension(service): Extension<DynCardCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = "Card",
    params(("id" = i32, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card details", body = ApiResponse<CardResponse>),
        (status = 404, description = "Card not found", body = ErrorResponse)
    )
)]
pub async fn get_card(
    Extension(service): Extension<DynCardQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/cards/by-account/{account_id}",
    tag = "Card",
    params(("account_id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Cards of the account", body = ApiResponse<Vec<CardResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_cards_by_account(
    Extension(service): Extension<DynCardQueryService>,
    Path(account_id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_account_id(account_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/cards/delete/{id}",
    tag = "Card",
    params(("id" = i32, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card deleted", body = ApiResponse<bool>),
        (status = 404, description = "Card not found", body = ErrorResponse)
    )
)]
pub async fn delete_card(
    Extension(service): Extension<DynCardCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}

pub fn card_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cards/create", post(create_card))
        .route("/api/cards/{id}", get(get_card))
        .route(
            "/api/cards/by-account/{account_id}",
            get(get_cards_by_account),
        )
        .route("/api/cards/delete/{id}", delete(delete_card))
        .layer(Extension(app_state.di_container.card_query.clone()))
        .layer(Extension(app_state.di_container.card_command.clone()))
}
