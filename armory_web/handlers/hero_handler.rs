use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;

use armory_app::{
    command_handlers::{
        CreateHeroCommandHandler, DeleteHeroCommandHandler, PartialUpdateHeroCommandHandler,
        ReplaceHeroCommandHandler,
    },
    cqrs::{
        commands::{CreateHero, DeleteHero, PartialUpdateHero, ReplaceHero},
        queries::{GetHeroById, ListHeroes},
    },
    queries_handlers::{GetHeroByIdHandler, ListHeroesHandler},
};
use armory_types::errors::ApplicationError;
use armory_types::hero::HeroPayload;

use crate::{
    handlers::{ApiError, PageParams, pagination_headers},
    http::AppState,
};

pub async fn create_hero(
    State(state): State<AppState>,
    Json(payload): Json<HeroPayload>,
) -> Result<Response, ApiError> {
    tracing::debug!("REST request to save Hero : {:?}", payload);

    let saved = state
        .app_bus
        .execute(CreateHero { payload }, CreateHeroCommandHandler::new())
        .await?;

    let id = saved
        .id
        .ok_or_else(|| ApplicationError::Unknown("hero saved without an id".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/heroes/{id}"))],
        Json(saved),
    )
        .into_response())
}

pub async fn replace_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HeroPayload>,
) -> Result<Response, ApiError> {
    tracing::debug!("REST request to update Hero : {}, {:?}", id, payload);

    let saved = state
        .app_bus
        .execute(
            ReplaceHero {
                path_id: id,
                payload,
            },
            ReplaceHeroCommandHandler::new(),
        )
        .await?;

    Ok(Json(saved).into_response())
}

pub async fn partial_update_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HeroPayload>,
) -> Result<Response, ApiError> {
    tracing::debug!(
        "REST request to partial update Hero partially : {}, {:?}",
        id,
        payload
    );

    let saved = state
        .app_bus
        .execute(
            PartialUpdateHero {
                path_id: id,
                payload,
            },
            PartialUpdateHeroCommandHandler::new(),
        )
        .await?;

    Ok(Json(saved).into_response())
}

pub async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    tracing::debug!("REST request to get Hero : {}", id);

    let hero = state
        .app_bus
        .query(GetHeroById { hero_id: id }, GetHeroByIdHandler::new())
        .await?;

    Ok(Json(hero).into_response())
}

pub async fn list_heroes(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Response, ApiError> {
    tracing::debug!("REST request to get a page of Heroes");

    let request = params.into_page_request(&state.config)?;
    let page = state
        .app_bus
        .query(
            ListHeroes {
                page: request.clone(),
            },
            ListHeroesHandler::new(),
        )
        .await?;

    let headers = pagination_headers("/api/heroes", &request, &page);
    Ok((headers, Json(page.content)).into_response())
}

pub async fn delete_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    tracing::debug!("REST request to delete Hero : {}", id);

    state
        .app_bus
        .execute(DeleteHero { hero_id: id }, DeleteHeroCommandHandler::new())
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
