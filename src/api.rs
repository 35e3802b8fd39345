use std::convert::Infallible;

use serde::de::DeserializeOwned;
use warp::{Filter, Rejection, Reply};

use crate::error::handle_rejection;
use crate::{handlers, models, DbPool};

/// The complete `/plants` API with rejection handling applied.
pub fn routes(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    plants(pool).recover(handle_rejection)
}

fn plants(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    plants_list(pool.clone())
        .or(plants_create(pool.clone()))
        .or(plants_get(pool.clone()))
        .or(plants_patch(pool.clone()))
        .or(plants_delete(pool))
}

/// GET /plants
fn plants_list(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants")
        .and(warp::get())
        .and(with_db(pool))
        .and_then(handlers::list_plants)
}

/// POST /plants with a JSON NewPlant body
fn plants_create(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants")
        .and(warp::post())
        .and(json_body::<models::NewPlant>())
        .and(with_db(pool))
        .and_then(handlers::create_plant)
}

/// GET /plants/:id
fn plants_get(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants" / i32)
        .and(warp::get())
        .and(with_db(pool))
        .and_then(handlers::get_plant)
}

/// PATCH /plants/:id with a JSON partial-plant body
fn plants_patch(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants" / i32)
        .and(warp::patch())
        .and(json_body::<models::UpdatePlant>())
        .and(with_db(pool))
        .and_then(handlers::patch_plant)
}

/// DELETE /plants/:id
fn plants_delete(pool: DbPool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants" / i32)
        .and(warp::delete())
        .and(with_db(pool))
        .and_then(handlers::delete_plant)
}

fn with_db(pool: DbPool) -> impl Filter<Extract = (DbPool,), Error = Infallible> + Clone {
    warp::any().map(move || pool.clone())
}

fn json_body<T: DeserializeOwned + Send>(
) -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    // Bodies here are a handful of fields; anything bigger is a mistake.
    warp::body::content_length_limit(1024 * 16).and(warp::body::json())
}
