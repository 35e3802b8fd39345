use diesel::SqliteConnection;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::error::ApiError;
use crate::{actions, models, DbPool};

/// Checks a connection out of the pool and runs `f` on a blocking thread.
/// The connection goes back to the pool when it drops, on every exit path.
async fn with_conn<T, F>(pool: DbPool, f: F) -> Result<T, Rejection>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> Result<T, ApiError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(ApiError::from)?;
        f(&mut conn)
    })
    .await
    .map_err(|e| warp::reject::custom(ApiError::Internal(e.to_string())))?;

    result.map_err(warp::reject::custom)
}

pub async fn list_plants(pool: DbPool) -> Result<impl Reply, Rejection> {
    let all = with_conn(pool, |conn| {
        actions::list_plants(conn).map_err(ApiError::from)
    })
    .await?;

    Ok(warp::reply::json(&all))
}

pub async fn create_plant(
    new_plant: models::NewPlant,
    pool: DbPool,
) -> Result<impl Reply, Rejection> {
    let plant = with_conn(pool, move |conn| {
        actions::insert_new_plant(conn, &new_plant).map_err(ApiError::from)
    })
    .await?;

    tracing::info!(id = plant.id, name = %plant.name, "created plant");
    Ok(warp::reply::with_status(
        warp::reply::json(&plant),
        StatusCode::CREATED,
    ))
}

pub async fn get_plant(plant_id: i32, pool: DbPool) -> Result<impl Reply, Rejection> {
    let plant = with_conn(pool, move |conn| {
        actions::find_plant_by_id(conn, plant_id).map_err(ApiError::from)
    })
    .await?;

    match plant {
        Some(plant) => Ok(warp::reply::json(&plant)),
        None => Err(warp::reject::custom(ApiError::NotFound)),
    }
}

pub async fn patch_plant(
    plant_id: i32,
    changes: models::UpdatePlant,
    pool: DbPool,
) -> Result<impl Reply, Rejection> {
    let plant = with_conn(pool, move |conn| {
        actions::update_plant(conn, plant_id, &changes).map_err(ApiError::from)
    })
    .await?;

    match plant {
        Some(plant) => Ok(warp::reply::json(&plant)),
        None => Err(warp::reject::custom(ApiError::NotFound)),
    }
}

pub async fn delete_plant(plant_id: i32, pool: DbPool) -> Result<impl Reply, Rejection> {
    let removed = with_conn(pool, move |conn| {
        actions::delete_plant(conn, plant_id).map_err(ApiError::from)
    })
    .await?;

    if removed {
        tracing::info!(id = plant_id, "deleted plant");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(warp::reject::custom(ApiError::NotFound))
    }
}
