use diesel::prelude::*;

use crate::models;

/// Run query using Diesel to find a plant by its primary key and return it.
pub fn find_plant_by_id(
    conn: &mut SqliteConnection,
    plant_id: i32,
) -> QueryResult<Option<models::Plant>> {
    use crate::schema::plants::dsl::*;

    plants
        .filter(id.eq(plant_id))
        .first::<models::Plant>(conn)
        .optional()
}

/// Run query using Diesel to load every plant, ordered by id.
pub fn list_plants(conn: &mut SqliteConnection) -> QueryResult<Vec<models::Plant>> {
    use crate::schema::plants::dsl::*;

    plants.order(id.asc()).load::<models::Plant>(conn)
}

/// Run query using Diesel to insert a new database row and return the result.
pub fn insert_new_plant(
    conn: &mut SqliteConnection,
    new_plant: &models::NewPlant,
) -> QueryResult<models::Plant> {
    // It is common when using Diesel to import schema-related modules inside
    // a function's scope (rather than the normal module's scope) to prevent
    // import collisions and namespace pollution.
    use crate::schema::plants::dsl::*;

    diesel::insert_into(plants)
        .values(new_plant)
        .get_result(conn)
}

/// Apply a partial update to one plant and return the fresh row, or `None`
/// if the id has no matching row. An all-`None` changeset skips the write
/// and just reloads.
pub fn update_plant(
    conn: &mut SqliteConnection,
    plant_id: i32,
    changes: &models::UpdatePlant,
) -> QueryResult<Option<models::Plant>> {
    use crate::schema::plants::dsl::*;

    conn.transaction(|conn| {
        if !changes.is_empty() {
            diesel::update(plants.filter(id.eq(plant_id)))
                .set(changes)
                .execute(conn)?;
        }
        plants
            .filter(id.eq(plant_id))
            .first::<models::Plant>(conn)
            .optional()
    })
}

/// Remove one plant; returns whether a row was actually deleted.
pub fn delete_plant(conn: &mut SqliteConnection, plant_id: i32) -> QueryResult<bool> {
    use crate::schema::plants::dsl::*;

    let removed = diesel::delete(plants.filter(id.eq(plant_id))).execute(conn)?;

    Ok(removed > 0)
}
