//! Planet and character database insertion utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a mock planet into the database.
    ///
    /// Uses the values of [`factory::mock_planet_model`] with the given name.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - The created planet record
    /// - `Err(TestError::DbErr)` - Database insert failed
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let planet = factory::mock_planet_model(0, name);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                population: ActiveValue::Set(planet.population),
                terrain: ActiveValue::Set(planet.terrain),
                climate: ActiveValue::Set(planet.climate),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock character into the database.
    ///
    /// Uses the values of [`factory::mock_character_model`] with the given name.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - The created character record
    /// - `Err(TestError::DbErr)` - Database insert failed
    pub async fn insert_mock_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        let character = factory::mock_character_model(0, name);

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(character.name),
                gender: ActiveValue::Set(character.gender),
                eye_color: ActiveValue::Set(character.eye_color),
                hair_color: ActiveValue::Set(character.hair_color),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
