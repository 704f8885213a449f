use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, PlanetDto},
    server::{
        data::{character::CharacterRepository, planet::PlanetRepository},
        error::{catalog::CatalogError, Error},
    },
};

/// Read-only access to the planets and characters of the catalog.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::CatalogError)` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(CatalogError::PlanetNotFound(planet_id))?;

        Ok(planet.into())
    }

    pub async fn get_all_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::CatalogError)` - No character with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(CatalogError::CharacterNotFound(character_id))?;

        Ok(character.into())
    }
}
