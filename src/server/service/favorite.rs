use std::collections::{BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::{catalog::CatalogError, Error},
        model::db::{CharacterModel, FavoriteModel, PlanetModel, UserModel},
    },
};

/// What a favorite points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    fn planet_id(self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(id),
            Self::Character(_) => None,
        }
    }

    fn character_id(self) -> Option<i32> {
        match self {
            Self::Planet(_) => None,
            Self::Character(id) => Some(id),
        }
    }
}

/// Service for listing, creating and removing favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        self.to_dtos(favorites).await
    }

    /// Retrieves a single favorite with its planet, character and user
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - Favorite found
    /// - `Err(Error::CatalogError)` - No favorite with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_favorite(&self, favorite_id: i32) -> Result<FavoriteDto, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .get_by_id(favorite_id)
            .await?
            .ok_or(CatalogError::FavoriteNotFound(favorite_id))?;

        let mut dtos = self.to_dtos(vec![favorite]).await?;

        dtos.pop().ok_or_else(|| {
            Error::InternalError(format!(
                "Favorite ID {} was lost while loading its relations",
                favorite_id
            ))
        })
    }

    /// Creates a favorite linking a user to a planet or character
    ///
    /// The user is looked up first, then the target. Creating the same favorite twice
    /// creates two rows.
    ///
    /// # Returns
    /// - `Ok(FavoriteModel)` - The committed favorite
    /// - `Err(Error::CatalogError)` - User or target not found, nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, Error> {
        let txn = self.db.begin().await?;

        UserRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(CatalogError::UserNotFound(user_id))?;

        match target {
            FavoriteTarget::Planet(planet_id) => {
                PlanetRepository::new(&txn)
                    .get_by_id(planet_id)
                    .await?
                    .ok_or(CatalogError::PlanetNotFound(planet_id))?;
            }
            FavoriteTarget::Character(character_id) => {
                CharacterRepository::new(&txn)
                    .get_by_id(character_id)
                    .await?
                    .ok_or(CatalogError::CharacterNotFound(character_id))?;
            }
        }

        let favorite = FavoriteRepository::new(&txn)
            .create(user_id, target.planet_id(), target.character_id())
            .await?;

        txn.commit().await?;

        tracing::debug!(
            favorite_id = favorite.id,
            user_id = user_id,
            "Created favorite for {:?}",
            target
        );

        Ok(favorite)
    }

    /// Removes the oldest favorite linking a user to a planet or character
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted and committed
    /// - `Err(Error::CatalogError)` - User not found, or no matching favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        UserRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(CatalogError::UserNotFound(user_id))?;

        let favorite_repository = FavoriteRepository::new(&txn);
        let favorite = match target {
            FavoriteTarget::Planet(planet_id) => {
                favorite_repository
                    .find_for_planet(user_id, planet_id)
                    .await?
                    .ok_or(CatalogError::FavoriteNotFound(planet_id))?
            }
            FavoriteTarget::Character(character_id) => {
                favorite_repository
                    .find_for_character(user_id, character_id)
                    .await?
                    .ok_or(CatalogError::FavoriteNotFound(character_id))?
            }
        };

        favorite_repository.delete(favorite.id).await?;

        txn.commit().await?;

        tracing::debug!(
            favorite_id = favorite.id,
            user_id = user_id,
            "Deleted favorite for {:?}",
            target
        );

        Ok(())
    }

    /// Converts favorites into DTOs, loading their planets, characters and users with one
    /// batched query per table. Order of `favorites` is preserved.
    pub(crate) async fn to_dtos(
        &self,
        favorites: Vec<FavoriteModel>,
    ) -> Result<Vec<FavoriteDto>, Error> {
        let planet_ids: BTreeSet<i32> = favorites.iter().filter_map(|f| f.planet_id).collect();
        let character_ids: BTreeSet<i32> =
            favorites.iter().filter_map(|f| f.character_id).collect();
        let user_ids: BTreeSet<i32> = favorites.iter().map(|f| f.user_id).collect();

        let planets: HashMap<i32, PlanetModel> = PlanetRepository::new(self.db)
            .get_many_by_ids(planet_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let characters: HashMap<i32, CharacterModel> = CharacterRepository::new(self.db)
            .get_many_by_ids(character_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let users: HashMap<i32, UserModel> = UserRepository::new(self.db)
            .get_many_by_ids(user_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        favorites
            .into_iter()
            .map(|favorite| {
                // Only reachable if the user foreign key is not enforced by the backend
                let user = users.get(&favorite.user_id).cloned().ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find user ID {} of favorite ID {}",
                        favorite.user_id, favorite.id
                    ))
                })?;

                Ok(FavoriteDto {
                    id: favorite.id,
                    planet: favorite
                        .planet_id
                        .and_then(|id| planets.get(&id).cloned())
                        .map(Into::into),
                    character: favorite
                        .character_id
                        .and_then(|id| characters.get(&id).cloned())
                        .map(Into::into),
                    user: user.into(),
                })
            })
            .collect()
    }
}
