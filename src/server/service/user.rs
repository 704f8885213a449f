use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        favorite::FavoriteDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{catalog::CatalogError, Error},
        service::favorite::FavoriteService,
    },
};

/// Service for managing user accounts and listing their favorites.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::CatalogError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(CatalogError::UserNotFound(user_id))?;

        Ok(user.into())
    }

    /// Creates a new user after checking the required fields are not blank
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The committed user, without its password
    /// - `Err(Error::ValidationError)` - Blank email or password
    /// - `Err(Error::DbErr)` - Database operation failed, including an already registered email
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        if payload.email.trim().is_empty() {
            return Err(Error::ValidationError("email must not be blank".to_string()));
        }
        if payload.password.trim().is_empty() {
            return Err(Error::ValidationError(
                "password must not be blank".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(
                payload.name,
                payload.email,
                payload.password,
                payload.is_active,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = user.id, "Created user");

        Ok(user.into())
    }

    /// Lists the favorites of a user, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - Possibly empty list of favorites
    /// - `Err(Error::CatalogError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(CatalogError::UserNotFound(user_id))?;

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        FavoriteService::new(self.db).to_dtos(favorites).await
    }
}
