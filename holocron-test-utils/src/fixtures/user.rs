//! User and favorite database insertion utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a mock user with the given email into the database.
    ///
    /// Uses the values of [`factory::mock_user_model`]. Emails are unique, inserting the
    /// same email twice fails.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The created user record
    /// - `Err(TestError::DbErr)` - Database insert failed
    pub async fn insert_mock_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        let user = factory::mock_user_model(0, email);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(user.name),
                email: ActiveValue::Set(user.email),
                password: ActiveValue::Set(user.password),
                is_active: ActiveValue::Set(user.is_active),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a favorite with arbitrary references.
    ///
    /// Referenced rows must already exist. Passing `None` for both references creates a
    /// favorite pointing at nothing, which the schema allows.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        character_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a favorite linking the user to a planet.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, Some(planet_id), None).await
    }

    /// Insert a favorite linking the user to a character.
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, None, Some(character_id)).await
    }
}
