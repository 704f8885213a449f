use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every character whose ID is in `character_ids`, ignoring IDs with no matching row
    pub async fn get_many_by_ids(
        &self,
        character_ids: Vec<i32>,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids))
            .all(self.db)
            .await
    }
}
