//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances with standard test values that don't require
//! database interaction. The database fixtures insert the same values.

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - Record ID of the user
/// - `email` - Email of the user
pub fn mock_user_model(id: i32, email: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        name: Some("Test User".to_string()),
        email: email.to_string(),
        password: "password".to_string(),
        is_active: true,
    }
}

/// Create a mock planet database model for testing.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        population: "200000".to_string(),
        terrain: "desert".to_string(),
        climate: "arid".to_string(),
    }
}

/// Create a mock character database model for testing.
pub fn mock_character_model(id: i32, name: &str) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        gender: "male".to_string(),
        eye_color: "brown".to_string(),
        hair_color: "brown".to_string(),
    }
}
