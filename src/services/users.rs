//! User lookup and registration service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
    repository::UserStore,
};

#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn UserStore>,
}

impl UsersService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store.get_by_email(email).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.store.get_by_id(id).await
    }

    /// Get user by ID, failing when it does not exist
    pub async fn find_by_id(&self, id: i32) -> AppResult<User> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Validate and insert a new user. The password is stored as given.
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;

        if self.store.email_exists(&user.email).await? {
            return Err(AppError::Conflict(format!("Email {} is already registered", user.email)));
        }

        self.store.create(&user).await
    }
}
