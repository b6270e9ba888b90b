// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! User and profile persistence behind the [`UserStore`] trait. The server
//! runs on [`SqliteUserStore`]; tests can swap in [`InMemoryUserStore`].

mod memory;
mod users;

pub use memory::InMemoryUserStore;
pub use users::SqliteUserStore;

use crate::errors::AppResult;
use crate::models::User;
use async_trait::async_trait;

/// Storage capability consumed by auth, profile, and meal-plan services
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by login name
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Persist a new user
    ///
    /// Fails with `ResourceAlreadyExists` when the username or email is taken.
    async fn create_user(&self, user: &User) -> AppResult<()>;

    /// Overwrite an existing user, matched by id
    ///
    /// Fails with `ResourceNotFound` when the id is unknown and with
    /// `ResourceAlreadyExists` when the new email belongs to someone else.
    async fn update_user(&self, user: &User) -> AppResult<()>;
}
