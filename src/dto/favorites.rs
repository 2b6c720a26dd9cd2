use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Simulated current user for reads that carry no user id.
pub const DEFAULT_USER_ID: i32 = 1;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct FavoriteRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFavoritesQuery {
    /// Owner of the favorites, defaults to the simulated user `1`.
    pub user_id: Option<i32>,
}

impl UserFavoritesQuery {
    pub fn user_id(&self) -> i32 {
        self.user_id.unwrap_or(DEFAULT_USER_ID)
    }
}
