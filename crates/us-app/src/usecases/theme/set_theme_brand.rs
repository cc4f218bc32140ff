use anyhow::Context;
use us_core::ports::UserStatePort;
use us_core::user_state::ThemeBrand;

use crate::repository::UserDataRepository;

/// Use case selecting the theme brand.
pub struct SetThemeBrand {
    repo: UserDataRepository,
}

impl SetThemeBrand {
    pub fn new(repo: UserDataRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, brand: ThemeBrand) -> anyhow::Result<()> {
        self.repo
            .set_theme_brand(brand)
            .await
            .context("set theme brand")
    }
}
