use anyhow::{Context, Result};
use bevy::prelude::*;
use tokio::runtime::Runtime;

use crate::core::model::{FormationDoc, TeamDoc};

/// Blocking facade over the backend. Calls run on a private tokio runtime
/// via `block_on`; the editor is single-threaded and event-driven, so the
/// load barrier and the save round trip intentionally block the UI thread.
#[derive(Resource)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    runtime: Runtime,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            runtime: tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("build tokio runtime")?,
        })
    }

    /// Fetch both lists concurrently; either failure fails the whole load.
    pub fn fetch_all(&self) -> Result<(Vec<FormationDoc>, Vec<TeamDoc>)> {
        let formations_url = format!("{}/api/formations", self.base_url);
        let teams_url = format!("{}/api/teams", self.base_url);
        self.runtime.block_on(async {
            let formations = async {
                anyhow::Ok(
                    self.client
                        .get(&formations_url)
                        .send()
                        .await?
                        .error_for_status()?
                        .json::<Vec<FormationDoc>>()
                        .await?,
                )
            };
            let teams = async {
                anyhow::Ok(
                    self.client
                        .get(&teams_url)
                        .send()
                        .await?
                        .error_for_status()?
                        .json::<Vec<TeamDoc>>()
                        .await?,
                )
            };
            let (formations, teams) = tokio::try_join!(formations, teams)?;
            Ok((formations, teams))
        })
    }

    /// POST one formation; the response body is ignored.
    pub fn save_formation(&self, doc: &FormationDoc) -> Result<()> {
        self.post_json("/api/formations", doc)
    }

    /// POST one team; the response body is ignored.
    pub fn save_team(&self, doc: &TeamDoc) -> Result<()> {
        self.post_json("/api/teams", doc)
    }

    fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        self.runtime.block_on(async {
            self.client
                .post(&url)
                .json(body)
                .send()
                .await?
                .error_for_status()?;
            Ok(())
        })
    }
}
