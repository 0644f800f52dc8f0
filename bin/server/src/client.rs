//! HTTP implementation of the profile fetch.
//!
//! `GET {base_url}/profile` with the session cookie attached. A 200
//! yields the profile JSON; 401-class responses map to `Unauthenticated`;
//! anything else, including transport errors, maps to `Failed`. No
//! retries here; retry is the caller's responsibility via `refresh()`.

use async_trait::async_trait;
use hearth_session::{ProfileFetchError, ProfileFetcher, UserProfile};
use reqwest::StatusCode;

/// Fetches the user profile from the REST backend.
pub struct HttpProfileFetcher {
    client: reqwest::Client,
    base_url: String,
    cookie_name: String,
    token: String,
}

impl HttpProfileFetcher {
    /// Creates a fetcher bound to one session credential.
    #[must_use]
    pub fn new(base_url: String, cookie_name: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            cookie_name,
            token,
        }
    }

    fn profile_url(&self) -> String {
        format!("{}/profile", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProfileFetcher for HttpProfileFetcher {
    async fn fetch_profile(&self) -> Result<UserProfile, ProfileFetchError> {
        let response = self
            .client
            .get(self.profile_url())
            .header(
                reqwest::header::COOKIE,
                format!("{}={}", self.cookie_name, self.token),
            )
            .send()
            .await
            .map_err(|e| ProfileFetchError::Failed {
                reason: e.to_string(),
            })?;

        match response.status() {
            status if status.is_success() => {
                response
                    .json::<UserProfile>()
                    .await
                    .map_err(|e| ProfileFetchError::Failed {
                        reason: format!("invalid profile payload: {e}"),
                    })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ProfileFetchError::Unauthenticated)
            }
            status => Err(ProfileFetchError::Failed {
                reason: format!("unexpected status {status}"),
            }),
        }
    }
}
