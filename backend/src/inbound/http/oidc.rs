//! OpenID Connect provider settings.
//!
//! Only the provider registration is loaded and validated here; the login and
//! callback flows are not served yet.

use mockable::Env;
use url::Url;
use zeroize::Zeroizing;

/// Redirect used when `OIDC_REDIRECT_URL` is unset.
pub const DEFAULT_REDIRECT_URL: &str =
    "http://localhost:33500/api/auth/callback?provider=openid-connect";
/// Scopes requested from the provider.
pub const OIDC_SCOPES: [&str; 3] = ["openid", "profile", "email"];

const CLIENT_ID_ENV: &str = "AUTHENTIK_CLIENT_ID";
const CLIENT_SECRET_ENV: &str = "AUTHENTIK_CLIENT_SECRET";
const DISCOVERY_URL_ENV: &str = "AUTHENTIK_DISCOVERY_URL";
const REDIRECT_URL_ENV: &str = "OIDC_REDIRECT_URL";

/// Errors raised while loading provider settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OidcConfigError {
    /// One or more required variables are unset or blank.
    #[error("OIDC provider disabled; missing {}", names.join(", "))]
    Missing { names: Vec<&'static str> },
    /// A URL variable does not parse.
    #[error("invalid URL in {name}: {message}")]
    InvalidUrl { name: &'static str, message: String },
}

/// Validated provider registration.
#[derive(Clone)]
pub struct OidcSettings {
    client_id: String,
    client_secret: Zeroizing<String>,
    discovery_url: Url,
    redirect_url: Url,
}

impl std::fmt::Debug for OidcSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OidcSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("discovery_url", &self.discovery_url.as_str())
            .field("redirect_url", &self.redirect_url.as_str())
            .finish()
    }
}

fn non_blank<E: Env>(env: &E, name: &'static str) -> Option<String> {
    env.string(name).filter(|value| !value.trim().is_empty())
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, OidcConfigError> {
    Url::parse(raw).map_err(|err| OidcConfigError::InvalidUrl {
        name,
        message: err.to_string(),
    })
}

impl OidcSettings {
    /// Load settings, reporting every missing variable at once.
    ///
    /// # Examples
    /// ```
    /// use contacts::inbound::http::oidc::{OidcConfigError, OidcSettings};
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|_| None);
    /// assert!(matches!(
    ///     OidcSettings::from_env(&env),
    ///     Err(OidcConfigError::Missing { .. })
    /// ));
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, OidcConfigError> {
        let client_id = non_blank(env, CLIENT_ID_ENV);
        let client_secret = non_blank(env, CLIENT_SECRET_ENV).map(Zeroizing::new);
        let discovery_url = non_blank(env, DISCOVERY_URL_ENV);

        let (Some(client_id), Some(client_secret), Some(discovery_url)) =
            (client_id.clone(), client_secret.clone(), discovery_url.clone())
        else {
            let names = [
                (CLIENT_ID_ENV, client_id.is_none()),
                (CLIENT_SECRET_ENV, client_secret.is_none()),
                (DISCOVERY_URL_ENV, discovery_url.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect();
            return Err(OidcConfigError::Missing { names });
        };

        let redirect_url =
            non_blank(env, REDIRECT_URL_ENV).unwrap_or_else(|| DEFAULT_REDIRECT_URL.to_owned());

        Ok(Self {
            client_id,
            client_secret,
            discovery_url: parse_url(DISCOVERY_URL_ENV, &discovery_url)?,
            redirect_url: parse_url(REDIRECT_URL_ENV, &redirect_url)?,
        })
    }

    /// OAuth client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret; never log this.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Provider discovery document URL.
    pub fn discovery_url(&self) -> &Url {
        &self.discovery_url
    }

    /// Callback URL registered with the provider.
    pub fn redirect_url(&self) -> &Url {
        &self.redirect_url
    }

    /// Space-separated scope string for the authorisation request.
    pub fn scope(&self) -> String {
        OIDC_SCOPES.join(" ")
    }
}
