//! Object-store connection settings read from the environment.

use std::fmt;

use mockable::Env;
use zeroize::Zeroizing;

pub(crate) const ENDPOINT_ENV: &str = "OCI_S3_ENDPOINT";
pub(crate) const REGION_ENV: &str = "OCI_S3_REGION";
pub(crate) const ACCESS_KEY_ENV: &str = "OCI_S3_ACCESS_KEY";
pub(crate) const SECRET_KEY_ENV: &str = "OCI_S3_SECRET_KEY";
pub(crate) const BUCKET_ENV: &str = "OCI_BUCKET_NAME";

/// Errors raised while reading storage settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageConfigError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
}

/// S3-compatible endpoint, credentials and bucket.
///
/// ## Invariants
/// - Every field is non-blank.
#[derive(Clone)]
pub struct StorageSettings {
    endpoint: String,
    region: String,
    access_key: String,
    secret_key: Zeroizing<String>,
    bucket: String,
}

impl StorageSettings {
    /// Read all five `OCI_*` variables.
    ///
    /// # Errors
    ///
    /// [`StorageConfigError::MissingEnv`] naming the first absent variable.
    ///
    /// # Examples
    /// ```
    /// use contacts::outbound::storage::StorageSettings;
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "OCI_S3_ENDPOINT" => Some("https://objects.example.test".to_owned()),
    ///     "OCI_S3_REGION" => Some("eu-frankfurt-1".to_owned()),
    ///     "OCI_S3_ACCESS_KEY" => Some("access".to_owned()),
    ///     "OCI_S3_SECRET_KEY" => Some("secret".to_owned()),
    ///     "OCI_BUCKET_NAME" => Some("avatars".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = StorageSettings::from_env(&env).expect("complete settings");
    /// assert_eq!(settings.bucket(), "avatars");
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, StorageConfigError> {
        Ok(Self {
            endpoint: required(env, ENDPOINT_ENV)?,
            region: required(env, REGION_ENV)?,
            access_key: required(env, ACCESS_KEY_ENV)?,
            secret_key: Zeroizing::new(required(env, SECRET_KEY_ENV)?),
            bucket: required(env, BUCKET_ENV)?,
        })
    }

    /// Endpoint URL of the S3-compatible service.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Signing region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Access key id.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Secret access key.
    pub fn secret_key(&self) -> &str {
        self.secret_key.as_str()
    }

    /// Target bucket.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .finish()
    }
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, StorageConfigError> {
    env.string(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(StorageConfigError::MissingEnv { name })
}
