use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use model::env::{DYNAMODB_ENDPOINT_URL, DYNAMODB_REGION};

/// Signing region used for a local endpoint when no region is configured.
/// DynamoDB Local accepts any region but the SDK refuses to sign without one.
pub const LOCAL_SIGNING_REGION: &str = "us-west-2";

/// How to build the DynamoDB client.
///
/// Everything not set here comes from the AWS default provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Send requests here instead of the regional endpoint, e.g.
    /// `http://localhost:8000` for a local emulator. Test configuration only.
    pub endpoint_override: Option<String>,
    pub region: Option<String>,
}

impl ClientConfig {
    /// Read the overrides from `DYNAMODB_ENDPOINT_URL` and `DYNAMODB_REGION`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Blank values count as unset
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        ClientConfig {
            endpoint_override: non_empty(DYNAMODB_ENDPOINT_URL),
            region: non_empty(DYNAMODB_REGION),
        }
    }

    /// The region the client will sign with, if it isn't left to the provider chain.
    pub fn effective_region(&self) -> Option<String> {
        self.region.clone().or_else(|| {
            self.endpoint_override
                .as_ref()
                .map(|_| LOCAL_SIGNING_REGION.to_string())
        })
    }

    pub async fn build_client(&self) -> aws_sdk_dynamodb::Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = self.effective_region() {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint) = &self.endpoint_override {
            tracing::info!(endpoint = %endpoint, "Using DynamoDB endpoint override");
            loader = loader.endpoint_url(endpoint);
        }

        aws_sdk_dynamodb::Client::new(&loader.load().await)
    }
}
