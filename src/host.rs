//! Host resolution
//!
//! Decides which wiki host the session talks to.

use async_trait::async_trait;
use log::warn;

/// Resolves the host name used to build the API endpoint
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// `None` means no host is available and the caller should abort.
    async fn resolve_host(&self) -> Option<String>;
}

/// Uses the host from configuration
#[derive(Debug, Clone)]
pub struct ConfiguredHost {
    host: Option<String>,
}

impl ConfiguredHost {
    pub fn new(host: Option<String>) -> Self {
        Self { host }
    }
}

#[async_trait]
impl HostResolver for ConfiguredHost {
    async fn resolve_host(&self) -> Option<String> {
        match self.host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => Some(host.to_string()),
            _ => {
                warn!("No wiki host configured");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_host_trimmed() {
        let resolver = ConfiguredHost::new(Some("  wiki.local ".into()));
        assert_eq!(resolver.resolve_host().await.as_deref(), Some("wiki.local"));
    }

    #[tokio::test]
    async fn test_blank_or_missing_host_unresolved() {
        assert!(ConfiguredHost::new(None).resolve_host().await.is_none());
        assert!(ConfiguredHost::new(Some("   ".into())).resolve_host().await.is_none());
    }
}
