//! TLS configuration for the ticker HTTP client.
//!
//! Builds a [`rustls::ClientConfig`] trusting the Mozilla root set shipped
//! with `webpki-roots`, optionally extended with the certificates of a PEM
//! bundle (self-hosted mirrors, intercepting proxies).

use std::path::Path;

use rustls::ClientConfig;

use crate::{Result, TickerError};

/// Builds a [`ClientConfig`] from the webpki roots plus `extra_roots`.
///
/// # Errors
///
/// Returns [`TickerError::Tls`] if the PEM file cannot be read, cannot be
/// parsed, or contains no certificate.
pub fn build_tls_config(extra_roots: Option<&Path>) -> Result<ClientConfig> {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    if let Some(path) = extra_roots {
        let pem = std::fs::read(path)
            .map_err(|e| TickerError::Tls(format!("failed to read {}: {e}", path.display())))?;

        let certs: Vec<_> = rustls_pemfile::certs(&mut &pem[..])
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TickerError::Tls(format!("failed to parse CA PEM: {e}")))?;

        if certs.is_empty() {
            return Err(TickerError::Tls(format!(
                "no certificates found in {}",
                path.display()
            )));
        }

        let (added, ignored) = root_store.add_parsable_certificates(certs);
        tracing::debug!(added, ignored, path = %path.display(), "loaded extra CA roots");
    }

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(config)
}
