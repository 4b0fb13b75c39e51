//! HTTPS support for the server.

use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::Error;

/// Install ring as the process-wide rustls crypto provider.
///
/// The HTTPS listener and the API client both use this provider. Later calls
/// leave the installed provider in place.
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("A rustls crypto provider is already installed.");
    }
}

/// Load the certificate `cert.pem` and the private key `key.pem` from `cert_dir`.
///
/// # Errors
/// Returns [Error::TlsConfig] if either file is missing or invalid.
pub async fn load_tls_config(cert_dir: &Path) -> Result<RustlsConfig, Error> {
    install_crypto_provider();

    RustlsConfig::from_pem_file(cert_dir.join("cert.pem"), cert_dir.join("key.pem"))
        .await
        .map_err(|error| {
            tracing::error!("Could not open TLS certificates in {cert_dir:?}: {error}");
            Error::TlsConfig(cert_dir.display().to_string())
        })
}
