//! Identicon generator
//!
//! Deterministically renders an SVG identicon for any identity string. The
//! same identity and configuration always produce byte-identical markup.
//!
//! # Pipeline
//!
//! - **Digest**: SHA-1 of the identity as 40 hex characters ([`digest`])
//! - **Theme**: five colors derived from a hue ([`color`])
//! - **Layout**: catalog patterns placed on a 4x4 grid ([`catalog`], [`layout`])
//! - **Serialization**: one `<path>` per fill color ([`svg`])
//!
//! # Example
//!
//! ```
//! use identicon::{Config, Hue, Identicon};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = identicon::generate_default("alice@example.com")?;
//! assert!(svg.starts_with("<svg"));
//!
//! let config = Config::default().with_hue(Hue::Fixed(210));
//! let icon = Identicon::with_config("alice@example.com", &config)?;
//! assert_eq!(icon.svg()?, identicon::generate("alice@example.com", &config)?);
//!
//! // Compact configs fit in a URL parameter
//! let config: Config = "ffffffff1079320028501e5a".parse()?;
//! assert_eq!(config.hue, Hue::Fixed(120));
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

pub mod catalog;
pub mod color;
pub mod config;
pub mod digest;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod svg;

pub use color::{ColorSlots, Theme};
pub use config::{ColorSpec, Config, Hue, Lightness, Rgba};
pub use digest::Digest;
pub use error::{Error, Result};
pub use svg::Document;

/// Process-wide default configuration. Read-only; build a new [`Config`] to
/// change anything.
pub fn default_config() -> &'static Config {
    static DEFAULT: OnceLock<Config> = OnceLock::new();
    DEFAULT.get_or_init(Config::default)
}

/// A composed identicon
#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    digest: Digest,
    document: Document,
}

impl Identicon {
    /// Compose with the default configuration
    pub fn new(identity: &str) -> Self {
        Self::compose(identity, default_config())
    }

    /// Compose with an explicit configuration
    pub fn with_config(identity: &str, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::compose(identity, config))
    }

    fn compose(identity: &str, config: &Config) -> Self {
        let digest = Digest::of(identity);
        let document = layout::compose(&digest, config);
        Self { digest, document }
    }

    /// Digest the icon was derived from
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Composed shapes before serialization
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// SVG markup
    pub fn svg(&self) -> Result<String> {
        self.document.to_svg()
    }

    /// `data:image/svg+xml;base64,...` URI for embedding in HTML or CSS
    pub fn to_data_uri(&self) -> Result<String> {
        let svg = self.svg()?;
        Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
    }
}

/// Render `identity` with `config` to SVG markup
pub fn generate(identity: &str, config: &Config) -> Result<String> {
    Identicon::with_config(identity, config)?.svg()
}

/// Render `identity` with the default configuration
pub fn generate_default(identity: &str) -> Result<String> {
    Identicon::new(identity).svg()
}

/// Render many identities on scoped worker threads, one per CPU
///
/// Results come back in input order.
pub fn generate_many<S: AsRef<str> + Sync>(identities: &[S], config: &Config) -> Result<Vec<String>> {
    config.validate()?;
    if identities.is_empty() {
        return Ok(Vec::new());
    }
    let workers = num_cpus::get().clamp(1, identities.len());
    let chunk = identities.len().div_ceil(workers);
    debug!("rendering {} identicons on {} threads", identities.len(), workers);
    std::thread::scope(|scope| {
        let handles: Vec<_> = identities
            .chunks(chunk)
            .map(|part| {
                scope.spawn(move || {
                    part.iter()
                        .map(|id| Identicon::compose(id.as_ref(), config).svg())
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();
        let mut out = Vec::with_capacity(identities.len());
        for handle in handles {
            let part = handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
            out.extend(part);
        }
        Ok(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_shared() {
        assert!(std::ptr::eq(default_config(), default_config()));
        assert_eq!(default_config(), &Config::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = Config::default().with_size(0, 0);
        assert!(matches!(generate("x", &cfg), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_data_uri_decodes_to_svg() {
        let icon = Identicon::new("data");
        let uri = icon.to_data_uri().unwrap();
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), icon.svg().unwrap());
    }

    #[test]
    fn test_generate_many_keeps_order() {
        let ids: Vec<String> = (0..37).map(|i| format!("user{i}")).collect();
        let batch = generate_many(&ids, &Config::default()).unwrap();
        assert_eq!(batch.len(), ids.len());
        for (id, svg) in ids.iter().zip(&batch) {
            assert_eq!(svg, &generate_default(id).unwrap());
        }
        assert!(generate_many::<&str>(&[], &Config::default()).unwrap().is_empty());
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Identicon>();
        assert_send_sync::<Config>();
    }
}
