//! Read access to the local claim corpus.

use std::io;
use std::path::{Path, PathBuf};

use vt_core::LocalClaim;

use crate::error::SearchError;

/// Read accessor for the claims the similarity index is built from.
pub trait ClaimSource {
    /// Load the full corpus snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the corpus cannot be read or parsed.
    fn load_claims(&self) -> Result<Vec<LocalClaim>, SearchError>;
}

/// Corpus stored as one JSON claim object per line.
pub struct JsonlClaimSource {
    path: PathBuf,
}

impl JsonlClaimSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClaimSource for JsonlClaimSource {
    fn load_claims(&self) -> Result<Vec<LocalClaim>, SearchError> {
        let lines = serde_jsonlines::json_lines::<LocalClaim, _>(&self.path)?;
        let mut claims = Vec::new();
        for (idx, claim) in lines.enumerate() {
            match claim {
                Ok(claim) => claims.push(claim),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(SearchError::Parse {
                        line: idx + 1,
                        message: e.to_string(),
                    });
                }
                Err(e) => return Err(SearchError::Io(e)),
            }
        }
        tracing::debug!(path = %self.path.display(), claims = claims.len(), "loaded claim corpus");
        Ok(claims)
    }
}

/// Corpus held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticClaims(pub Vec<LocalClaim>);

impl ClaimSource for StaticClaims {
    fn load_claims(&self) -> Result<Vec<LocalClaim>, SearchError> {
        Ok(self.0.clone())
    }
}
