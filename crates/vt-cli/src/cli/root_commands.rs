use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Gather evidence for a claim from every enabled provider.
    Evidence(EvidenceArgs),
    /// Search the local claim corpus for similar claims.
    Claims(ClaimsArgs),
    /// Gather evidence and classify it against the claim.
    Check(CheckArgs),
    /// List providers with their capability and credential status.
    Providers,
}

#[derive(Clone, Debug, Args)]
pub struct EvidenceArgs {
    /// Claim text to search for.
    pub query: String,
    /// News feed page (clamped to the available pages).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
}

#[derive(Clone, Debug, Args)]
pub struct ClaimsArgs {
    /// Claim text to match against the corpus.
    pub query: String,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Claim to verify.
    pub claim: String,
    /// Page of the agreeing/contradicting lists.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
}
