// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `convert` and `inspect`
// and all their configurable flags.
//
// The flags mirror the legacy tool's options (--arff, --pat,
// --testsize, --validationsize, --discardmissing) with two
// additions: --seed for a reproducible split and
// --legacy-passthrough for the old unmatched-token behavior.

use clap::{Args, Subcommand};

use crate::application::convert_use_case::{is_yes_like, ConvertConfig};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an ARFF dataset into SNNS .pat pattern file(s)
    Convert(ConvertArgs),

    /// Show how an ARFF dataset would be encoded, without writing
    Inspect(InspectArgs),
}

/// All arguments for the `convert` command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// The input ARFF file
    #[arg(long)]
    pub arff: String,

    /// The output PAT file (stem for -train/-valid/-test splits)
    #[arg(long)]
    pub pat: String,

    /// Size of the test set as a float in [0,1]; 0 writes a single file
    #[arg(long = "testsize", default_value_t = 0.33)]
    pub test_size: f64,

    /// Size of the validation set as a float in [0,1], taken from
    /// the rows remaining after the test split
    #[arg(long = "validationsize", default_value_t = 0.33)]
    pub validation_size: f64,

    /// Whether to discard rows with missing values (yes/no);
    /// any of yes/y/t/true counts as yes, case-insensitive
    #[arg(long = "discardmissing", default_value = "yes")]
    pub discard_missing: String,

    /// Fix the random seed so the split is reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// Leave nominal tokens that match no declared category in
    /// place verbatim instead of failing (legacy compatibility)
    #[arg(long)]
    pub legacy_passthrough: bool,

    /// Also write the run summary as JSON to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// Convert CLI ConvertArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            arff_path:          a.arff,
            pat_path:           a.pat,
            test_size:          a.test_size,
            validation_size:    a.validation_size,
            discard_missing:    is_yes_like(&a.discard_missing),
            legacy_passthrough: a.legacy_passthrough,
            seed:               a.seed,
            report_path:        a.report,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The ARFF file to preview
    #[arg(long)]
    pub arff: String,
}
