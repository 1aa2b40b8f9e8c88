use clap::Args;
use std::path::PathBuf;

/// Arguments for the merge run
#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Base document; its keys are kept unless the header redefines them
    #[arg(
        long,
        value_name = "PATH",
        env = "MERGE_YAML_BASE",
        default_value = "openapi.yml"
    )]
    pub base: PathBuf,

    /// Header document; its keys win on collision
    #[arg(
        long,
        value_name = "PATH",
        env = "MERGE_YAML_HEADER",
        default_value = "openapi_header.yml"
    )]
    pub header: PathBuf,

    /// Where to write the merged document (replaced if it exists)
    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        env = "MERGE_YAML_OUTPUT",
        default_value = "merged_openapi.yml"
    )]
    pub output: PathBuf,

    /// Sort mapping keys at every depth before writing
    #[arg(long)]
    pub sort_keys: bool,

    /// Print the merged document to stdout instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
