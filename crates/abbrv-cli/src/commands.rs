use abbrv_report::{ReportTarget, ci_summary_path};
use abbrv_validate::{CheckConfig, MatcherConfig};
use anyhow::{Result, bail};

use abbrv_cli::check::{CheckOutcome, CheckRequest, run_check};
use abbrv_cli::combine::{CombineSummary, KeepPolicy, combine_lists};

use crate::cli::{CheckArgs, CombineArgs, KeepArg};

pub fn run_check_command(args: &CheckArgs) -> Result<CheckOutcome> {
    if !(args.match_ratio > 0.0 && args.match_ratio <= 1.0) {
        bail!("--match-ratio must be in (0, 1], got {}", args.match_ratio);
    }
    let config = CheckConfig {
        delimiter: args.delimiter,
        extension: args.extension.trim_start_matches('.').to_string(),
        matcher: MatcherConfig::default()
            .with_match_ratio(args.match_ratio)
            .with_min_matches(args.min_matches),
    };
    let target = ReportTarget {
        summary_path: (!args.no_summary_file).then(|| args.summary_file.clone()),
        ci_summary_path: ci_summary_path(&args.ci_summary_env),
    };
    run_check(&CheckRequest {
        journals_dir: args.journals_dir.clone(),
        config,
        target,
        json_path: args.json.clone(),
    })
}

pub fn run_combine_command(args: &CombineArgs) -> Result<CombineSummary> {
    let keep = match args.keep {
        KeepArg::First => KeepPolicy::First,
        KeepArg::Last => KeepPolicy::Last,
    };
    combine_lists(&args.inputs, &args.output, args.delimiter, keep)
}
