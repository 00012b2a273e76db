use std::io::{self, Write};

use clap::Parser;

use repocheck::adapter::{ExternalLinter, resolve};
use repocheck::cli::{Cli, Mode};
use repocheck::config::Config;
use repocheck::runner::{CheckRunner, ExecBitRunner, LintRunner, NewlineRunner};
use repocheck::scanner::{ExclusionSet, SuffixFilter};
use repocheck::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> repocheck::Result<i32> {
    let config = Config::load(cli.config.as_deref(), cli.no_config)?;
    let mode = Mode::from_arg(cli.mode.as_deref());
    let runners = build_runners(mode, &config, cli.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // The failure flag is orchestrator-local and monotonic: once a runner
    // comes back dirty it stays set for the rest of the invocation.
    let mut any_failure = false;
    for runner in &runners {
        let outcome = runner.run(&cli.root, &mut out)?;
        any_failure |= outcome.is_dirty();
    }
    out.flush()?;

    Ok(if any_failure {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    })
}

fn build_runners(mode: Mode, config: &Config, quiet: bool) -> Vec<Box<dyn CheckRunner>> {
    match mode {
        Mode::Python => vec![python_runner(config, quiet)],
        Mode::Js => vec![js_runner(config, quiet)],
        Mode::Exc => vec![exec_runner(config, quiet)],
        Mode::Nl => vec![newline_runner(config, quiet)],
        Mode::All => vec![
            python_runner(config, quiet),
            js_runner(config, quiet),
            exec_runner(config, quiet),
            newline_runner(config, quiet),
        ],
    }
}

fn python_runner(config: &Config, quiet: bool) -> Box<dyn CheckRunner> {
    let filter = SuffixFilter::new([".py"], false, ExclusionSet::from(&config.exclude));
    let adapter = resolve(&config.tools.pylint).map(|program| {
        ExternalLinter::new(
            program,
            vec![format!("--rcfile={}", config.tools.pylint_config.display())],
        )
    });
    Box::new(LintRunner::new(
        "python",
        config.tools.pylint.join("/"),
        filter,
        adapter,
        quiet,
    ))
}

fn js_runner(config: &Config, quiet: bool) -> Box<dyn CheckRunner> {
    let filter = SuffixFilter::new([".js"], true, ExclusionSet::from(&config.exclude));
    let adapter = resolve(&config.tools.jshint).map(|program| {
        ExternalLinter::new(
            program,
            vec![
                "--config".to_string(),
                config.tools.jshint_config.display().to_string(),
            ],
        )
    });
    Box::new(LintRunner::new(
        "javascript",
        config.tools.jshint.join("/"),
        filter,
        adapter,
        quiet,
    ))
}

fn newline_runner(config: &Config, quiet: bool) -> Box<dyn CheckRunner> {
    let filter = SuffixFilter::new([".html", ".js"], true, ExclusionSet::from(&config.exclude));
    Box::new(NewlineRunner::new(filter, quiet))
}

fn exec_runner(config: &Config, quiet: bool) -> Box<dyn CheckRunner> {
    // The execute-bit audit covers the whole tree, exclusions included.
    let filter = SuffixFilter::new(
        config.exec.non_executable_suffixes.clone(),
        true,
        ExclusionSet::default(),
    );
    Box::new(ExecBitRunner::new(filter, quiet))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
