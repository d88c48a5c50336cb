use clap::ArgMatches;
use completiongen::{
    commands::{PARAMETER_FORCE, PARAMETER_NAME, PARAMETER_OUT, PARAMETER_SHELL, PARAMETER_SPEC},
    error::CliError,
    generator::generate,
    model::CommandSpec,
    shell::ShellKind,
};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    let shell = required::<String>(matches, PARAMETER_SHELL)?;
    let spec_path = required::<PathBuf>(matches, PARAMETER_SPEC)?;
    let out = matches.get_one::<PathBuf>(PARAMETER_OUT);
    let force = matches.get_flag(PARAMETER_FORCE);

    let shell = ShellKind::parse(shell)?;

    let mut spec = CommandSpec::load_from_file(spec_path)?;
    if let Some(name) = matches.get_one::<String>(PARAMETER_NAME) {
        debug!("Overriding command name '{}' with '{}'", spec.name, name);
        spec.name = name.clone();
    }

    let script = generate(&spec, shell)?;

    match out {
        Some(path) => {
            write_to_file(path, &script, force)?;
            info!("Wrote {} completion script for '{}' to {}", shell, spec.name, path.display());
        }
        None => write_to_stdout(&script)?,
    }

    Ok(())
}

fn required<'a, T>(matches: &'a ArgMatches, name: &str) -> Result<&'a T, CliError>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(name)
        .ok_or_else(|| CliError::Usage(format!("missing required argument --{}", name)))
}

fn write_to_file(path: &Path, script: &str, force: bool) -> Result<(), CliError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|cause| {
        if cause.kind() == io::ErrorKind::AlreadyExists {
            CliError::OutputExists(path.to_path_buf())
        } else {
            CliError::FailedToWrite {
                path: path.to_path_buf(),
                cause,
            }
        }
    })?;

    file.write_all(script.as_bytes())
        .map_err(|cause| CliError::FailedToWrite {
            path: path.to_path_buf(),
            cause,
        })
}

fn write_to_stdout(script: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(script.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|cause| CliError::FailedToWrite {
            path: PathBuf::from("<stdout>"),
            cause,
        })
}
