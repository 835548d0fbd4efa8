use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CliArgs {
    pub(crate) config_path: Option<PathBuf>,
    pub(crate) levels_path: Option<PathBuf>,
    pub(crate) level_name: Option<String>,
    pub(crate) seed: Option<u64>,
    pub(crate) json: bool,
    pub(crate) skip_invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CliCommand {
    Help,
    View(CliArgs),
}

pub(crate) fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut parsed = CliArgs::default();
    let mut index = 0usize;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--config" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| "missing value for --config".to_string())?;
                parsed.config_path = Some(PathBuf::from(value));
                index += 2;
            }
            "--level" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| "missing value for --level".to_string())?;
                parsed.level_name = Some(value.clone());
                index += 2;
            }
            "--seed" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| "missing value for --seed".to_string())?;
                parsed.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid --seed value '{value}' (expected u64)"))?,
                );
                index += 2;
            }
            "--json" => {
                parsed.json = true;
                index += 1;
            }
            "--skip-invalid" => {
                parsed.skip_invalid = true;
                index += 1;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{other}'"));
            }
            path => {
                if parsed.levels_path.is_some() {
                    return Err(format!("unexpected extra argument '{path}'"));
                }
                parsed.levels_path = Some(PathBuf::from(path));
                index += 1;
            }
        }
    }
    Ok(CliCommand::View(parsed))
}

pub(crate) fn usage_text() -> String {
    [
        "boxisle - classify box-pushing levels and preview their tiles",
        "",
        "Usage:",
        "  boxisle [--config <file>] [--seed <u64>] [--level <name>] [--json] [--skip-invalid] [levels.txt]",
        "",
        "Environment:",
        "  BOXISLE_LEVELS     level document used when no path is given",
        "  BOXISLE_CONFIG     JSON viewer config used when --config is absent",
        "  BOXISLE_ROOT       project root holding assets/levels/classic.txt",
        "  BOXISLE_POND_FILL  1/0, overrides options.pond_fill",
        "  BOXISLE_PILLARS    1/0, overrides options.pillars",
    ]
    .join("\n")
}
