use anyhow::{Context, Result, bail};
use std::{
    env,
    io::{self as stdio, Read},
    path::{Path, PathBuf},
    process,
};
use trustpage_config::Config;
use trustpage_engine::{Formatter, io};

const USAGE: &str =
    "Usage: trustpage-format [--config PATH] [--fragments] [--excerpt N] [--out-dir DIR] [INPUT...]";

/// What to print for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Html,
    Fragments,
    Excerpt(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    mode: Mode,
    out_dir: Option<PathBuf>,
    inputs: Vec<Input>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut config = None;
        let mut fragments = false;
        let mut excerpt = None;
        let mut out_dir = None;
        let mut inputs = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config = Some(PathBuf::from(value_for(&mut args, "--config")?)),
                "--fragments" => fragments = true,
                "--excerpt" => {
                    let n = value_for(&mut args, "--excerpt")?;
                    let n = n
                        .parse::<usize>()
                        .with_context(|| format!("--excerpt expects a number, got '{n}'"))?;
                    excerpt = Some(n);
                }
                "--out-dir" => out_dir = Some(PathBuf::from(value_for(&mut args, "--out-dir")?)),
                "-" => inputs.push(Input::Stdin),
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                path => inputs.push(Input::File(PathBuf::from(path))),
            }
        }

        let mode = match (fragments, excerpt) {
            (true, Some(_)) => bail!("--fragments and --excerpt cannot be combined"),
            (true, None) => Mode::Fragments,
            (false, Some(n)) => Mode::Excerpt(n),
            (false, None) => Mode::Html,
        };
        if out_dir.is_some() && mode != Mode::Html {
            bail!("--out-dir only writes HTML");
        }
        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }

        Ok(Self {
            config,
            mode,
            out_dir,
            inputs,
        })
    }
}

fn value_for<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{flag} expects a value"))
}

/// Builds the formatter from `--config`, or else from the default config
/// location. No config file at the default location means default settings.
fn load_formatter(config_path: Option<&Path>) -> Result<Formatter> {
    let config = match config_path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("config file not found: {}", path.display()))?
        }
        None => {
            log::debug!("Config path: {}", Config::resolved_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(config.formatter()?)
}

/// The text printed for one input.
fn render(formatter: &Formatter, raw: &str, mode: Mode) -> String {
    match mode {
        Mode::Html => formatter.format(raw),
        Mode::Fragments => formatter
            .document(raw)
            .fragments
            .iter()
            .map(|f| format!("{:?}\t{}", f.kind, f.html))
            .collect::<Vec<_>>()
            .join("\n"),
        Mode::Excerpt(n) => formatter.excerpt(raw, n),
    }
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut raw = String::new();
            stdio::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
        Input::File(path) => io::read_source(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Renders every source under `input` into `out_dir`, mirroring relative
/// paths. Returns the files written.
fn render_tree(formatter: &Formatter, input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let sources = if input.is_dir() {
        io::scan_content_files(input)?
    } else {
        vec![input.to_path_buf()]
    };

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let raw = io::read_source(&source)
            .with_context(|| format!("failed to read {}", source.display()))?;
        let target = io::rendered_path(input, &source, out_dir);
        io::write_rendered(&target, &formatter.format(&raw))
            .with_context(|| format!("failed to write {}", target.display()))?;
        written.push(target);
    }
    Ok(written)
}

fn run(args: Args) -> Result<()> {
    let formatter = load_formatter(args.config.as_deref())?;

    if let Some(out_dir) = &args.out_dir {
        for input in &args.inputs {
            let Input::File(path) = input else {
                bail!("--out-dir needs file or directory inputs, not stdin");
            };
            let written = render_tree(&formatter, path, out_dir)?;
            log::info!("rendered {} files from {}", written.len(), path.display());
        }
        return Ok(());
    }

    for input in &args.inputs {
        if let Input::File(path) = input
            && path.is_dir()
        {
            bail!("{} is a directory; use --out-dir to render it", path.display());
        }
        let raw = read_input(input)?;
        println!("{}", render(&formatter, &raw, args.mode));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_inputs_reads_stdin() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.inputs, vec![Input::Stdin]);
        assert_eq!(args.mode, Mode::Html);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_dash_is_stdin() {
        let args = parse(&["a.txt", "-"]).unwrap();
        assert_eq!(
            args.inputs,
            vec![Input::File(PathBuf::from("a.txt")), Input::Stdin]
        );
    }

    #[test]
    fn test_all_options() {
        let args = parse(&["--config", "~/site.toml", "--out-dir", "site", "content"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("~/site.toml")));
        assert_eq!(args.out_dir, Some(PathBuf::from("site")));
        assert_eq!(args.inputs, vec![Input::File(PathBuf::from("content"))]);
    }

    #[test]
    fn test_excerpt_mode() {
        assert_eq!(parse(&["--excerpt", "40"]).unwrap().mode, Mode::Excerpt(40));
        assert!(parse(&["--excerpt", "many"]).is_err());
        assert!(parse(&["--excerpt"]).is_err());
    }

    #[test]
    fn test_rejects_bad_combinations() {
        assert!(parse(&["--fragments", "--excerpt", "5"]).is_err());
        assert!(parse(&["--fragments", "--out-dir", "site"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn test_render_modes() {
        let formatter = Formatter::new(&Default::default()).unwrap();
        let raw = "Impact\n\nWe **grew** a lot this year.";

        assert_eq!(
            render(&formatter, raw, Mode::Html),
            "<h2>Impact</h2>\n<p>We <strong>grew</strong> a lot this year.</p>"
        );
        assert_eq!(
            render(&formatter, raw, Mode::Fragments),
            "Heading\t<h2>Impact</h2>\nParagraph\t<p>We <strong>grew</strong> a lot this year.</p>"
        );
        assert_eq!(render(&formatter, raw, Mode::Excerpt(9)), "Impact We...");
    }

    #[test]
    fn test_render_tree_mirrors_layout() {
        let content = TempDir::new().unwrap();
        let site = TempDir::new().unwrap();
        fs::create_dir_all(content.path().join("blog")).unwrap();
        fs::write(content.path().join("about.txt"), "About us").unwrap();
        fs::write(content.path().join("blog/post.md"), "Impact\n\nWe grew.").unwrap();

        let formatter = Formatter::new(&Default::default()).unwrap();
        let written = render_tree(&formatter, content.path(), site.path()).unwrap();

        assert_eq!(
            written,
            vec![
                site.path().join("about.html"),
                site.path().join("blog/post.html"),
            ]
        );
        assert_eq!(
            fs::read_to_string(site.path().join("blog/post.html")).unwrap(),
            "<h2>Impact</h2>\n<p>We grew.</p>"
        );
    }

    #[test]
    fn test_excerpt_uses_configured_settings() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("config.toml");
        fs::write(&config_file, "[formatter]\nblock_quote_min_chars = 5\n").unwrap();
        let raw = "\"Short and sweet.\"";

        let configured = load_formatter(Some(config_file.as_path())).unwrap();
        let defaults = Formatter::new(&Default::default()).unwrap();

        assert_eq!(render(&configured, raw, Mode::Excerpt(100)), "Short and sweet.");
        assert_eq!(render(&defaults, raw, Mode::Excerpt(100)), raw);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_formatter(Some(dir.path().join("missing.toml").as_path())).is_err());
    }
}
