use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_spans_config::Config;
use markdown_spans_engine::{
    block_to_html, extract_images, extract_links, parse_inline, render_span,
};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[command(name = "markdown-spans", version)]
#[command(about = "Convert inline markdown to HTML")]
struct Cli {
    /// Config file (defaults to ~/.config/markdown-spans/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every non-empty line as one HTML block
    Render {
        /// Markdown text (read from stdin when omitted)
        text: Option<String>,

        /// Wrapping element, overrides the config; "" for none
        #[arg(long)]
        tag: Option<String>,

        /// Print the parsed spans before the HTML
        #[arg(long)]
        spans: bool,
    },
    /// Print the spans of every non-empty line
    Spans {
        /// Markdown text (read from stdin when omitted)
        text: Option<String>,
    },
    /// List image and link references
    Extract {
        /// Markdown text (read from stdin when omitted)
        text: Option<String>,
    },
    /// Render one span built from its parts
    Node {
        /// plain, bold, italic, code, link or image
        #[arg(long)]
        kind: Option<String>,

        /// Destination for links and images
        #[arg(long)]
        url: Option<String>,

        text: String,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(&path).unwrap_or(path);
            log::info!("Config path: {}", path.display());
            Config::load_from_path(&path)?
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };

    let config = loaded.unwrap_or_else(|| {
        log::info!("No config file found, using defaults");
        Config::default()
    });
    Ok(config)
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read markdown from stdin")?;
            Ok(buf)
        }
    }
}

fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
}

fn write_spans(out: &mut impl Write, line_no: usize, line: &str) -> Result<()> {
    let spans = parse_inline(line).with_context(|| format!("line {line_no}"))?;
    for span in spans {
        writeln!(out, "{span}")?;
    }
    Ok(())
}

fn run(
    command: Command,
    config: &Config,
    input: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Render { tag, spans, .. } => {
            let input = read_input(input)?;
            let tag = tag.unwrap_or_else(|| config.block_tag.clone());
            for (line_no, line) in lines(&input) {
                if spans || config.show_spans {
                    write_spans(out, line_no, line)?;
                }
                let html =
                    block_to_html(line, &tag).with_context(|| format!("line {line_no}"))?;
                writeln!(out, "{html}")?;
            }
        }
        Command::Spans { .. } => {
            let input = read_input(input)?;
            for (line_no, line) in lines(&input) {
                write_spans(out, line_no, line)?;
            }
        }
        Command::Extract { .. } => {
            let input = read_input(input)?;
            for (_, line) in lines(&input) {
                for (alt, src) in extract_images(line) {
                    writeln!(out, "image\t{alt}\t{src}")?;
                }
                for (label, href) in extract_links(line) {
                    writeln!(out, "link\t{label}\t{href}")?;
                }
            }
        }
        Command::Node { kind, url, text } => {
            let html = render_span(&text, kind.as_deref(), url.as_deref())?;
            writeln!(out, "{html}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let input = match &cli.command {
        Command::Render { text, .. } | Command::Spans { text } | Command::Extract { text } => {
            text.clone()
        }
        Command::Node { .. } => None,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &config, input, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_string(command: Command, config: &Config, input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(command, config, Some(input.to_string()), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn render_wraps_each_line() {
        let out = run_to_string(
            Command::Render {
                text: None,
                tag: None,
                spans: false,
            },
            &Config::default(),
            "**a**\n\n*b*\n",
        )
        .unwrap();
        assert_eq!(out, "<p><b>a</b></p>\n<p><i>b</i></p>\n");
    }

    #[test]
    fn render_uses_configured_tag_and_spans() {
        let config = Config {
            block_tag: "li".to_string(),
            show_spans: true,
        };
        let out = run_to_string(
            Command::Render {
                text: None,
                tag: None,
                spans: false,
            },
            &config,
            "`x`",
        )
        .unwrap();
        assert_eq!(out, "TextSpan(\"x\", code, None)\n<li><code>x</code></li>\n");
    }

    #[test]
    fn tag_flag_overrides_config() {
        let out = run_to_string(
            Command::Render {
                text: None,
                tag: Some(String::new()),
                spans: false,
            },
            &Config::default(),
            "[a](b)",
        )
        .unwrap();
        assert_eq!(out, "<a href=\"b\">a</a>\n");
    }

    #[test]
    fn render_error_names_the_line() {
        let err = run_to_string(
            Command::Render {
                text: None,
                tag: None,
                spans: false,
            },
            &Config::default(),
            "fine\nbroken `tick",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        assert!(format!("{err:#}").contains("Unmatched delimiter '`'"));
    }

    #[test]
    fn extract_lists_images_then_links() {
        let out = run_to_string(
            Command::Extract { text: None },
            &Config::default(),
            "[l](1) ![i](2)",
        )
        .unwrap();
        assert_eq!(out, "image\ti\t2\nlink\tl\t1\n");
    }

    #[test]
    fn node_requires_a_kind() {
        let err = run_to_string(
            Command::Node {
                kind: None,
                url: None,
                text: "x".to_string(),
            },
            &Config::default(),
            "",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "span has no kind");
    }

    #[test]
    fn node_renders_image() {
        let out = run_to_string(
            Command::Node {
                kind: Some("image".to_string()),
                url: Some("cat.png".to_string()),
                text: "a cat".to_string(),
            },
            &Config::default(),
            "",
        )
        .unwrap();
        assert_eq!(out, "<img src=\"cat.png\" alt=\"a cat\"></img>\n");
    }
}
