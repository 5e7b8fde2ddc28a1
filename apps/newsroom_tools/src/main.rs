use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use content_store::{export_json, FileNewsStore, NewsSource, StaticNewsStore};
use shared::{
    domain::{NewsId, NewsItem},
    media::ImageRef,
};

#[derive(Parser, Debug)]
#[command(name = "newsroom-tools", about = "Inspect and check newsroom content")]
struct Cli {
    /// JSON or TOML fixture; the bundled records are used when omitted.
    #[arg(long, global = true)]
    news_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One line per record, in display order.
    List,
    Show {
        id: i64,
    },
    /// Pretty JSON of the whole dataset.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load a fixture and report problems without starting the UI.
    Validate {
        path: PathBuf,
    },
}

fn open_source(news_file: Option<&PathBuf>) -> Result<Box<dyn NewsSource>> {
    match news_file {
        Some(path) => Ok(Box::new(FileNewsStore::load(path)?)),
        None => Ok(Box::new(StaticNewsStore::bundled())),
    }
}

fn list_lines(source: &dyn NewsSource) -> String {
    let mut out = String::new();
    for item in source.news() {
        let _ = writeln!(
            out,
            "{:>3}  {}  {:<24}  {}",
            item.id.0,
            item.display_date(),
            item.category,
            item.title
        );
    }
    out
}

fn describe(item: &NewsItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", item.id, item.title);
    let _ = writeln!(out, "{} · {}", item.display_date(), item.category);
    let _ = writeln!(out, "image: {}", item.image_url);
    if let Some(author) = &item.author {
        let _ = writeln!(out, "author: {} ({})", author.name, author.role);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", item.description);
    out
}

/// Image references that would fall back to the placeholder at runtime.
fn image_warnings(source: &dyn NewsSource) -> Vec<String> {
    let mut warnings = Vec::new();
    for item in source.news() {
        let author_image = item.author.as_ref().map(|author| author.image_url.as_str());
        for reference in std::iter::once(item.image_url.as_str()).chain(author_image) {
            if let Err(err) = ImageRef::parse(reference) {
                warnings.push(format!("news {}: {err}", item.id));
            }
        }
    }
    warnings
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let source = open_source(cli.news_file.as_ref())?;
            print!("{}", list_lines(source.as_ref()));
        }
        Command::Show { id } => {
            let source = open_source(cli.news_file.as_ref())?;
            let item = source
                .find(NewsId(id))
                .with_context(|| format!("no news with id {id}"))?;
            print!("{}", describe(item));
        }
        Command::Export { out } => {
            let source = open_source(cli.news_file.as_ref())?;
            let json = export_json(source.as_ref()).context("failed to serialize news")?;
            match out {
                Some(path) => {
                    fs::write(&path, format!("{json}\n"))
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    tracing::info!(path = %path.display(), items = source.news().len(), "exported news");
                }
                None => println!("{json}"),
            }
        }
        Command::Validate { path } => {
            let store = FileNewsStore::load(&path)?;
            let warnings = image_warnings(&store);
            for warning in &warnings {
                tracing::warn!("{warning}");
            }
            println!(
                "ok: {} records in '{}' ({} image warnings)",
                store.news().len(),
                path.display(),
                warnings.len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn fixture(extension: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile()
            .expect("temp fixture");
        file.write_all(body.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn parses_subcommands_with_a_global_news_file() {
        let cli = Cli::try_parse_from(["newsroom-tools", "show", "2", "--news-file", "news.json"])
            .expect("parse cli");
        assert!(matches!(cli.command, Command::Show { id: 2 }));
        assert_eq!(cli.news_file, Some(PathBuf::from("news.json")));

        let cli = Cli::try_parse_from(["newsroom-tools", "export", "--out", "dump.json"])
            .expect("parse cli");
        assert!(matches!(cli.command, Command::Export { out: Some(_) }));
    }

    #[test]
    fn lists_bundled_records_in_display_order() {
        let source = open_source(None).expect("bundled");
        let listing = list_lines(source.as_ref());
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Innovation dans le secteur de l'énergie"));
        assert!(lines[0].contains("05/04/2024"));
        assert!(lines[3].contains("Durabilité et croissance économique"));
    }

    #[test]
    fn describes_a_record_with_its_author() {
        let source = StaticNewsStore::bundled();
        let item = source.find(NewsId(2)).expect("news 2");
        let text = describe(item);
        assert!(text.starts_with("#2 Tendances du marché immobilier 2024"));
        assert!(text.contains("author: Thomas Martin"));
    }

    #[test]
    fn bundled_images_are_all_resolvable() {
        assert!(image_warnings(&StaticNewsStore::bundled()).is_empty());
    }

    #[test]
    fn flags_unusable_image_references() {
        let file = fixture(
            ".json",
            r#"[{"id": 7, "title": "t", "description": "d", "image_url": "ftp://host/a.jpg",
                "date": "2024-04-01", "category": "c"}]"#,
        );
        let store = FileNewsStore::load(file.path()).expect("load fixture");
        let warnings = image_warnings(&store);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("news 7:"));
    }

    #[test]
    fn reads_an_alternate_news_file() {
        let file = fixture(
            ".toml",
            "[[news]]\nid = 10\ntitle = \"Seul\"\ndescription = \"d\"\nimage_url = \"/placeholder.jpg\"\ndate = \"2024-05-01\"\ncategory = \"c\"\n",
        );
        let path = file.path().to_path_buf();
        let source = open_source(Some(&path)).expect("load toml");
        assert_eq!(source.news().len(), 1);
        assert!(source.find(NewsId(10)).is_some());
    }
}
