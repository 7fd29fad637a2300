use threshold::{
    cli::Cli,
    config::Config,
    content::ContentStore,
    logging::{self, LogLevel},
    models::{self, Page},
    nav,
    session::Session,
    ui::app::App,
};

use clap::Parser;
use eyre::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogLevel::from_cli(cli.verbose, cli.debug));

    let store = ContentStore::get()?;

    // Non-interactive modes first; neither needs a terminal or config.
    if cli.list {
        return list_chapters(store);
    }
    if let Some(id) = cli.dump {
        return dump_chapter(store, id);
    }

    let config = match cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::new() {
            Ok(config) => config,
            Err(err) => {
                logging::warn(format!("could not load configuration: {err}"));
                logging::warn("starting with default settings");
                Config::load_from(std::env::temp_dir().join("threshold-configuration.json"))?
            }
        },
    };

    let mut session = Session::new(config.settings.font_size);
    let start_page = match cli.page.as_deref() {
        Some(name) => Page::from_name(name),
        None => Page::Home,
    };
    if let Some(id) = cli.chapter {
        session.navigate(Page::Reader, Some(id));
    } else {
        session.navigate(start_page, None);
    }

    let mut app = App::new(config, session, store)?;
    app.run()
}

fn list_chapters(store: &ContentStore) -> Result<()> {
    for chapter in store.chapters() {
        println!(
            "{:>3}  {}  ({}, {} words, {} min read)",
            chapter.id,
            chapter.title,
            chapter.publish_date_display(),
            models::format_count(chapter.word_count),
            chapter.reading_minutes(),
        );
    }
    Ok(())
}

fn dump_chapter(store: &ContentStore, id: u32) -> Result<()> {
    let position = nav::locate(store.chapters(), id);
    let Some(chapter) = position.chapter() else {
        return Err(eyre::eyre!("chapter {} not found", id));
    };

    println!("Chapter {}: {}", chapter.id, chapter.title);
    println!();
    for paragraph in chapter.paragraphs() {
        println!("{paragraph}");
        println!();
    }
    Ok(())
}
