use std::path::PathBuf;

use clap::Parser;

use app::App;
use store::SavedWords;
use utilities::input;

mod app;
mod audio;
mod lookup;
mod render;
mod store;
mod utilities;

/// Terminal dictionary with a persistent saved-word list.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Look up a single word and exit instead of starting the prompt
    word: Option<String>,

    /// Directory holding the saved word list (defaults to the platform
    /// data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// External program used to play pronunciation audio
    #[arg(long, default_value = "mpv")]
    player: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("no usable data directory, pass --data-dir"))?
            .join("wordvault"),
    };
    let store = SavedWords::new(data_dir.join(store::STORE_FILE_NAME));
    let mut app = App::new(store, cli.player);

    if let Some(word) = cli.word {
        app.search(&word).await;
        return Ok(());
    }

    loop {
        let line = input(">> ")?;
        if line.is_empty() {
            // stdin closed
            break;
        }
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" => {
                    break;
                }
                "define" | "find" | "search" => {
                    let term = command_parts.collect::<Vec<&str>>().join(" ");
                    app.search(&term).await;
                }
                "save" | "keep" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    if word.is_empty() {
                        app.save(None);
                    } else {
                        app.save(Some(&word));
                    }
                }
                "list" | "saved" | "words" => {
                    app.list_saved();
                }
                "play" | "audio" => {
                    app.play().await;
                }
                "syn" => match command_parts.next() {
                    Some(number) => app.synonym(number).await,
                    None => println!("Usage: syn <number>"),
                },
                "help" | "?" => {
                    print_help();
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

fn print_help() {
    println!("    define <word>   look up a word");
    println!("    syn <number>    look up a synonym shown for the last result");
    println!("    save [word]     keep a word (defaults to the last result)");
    println!("    list            show the saved words");
    println!("    play            play the last result's pronunciation");
    println!("    quit            leave");
}
