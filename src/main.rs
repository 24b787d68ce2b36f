use clap::Parser;
use limited_menu::categories::CATEGORIES;
use limited_menu::{Bot, BotConfig, Inbound, LimitedItem, Reply, User, fetchers, parsers};
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

mod args;
use args::{Args, Command, convert_fetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BotConfig::from_file(path)?,
        None => BotConfig::default(),
    }
    .apply_env();
    if let Some(fetcher) = args.fetcher {
        config.fetcher = convert_fetcher(fetcher);
    }
    ::log::debug!("Using configuration {:?}", config);

    match args.command {
        Command::Categories => {
            for category in CATEGORIES.iter() {
                println!("{}\t{}\t{}", category.key, category.label, category.url);
            }
        }
        Command::Extract { path } => {
            let markup = std::fs::read(&path)?;
            let items = parsers::extract_limited_items(&markup);
            ::log::info!("Extracted {} items from {}", items.len(), path.display());
            for item in &items {
                print_item(item, args.json)?;
            }
        }
        Command::Query { key } => {
            let bot = Bot::new(fetchers::from_config(&config)?);
            let msg = Inbound {
                user: User {
                    id: 0,
                    full_name: "cli".to_string(),
                },
                text: key,
            };
            for reply in bot.handle(&msg).await {
                print_reply(&reply, args.json)?;
            }
        }
        Command::Chat { user_id, name } => {
            let bot = Bot::new(fetchers::from_config(&config)?);
            let user = User {
                id: user_id,
                full_name: name,
            };
            chat(&bot, user, args.json).await?;
        }
    }

    Ok(())
}

/// Feed stdin lines to the bot until EOF
async fn chat(bot: &Bot, user: User, json: bool) -> Result<(), Box<dyn Error>> {
    print_reply(&limited_menu::bot::greeting(&user), json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let msg = Inbound {
            user: user.clone(),
            text: line,
        };
        for reply in bot.handle(&msg).await {
            print_reply(&reply, json)?;
        }
    }

    ::log::info!("Input closed, leaving chat");
    Ok(())
}

fn print_reply(reply: &Reply, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(reply)?);
        return Ok(());
    }

    match reply {
        Reply::Html { text, .. } | Reply::Text { text } => println!("{}\n", text),
        Reply::Photo { url, caption } => println!("[photo] {}\n{}\n", url, caption),
    }
    Ok(())
}

fn print_item(item: &LimitedItem, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(item)?);
    } else {
        println!("{}\t{}\t{}", item.name, item.price, item.image_url);
    }
    Ok(())
}
