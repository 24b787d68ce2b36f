use crate::categories::{self, CategoryPage};
use crate::fetchers::PageFetcher;
use crate::lookup::Lookup;
use crate::utils::escape_html;
use serde::{Deserialize, Serialize};

/// The person who sent a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
}

impl User {
    /// HTML link mentioning this user
    pub fn mention_html(&self) -> String {
        format!(
            r#"<a href="tg://user?id={}">{}</a>"#,
            self.id,
            escape_html(&self.full_name)
        )
    }
}

/// An inbound text message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inbound {
    pub user: User,
    pub text: String,
}

/// A message the bot wants delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reply {
    /// HTML-formatted text; `force_reply` asks the client to open a reply box
    Html { text: String, force_reply: bool },
    /// Plain text
    Text { text: String },
    /// Image by URL with a caption
    Photo { url: String, caption: String },
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply::Text { text: text.into() }
    }
}

pub const HELP_TEXT: &str = "私はマクドナルドの期間限定のメニューの情報をお届けします。\n\
知りたい期間限定メニューのジャンルを指定すると指定されたジャンルの期間限定メニューをお答えします。\n\
ex.サイドメニューの情報が知りたい時:\n'3'と入力してください";

/// Turns inbound messages into replies
pub struct Bot {
    fetcher: Box<dyn PageFetcher>,
}

impl Bot {
    pub fn new(fetcher: Box<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Handle one inbound message
    pub async fn handle(&self, msg: &Inbound) -> Vec<Reply> {
        let text = msg.text.trim();

        if let Some(command) = command_name(text) {
            ::log::debug!("Command /{} from user {}", command, msg.user.id);
            return match command {
                "start" => vec![greeting(&msg.user)],
                "help" => vec![Reply::text(HELP_TEXT)],
                _ => Vec::new(),
            };
        }

        match categories::find(text) {
            Some(category) => self.limited_items(category).await,
            None => vec![greeting(&msg.user)],
        }
    }

    async fn limited_items(&self, category: &'static CategoryPage) -> Vec<Reply> {
        let items = match Lookup::new(category, self.fetcher.as_ref()).run().await {
            Ok(items) => items,
            Err(e) => {
                ::log::error!("Failed to look up {}: {}", category.url, e);
                return vec![Reply::text(format!(
                    "{}の情報を取得できませんでした。しばらくしてからもう一度お試しください。",
                    category.label
                ))];
            }
        };

        if items.is_empty() {
            return vec![Reply::text(format!(
                "現在発売中の期間限定{}はありません。",
                category.label
            ))];
        }

        let mut replies = Vec::with_capacity(items.len() + 1);
        replies.push(Reply::text(format!(
            "現在発売中の期間限定{}は以下の通りです:",
            category.label
        )));
        replies.extend(items.into_iter().map(|item| Reply::Photo {
            caption: item.caption(),
            url: item.image_url,
        }));
        replies
    }
}

/// Greeting with the category menu
pub fn greeting(user: &User) -> Reply {
    Reply::Html {
        text: format!(
            "こんにちは {}さん!\n\
             私はMcDonald's_information_botです。\n\
             マクドナルドの期間限定メニューの情報をお届けします。\n\
             知りたい期間限定メニューのジャンルを選んでください:\n{}",
            user.mention_html(),
            categories::menu_listing()
        ),
        force_reply: true,
    }
}

/// `/start@my_bot arg` -> `start`
fn command_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    let word = rest.split_whitespace().next()?;
    word.split('@').next().filter(|name| !name.is_empty())
}
