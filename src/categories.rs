/// A menu category page that users can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPage {
    /// Key the user types to select this category
    pub key: &'static str,
    /// Category listing URL
    pub url: &'static str,
    /// Label used in replies
    pub label: &'static str,
}

pub const CATEGORIES: [CategoryPage; 9] = [
    CategoryPage {
        key: "1",
        url: "https://www.mcdonalds.co.jp/menu/burger/",
        label: "バーガー",
    },
    CategoryPage {
        key: "2",
        url: "https://www.mcdonalds.co.jp/menu/set/",
        label: "セット",
    },
    CategoryPage {
        key: "3",
        url: "https://www.mcdonalds.co.jp/menu/side/",
        label: "サイドメニュー",
    },
    CategoryPage {
        key: "4",
        url: "https://www.mcdonalds.co.jp/menu/drink/",
        label: "ドリンク",
    },
    CategoryPage {
        key: "5",
        url: "https://www.mcdonalds.co.jp/menu/happyset/",
        label: "ハッピーセット",
    },
    CategoryPage {
        key: "6",
        url: "https://www.mcdonalds.co.jp/menu/morning/",
        label: "朝マック",
    },
    CategoryPage {
        key: "7",
        url: "https://www.mcdonalds.co.jp/menu/dinner/",
        label: "夜マック",
    },
    CategoryPage {
        key: "8",
        url: "https://www.mcdonalds.co.jp/menu/dessert/",
        label: "スイーツ",
    },
    CategoryPage {
        key: "9",
        url: "https://www.mcdonalds.co.jp/menu/barista/",
        label: "マックカフェ",
    },
];

/// Looks up a category by the key a user typed (surrounding whitespace ignored)
pub fn find(key: &str) -> Option<&'static CategoryPage> {
    let key = key.trim();
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Numbered list of categories, one per line, e.g. `1.バーガー`
pub fn menu_listing() -> String {
    CATEGORIES
        .iter()
        .map(|c| format!("{}.{}", c.key, c.label))
        .collect::<Vec<_>>()
        .join("\n")
}
