use crate::results::LimitedItem;
use crate::utils::absolutize_image_url;
use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Placeholder used when a card has no name or price node
pub const UNKNOWN: &str = "不明";

/// Card attribute set once a time-limited offer has started
const OFFER_STARTED_ATTR: &str = "data-time-limited-offer-started-at";

static CARD: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".product-list-card").unwrap());
static BADGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"img[alt="期間限定"]"#).unwrap());
static NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".product-list-card-name").unwrap());
static IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".product-list-card-img picture img[data-src]").unwrap()
});
static PRICE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".product-list-card-price span.product-list-card-price-number").unwrap()
});

/// Extracts the limited-time items from a category page.
///
/// Invalid UTF-8 is replaced rather than rejected, and the HTML parser
/// recovers from any markup error, so this never fails: input that is not
/// markup at all just has no product cards and yields an empty list.
pub fn extract_limited_items(markup: &[u8]) -> Vec<LimitedItem> {
    extract_limited_items_str(&String::from_utf8_lossy(markup))
}

/// Same as [`extract_limited_items`] for already-decoded text
pub fn extract_limited_items_str(html: &str) -> Vec<LimitedItem> {
    let doc = Html::parse_document(html);

    // Keyed by name: a later card replaces the values but keeps the first position
    let mut items: IndexMap<String, (String, String)> = IndexMap::new();
    let mut cards = 0usize;

    for card in doc.select(&CARD) {
        cards += 1;
        if !is_limited(&card) {
            continue;
        }

        let name = card
            .select(&NAME)
            .next()
            .map(|n| stripped_text(&n))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let image_url = card
            .select(&IMAGE)
            .next()
            .and_then(|img| img.value().attr("data-src"))
            .map(absolutize_image_url)
            .unwrap_or_default();

        let price = card
            .select(&PRICE)
            .next()
            .map(|p| stripped_text(&p))
            .unwrap_or_else(|| UNKNOWN.to_string());

        if items.insert(name.clone(), (image_url, price)).is_some() {
            ::log::debug!("Duplicate limited item replaced: {}", name);
        }
    }

    ::log::debug!(
        "Menu parser found {} cards, {} limited items",
        cards,
        items.len()
    );

    items
        .into_iter()
        .map(|(name, (image_url, price))| LimitedItem::new(name, image_url, price))
        .collect()
}

/// A card is limited when it shows a visible badge or carries the offer-started attribute.
///
/// AND binds tighter than OR here: a hidden badge still counts when the
/// attribute is set.
pub fn is_limited(card: &ElementRef) -> bool {
    let badge = card.select(&BADGE).next();
    let offer_started = card
        .value()
        .attr(OFFER_STARTED_ATTR)
        .is_some_and(|v| !v.is_empty());

    (badge.is_some_and(|b| !has_class(&b, "hidden"))) || offer_started
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Text of an element with every fragment trimmed and empty fragments dropped
fn stripped_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
