use crate::parsers::menu::{self, UNKNOWN};
use crate::results::LimitedItem;

/// Builds a product card; `badge_class` of `None` omits the badge entirely
fn card(
    badge_class: Option<&str>,
    offer_started: Option<&str>,
    name: Option<&str>,
    image: Option<&str>,
    price: Option<&str>,
) -> String {
    let attr = offer_started
        .map(|v| format!(r#" data-time-limited-offer-started-at="{}""#, v))
        .unwrap_or_default();
    let badge = badge_class
        .map(|c| format!(r#"<img class="{}" alt="期間限定" src="/badge.png">"#, c))
        .unwrap_or_default();
    let name = name
        .map(|n| format!(r#"<p class="product-list-card-name">{}</p>"#, n))
        .unwrap_or_default();
    let image = image
        .map(|src| {
            format!(
                r#"<div class="product-list-card-img"><picture><img data-src="{}"></picture></div>"#,
                src
            )
        })
        .unwrap_or_default();
    let price = price
        .map(|p| {
            format!(
                r#"<div class="product-list-card-price"><span class="product-list-card-price-number">{}</span></div>"#,
                p
            )
        })
        .unwrap_or_default();

    format!(
        r#"<li class="product-list-card"{}>{}{}{}{}</li>"#,
        attr, badge, image, name, price
    )
}

fn page(cards: &[String]) -> String {
    format!(
        "<html><body><ul class=\"product-list\">{}</ul></body></html>",
        cards.concat()
    )
}

#[cfg(test)]
mod eligibility_tests {
    use super::*;

    #[test]
    fn test_no_cards() {
        assert!(menu::extract_limited_items(b"<html><body><p>closed</p></body></html>").is_empty());
        assert!(menu::extract_limited_items(b"").is_empty());
    }

    #[test]
    fn test_card_without_badge_or_attribute_is_skipped() {
        let html = page(&[card(None, None, Some("ハンバーガー"), Some("/a.png"), Some("¥170"))]);
        assert!(menu::extract_limited_items_str(&html).is_empty());
    }

    #[test]
    fn test_visible_badge_is_included() {
        let html = page(&[card(Some("badge"), None, Some("月見バーガー"), None, None)]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "月見バーガー");
    }

    #[test]
    fn test_hidden_badge_without_attribute_is_skipped() {
        let html = page(&[card(Some("badge hidden"), None, Some("てりやき"), None, None)]);
        assert!(menu::extract_limited_items_str(&html).is_empty());
    }

    #[test]
    fn test_hidden_badge_with_offer_started_is_included() {
        let html = page(&[card(
            Some("hidden"),
            Some("2024-09-04T05:00:00+09:00"),
            Some("チーズ月見"),
            None,
            None,
        )]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "チーズ月見");
    }

    #[test]
    fn test_offer_started_without_badge_is_included() {
        let html = page(&[card(None, Some("1"), Some("ごはんバーガー"), None, None)]);
        assert_eq!(menu::extract_limited_items_str(&html).len(), 1);
    }

    #[test]
    fn test_empty_offer_started_attribute_is_not_truthy() {
        let html = page(&[card(None, Some(""), Some("ごはんバーガー"), None, None)]);
        assert!(menu::extract_limited_items_str(&html).is_empty());
    }
}

#[cfg(test)]
mod field_tests {
    use super::*;

    #[test]
    fn test_single_card_example() {
        let html = page(&[card(
            Some("badge"),
            None,
            Some("チーズバーガー"),
            Some("/img/cb.png"),
            Some("¥170"),
        )]);
        assert_eq!(
            menu::extract_limited_items(html.as_bytes()),
            vec![LimitedItem::new(
                "チーズバーガー".to_string(),
                "https://www.mcdonalds.co.jp/img/cb.png".to_string(),
                "¥170".to_string(),
            )]
        );
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let html = page(&[card(Some("badge"), None, None, None, None)]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, UNKNOWN);
        assert_eq!(items[0].image_url, "");
        assert_eq!(items[0].price, UNKNOWN);
    }

    #[test]
    fn test_absolute_image_url_is_unchanged() {
        let html = page(&[card(
            Some("badge"),
            None,
            Some("マックフルーリー"),
            Some("https://cdn.example.com/mf.png"),
            Some("¥300"),
        )]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items[0].image_url, "https://cdn.example.com/mf.png");
    }

    #[test]
    fn test_text_is_trimmed() {
        let html = page(&[card(
            Some("badge"),
            None,
            Some("\n   ダブル<span> 月見 </span>\n  "),
            None,
            Some("  ¥520 \n"),
        )]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items[0].name, "ダブル月見");
        assert_eq!(items[0].price, "¥520");
    }

    #[test]
    fn test_image_outside_picture_is_ignored() {
        let html = page(&[r#"<li class="product-list-card"><img alt="期間限定"><div class="product-list-card-img"><img data-src="/a.png"></div><p class="product-list-card-name">A</p></li>"#.to_string()]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items[0].image_url, "");
    }

    #[test]
    fn test_invalid_utf8_does_not_fail() {
        let mut bytes = page(&[card(Some("badge"), None, Some("A"), None, Some("¥1"))]).into_bytes();
        bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        let items = menu::extract_limited_items(&bytes);
        assert_eq!(items.len(), 1);
    }
}

#[cfg(test)]
mod dedup_tests {
    use super::*;

    #[test]
    fn test_duplicate_name_keeps_last_values() {
        let html = page(&[
            card(Some("badge"), None, Some("えびフィレオ"), Some("/old.png"), Some("¥400")),
            card(Some("badge"), None, Some("えびフィレオ"), Some("/new.png"), Some("¥430")),
        ]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image_url, "https://www.mcdonalds.co.jp/new.png");
        assert_eq!(items[0].price, "¥430");
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let html = page(&[
            card(Some("badge"), None, Some("A"), None, Some("¥1")),
            card(Some("badge"), None, Some("B"), None, Some("¥2")),
            card(Some("badge"), None, Some("A"), None, Some("¥3")),
        ]);
        let items = menu::extract_limited_items_str(&html);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(items[0].price, "¥3");
    }

    #[test]
    fn test_ineligible_duplicate_does_not_overwrite() {
        let html = page(&[
            card(Some("badge"), None, Some("A"), None, Some("¥1")),
            card(None, None, Some("A"), None, Some("¥9")),
        ]);
        let items = menu::extract_limited_items_str(&html);
        assert_eq!(items[0].price, "¥1");
    }
}
