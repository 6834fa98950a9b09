//! Caption and listing-line formatting.

use bazaar_bot::database::models::{ContactRecord, User};
use bazaar_bot::ui::text;

fn seller(username: Option<&str>) -> User {
    User {
        telegram_id: 1,
        role: Some("seller".to_string()),
        username: username.map(str::to_string),
        profile_photo: Some("file-1".to_string()),
        shop_name: Some("Samovar House".to_string()),
        bio: Some("Tea gear".to_string()),
        phone: None,
    }
}

#[test]
fn profile_caption_includes_the_handle() {
    let caption = text::profile_caption(&seller(Some("shopkeeper")), 3);
    assert!(caption.contains("@shopkeeper"));
    assert!(caption.contains("Samovar House"));
    assert!(caption.contains("Tea gear"));
    assert!(caption.contains("Products: 3"));
}

#[test]
fn profile_caption_dashes_out_missing_fields() {
    let caption = text::profile_caption(&seller(None), 0);
    assert!(!caption.contains('@'));
    assert!(caption.contains("👤 -"));
    assert!(caption.contains("📞 -"));
}

#[test]
fn timestamps_drop_subseconds_and_zone() {
    assert_eq!(
        text::pretty_timestamp("2026-08-30T12:34:56.789012+00:00"),
        "2026-08-30 12:34:56"
    );
}

#[test]
fn history_lines_name_the_seller_when_known() {
    let record = ContactRecord {
        timestamp: "2026-08-30T12:34:56.000+00:00".to_string(),
        title: "Teapot".to_string(),
        seller_username: Some("shopkeeper".to_string()),
    };
    assert_eq!(
        text::history_line(&record),
        "• Teapot — @shopkeeper (2026-08-30 12:34:56)"
    );

    let anonymous = ContactRecord {
        seller_username: None,
        ..record
    };
    assert!(text::history_line(&anonymous).contains("unknown seller"));
}
