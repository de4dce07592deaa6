//! App-level flows: screen loading, stale responses, cart and checkout.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{api_client, drain, make_app, shop_item, RecordingClipboard, TEST_TELEGRAM_ID};
use fillcamp::api::{
    GameClickResult, ItemId, OrderLine, OrderReceipt, ReferralSummary, Role, UserProfile,
};
use fillcamp::clipboard::{ClipboardError, ClipboardSink};
use fillcamp::ui::app::{App, NoticeLevel, Tab};
use fillcamp::ui::game::GameStats;
use fillcamp::ui::referrals::CopyStatus;
use fillcamp::ui::worker::{execute, ApiCommand, ApiEvent};

fn profile(bonus_balance: i64, game_progress: i64) -> UserProfile {
    UserProfile {
        id: 1,
        tg_id: TEST_TELEGRAM_ID,
        full_name: "Ann Lee".to_string(),
        username: None,
        avatar_url: None,
        role: Role::Child,
        linked_parent_tg_id: None,
        linked_child_tg_id: None,
        bonus_balance,
        game_progress,
    }
}

fn receipt(id: i64) -> OrderReceipt {
    OrderReceipt {
        id,
        items: Vec::new(),
        total_bonus: 25,
        total_money: None,
        status: "pending".to_string(),
    }
}

/// Opens the shop and answers its fetch with a two-item catalog.
fn open_loaded_shop(app: &mut App, rx: &mut tokio::sync::mpsc::Receiver<ApiCommand>) {
    app.select_tab(Tab::Shop);
    let generation = match drain(rx).as_slice() {
        [ApiCommand::FetchShop { generation }] => *generation,
        other => panic!("expected one shop fetch, got {other:?}"),
    };
    app.on_api_event(ApiEvent::Shop {
        generation,
        result: Ok(vec![shop_item(1, "Mug", 10), shop_item(2, "Cap", 5)]),
    });
}

#[test]
fn loaded_tab_is_not_refetched_but_failed_tab_is() {
    let (mut app, mut rx) = make_app();

    app.select_tab(Tab::Profile);
    let generation = match drain(&mut rx).as_slice() {
        [ApiCommand::FetchProfile { generation }] => *generation,
        other => panic!("unexpected commands {other:?}"),
    };
    app.on_api_event(ApiEvent::Profile {
        generation,
        result: Err("Could not reach the server".to_string()),
    });
    assert_eq!(app.profile().error(), Some("Could not reach the server"));

    app.select_tab(Tab::News);
    drain(&mut rx);
    app.select_tab(Tab::Profile);
    let generation = match drain(&mut rx).as_slice() {
        [ApiCommand::FetchProfile { generation }] => *generation,
        other => panic!("failed tab should retry, got {other:?}"),
    };
    app.on_api_event(ApiEvent::Profile {
        generation,
        result: Ok(profile(50, 2)),
    });
    assert_eq!(app.profile().data().map(|p| p.bonus_balance), Some(50));

    app.select_tab(Tab::News);
    app.select_tab(Tab::Profile);
    let commands = drain(&mut rx);
    assert!(
        !commands
            .iter()
            .any(|c| matches!(c, ApiCommand::FetchProfile { .. })),
        "loaded profile was refetched: {commands:?}"
    );
}

#[test]
fn stale_response_is_ignored_after_refresh() {
    let (mut app, mut rx) = make_app();
    app.select_tab(Tab::Shop);
    app.refresh();

    let generations: Vec<u64> = drain(&mut rx)
        .into_iter()
        .filter_map(|c| match c {
            ApiCommand::FetchShop { generation } => Some(generation),
            _ => None,
        })
        .collect();
    assert_eq!(generations.len(), 2);

    app.on_api_event(ApiEvent::Shop {
        generation: generations[0],
        result: Ok(vec![shop_item(9, "Old", 1)]),
    });
    assert!(app.shop().catalog.is_loading());

    app.on_api_event(ApiEvent::Shop {
        generation: generations[1],
        result: Ok(vec![shop_item(1, "Mug", 10)]),
    });
    let names: Vec<&str> = app
        .shop()
        .catalog
        .data()
        .map(|items| items.iter().map(|i| i.name.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Mug"]);
}

#[test]
fn adding_from_shop_fills_cart() {
    let (mut app, mut rx) = make_app();
    open_loaded_shop(&mut app, &mut rx);

    app.add_selected_to_cart();
    app.add_selected_to_cart();
    app.move_down();
    app.add_selected_to_cart();

    let lines: Vec<(i64, u32)> = app
        .cart()
        .lines()
        .iter()
        .map(|line| (line.item().id.get(), line.quantity()))
        .collect();
    assert_eq!(lines, vec![(1, 2), (2, 1)]);
    assert_eq!(app.cart().total(), 25);
    assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Info));
}

#[test]
fn cart_screen_edits_selected_line() {
    let (mut app, mut rx) = make_app();
    open_loaded_shop(&mut app, &mut rx);
    app.add_selected_to_cart();
    app.move_down();
    app.add_selected_to_cart();

    app.select_tab(Tab::Cart);
    app.increment_selected_line();
    assert_eq!(app.cart().quantity_of(ItemId::new(1)), 2);

    app.decrement_selected_line();
    app.decrement_selected_line();
    assert_eq!(app.cart().quantity_of(ItemId::new(1)), 0);
    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart_screen().selected, 0);

    app.remove_selected_line();
    assert!(app.cart().is_empty());
    assert_eq!(app.cart().total(), 0);
}

#[test]
fn successful_order_clears_cart_and_returns_to_shop() {
    let (mut app, mut rx) = make_app();
    open_loaded_shop(&mut app, &mut rx);
    app.add_selected_to_cart();
    app.select_tab(Tab::Cart);
    app.toggle_pay_with_bonus();

    app.submit_order();
    let order = match drain(&mut rx).as_slice() {
        [ApiCommand::SubmitOrder { order }] => order.clone(),
        other => panic!("expected one order, got {other:?}"),
    };
    assert_eq!(
        order.items,
        vec![OrderLine {
            item_id: ItemId::new(1),
            quantity: 1
        }]
    );
    assert!(!order.pay_with_bonus);
    assert!(app.cart_screen().pending);

    app.submit_order();
    assert!(drain(&mut rx).is_empty(), "duplicate submit while pending");

    app.on_api_event(ApiEvent::Order(Ok(receipt(17))));

    assert!(app.cart().is_empty());
    assert!(!app.cart_screen().pending);
    assert_eq!(app.active_tab(), Tab::Shop);
    assert_eq!(app.notice().map(|n| n.text.as_str()), Some("Order #17 placed"));
}

#[test]
fn cart_is_locked_while_order_is_pending() {
    let (mut app, mut rx) = make_app();
    open_loaded_shop(&mut app, &mut rx);
    app.add_selected_to_cart();
    app.select_tab(Tab::Cart);
    app.submit_order();
    drain(&mut rx);

    app.increment_selected_line();
    app.increment_selected_line();
    app.remove_selected_line();
    app.select_tab(Tab::Shop);
    app.move_down();
    app.add_selected_to_cart();

    let lines: Vec<(i64, u32)> = app
        .cart()
        .lines()
        .iter()
        .map(|line| (line.item().id.get(), line.quantity()))
        .collect();
    assert_eq!(lines, vec![(1, 1)], "cart changed while the order was in flight");
    assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Error));

    app.on_api_event(ApiEvent::Order(Ok(receipt(3))));
    assert!(app.cart().is_empty());

    app.add_selected_to_cart();
    assert_eq!(app.cart().quantity_of(ItemId::new(2)), 1);
}

#[test]
fn order_reply_keeps_user_on_the_tab_they_moved_to() {
    let (mut app, mut rx) = make_app();
    open_loaded_shop(&mut app, &mut rx);
    app.add_selected_to_cart();
    app.select_tab(Tab::Cart);
    app.submit_order();
    app.select_tab(Tab::News);
    drain(&mut rx);

    app.on_api_event(ApiEvent::Order(Ok(receipt(8))));

    assert_eq!(app.active_tab(), Tab::News);
    assert!(app.cart().is_empty());
    assert!(!app.cart_screen().pending);
    assert_eq!(app.notice().map(|n| n.text.as_str()), Some("Order #8 placed"));
}

#[test]
fn failed_order_keeps_cart() {
    let (mut app, mut rx) = make_app();
    open_loaded_shop(&mut app, &mut rx);
    app.add_selected_to_cart();
    app.select_tab(Tab::Cart);
    app.submit_order();
    drain(&mut rx);

    app.on_api_event(ApiEvent::Order(Err("Not enough bonus balance".to_string())));

    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.active_tab(), Tab::Cart);
    assert!(!app.cart_screen().pending);
    assert_eq!(
        app.cart_screen().error.as_deref(),
        Some("Not enough bonus balance")
    );
}

#[test]
fn empty_cart_submits_nothing() {
    let (mut app, mut rx) = make_app();
    app.select_tab(Tab::Cart);
    drain(&mut rx);
    app.submit_order();
    assert!(drain(&mut rx).is_empty());
    assert!(!app.cart_screen().pending);
}

#[test]
fn game_seeds_from_profile_and_ignores_clicks_while_pending() {
    let (mut app, mut rx) = make_app();
    app.select_tab(Tab::Profile);
    let generation = match drain(&mut rx).as_slice() {
        [ApiCommand::FetchProfile { generation }] => *generation,
        other => panic!("unexpected commands {other:?}"),
    };
    app.on_api_event(ApiEvent::Profile {
        generation,
        result: Ok(profile(40, 7)),
    });

    app.select_tab(Tab::Game);
    assert_eq!(
        app.game().stats,
        Some(GameStats {
            bonus_balance: 40,
            game_progress: 7
        })
    );

    app.game_click();
    app.game_click();
    assert_eq!(drain(&mut rx), vec![ApiCommand::GameClick]);

    app.on_api_event(ApiEvent::GameClick(Ok(GameClickResult {
        new_bonus_balance: 41,
        game_progress: 8,
    })));
    assert!(!app.game().pending);
    assert_eq!(app.game().stats.map(|s| s.bonus_balance), Some(41));

    app.game_click();
    app.on_api_event(ApiEvent::GameClick(Err("Too many clicks".to_string())));
    assert_eq!(app.game().stats.map(|s| s.bonus_balance), Some(41));
    assert_eq!(app.game().error.as_deref(), Some("Too many clicks"));
}

#[test]
fn referral_link_is_copied_to_clipboard() {
    let (mut app, mut rx) = make_app();
    app.select_tab(Tab::Referrals);
    let generation = match drain(&mut rx).as_slice() {
        [ApiCommand::FetchReferrals { generation }] => *generation,
        other => panic!("unexpected commands {other:?}"),
    };

    let mut clipboard = RecordingClipboard::default();
    app.copy_referral_link(&mut clipboard);
    assert!(clipboard.copied.is_empty(), "nothing to copy before load");

    app.on_api_event(ApiEvent::Referrals {
        generation,
        result: Ok(ReferralSummary {
            referral_link: "https://t.me/camp_bot?start=ref_424242".to_string(),
            invited_count: 0,
            bonus_earned: 0,
            invited_users: Vec::new(),
        }),
    });
    app.copy_referral_link(&mut clipboard);

    assert_eq!(
        clipboard.copied,
        vec!["https://t.me/camp_bot?start=ref_424242".to_string()]
    );
    assert_eq!(app.referrals().copy_status, Some(CopyStatus::Copied));
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(arboard::Error::ClipboardNotSupported))
    }
}

#[test]
fn clipboard_failure_is_reported_on_screen() {
    let (mut app, mut rx) = make_app();
    app.select_tab(Tab::Referrals);
    let generation = match drain(&mut rx).as_slice() {
        [ApiCommand::FetchReferrals { generation }] => *generation,
        other => panic!("unexpected commands {other:?}"),
    };
    app.on_api_event(ApiEvent::Referrals {
        generation,
        result: Ok(ReferralSummary {
            referral_link: "https://t.me/x".to_string(),
            invited_count: 1,
            bonus_earned: 50,
            invited_users: Vec::new(),
        }),
    });

    app.copy_referral_link(&mut BrokenClipboard);

    assert!(matches!(
        app.referrals().copy_status,
        Some(CopyStatus::Failed(_))
    ));
}

#[tokio::test]
async fn worker_executes_commands_against_backend() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(404, "User not found"))
        .await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"id": 1, "name": "Mug", "price_bonus": 10}]"#,
        ))
        .await;

    let client = api_client(&backend.base_url());

    match execute(&client, 20, ApiCommand::FetchProfile { generation: 4 }).await {
        ApiEvent::Profile { generation, result } => {
            assert_eq!(generation, 4);
            assert_eq!(result, Err("User not found".to_string()));
        }
        other => panic!("unexpected event {other:?}"),
    }

    match execute(&client, 20, ApiCommand::FetchShop { generation: 5 }).await {
        ApiEvent::Shop { generation, result } => {
            assert_eq!(generation, 5);
            assert_eq!(result.map(|items| items.len()), Ok(1));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
