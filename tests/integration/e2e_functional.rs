use crate::helpers::{sample_transactions, transaction, user};
use blockpay_admin::domain::{AccountStatus, KycStatus, TransactionStatus, TransactionType};
use blockpay_admin::mock_data::{DatasetSize, MockDataset};
use blockpay_admin::query::{FieldFilter, TransactionFilters, UserFilters};
use blockpay_admin::{global_search, query_transactions, query_users, DataSource, InMemorySource};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_source() -> InMemorySource {
    InMemorySource::new(sample_transactions(), vec![])
}

fn mock_source(seed: u64) -> InMemorySource {
    MockDataset::generate(
        &mut StdRng::seed_from_u64(seed),
        "2024-06-01T00:00:00Z".parse().unwrap(),
        DatasetSize {
            transactions: 200,
            users: 120,
            contract_logs: 5,
        },
    )
}

#[test]
fn test_status_filter_scenario() {
    let source = InMemorySource::new(
        vec![
            transaction("tx-a", "Alice Smith", TransactionStatus::Completed),
            transaction("tx-b", "Bob Jones", TransactionStatus::Pending),
            transaction("tx-c", "Eve Davis", TransactionStatus::Completed),
        ],
        vec![],
    );
    let filters = TransactionFilters::from_pairs([("status", "completed")]);

    let page = query_transactions(&source, 1, 10, &filters);

    assert_eq!(page.total, 2);
    let ids: Vec<&str> = page.items.iter().map(|tx| tx.id.as_str()).collect();
    assert!(ids.contains(&"tx-a") && ids.contains(&"tx-c"));
}

#[test]
fn test_empty_source_returns_empty_page() {
    let source = InMemorySource::default();
    let page = query_transactions(&source, 1, 10, &TransactionFilters::default());
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);

    let users = query_users(&source, 1, 10, &UserFilters::default());
    assert!(users.items.is_empty());
    assert_eq!(users.total, 0);
}

#[test]
fn test_pages_past_the_end_keep_the_total() {
    let source = sample_source();
    for (page, limit) in [(3, 10), (4, 10), (100, 7), (2, 24)] {
        let result = query_transactions(&source, page, limit, &TransactionFilters::default());
        assert!(result.items.len() <= limit as usize);
        assert_eq!(result.total, 24);
    }
    let last = query_transactions(&source, 3, 10, &TransactionFilters::default());
    assert_eq!(last.items.len(), 4);
}

#[test]
fn test_pages_tile_the_matches_in_source_order() {
    let source = mock_source(21);
    let filters = TransactionFilters {
        r#type: FieldFilter::Is(TransactionType::Deposit),
        ..TransactionFilters::default()
    };
    let all = query_transactions(&source, 1, 1000, &filters);

    let mut stitched = Vec::new();
    for page in 1.. {
        let chunk = query_transactions(&source, page, 7, &filters);
        if chunk.items.is_empty() {
            break;
        }
        assert_eq!(chunk.total, all.total);
        stitched.extend(chunk.items);
    }
    assert_eq!(stitched, all.items);
}

#[test]
fn test_non_positive_page_and_limit_are_clamped() {
    let source = sample_source();
    let clamped = query_transactions(&source, 0, -3, &TransactionFilters::default());
    assert_eq!((clamped.page, clamped.limit), (1, 1));
    assert_eq!(clamped.items.len(), 1);
    assert_eq!(clamped.items[0], query_transactions(&source, 1, 1, &TransactionFilters::default()).items[0]);
}

#[test]
fn test_same_query_twice_is_identical() {
    let source = mock_source(8);
    let filters = UserFilters {
        kyc_status: KycStatus::Pending.into(),
        search: Some("a".to_string()),
        ..UserFilters::default()
    };
    assert_eq!(
        query_users(&source, 2, 5, &filters),
        query_users(&source, 2, 5, &filters)
    );
}

#[test]
fn test_two_filters_narrow_each_single_filter() {
    let source = mock_source(13);
    let both = UserFilters {
        kyc_status: FieldFilter::Is(KycStatus::Verified),
        account_status: FieldFilter::Is(AccountStatus::Suspended),
        search: None,
    };
    let kyc_only = UserFilters {
        account_status: FieldFilter::Any,
        ..both.clone()
    };
    let status_only = UserFilters {
        kyc_status: FieldFilter::Any,
        ..both.clone()
    };

    let narrowed = query_users(&source, 1, 1000, &both);
    let by_kyc = query_users(&source, 1, 1000, &kyc_only);
    let by_status = query_users(&source, 1, 1000, &status_only);

    assert!(narrowed.total <= by_kyc.total.min(by_status.total));
    for u in &narrowed.items {
        assert!(by_kyc.items.contains(u));
        assert!(by_status.items.contains(u));
    }
}

#[test]
fn test_search_ignores_case() {
    let source = sample_source();
    let upper = TransactionFilters::from_pairs([("search", "ALICE")]);
    let lower = TransactionFilters::from_pairs([("search", "alice")]);

    let a = query_transactions(&source, 1, 100, &upper);
    let b = query_transactions(&source, 1, 100, &lower);

    assert_eq!(a, b);
    assert_eq!(a.total, 8);
}

#[test]
fn test_search_combines_with_filters() {
    let source = sample_source();
    let filters = TransactionFilters::from_pairs([("search", "bob"), ("status", "pending")]);
    let page = query_transactions(&source, 1, 100, &filters);
    assert!(page.total > 0);
    assert!(page
        .items
        .iter()
        .all(|tx| tx.user_name == "Bob Jones" && tx.status == TransactionStatus::Pending));
}

#[test]
fn test_missing_merchant_never_matches_merchant_search() {
    let source = sample_source();
    let filters = TransactionFilters::from_pairs([("search", "walmart")]);
    let page = query_transactions(&source, 1, 100, &filters);
    // every fifth sample record has no merchant
    assert_eq!(page.total, 24 - 5);
    assert!(page.items.iter().all(|tx| tx.merchant.is_some()));
}

#[test]
fn test_wallet_search_ignores_case() {
    let source = InMemorySource::new(
        vec![],
        vec![
            user("usr-1", "Alice Smith", "0xABCdef0011"),
            user("usr-2", "Bob Jones", "0x1234abc999"),
            user("usr-3", "Eve Moore", "0x9999999999"),
        ],
    );
    let filters = UserFilters::from_pairs([("search", "0xabc")]);
    let page = query_users(&source, 1, 10, &filters);
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, "usr-1");

    let inner = UserFilters::from_pairs([("search", "ABC")]);
    assert_eq!(query_users(&source, 1, 10, &inner).total, 2);
}

#[test]
fn test_global_search_returns_first_page() {
    let source = sample_source();
    let page = global_search(&source, "tx-1", 5);
    // tx-10 .. tx-19
    assert_eq!(page.total, 10);
    assert_eq!(page.page, 1);
    assert_eq!(page.items.len(), 5);
}

#[test]
fn test_query_never_mutates_the_source() {
    let source = mock_source(3);
    let before = source.clone();
    let _ = query_transactions(
        &source,
        2,
        3,
        &TransactionFilters::from_pairs([("type", "refund"), ("search", "e")]),
    );
    assert_eq!(source.transactions(), before.transactions());
}

#[test]
fn test_unknown_filter_values_match_nothing() {
    let source = sample_source();

    let page = query_transactions(&source, 1, 10, &TransactionFilters::from_pairs([("status", "lost")]));
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);

    let page = query_transactions(&source, 1, 10, &TransactionFilters::from_pairs([("type", "transfer")]));
    assert_eq!(page.total, 0);

    let users = InMemorySource::new(vec![], vec![user("usr-1", "Alice Smith", "0x01")]);
    let page = query_users(&users, 1, 10, &UserFilters::from_pairs([("accountStatus", "frozen")]));
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_search_reaches_the_chain_hash() {
    let mut with_hash = transaction("tx-hash", "Zed Quinn", TransactionStatus::Completed);
    with_hash.merchant = None;
    with_hash.blockchain_tx_hash = Some("0xDEADbeef00112233".to_string());
    let mut without_hash = transaction("tx-plain", "Zed Quinn", TransactionStatus::Completed);
    without_hash.merchant = None;
    let source = InMemorySource::new(vec![with_hash, without_hash], vec![]);

    for needle in ["deadBEEF", "0XDEADBEEF", "beef0011"] {
        let page = query_transactions(&source, 1, 10, &TransactionFilters::from_pairs([("search", needle)]));
        assert_eq!(page.total, 1, "searching {needle}");
        assert_eq!(page.items[0].id, "tx-hash");
    }
}

#[test]
fn test_search_reaches_user_email_and_id() {
    let mut zed = user("usr-ZQ77", "Zed Quinn", "0x01");
    zed.email = "Zed.Q@Example.com".to_string();
    let source = InMemorySource::new(
        vec![],
        vec![zed, user("usr-2", "Bob Jones", "0x02")],
    );

    let by_email = query_users(&source, 1, 10, &UserFilters::from_pairs([("search", "ZED.Q@EXAMPLE")]));
    assert_eq!(by_email.total, 1);
    assert_eq!(by_email.items[0].id, "usr-ZQ77");

    let by_id = query_users(&source, 1, 10, &UserFilters::from_pairs([("search", "usr-zq7")]));
    assert_eq!(by_id.total, 1);
    assert_eq!(by_id.items[0].name, "Zed Quinn");

    // every helper email ends in example.com, whatever the case
    let both = query_users(&source, 1, 10, &UserFilters::from_pairs([("search", "EXAMPLE.COM")]));
    assert_eq!(both.total, 2);
}

#[test]
fn test_search_reaches_transaction_id_and_merchant() {
    let mut tx = transaction("tx-AbC9", "Zed Quinn", TransactionStatus::Pending);
    tx.merchant = Some("Walmart Store #321".to_string());
    let source = InMemorySource::new(vec![tx], vec![]);

    let by_id = query_transactions(&source, 1, 10, &TransactionFilters::from_pairs([("search", "TX-abc9")]));
    assert_eq!(by_id.total, 1);
    let by_merchant = query_transactions(&source, 1, 10, &TransactionFilters::from_pairs([("search", "store #321")]));
    assert_eq!(by_merchant.total, 1);
}
