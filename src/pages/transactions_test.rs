use super::*;

fn tx(amount: f64) -> Transaction {
    Transaction {
        amount: Amount(amount),
        ..Transaction::default()
    }
}

// =============================================================
// Paging
// =============================================================

#[test]
fn twenty_three_transactions_span_three_pages() {
    let list: Vec<Transaction> = (0..23).map(|n| tx(f64::from(n))).collect();
    assert_eq!(page_count(23, TRANSACTIONS_PAGE_SIZE), 3);
    let last = page_slice(&list, 3, TRANSACTIONS_PAGE_SIZE);
    assert_eq!(last.len(), 3);
    assert_eq!(last[0].amount, Amount(20.0));
}

// =============================================================
// total_amount
// =============================================================

#[test]
fn total_amount_sums_signed_values() {
    assert_eq!(total_amount(&[tx(100.0), tx(-30.5), tx(5.0)]), Amount(74.5));
    assert_eq!(total_amount(&[]).label(), "$0.00");
}
