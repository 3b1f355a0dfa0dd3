use super::*;

// =============================================================
// Cashout amount
// =============================================================

#[test]
fn cashout_amount_must_be_positive_number() {
    assert_eq!(parse_cashout_amount(" 250.5 "), Ok(250.5));
    for raw in ["", "0", "-5", "abc", "NaN", "inf"] {
        assert_eq!(parse_cashout_amount(raw), Err("Please enter a valid amount"), "{raw}");
    }
}

#[test]
fn cashout_cannot_exceed_balance() {
    assert_eq!(check_cashout(100.0, Amount(100.0)), Ok(100.0));
    assert_eq!(check_cashout(100.01, Amount(100.0)), Err("Amount exceeds your available balance"));
}

// =============================================================
// Bank account
// =============================================================

fn account(name: &str, number: &str, bank: &str) -> BankAccount {
    BankAccount {
        account_name: name.to_owned(),
        account_number: number.to_owned(),
        bank: bank.to_owned(),
    }
}

#[test]
fn bank_account_is_trimmed() {
    assert_eq!(
        validate_bank_account(&account(" Ada Obi ", " 0123456789 ", " GTB ")),
        Ok(account("Ada Obi", "0123456789", "GTB"))
    );
}

#[test]
fn bank_account_requires_every_field() {
    assert_eq!(
        validate_bank_account(&account("Ada", "", "GTB")),
        Err("Please fill in all bank details")
    );
}

#[test]
fn bank_account_number_is_digits_only() {
    assert_eq!(
        validate_bank_account(&account("Ada", "01-23", "GTB")),
        Err("Account number must contain only digits")
    );
}
