//! Dashboard wallet: balance, payout bank details and cashout requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PrivateRoute`. Wallet and payout history load together
//! on mount and again after every successful save or cashout, so the balance
//! shown always reflects the backend.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use leptos::prelude::*;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::form_field::form_field;
use crate::config::ApiConfig;
use crate::net::marketplace::{Amount, BankAccount, Cashout, status_modifier};
use crate::state::credential::Credentials;
use crate::state::session::{SessionStore, end_session_if_rejected};

/// Parse the typed cashout amount; it must be a positive number.
pub fn parse_cashout_amount(raw: &str) -> Result<f64, &'static str> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or("Please enter a valid amount")
}

/// Reject a cashout larger than the known balance.
pub fn check_cashout(amount: f64, balance: Amount) -> Result<f64, &'static str> {
    if amount > balance.0 {
        return Err("Amount exceeds your available balance");
    }
    Ok(amount)
}

/// Trim bank details and require all three fields.
pub fn validate_bank_account(account: &BankAccount) -> Result<BankAccount, &'static str> {
    let trimmed = BankAccount {
        account_name: account.account_name.trim().to_owned(),
        account_number: account.account_number.trim().to_owned(),
        bank: account.bank.trim().to_owned(),
    };
    if trimmed.account_name.is_empty() || trimmed.account_number.is_empty() || trimmed.bank.is_empty() {
        return Err("Please fill in all bank details");
    }
    if !trimmed.account_number.chars().all(|c| c.is_ascii_digit()) {
        return Err("Account number must contain only digits");
    }
    Ok(trimmed)
}

#[component]
pub fn WalletPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();

    let balance = RwSignal::new(Amount::default());
    let account = RwSignal::new(BankAccount::default());
    let cashouts = RwSignal::new(Vec::<Cashout>::new());
    let amount_input = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    {
        let config = config.clone();
        let credentials = credentials.clone();
        Effect::new(move || {
            let _ = reload.get();

            #[cfg(feature = "hydrate")]
            {
                let Some(token) = credentials.access_token() else {
                    return;
                };
                let config = config.clone();
                let credentials = credentials.clone();
                leptos::task::spawn_local(async move {
                    let wallet = crate::net::api::fetch_wallet(&config, &token).await;
                    let history = crate::net::api::list_cashouts(&config, &token).await;
                    match wallet {
                        Ok(wallet) => {
                            balance.set(wallet.balance);
                            account.set(wallet.account);
                        }
                        Err(e) => {
                            if session.try_update(|s| end_session_if_rejected(s, &credentials, &e)).unwrap_or(false) {
                                return;
                            }
                            info.set(e.detail_or("Failed to load wallet"));
                        }
                    }
                    match history {
                        Ok(list) => cashouts.set(list),
                        Err(e) => leptos::logging::warn!("loading cashout history failed: {e}"),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&config, &credentials, session);
        });
    }

    let save_config = config.clone();
    let save_credentials = credentials.clone();
    let on_save_account = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let details = match account.with_untracked(validate_bank_account) {
            Ok(details) => details,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = save_config.clone();
            let token = save_credentials.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_bank_account(&config, &token, &details).await {
                    Ok(()) => {
                        info.set("Bank details saved.".to_owned());
                        reload.update(|n| *n = n.wrapping_add(1));
                    }
                    Err(e) => info.set(e.detail_or("Failed to save bank details")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&save_config, &save_credentials, details);
    };

    let on_cashout = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let amount = match parse_cashout_amount(&amount_input.get_untracked())
            .and_then(|amount| check_cashout(amount, balance.get_untracked()))
        {
            Ok(amount) => amount,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let token = credentials.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_cashout(&config, &token, amount).await {
                    Ok(()) => {
                        info.set("Cashout requested.".to_owned());
                        amount_input.set(String::new());
                        reload.update(|n| *n = n.wrapping_add(1));
                    }
                    Err(e) => info.set(e.detail_or("Cashout failed")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &credentials, amount);
    };

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Wallet"</h1>
            <section class="dashboard-section wallet-balance">
                <h2>"Available balance"</h2>
                <p class="wallet-balance__amount">{move || balance.get().label()}</p>
            </section>

            <section class="dashboard-section">
                <h2>"Payout account"</h2>
                <form class="dashboard-form" on:submit=on_save_account>
                    {form_field(account, "Account name", "text", |a| &a.account_name, |a, v| a.account_name = v)}
                    {form_field(account, "Account number", "text", |a| &a.account_number, |a, v| a.account_number = v)}
                    {form_field(account, "Bank", "text", |a| &a.bank, |a, v| a.bank = v)}
                    <button class="dashboard-button" type="submit" disabled=move || busy.get()>"Save Details"</button>
                </form>
            </section>

            <section class="dashboard-section">
                <h2>"Cash out"</h2>
                <form class="dashboard-form" on:submit=on_cashout>
                    <input
                        class="dashboard-input"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Amount"
                        prop:value=move || amount_input.get()
                        on:input=move |ev| amount_input.set(event_target_value(&ev))
                    />
                    <button class="dashboard-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Processing..." } else { "Request Cashout" }}
                    </button>
                </form>
            </section>

            <section class="dashboard-section">
                <h2>"Cashout history"</h2>
                <Show
                    when=move || cashouts.with(|c| !c.is_empty())
                    fallback=|| view! { <p class="dashboard-empty">"No cashouts yet."</p> }
                >
                    <ul class="history-list">
                        {move || {
                            cashouts
                                .get()
                                .into_iter()
                                .map(|cashout| {
                                    let status = cashout.status.clone().unwrap_or_else(|| "unknown".to_owned());
                                    view! {
                                        <li class="history-list__item">
                                            <span class="history-list__amount">{cashout.amount.label()}</span>
                                            <span class="history-list__date">
                                                {cashout.when().unwrap_or_default().to_owned()}
                                            </span>
                                            <span class=format!(
                                                "status status--{}",
                                                status_modifier(cashout.status.as_deref()),
                                            )>{status}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>

            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
