//! Crypto Page
//!
//! Live price table with search and sort. Prices are refetched every
//! `POLL_INTERVAL_MS` while the page is mounted.

use gloo_timers::callback::Interval;
use leptos::*;
use localcoin::format::{format_price, showing_summary, NO_COINS_MESSAGE};
use localcoin::market::{Coin, CoinQuery, SortOption};

use crate::components::{ChangeBadge, Loading};
use crate::state::{FeedPhase, GlobalState, POLL_INTERVAL_MS};

/// Crypto dashboard page
#[component]
pub fn Crypto() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (search, set_search) = create_signal(String::new());
    let (sort, set_sort) = create_signal(SortOption::default());

    // Fetch now, then on every tick until the page unmounts
    state.refresh_coins();
    let poll = Interval::new(POLL_INTERVAL_MS, move || state.refresh_coins());
    on_cleanup(move || drop(poll));

    let shown = create_memo(move |_| {
        CoinQuery::new()
            .search(search.get())
            .sort(sort.get())
            .apply(&state.coins.get())
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Crypto Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Live cryptocurrency prices and market data"</p>
            </div>

            // Search and sort
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-lg font-semibold">"Search & Filter"</h2>
                <p class="text-gray-400 text-sm mb-4">
                    "Search coins by name or symbol, and sort by different criteria"
                </p>
                <div class="flex flex-col md:flex-row gap-4">
                    <input
                        type="text"
                        placeholder="Search by name or symbol..."
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select
                        class="bg-gray-700 rounded-lg px-4 py-3 md:w-56"
                        prop:value=move || sort.get().key()
                        on:change=move |ev| {
                            if let Ok(option) = event_target_value(&ev).parse::<SortOption>() {
                                set_sort.set(option);
                            }
                        }
                    >
                        {SortOption::all().into_iter().map(|option| view! {
                            <option value=option.key()>{option.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </section>

            {move || match state.phase() {
                FeedPhase::Loading => view! {
                    <section class="bg-gray-800 rounded-xl">
                        <Loading message="Loading crypto data..." />
                    </section>
                }.into_view(),
                FeedPhase::Failed => view! {
                    <section class="bg-gray-800 rounded-xl p-6 border border-red-600">
                        <p class="text-red-400">
                            "Error: " {state.error.get().unwrap_or_default()}
                        </p>
                    </section>
                }.into_view(),
                FeedPhase::Ready => view! {
                    <CoinTable coins=shown.into() total=Signal::derive(move || state.coins.with(Vec::len)) />
                }.into_view(),
            }}
        </div>
    }
}

/// Table of coins after search and sort
#[component]
fn CoinTable(
    coins: Signal<Vec<Coin>>,
    total: Signal<usize>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold">"Top Cryptocurrencies"</h2>
            <p class="text-gray-400 text-sm mb-4">
                {move || showing_summary(coins.with(Vec::len), total.get())}
            </p>

            <table class="w-full text-left">
                <thead class="text-gray-400 text-sm border-b border-gray-700">
                    <tr>
                        <th class="py-2">"Rank"</th>
                        <th class="py-2">"Coin"</th>
                        <th class="py-2">"Symbol"</th>
                        <th class="py-2 text-right">"Price (USD)"</th>
                        <th class="py-2 text-right">"24h Change"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let list = coins.get();
                        if list.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="text-center text-gray-400 py-8">
                                        {NO_COINS_MESSAGE}
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            list.into_iter().map(|coin| view! { <CoinRow coin=coin /> }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn CoinRow(coin: Coin) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-3 text-gray-400">{format!("#{}", coin.market_cap_rank)}</td>
            <td class="py-3">
                <div class="flex items-center gap-3">
                    <img src=coin.image.clone() alt=coin.name.clone() class="h-8 w-8 rounded-full" />
                    <span class="font-medium">{coin.name.clone()}</span>
                </div>
            </td>
            <td class="py-3">
                <span class="px-2 py-1 border border-gray-600 rounded text-xs uppercase">
                    {coin.symbol.clone()}
                </span>
            </td>
            <td class="py-3 text-right font-medium">{format_price(coin.current_price)}</td>
            <td class="py-3 text-right">
                <ChangeBadge change=coin.price_change_percentage_24h />
            </td>
        </tr>
    }
}
