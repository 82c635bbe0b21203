//! Home Page
//!
//! Landing page linking to the two dashboards.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-8">
            <div class="text-center space-y-4">
                <h1 class="text-5xl font-bold">"Welcome to Localcoin"</h1>
                <p class="text-xl text-gray-400">
                    "Explore our cryptocurrency dashboard and ATM locator"
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-6 w-full max-w-4xl">
                <FeatureCard
                    icon="📈"
                    title="Crypto Dashboard"
                    description="View live cryptocurrency prices, search and filter coins, and track market changes"
                    features=&["Top 10 cryptocurrencies", "Real-time price updates", "Search and sorting"]
                    href="/crypto"
                    cta="View Dashboard"
                />
                <FeatureCard
                    icon="📍"
                    title="ATM Locator"
                    description="Find Localcoin ATMs, check their status, and see them on the map"
                    features=&["Online/offline status", "Interactive map", "Filter by availability"]
                    href="/atm"
                    cta="Find ATMs"
                />
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    href: &'static str,
    cta: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition flex flex-col">
            <div class="flex items-center space-x-3 mb-2">
                <span class="text-3xl">{icon}</span>
                <h2 class="text-2xl font-semibold">{title}</h2>
            </div>
            <p class="text-gray-400 mb-4">{description}</p>
            <ul class="space-y-2 text-sm text-gray-400 mb-6 flex-1">
                {features.iter().map(|f| view! { <li>"→ " {*f}</li> }).collect_view()}
            </ul>
            <A
                href=href
                class="block text-center px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                {cta}
            </A>
        </div>
    }
}
