//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{AtmLocator, Crypto, Home};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/crypto" view=Crypto />
                        <Route path="/atm" view=AtmLocator />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with refresh status
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing price feed status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Feed status
                <div class="flex items-center space-x-2">
                    {move || {
                        if state.error.get().is_some() {
                            view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Price feed unavailable"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Live prices"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Last refresh time
                <div class="text-gray-400">
                    {move || {
                        state.last_refresh.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not updated yet".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
