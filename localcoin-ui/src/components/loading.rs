//! Loading Component
//!
//! Spinner shown while data is loading.

use leptos::*;

/// Card-sized loading spinner with a caption
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="loading-spinner w-12 h-12" />
            <p class="mt-4 text-gray-400">{message}</p>
        </div>
    }
}
