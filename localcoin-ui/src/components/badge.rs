//! Badges for price change and ATM status

use leptos::*;
use localcoin::atm::AtmStatus;
use localcoin::format::format_change;

/// Colour classes and arrow for a 24h change
pub fn change_style(change: f64) -> (&'static str, &'static str) {
    if change >= 0.0 {
        ("bg-green-600 text-white", "▲")
    } else {
        ("bg-red-600 text-white", "▼")
    }
}

/// Colour classes and icon for an ATM status
pub fn status_style(status: AtmStatus) -> (&'static str, &'static str) {
    match status {
        AtmStatus::Online => ("bg-green-600 text-white", "📶"),
        AtmStatus::Offline => ("bg-gray-700 text-gray-300", "⛔"),
    }
}

/// Signed percentage badge
#[component]
pub fn ChangeBadge(change: f64) -> impl IntoView {
    let (class, arrow) = change_style(change);

    view! {
        <span class=format!("inline-flex items-center px-2 py-1 rounded text-xs font-semibold {}", class)>
            <span class="mr-1">{arrow}</span>
            {format_change(change)}
        </span>
    }
}

/// Online/offline badge
#[component]
pub fn StatusBadge(status: AtmStatus) -> impl IntoView {
    let (class, icon) = status_style(status);

    view! {
        <span class=format!("inline-flex items-center px-2 py-1 rounded text-xs font-semibold {}", class)>
            <span class="mr-1">{icon}</span>
            {status.to_string()}
        </span>
    }
}
