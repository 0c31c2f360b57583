// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props
// and report changes through callbacks.

use leptos::prelude::*;
use rust_decimal::Decimal;
use crate::web_app::model::format_price;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-8">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-500"></div>
            <span class="mt-4 text-gray-500 font-medium">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Generic failure message; the rest of the page is not rendered next to it.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="text-center py-8 text-red-500" role="alert">
            {error}
        </div>
    }
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Number of reviews, shown after the stars when present
    #[prop(optional)]
    count: Option<u32>,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <span class="relative inline-block">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </span>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200">"★"</span>
            }).collect_view()}

            {count.map(|c| view! {
                <span class="ml-2 text-xs text-gray-500">"(" {c} ")"</span>
            })}
        </div>
    }
}

/// Full, half and empty stars for a 0-5 rating
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full_stars = rating.floor() as usize;
    let has_half = full_stars < 5 && (rating - rating.floor()) >= 0.5;
    let empty_stars = 5 - full_stars - usize::from(has_half);
    (full_stars, has_half, empty_stars)
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-600",
    }
}

/// Text input component
///
/// A styled text input that reports every keystroke.
#[component]
pub fn TextInput(
    /// The current value
    value: Signal<String>,
    /// Called with the new value on every input event
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500 outline-none";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Select dropdown component
///
/// A styled select dropdown for string values.
#[component]
pub fn SelectString(
    /// The currently selected value
    value: Signal<String>,
    /// Available options as (value, label) pairs
    options: Signal<Vec<(String, String)>>,
    /// Called with the chosen option's value
    on_change: Callback<String>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 border rounded-lg bg-white focus:ring-2 focus:ring-blue-500 \
                      outline-none cursor-pointer";

    view! {
        <select
            class=format!("{} {}", base_class, class)
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {move || options.get().into_iter().map(|(opt_value, label)| {
                let opt_val = opt_value.clone();
                view! {
                    <option
                        value=opt_value
                        selected=move || value.get() == opt_val
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Price display component
///
/// Formats and displays a price value.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-bold text-blue-600"
    } else {
        "text-gray-600 font-bold"
    };

    view! {
        <span class=class>
            {format_price(price)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_counts() {
        let test_cases: [(f64, usize, bool, usize); 8] = [
            (0.0, 0, false, 5),
            (0.5, 0, true, 4),
            (2.1, 2, false, 3),
            (3.9, 3, true, 1),
            (4.5, 4, true, 0),
            (5.0, 5, false, 0),
            (7.2, 5, false, 0),
            (-1.0, 0, false, 5),
        ];

        for (rating, full, half, empty) in test_cases {
            assert_eq!(star_counts(rating), (full, half, empty), "Stars for rating {}", rating);
        }
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("anything").contains("bg-gray-100"));
    }

    #[test]
    fn test_price_formatting_logic() {
        let prices = [
            (Decimal::new(0, 0), "$0.00"),
            (Decimal::new(10995, 2), "$109.95"),
            (Decimal::new(223, 1), "$22.30"),
            (Decimal::new(695, 0), "$695.00"),
        ];

        for (price, expected) in prices {
            assert_eq!(format_price(price), expected);
        }
    }
}
