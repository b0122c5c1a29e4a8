//! Fixed display mappings for form codes.
//!
//! These are the single source of truth for the human-readable labels used in
//! outbound emails. Unknown codes pass through unchanged so a stale or
//! experimental form variant still produces a readable email instead of an
//! error.

/// Human-readable label for a self-reported commitment level.
pub fn commitment_display(code: &str) -> &str {
    match code {
        "committed" => "100% Committed - Ready to Book",
        "interested" => "Very Interested - Wants More Details",
        "exploring" => "Just Exploring - Early Research",
        other => other,
    }
}

/// Human-readable label (with departure dates) for a trip selection code.
pub fn trip_display(code: &str) -> &str {
    match code {
        "living-traditions" => "The Living Traditions Trail (Jan 22 – Feb 5, 2025)",
        "mysore-mystique" => "The Spirit of Karnataka (Feb 16 – Mar 2, 2025)",
        "sacred-waters" => "The Sacred Water Odyssey (Dec 30, 2025 – Jan 13, 2026)",
        "custom" => "Custom Journey - Let's create something unique",
        other => other,
    }
}
