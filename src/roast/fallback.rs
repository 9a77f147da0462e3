// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Static roast served when the AI call is unavailable

use super::types::RoastResult;

/// Generic critique that fits most underperforming landing pages
pub fn fallback_roast() -> RoastResult {
    RoastResult {
        overall_score: 4.0,
        main_problems: vec![
            "Value proposition is unclear".to_string(),
            "Copy is generic and forgettable".to_string(),
        ],
        why_people_wont_convert: vec![
            "No clear benefit".to_string(),
            "Weak or missing CTA".to_string(),
        ],
        headline_fixes: vec![
            "Clear benefit-driven headline needed".to_string(),
            "State who it is for and why it matters".to_string(),
            "Remove buzzwords, add specifics".to_string(),
        ],
        cta_fix: "Start free".to_string(),
        quick_wins: vec![
            "Clarify target audience".to_string(),
            "Add social proof".to_string(),
            "Simplify headline".to_string(),
        ],
    }
}
