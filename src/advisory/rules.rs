//! The standard advisory rule table
//!
//! Sixteen propositional rules covering the TELe/CRL network changes:
//! the TEL extension from Sungei Bedok through T5 to Tanah Merah, the
//! conversion of the Tanah Merah–Expo–Changi Airport segment to TEL
//! systems, systems-integration work, and the CRL extension to T5.
//!
//! Propositional logic only: every premise and conclusion is a concrete
//! proposition, specific to a station or segment. There are no variables.

use crate::logic::{Rule, RuleCategory};
use indexmap::IndexSet;

/// Build the standard advisory rules (R1–R16)
pub fn standard_rules() -> Vec<Rule> {
    vec![
        // Station operation (R1–R4)
        Rule::new(
            "R1",
            vec!["StationClosed_Expo"],
            "CannotBoard_Expo",
            "If Expo station is closed, passengers cannot board at Expo",
            RuleCategory::StationOperation,
        ),
        Rule::new(
            "R2",
            vec!["StationClosed_TanahMerah"],
            "CannotBoard_TanahMerah",
            "If Tanah Merah station is closed, passengers cannot board there",
            RuleCategory::StationOperation,
        ),
        Rule::new(
            "R3",
            vec!["StationUnderIntegration_Expo"],
            "StationClosed_Expo",
            "Expo under systems integration work is considered closed",
            RuleCategory::StationOperation,
        ),
        Rule::new(
            "R4",
            vec!["CannotBoard_Expo", "RouteIncludesExpo"],
            "RouteInvalid",
            "Route including Expo when boarding not allowed is invalid",
            RuleCategory::StationOperation,
        ),
        // Segment operation (R5–R8)
        Rule::new(
            "R5",
            vec!["SegmentClosed_TanahMerahExpo"],
            "CannotTravel_TanahMerahExpo",
            "If Tanah Merah-Expo segment is closed, cannot travel directly",
            RuleCategory::SegmentOperation,
        ),
        Rule::new(
            "R6",
            vec!["CannotTravel_TanahMerahExpo", "RouteUsesSegment_TanahMerahExpo"],
            "RouteInvalid",
            "Route using closed Tanah Merah-Expo segment is invalid",
            RuleCategory::SegmentOperation,
        ),
        Rule::new(
            "R7",
            vec!["SystemsWork_ExpoChangiAirport"],
            "SegmentReduced_ExpoChangiAirport",
            "Systems work on Expo-Changi Airport causes reduced service",
            RuleCategory::SegmentOperation,
        ),
        Rule::new(
            "R8",
            vec!["SegmentReduced_ExpoChangiAirport", "PeakHour"],
            "HighCrowdingRisk_ExpoChangiAirport",
            "Reduced service during peak hours creates high crowding risk",
            RuleCategory::SegmentOperation,
        ),
        // Line operation (R9–R10)
        Rule::new(
            "R9",
            vec!["LineNotOperational_EWL", "ExpoOnlyOnEWL"],
            "CannotBoard_Expo",
            "If EWL not operational and Expo only on EWL, cannot board at Expo",
            RuleCategory::LineOperation,
        ),
        Rule::new(
            "R10",
            vec!["LineDisrupted_EWL", "RouteUsesEWL"],
            "RouteUnreliable",
            "Routes using disrupted EWL are unreliable",
            RuleCategory::LineOperation,
        ),
        // Transfers (R11–R12)
        Rule::new(
            "R11",
            vec![
                "StationClosed_TanahMerah",
                "TanahMerahIsInterchange",
                "TransferAtTanahMerah",
            ],
            "RouteInvalid",
            "Routes requiring transfer at closed Tanah Merah interchange are invalid",
            RuleCategory::Transfer,
        ),
        Rule::new(
            "R12",
            vec!["LineNotOperational_EWL", "TransferRequiresEWL"],
            "TransferNotPossible",
            "Cannot transfer if EWL not operational and transfer requires it",
            RuleCategory::Transfer,
        ),
        // Mode-specific (R13–R14)
        Rule::new(
            "R13",
            vec!["FutureMode", "EWLSegmentConverted_TanahMerahChangiAirport"],
            "NotOnEWL_TanahMerahChangiAirport",
            "In Future Mode, Tanah Merah-Changi Airport converted to TEL (no longer EWL)",
            RuleCategory::ModeSpecific,
        ),
        Rule::new(
            "R14",
            vec![
                "FutureMode",
                "NotOnEWL_TanahMerahChangiAirport",
                "RouteUsesEWL_TanahMerahChangiAirport",
            ],
            "RouteInvalid",
            "Future Mode routes cannot use segments no longer on EWL",
            RuleCategory::ModeSpecific,
        ),
        // Advisory consistency (R15–R16)
        Rule::new(
            "R15",
            vec!["StationClosed_TanahMerah", "StationOpen_TanahMerah"],
            "AdvisoryContradiction",
            "Tanah Merah cannot be both open and closed simultaneously",
            RuleCategory::AdvisoryConsistency,
        ),
        Rule::new(
            "R16",
            vec!["SegmentClosed_TanahMerahExpo", "SegmentOpen_TanahMerahExpo"],
            "AdvisoryContradiction",
            "Tanah Merah-Expo segment cannot be both open and closed",
            RuleCategory::AdvisoryConsistency,
        ),
    ]
}

/// The closed set of invalidity propositions used for violated-rule
/// attribution: deriving any of these as the positive conclusion of a
/// resolvent marks the contributing rules as violated.
pub fn violation_propositions() -> IndexSet<String> {
    [
        "CannotBoard_Expo",
        "CannotBoard_TanahMerah",
        "CannotTravel_TanahMerahExpo",
        "RouteInvalid",
        "HighCrowdingRisk_ExpoChangiAirport",
        "AdvisoryContradiction",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
