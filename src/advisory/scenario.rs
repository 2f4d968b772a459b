//! Advisory validation scenarios

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network operation mode a scenario runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkMode {
    Today,
    Future,
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::Today => write!(f, "Today"),
            NetworkMode::Future => write!(f, "Future"),
        }
    }
}

/// What kind of outcome a scenario exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Valid,
    Invalid,
    Contradictory,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Valid => write!(f, "Valid"),
            ScenarioKind::Invalid => write!(f, "Invalid"),
            ScenarioKind::Contradictory => write!(f, "Contradictory"),
        }
    }
}

/// A validation scenario: facts to assert, a query to prove, and the
/// expected outcome. Authored externally (or via
/// [`standard_scenarios`]); serde-deserializable so scenario tables can be
/// loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub mode: NetworkMode,
    pub kind: ScenarioKind,
    pub description: String,
    pub facts: Vec<String>,
    pub query: String,
    pub expected_proven: bool,
    #[serde(default)]
    pub expected_violated_rules: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

impl Scenario {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        mode: NetworkMode,
        kind: ScenarioKind,
        description: &str,
        facts: Vec<&str>,
        query: &str,
        expected_proven: bool,
        expected_violated_rules: Vec<&str>,
        explanation: &str,
    ) -> Self {
        Scenario {
            id: id.into(),
            mode,
            kind,
            description: description.into(),
            facts: facts.into_iter().map(String::from).collect(),
            query: query.into(),
            expected_proven,
            expected_violated_rules: expected_violated_rules
                .into_iter()
                .map(String::from)
                .collect(),
            explanation: explanation.into(),
        }
    }
}

/// The ten standard validation scenarios covering both network modes and
/// valid, invalid, and contradictory advisories
pub fn standard_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "S1",
            NetworkMode::Today,
            ScenarioKind::Valid,
            "Today Mode: Normal EWL operation - all stations open",
            vec![
                "StationOpen_TanahMerah",
                "StationOpen_Expo",
                "StationOpen_ChangiAirport",
            ],
            "RouteInvalid",
            false,
            vec![],
            "All stations are open. No rules are violated, so route is valid.",
        ),
        Scenario::new(
            "S2",
            NetworkMode::Today,
            ScenarioKind::Invalid,
            "Today Mode: Expo station closed - route becomes invalid",
            vec!["StationClosed_Expo", "RouteIncludesExpo"],
            "RouteInvalid",
            true,
            vec!["R1", "R4"],
            "Expo is closed (R1 → CannotBoard_Expo), route includes Expo (R4 → RouteInvalid)",
        ),
        Scenario::new(
            "S3",
            NetworkMode::Today,
            ScenarioKind::Contradictory,
            "Today Mode: Advisory contradiction - Tanah Merah both open and closed",
            vec!["StationClosed_TanahMerah", "StationOpen_TanahMerah"],
            "AdvisoryContradiction",
            true,
            vec!["R15"],
            "Contradictory advisories: Tanah Merah cannot be both open and closed (R15)",
        ),
        Scenario::new(
            "S4",
            NetworkMode::Today,
            ScenarioKind::Invalid,
            "Today Mode: Tanah Merah-Expo segment closed - route invalid",
            vec![
                "SegmentClosed_TanahMerahExpo",
                "RouteUsesSegment_TanahMerahExpo",
            ],
            "RouteInvalid",
            true,
            vec!["R5", "R6"],
            "Segment closed (R5 → CannotTravel), route uses it (R6 → RouteInvalid)",
        ),
        Scenario::new(
            "S5",
            NetworkMode::Today,
            ScenarioKind::Invalid,
            "Today Mode: Systems integration work causes station closure",
            vec!["StationUnderIntegration_Expo", "RouteIncludesExpo"],
            "RouteInvalid",
            true,
            vec!["R3", "R1", "R4"],
            "Expo under integration (R3 → StationClosed), then R1 → CannotBoard, R4 → RouteInvalid",
        ),
        Scenario::new(
            "S6",
            NetworkMode::Future,
            ScenarioKind::Valid,
            "Future Mode: TELe operational, T5 accessible",
            vec![
                "FutureMode",
                "StationOpen_T5Interchange",
                "StationOpen_TanahMerah",
            ],
            "RouteInvalid",
            false,
            vec![],
            "In Future Mode, TEL extension is operational. No violations, route is valid.",
        ),
        Scenario::new(
            "S7",
            NetworkMode::Future,
            ScenarioKind::Invalid,
            "Future Mode: EWL segment converted to TEL - old EWL route invalid",
            vec![
                "FutureMode",
                "EWLSegmentConverted_TanahMerahChangiAirport",
                "RouteUsesEWL_TanahMerahChangiAirport",
            ],
            "RouteInvalid",
            true,
            vec!["R13", "R14"],
            "Segment converted to TEL (R13 → NotOnEWL), old EWL routes invalid (R14)",
        ),
        Scenario::new(
            "S8",
            NetworkMode::Future,
            ScenarioKind::Invalid,
            "Future Mode: Systems work + peak hour = high crowding risk",
            vec!["SystemsWork_ExpoChangiAirport", "PeakHour"],
            "HighCrowdingRisk_ExpoChangiAirport",
            true,
            vec!["R7", "R8"],
            "Systems work causes reduced service (R7), during peak creates crowding (R8)",
        ),
        Scenario::new(
            "S9",
            NetworkMode::Future,
            ScenarioKind::Invalid,
            "Future Mode: Closed interchange prevents transfer",
            vec![
                "StationClosed_TanahMerah",
                "TanahMerahIsInterchange",
                "TransferAtTanahMerah",
            ],
            "RouteInvalid",
            true,
            vec!["R11"],
            "Transfer at closed interchange station (R11 → RouteInvalid)",
        ),
        Scenario::new(
            "S10",
            NetworkMode::Today,
            ScenarioKind::Contradictory,
            "Today Mode: Segment both open and closed - contradiction",
            vec!["SegmentClosed_TanahMerahExpo", "SegmentOpen_TanahMerahExpo"],
            "AdvisoryContradiction",
            true,
            vec!["R16"],
            "Tanah Merah-Expo segment cannot be both open and closed (R16)",
        ),
    ]
}
