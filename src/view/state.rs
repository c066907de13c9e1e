//! View state and the commands the map controls issue.
//!
//! Each control event becomes a `ViewCommand`; `apply` returns the next
//! state without touching the old one.

use crate::aggregator::MarkerSubset;
use crate::style::ChoroplethLayer;
use serde::{Deserialize, Serialize};

/// What the map currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Choropleth layer (and legend) on display
    pub layer: ChoroplethLayer,

    /// Cost filter applied to markers
    pub markers: MarkerSubset,

    /// Markers drawn as clusters rather than individually
    pub clustered: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            layer: ChoroplethLayer::ProjectCount,
            markers: MarkerSubset::All,
            clustered: true,
        }
    }
}

/// A control event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Layer radio buttons
    SetLayer(ChoroplethLayer),

    /// Cost filter radio buttons
    SetMarkerSubset(MarkerSubset),

    /// Clustering checkbox
    SetClustered(bool),
}

/// Next view state after a command
pub fn apply(state: ViewState, command: ViewCommand) -> ViewState {
    match command {
        ViewCommand::SetLayer(layer) => ViewState { layer, ..state },
        ViewCommand::SetMarkerSubset(markers) => ViewState { markers, ..state },
        ViewCommand::SetClustered(clustered) => ViewState { clustered, ..state },
    }
}

/// Fold a sequence of commands over a starting state
pub fn apply_all(state: ViewState, commands: impl IntoIterator<Item = ViewCommand>) -> ViewState {
    commands.into_iter().fold(state, apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.layer, ChoroplethLayer::ProjectCount);
        assert_eq!(view.markers, MarkerSubset::All);
        assert!(view.clustered);
    }

    #[test]
    fn test_commands_touch_one_field() {
        let start = ViewState::default();

        let view = apply(start, ViewCommand::SetLayer(ChoroplethLayer::AverageCost));
        assert_eq!(view, ViewState { layer: ChoroplethLayer::AverageCost, ..start });

        let view = apply(start, ViewCommand::SetMarkerSubset(MarkerSubset::Expensive));
        assert_eq!(view, ViewState { markers: MarkerSubset::Expensive, ..start });

        let view = apply(start, ViewCommand::SetClustered(false));
        assert_eq!(view, ViewState { clustered: false, ..start });
    }

    #[test]
    fn test_apply_all() {
        let view = apply_all(
            ViewState::default(),
            [
                ViewCommand::SetClustered(false),
                ViewCommand::SetMarkerSubset(MarkerSubset::Inexpensive),
                ViewCommand::SetLayer(ChoroplethLayer::AverageCost),
                ViewCommand::SetClustered(true),
            ],
        );

        assert_eq!(
            view,
            ViewState {
                layer: ChoroplethLayer::AverageCost,
                markers: MarkerSubset::Inexpensive,
                clustered: true,
            }
        );
    }

    #[test]
    fn test_command_json() {
        let command: ViewCommand =
            serde_json::from_value(json!({ "command": "set_layer", "value": "project_cost" })).unwrap();
        assert_eq!(command, ViewCommand::SetLayer(ChoroplethLayer::AverageCost));

        let command: ViewCommand = serde_json::from_value(
            json!({ "command": "set_marker_subset", "value": "expensive_projects" }),
        )
        .unwrap();
        assert_eq!(command, ViewCommand::SetMarkerSubset(MarkerSubset::Expensive));
    }

    #[test]
    fn test_command_json_uses_radio_values() {
        let json = serde_json::to_value(ViewCommand::SetLayer(ChoroplethLayer::AverageCost)).unwrap();
        assert_eq!(json, json!({ "command": "set_layer", "value": "project_cost" }));

        let json = serde_json::to_value(ViewCommand::SetMarkerSubset(MarkerSubset::All)).unwrap();
        assert_eq!(json, json!({ "command": "set_marker_subset", "value": "all_projects" }));
    }
}
