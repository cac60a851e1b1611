use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Container manipulation operations a view-group definition can support.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ActionKind {
    /// Insert a child at an index.
    AddChild,
    /// Read the child at an index.
    GetChildAt,
    /// Count the children.
    GetChildCount,
    /// Detach a specific child.
    RemoveChild,
    /// Detach the child at an index.
    RemoveChildAt,
}

impl ActionKind {
    /// Whether the action is declared against a child type in addition to the container type.
    #[must_use]
    pub const fn takes_child_type(self) -> bool {
        matches!(self, Self::AddChild | Self::GetChildAt | Self::RemoveChild)
    }
}
