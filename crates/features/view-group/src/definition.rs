use crate::action::{
    AddChildAction, GetChildAtAction, GetChildCountAction, RemoveChildAction, RemoveChildAtAction,
};
use strum::IntoEnumIterator;
use vbridge_domain::action::ActionKind;
use vbridge_domain::element::TypeTag;

/// Borrowed view of one registered adapter, as returned by [`ViewGroupDefinition::lookup`].
#[derive(Debug, Clone, Copy)]
pub enum ActionSlot<'a> {
    AddChild(&'a AddChildAction),
    GetChildAt(&'a GetChildAtAction),
    GetChildCount(&'a GetChildCountAction),
    RemoveChild(&'a RemoveChildAction),
    RemoveChildAt(&'a RemoveChildAtAction),
}

impl ActionSlot<'_> {
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::AddChild(_) => ActionKind::AddChild,
            Self::GetChildAt(_) => ActionKind::GetChildAt,
            Self::GetChildCount(_) => ActionKind::GetChildCount,
            Self::RemoveChild(_) => ActionKind::RemoveChild,
            Self::RemoveChildAt(_) => ActionKind::RemoveChildAt,
        }
    }

    /// Container type captured at registration.
    #[must_use]
    pub const fn container(&self) -> TypeTag {
        match self {
            Self::AddChild(a) => a.container(),
            Self::GetChildAt(a) => a.container(),
            Self::GetChildCount(a) => a.container(),
            Self::RemoveChild(a) => a.container(),
            Self::RemoveChildAt(a) => a.container(),
        }
    }

    /// Child type captured at registration, for the kinds declared against one.
    #[must_use]
    pub const fn child(&self) -> Option<TypeTag> {
        match self {
            Self::AddChild(a) => Some(a.child()),
            Self::GetChildAt(a) => Some(a.child()),
            Self::RemoveChild(a) => Some(a.child()),
            Self::GetChildCount(_) | Self::RemoveChildAt(_) => None,
        }
    }
}

/// Frozen set of view-group adapters produced by [`DefinitionBuilder::build`].
///
/// A missing slot means the container does not support that action; dispatchers skip it.
///
/// [`DefinitionBuilder::build`]: crate::DefinitionBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ViewGroupDefinition {
    add_child: Option<AddChildAction>,
    get_child_at: Option<GetChildAtAction>,
    get_child_count: Option<GetChildCountAction>,
    remove_child: Option<RemoveChildAction>,
    remove_child_at: Option<RemoveChildAtAction>,
}

impl ViewGroupDefinition {
    pub(crate) const fn new(
        add_child: Option<AddChildAction>,
        get_child_at: Option<GetChildAtAction>,
        get_child_count: Option<GetChildCountAction>,
        remove_child: Option<RemoveChildAction>,
        remove_child_at: Option<RemoveChildAtAction>,
    ) -> Self {
        Self { add_child, get_child_at, get_child_count, remove_child, remove_child_at }
    }

    /// Returns the adapter registered for `kind`, or `None` when the action is unsupported.
    #[must_use]
    pub fn lookup(&self, kind: ActionKind) -> Option<ActionSlot<'_>> {
        match kind {
            ActionKind::AddChild => self.add_child.as_ref().map(ActionSlot::AddChild),
            ActionKind::GetChildAt => self.get_child_at.as_ref().map(ActionSlot::GetChildAt),
            ActionKind::GetChildCount => {
                self.get_child_count.as_ref().map(ActionSlot::GetChildCount)
            },
            ActionKind::RemoveChild => self.remove_child.as_ref().map(ActionSlot::RemoveChild),
            ActionKind::RemoveChildAt => {
                self.remove_child_at.as_ref().map(ActionSlot::RemoveChildAt)
            },
        }
    }

    #[must_use]
    pub const fn add_child(&self) -> Option<&AddChildAction> {
        self.add_child.as_ref()
    }

    #[must_use]
    pub const fn get_child_at(&self) -> Option<&GetChildAtAction> {
        self.get_child_at.as_ref()
    }

    #[must_use]
    pub const fn get_child_count(&self) -> Option<&GetChildCountAction> {
        self.get_child_count.as_ref()
    }

    #[must_use]
    pub const fn remove_child(&self) -> Option<&RemoveChildAction> {
        self.remove_child.as_ref()
    }

    #[must_use]
    pub const fn remove_child_at(&self) -> Option<&RemoveChildAtAction> {
        self.remove_child_at.as_ref()
    }

    /// Kinds with a registered adapter, in declaration order.
    pub fn supported(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::iter().filter(|kind| self.lookup(*kind).is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supported().next().is_none()
    }
}
