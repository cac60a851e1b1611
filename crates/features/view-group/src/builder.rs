use crate::action::{
    AddChildAction, GetChildAtAction, GetChildCountAction, RemoveChildAction, RemoveChildAtAction,
};
use crate::definition::ViewGroupDefinition;
use std::sync::Arc;
use tracing::{trace, warn};
use vbridge_domain::action::ActionKind;
use vbridge_domain::config::{DispatchConfig, MismatchPolicy};
use vbridge_domain::element::{Element, TypeTag};

/// Accumulates typed view-group callbacks for one definition pass.
///
/// Every registration stores a type-checking adapter under its [`ActionKind`]. Registering a
/// kind again replaces the earlier adapter. [`DefinitionBuilder::build`] freezes the current
/// slots into a [`ViewGroupDefinition`].
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use vbridge_derive::Element;
/// use vbridge_domain::action::ActionKind;
/// use vbridge_view_group::DefinitionBuilder;
///
/// #[derive(Debug, Default, Element)]
/// struct Column {
///     rows: Vec<Arc<Row>>,
/// }
///
/// #[derive(Debug, Element)]
/// struct Row;
///
/// let mut builder = DefinitionBuilder::new();
/// builder
///     .add_child(|column: &mut Column, row: Arc<Row>, index: usize| column.rows.insert(index, row))
///     .get_child_count(|column: &Column| column.rows.len());
///
/// let definition = builder.build();
/// assert!(definition.lookup(ActionKind::AddChild).is_some());
/// assert!(definition.lookup(ActionKind::RemoveChild).is_none());
/// ```
#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    policy: MismatchPolicy,
    add_child: Option<AddChildAction>,
    get_child_at: Option<GetChildAtAction>,
    get_child_count: Option<GetChildCountAction>,
    remove_child: Option<RemoveChildAction>,
    remove_child_at: Option<RemoveChildAtAction>,
}

impl DefinitionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose adapters react to mismatches as `config` says.
    #[must_use]
    pub fn with_config(config: &DispatchConfig) -> Self {
        let mut builder = Self::new();
        builder.mismatch_policy(config.type_mismatch);
        builder
    }

    /// Sets how adapters of the built definition react to a type mismatch.
    ///
    /// The policy is applied in [`DefinitionBuilder::build`], so it covers every registration
    /// regardless of call order.
    pub const fn mismatch_policy(&mut self, policy: MismatchPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Registers the insertion callback for container `P` and child `C`.
    pub fn add_child<P, C, F>(&mut self, callback: F) -> &mut Self
    where
        P: Element,
        C: Element,
        F: Fn(&mut P, Arc<C>, usize) + Send + Sync + 'static,
    {
        log_registration(ActionKind::AddChild, TypeTag::of::<P>(), Some(TypeTag::of::<C>()));
        replace(&mut self.add_child, AddChildAction::new(callback), ActionKind::AddChild);
        self
    }

    /// Registers the indexed child lookup for container `P` and child `C`.
    pub fn get_child_at<P, C, F>(&mut self, callback: F) -> &mut Self
    where
        P: Element,
        C: Element,
        F: Fn(&P, usize) -> Option<Arc<C>> + Send + Sync + 'static,
    {
        log_registration(ActionKind::GetChildAt, TypeTag::of::<P>(), Some(TypeTag::of::<C>()));
        replace(&mut self.get_child_at, GetChildAtAction::new(callback), ActionKind::GetChildAt);
        self
    }

    /// Registers the child count callback for container `P`.
    pub fn get_child_count<P, F>(&mut self, callback: F) -> &mut Self
    where
        P: Element,
        F: Fn(&P) -> usize + Send + Sync + 'static,
    {
        log_registration(ActionKind::GetChildCount, TypeTag::of::<P>(), None);
        replace(
            &mut self.get_child_count,
            GetChildCountAction::new(callback),
            ActionKind::GetChildCount,
        );
        self
    }

    /// Registers the removal callback for container `P` and child `C`.
    pub fn remove_child<P, C, F>(&mut self, callback: F) -> &mut Self
    where
        P: Element,
        C: Element,
        F: Fn(&mut P, Arc<C>) + Send + Sync + 'static,
    {
        log_registration(ActionKind::RemoveChild, TypeTag::of::<P>(), Some(TypeTag::of::<C>()));
        replace(&mut self.remove_child, RemoveChildAction::new(callback), ActionKind::RemoveChild);
        self
    }

    /// Registers the indexed removal callback for container `P`.
    pub fn remove_child_at<P, F>(&mut self, callback: F) -> &mut Self
    where
        P: Element,
        F: Fn(&mut P, usize) + Send + Sync + 'static,
    {
        log_registration(ActionKind::RemoveChildAt, TypeTag::of::<P>(), None);
        replace(
            &mut self.remove_child_at,
            RemoveChildAtAction::new(callback),
            ActionKind::RemoveChildAt,
        );
        self
    }

    /// Freezes the registered slots into an immutable definition.
    ///
    /// Adapters are shared, so building more than once yields equivalent definitions.
    #[must_use]
    pub fn build(&self) -> ViewGroupDefinition {
        let policy = self.policy;
        let definition = ViewGroupDefinition::new(
            self.add_child.clone().map(|a| a.with_policy(policy)),
            self.get_child_at.clone().map(|a| a.with_policy(policy)),
            self.get_child_count.clone().map(|a| a.with_policy(policy)),
            self.remove_child.clone().map(|a| a.with_policy(policy)),
            self.remove_child_at.clone().map(|a| a.with_policy(policy)),
        );

        trace!(
            supported = ?definition.supported().collect::<Vec<_>>(),
            ?policy,
            "View-group definition built"
        );
        definition
    }
}

fn log_registration(kind: ActionKind, container: TypeTag, child: Option<TypeTag>) {
    trace!(
        action = %kind,
        container = container.name(),
        child = child.map(|tag| tag.name()),
        "Registering view-group action"
    );
}

fn replace<A>(slot: &mut Option<A>, action: A, kind: ActionKind) {
    if slot.replace(action).is_some() {
        warn!(action = %kind, "View-group action registered twice, keeping the latest callback");
    }
}
