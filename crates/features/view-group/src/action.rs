//! Type-checking adapters around the typed view-group callbacks.
//!
//! Each adapter keeps the [`TypeTag`]s captured from the registration's type parameters and an
//! erased closure that downcasts and forwards to the typed callback. `invoke` checks every
//! operand against its tag first; the callback only runs once all checks have passed.

use crate::error::{Operand, ViewGroupError};
use std::fmt;
use std::sync::Arc;
use tracing::{error, trace};
use vbridge_domain::action::ActionKind;
use vbridge_domain::config::MismatchPolicy;
use vbridge_domain::element::{Element, ElementRef, TypeTag};

type AddChildFn = dyn Fn(&mut dyn Element, ElementRef, usize) -> Option<()> + Send + Sync;
type GetChildAtFn = dyn Fn(&dyn Element, usize) -> Option<Option<ElementRef>> + Send + Sync;
type GetChildCountFn = dyn Fn(&dyn Element) -> Option<usize> + Send + Sync;
type RemoveChildFn = dyn Fn(&mut dyn Element, ElementRef) -> Option<()> + Send + Sync;
type RemoveChildAtFn = dyn Fn(&mut dyn Element, usize) -> Option<()> + Send + Sync;

/// Per-adapter type check with the configured reaction to a mismatch.
#[derive(Debug, Clone, Copy)]
struct Guard {
    kind: ActionKind,
    policy: MismatchPolicy,
}

impl Guard {
    const fn new(kind: ActionKind) -> Self {
        Self { kind, policy: MismatchPolicy::Error }
    }

    fn check(
        self,
        operand: Operand,
        expected: TypeTag,
        element: &dyn Element,
    ) -> Result<(), ViewGroupError> {
        if expected.matches(element) {
            return Ok(());
        }
        Err(self.mismatch(operand, expected, element.type_tag()))
    }

    fn mismatch(self, operand: Operand, expected: TypeTag, found: TypeTag) -> ViewGroupError {
        error!(
            action = %self.kind,
            %operand,
            expected = expected.name(),
            found = found.name(),
            "View-group action invoked with an instance of the wrong type"
        );

        let err = ViewGroupError::TypeMismatch {
            action: self.kind,
            operand,
            expected: expected.name(),
            found: found.name(),
            context: None,
        };
        if self.policy == MismatchPolicy::Panic {
            panic!("{err}");
        }
        err
    }
}

/// Downcasts a shared child handle after its tag was checked.
fn downcast_child<C: Element>(child: ElementRef) -> Option<Arc<C>> {
    child.into_any().downcast::<C>().ok()
}

/// Adapter for [`ActionKind::AddChild`]: `Fn(&mut P, Arc<C>, usize)`.
#[derive(Clone)]
pub struct AddChildAction {
    guard: Guard,
    container: TypeTag,
    child: TypeTag,
    callback: Arc<AddChildFn>,
}

impl AddChildAction {
    pub(crate) fn new<P, C, F>(callback: F) -> Self
    where
        P: Element,
        C: Element,
        F: Fn(&mut P, Arc<C>, usize) + Send + Sync + 'static,
    {
        let callback = move |container: &mut dyn Element, child: ElementRef, index: usize| {
            let container = container.as_any_mut().downcast_mut::<P>()?;
            let child = downcast_child::<C>(child)?;
            callback(container, child, index);
            Some(())
        };

        Self {
            guard: Guard::new(ActionKind::AddChild),
            container: TypeTag::of::<P>(),
            child: TypeTag::of::<C>(),
            callback: Arc::new(callback),
        }
    }

    /// Inserts `child` into `container` at `index` through the registered callback.
    ///
    /// # Errors
    /// Returns [`ViewGroupError::TypeMismatch`] if either instance is not of its registered type.
    pub fn invoke(
        &self,
        container: &mut dyn Element,
        child: ElementRef,
        index: usize,
    ) -> Result<(), ViewGroupError> {
        self.guard.check(Operand::Container, self.container, &*container)?;
        self.guard.check(Operand::Child, self.child, &*child)?;
        trace!(action = %self.guard.kind, index, "Invoking view-group action");

        let found = child.type_tag();
        (self.callback)(container, child, index)
            .ok_or_else(|| self.guard.mismatch(Operand::Child, self.child, found))
    }

    #[must_use]
    pub const fn container(&self) -> TypeTag {
        self.container
    }

    #[must_use]
    pub const fn child(&self) -> TypeTag {
        self.child
    }

    pub(crate) const fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.guard.policy = policy;
        self
    }
}

/// Adapter for [`ActionKind::GetChildAt`]: `Fn(&P, usize) -> Option<Arc<C>>`.
#[derive(Clone)]
pub struct GetChildAtAction {
    guard: Guard,
    container: TypeTag,
    child: TypeTag,
    callback: Arc<GetChildAtFn>,
}

impl GetChildAtAction {
    pub(crate) fn new<P, C, F>(callback: F) -> Self
    where
        P: Element,
        C: Element,
        F: Fn(&P, usize) -> Option<Arc<C>> + Send + Sync + 'static,
    {
        let callback = move |container: &dyn Element, index: usize| {
            let container = container.as_any().downcast_ref::<P>()?;
            Some(callback(container, index).map(|child| child as ElementRef))
        };

        Self {
            guard: Guard::new(ActionKind::GetChildAt),
            container: TypeTag::of::<P>(),
            child: TypeTag::of::<C>(),
            callback: Arc::new(callback),
        }
    }

    /// Returns the child at `index`, or `None` when the callback reports no child there.
    ///
    /// # Errors
    /// Returns [`ViewGroupError::TypeMismatch`] if `container` is not of its registered type.
    pub fn invoke(
        &self,
        container: &dyn Element,
        index: usize,
    ) -> Result<Option<ElementRef>, ViewGroupError> {
        self.guard.check(Operand::Container, self.container, container)?;
        trace!(action = %self.guard.kind, index, "Invoking view-group action");

        (self.callback)(container, index).ok_or_else(|| {
            self.guard.mismatch(Operand::Container, self.container, container.type_tag())
        })
    }

    #[must_use]
    pub const fn container(&self) -> TypeTag {
        self.container
    }

    #[must_use]
    pub const fn child(&self) -> TypeTag {
        self.child
    }

    pub(crate) const fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.guard.policy = policy;
        self
    }
}

/// Adapter for [`ActionKind::GetChildCount`]: `Fn(&P) -> usize`.
#[derive(Clone)]
pub struct GetChildCountAction {
    guard: Guard,
    container: TypeTag,
    callback: Arc<GetChildCountFn>,
}

impl GetChildCountAction {
    pub(crate) fn new<P, F>(callback: F) -> Self
    where
        P: Element,
        F: Fn(&P) -> usize + Send + Sync + 'static,
    {
        let callback = move |container: &dyn Element| {
            container.as_any().downcast_ref::<P>().map(&callback)
        };

        Self {
            guard: Guard::new(ActionKind::GetChildCount),
            container: TypeTag::of::<P>(),
            callback: Arc::new(callback),
        }
    }

    /// Returns the number of children reported by the callback.
    ///
    /// # Errors
    /// Returns [`ViewGroupError::TypeMismatch`] if `container` is not of its registered type.
    pub fn invoke(&self, container: &dyn Element) -> Result<usize, ViewGroupError> {
        self.guard.check(Operand::Container, self.container, container)?;
        trace!(action = %self.guard.kind, "Invoking view-group action");

        (self.callback)(container).ok_or_else(|| {
            self.guard.mismatch(Operand::Container, self.container, container.type_tag())
        })
    }

    #[must_use]
    pub const fn container(&self) -> TypeTag {
        self.container
    }

    pub(crate) const fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.guard.policy = policy;
        self
    }
}

/// Adapter for [`ActionKind::RemoveChild`]: `Fn(&mut P, Arc<C>)`.
#[derive(Clone)]
pub struct RemoveChildAction {
    guard: Guard,
    container: TypeTag,
    child: TypeTag,
    callback: Arc<RemoveChildFn>,
}

impl RemoveChildAction {
    pub(crate) fn new<P, C, F>(callback: F) -> Self
    where
        P: Element,
        C: Element,
        F: Fn(&mut P, Arc<C>) + Send + Sync + 'static,
    {
        let callback = move |container: &mut dyn Element, child: ElementRef| {
            let container = container.as_any_mut().downcast_mut::<P>()?;
            let child = downcast_child::<C>(child)?;
            callback(container, child);
            Some(())
        };

        Self {
            guard: Guard::new(ActionKind::RemoveChild),
            container: TypeTag::of::<P>(),
            child: TypeTag::of::<C>(),
            callback: Arc::new(callback),
        }
    }

    /// Detaches `child` from `container` through the registered callback.
    ///
    /// # Errors
    /// Returns [`ViewGroupError::TypeMismatch`] if either instance is not of its registered type.
    pub fn invoke(
        &self,
        container: &mut dyn Element,
        child: ElementRef,
    ) -> Result<(), ViewGroupError> {
        self.guard.check(Operand::Container, self.container, &*container)?;
        self.guard.check(Operand::Child, self.child, &*child)?;
        trace!(action = %self.guard.kind, "Invoking view-group action");

        let found = child.type_tag();
        (self.callback)(container, child)
            .ok_or_else(|| self.guard.mismatch(Operand::Child, self.child, found))
    }

    #[must_use]
    pub const fn container(&self) -> TypeTag {
        self.container
    }

    #[must_use]
    pub const fn child(&self) -> TypeTag {
        self.child
    }

    pub(crate) const fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.guard.policy = policy;
        self
    }
}

/// Adapter for [`ActionKind::RemoveChildAt`]: `Fn(&mut P, usize)`.
#[derive(Clone)]
pub struct RemoveChildAtAction {
    guard: Guard,
    container: TypeTag,
    callback: Arc<RemoveChildAtFn>,
}

impl RemoveChildAtAction {
    pub(crate) fn new<P, F>(callback: F) -> Self
    where
        P: Element,
        F: Fn(&mut P, usize) + Send + Sync + 'static,
    {
        let callback = move |container: &mut dyn Element, index: usize| {
            let container = container.as_any_mut().downcast_mut::<P>()?;
            callback(container, index);
            Some(())
        };

        Self {
            guard: Guard::new(ActionKind::RemoveChildAt),
            container: TypeTag::of::<P>(),
            callback: Arc::new(callback),
        }
    }

    /// Removes the child at `index` through the registered callback.
    ///
    /// # Errors
    /// Returns [`ViewGroupError::TypeMismatch`] if `container` is not of its registered type.
    pub fn invoke(&self, container: &mut dyn Element, index: usize) -> Result<(), ViewGroupError> {
        self.guard.check(Operand::Container, self.container, &*container)?;
        trace!(action = %self.guard.kind, index, "Invoking view-group action");

        let found = container.type_tag();
        (self.callback)(container, index)
            .ok_or_else(|| self.guard.mismatch(Operand::Container, self.container, found))
    }

    #[must_use]
    pub const fn container(&self) -> TypeTag {
        self.container
    }

    pub(crate) const fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.guard.policy = policy;
        self
    }
}

macro_rules! impl_action_debug {
    ($($action:ident { $($tag:ident),+ }),+ $(,)?) => {
        $(
            impl fmt::Debug for $action {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($action))
                        .field("policy", &self.guard.policy)
                        $(.field(stringify!($tag), &self.$tag.name()))+
                        .finish_non_exhaustive()
                }
            }
        )+
    };
}

impl_action_debug! {
    AddChildAction { container, child },
    GetChildAtAction { container, child },
    GetChildCountAction { container },
    RemoveChildAction { container, child },
    RemoveChildAtAction { container },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vbridge_derive::Element;

    #[derive(Debug, Default, Element)]
    struct Stack {
        children: Vec<Arc<Tile>>,
    }

    #[derive(Debug, Element)]
    struct Tile(u8);

    #[derive(Debug, Element)]
    struct Canvas;

    #[test]
    fn add_child_forwards_typed_arguments() {
        let action = AddChildAction::new(|stack: &mut Stack, tile: Arc<Tile>, index: usize| {
            stack.children.insert(index, tile);
        });
        let mut stack = Stack::default();

        action.invoke(&mut stack, Arc::new(Tile(1)), 0).expect("types match");
        action.invoke(&mut stack, Arc::new(Tile(2)), 0).expect("types match");

        let order: Vec<u8> = stack.children.iter().map(|t| t.0).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn wrong_child_type_stops_before_the_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let action = AddChildAction::new(move |_: &mut Stack, _: Arc<Tile>, _: usize| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let err = action.invoke(&mut Stack::default(), Arc::new(Canvas), 0).expect_err("mismatch");
        assert!(matches!(
            err,
            ViewGroupError::TypeMismatch { operand: Operand::Child, action: ActionKind::AddChild, .. }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn get_child_count_returns_callback_value() {
        let action = GetChildCountAction::new(|stack: &Stack| stack.children.len() + 40);
        assert_eq!(action.invoke(&Stack::default()).ok(), Some(40));
        assert_eq!(action.container(), TypeTag::of::<Stack>());
    }

    #[test]
    fn mismatch_message_names_both_types() {
        let action = RemoveChildAtAction::new(|_: &mut Stack, _: usize| {});
        let err = action.invoke(&mut Canvas, 0).expect_err("mismatch");
        let text = err.to_string();
        assert!(text.contains("removeChildAt expects container"), "{text}");
        assert!(text.contains("Stack") && text.contains("Canvas"), "{text}");
    }

    #[test]
    #[should_panic(expected = "Type mismatch")]
    fn panic_policy_panics_on_mismatch() {
        let action =
            GetChildCountAction::new(|_: &Stack| 0).with_policy(MismatchPolicy::Panic);
        let _ = action.invoke(&Canvas);
    }

    #[test]
    fn debug_lists_registered_types() {
        let action = RemoveChildAction::new(|_: &mut Stack, _: Arc<Tile>| {});
        let debug = format!("{action:?}");
        assert!(debug.starts_with("RemoveChildAction"));
        assert!(debug.contains("Tile"));
    }
}
